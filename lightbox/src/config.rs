// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lightbox_transform::ZoomSettings;

use crate::swipe::SwipeThresholds;

/// Tunables for a [`Viewer`](crate::Viewer).
///
/// `Default` gives the standard lightbox behavior: scale in `[1.0, 4.0]`,
/// `0.2` wheel steps, `2.5` double-activate zoom, swipes over 50 units at more
/// than 0.3 units/ms, one preloaded neighbor on each side and no eviction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Zoom bounds and steps.
    pub zoom: ZoomSettings,
    /// Swipe-to-navigate thresholds.
    pub swipe: SwipeThresholds,
    /// Neighbors on each side of the active item to preload.
    pub preload_radius: usize,
    /// When set, load status is only kept for items within this distance of
    /// the active item.
    pub load_retention: Option<usize>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomSettings::default(),
            swipe: SwipeThresholds::default(),
            preload_radius: 1,
            load_retention: None,
        }
    }
}

/// A [`ViewerConfig`] that cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The zoom range is empty, non-finite or not positive.
    #[error("zoom range [{min}, {max}] must be finite, positive and non-empty")]
    InvalidZoomRange {
        /// Configured minimum scale.
        min: f64,
        /// Configured maximum scale.
        max: f64,
    },
    /// The wheel step is not a positive finite number.
    #[error("wheel step must be positive and finite, got {0}")]
    InvalidWheelStep(f64),
    /// The double-activate scale lies outside the zoom range.
    #[error("double-activate scale {scale} is outside the zoom range [{min}, {max}]")]
    DoubleActivateOutOfRange {
        /// Configured double-activate scale.
        scale: f64,
        /// Configured minimum scale.
        min: f64,
        /// Configured maximum scale.
        max: f64,
    },
    /// The swipe distance threshold is negative or non-finite.
    #[error("swipe distance threshold must be finite and non-negative, got {0}")]
    InvalidSwipeDistance(f64),
    /// The swipe velocity threshold is negative or non-finite.
    #[error("swipe velocity threshold must be finite and non-negative, got {0}")]
    InvalidSwipeVelocity(f64),
}

impl ViewerConfig {
    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, see [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ZoomSettings {
            min_scale: min,
            max_scale: max,
            wheel_step,
            double_activate_scale,
        } = self.zoom;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min < max) {
            return Err(ConfigError::InvalidZoomRange { min, max });
        }
        if !(wheel_step.is_finite() && wheel_step > 0.0) {
            return Err(ConfigError::InvalidWheelStep(wheel_step));
        }
        if !(min..=max).contains(&double_activate_scale) {
            return Err(ConfigError::DoubleActivateOutOfRange {
                scale: double_activate_scale,
                min,
                max,
            });
        }
        let SwipeThresholds {
            min_distance,
            min_velocity,
        } = self.swipe;
        if !(min_distance.is_finite() && min_distance >= 0.0) {
            return Err(ConfigError::InvalidSwipeDistance(min_distance));
        }
        if !(min_velocity.is_finite() && min_velocity >= 0.0) {
            return Err(ConfigError::InvalidSwipeVelocity(min_velocity));
        }
        Ok(())
    }
}
