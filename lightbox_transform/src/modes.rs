// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the rendering layer should apply the next transform change.
///
/// Reported by [`crate::ItemTransform::transition_hint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransitionHint {
    /// Apply the new transform with a short smoothing transition.
    ///
    /// Used for wheel, pinch, double-activate and item-switch resets.
    #[default]
    Smooth,
    /// Apply the new transform immediately.
    ///
    /// Used while a drag is active so the content tracks the pointer without lag.
    Instant,
}

impl TransitionHint {
    /// Returns `true` when the renderer should skip its smoothing transition.
    #[must_use]
    pub fn suppresses_transition(self) -> bool {
        self == Self::Instant
    }
}

/// Bounds and step sizes for zooming a single item.
///
/// The defaults match a typical lightbox: scale in `[1.0, 4.0]`, wheel steps
/// of `0.2`, and a double-activate zoom of `2.5`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomSettings {
    /// Unzoomed scale. Panning is only possible above this.
    pub min_scale: f64,
    /// Largest reachable scale.
    pub max_scale: f64,
    /// Additive scale change per wheel step.
    pub wheel_step: f64,
    /// Scale applied by a double-activate while unzoomed.
    pub double_activate_scale: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 4.0,
            wheel_step: 0.2,
            double_activate_scale: 2.5,
        }
    }
}

impl ZoomSettings {
    /// Returns a copy with `min_scale <= max_scale`, a non-negative wheel step
    /// and the double-activate scale clamped into range.
    ///
    /// Non-finite fields fall back to their default values.
    #[must_use]
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };
        let min_scale = finite_or(self.min_scale, defaults.min_scale);
        let max_scale = finite_or(self.max_scale, defaults.max_scale);
        let wheel_step = finite_or(self.wheel_step, defaults.wheel_step);
        let double_activate_scale =
            finite_or(self.double_activate_scale, defaults.double_activate_scale);

        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        Self {
            min_scale,
            max_scale,
            wheel_step: wheel_step.abs(),
            double_activate_scale: double_activate_scale.clamp(min_scale, max_scale),
        }
    }

    /// Clamps `scale` into `[min_scale, max_scale]`, snapping values within
    /// rounding error of `min_scale` onto it.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if clamped - self.min_scale < SCALE_EPSILON {
            self.min_scale
        } else {
            clamped
        }
    }
}

/// Scales closer than this to the minimum are treated as unzoomed.
pub(crate) const SCALE_EPSILON: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use super::{TransitionHint, ZoomSettings};

    #[test]
    fn normalized_swaps_and_clamps() {
        let settings = ZoomSettings {
            min_scale: 4.0,
            max_scale: 1.0,
            wheel_step: -0.5,
            double_activate_scale: 9.0,
        }
        .normalized();
        assert_eq!(settings.min_scale, 1.0);
        assert_eq!(settings.max_scale, 4.0);
        assert_eq!(settings.wheel_step, 0.5);
        assert_eq!(settings.double_activate_scale, 4.0);
    }

    #[test]
    fn normalized_replaces_non_finite_fields() {
        let settings = ZoomSettings {
            min_scale: f64::NAN,
            max_scale: f64::INFINITY,
            wheel_step: 0.1,
            double_activate_scale: 2.0,
        }
        .normalized();
        assert_eq!(settings.min_scale, 1.0);
        assert_eq!(settings.max_scale, 4.0);
        assert_eq!(settings.wheel_step, 0.1);
    }

    #[test]
    fn clamp_scale_snaps_near_minimum() {
        let settings = ZoomSettings::default();
        assert_eq!(settings.clamp_scale(0.3), 1.0);
        assert_eq!(settings.clamp_scale(1.0 + 1e-12), 1.0);
        assert_eq!(settings.clamp_scale(1.2), 1.2);
        assert_eq!(settings.clamp_scale(7.0), 4.0);
    }

    #[test]
    fn only_instant_suppresses() {
        assert!(TransitionHint::Instant.suppresses_transition());
        assert!(!TransitionHint::Smooth.suppresses_transition());
        assert_eq!(TransitionHint::default(), TransitionHint::Smooth);
    }
}
