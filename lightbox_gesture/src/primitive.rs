// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Direction of a wheel zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Increase the scale.
    In,
    /// Decrease the scale.
    Out,
}

impl ZoomDirection {
    /// Maps a vertical wheel delta to a zoom direction.
    ///
    /// Scrolling up (negative delta) zooms in; everything else zooms out.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 { Self::In } else { Self::Out }
    }
}

/// A canonical, modality-independent gesture primitive.
///
/// Produced by [`GestureClassifier::classify`](crate::GestureClassifier::classify)
/// and consumed by the transform and navigation layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// A drag-to-pan started at the given point.
    PanStart(Point),
    /// The pan pointer moved to the given point.
    PanMove(Point),
    /// The pan ended.
    PanEnd,
    /// Two-finger pinch: ratio of the new finger distance to the previous sample.
    PinchUpdate(f64),
    /// One wheel zoom step.
    WheelZoom(ZoomDirection),
    /// Double click or double tap.
    DoubleActivate,
    /// A single finger touched down while unzoomed; may become a swipe.
    SwipeCandidateStart {
        /// Touch-down position.
        point: Point,
        /// Touch-down time in milliseconds.
        timestamp: u64,
    },
    /// The swipe candidate finger lifted.
    SwipeCandidateEnd {
        /// Lift position.
        point: Point,
        /// Lift time in milliseconds.
        timestamp: u64,
    },
}
