// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification: turn raw input into gesture primitives.
//!
//! ## Usage
//!
//! 1) Feed every [`RawInput`] through [`GestureClassifier::classify`], passing
//!    whether the active item is currently zoomed in.
//! 2) Route the returned [`Gesture`] (if any) to the transform or navigation layer.
//! 3) Call [`GestureClassifier::cancel`] when the active item changes so no
//!    half-finished gesture leaks into the next item.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use lightbox_gesture::{Gesture, GestureClassifier, PointerButton, RawInput};
//!
//! let mut classifier = GestureClassifier::new();
//!
//! // Mouse drags only pan while zoomed.
//! let down = RawInput::PointerDown { position: Point::new(5.0, 5.0), button: PointerButton::Primary };
//! assert_eq!(classifier.classify(&down, false), None);
//! assert_eq!(classifier.classify(&down, true), Some(Gesture::PanStart(Point::new(5.0, 5.0))));
//!
//! // Wheel always zooms.
//! let wheel = RawInput::Wheel { delta_y: -1.0 };
//! assert!(matches!(classifier.classify(&wheel, true), Some(Gesture::WheelZoom(_))));
//! ```

use kurbo::Point;

use crate::input::{PointerButton, RawInput};
use crate::primitive::{Gesture, ZoomDirection};

/// The gesture currently in progress.
///
/// Exists only between a gesture's start and end events; [`GestureSession::Idle`]
/// otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureSession {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Mouse drag-to-pan.
    MouseDrag,
    /// Single-finger drag-to-pan.
    TouchPan,
    /// Two-finger pinch.
    Pinch {
        /// Finger distance at the previous sample.
        baseline: f64,
    },
    /// Single finger down while unzoomed; may end as a swipe.
    Swipe {
        /// Touch-down position.
        start: Point,
        /// Touch-down time in milliseconds.
        timestamp: u64,
    },
}

/// Classifies raw input into [`Gesture`] primitives.
///
/// The classifier is a small explicit state machine over [`GestureSession`].
/// Events that are inconsistent with the current session (a second touch
/// during a mouse drag, a move with no prior start, ...) produce nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureClassifier {
    session: GestureSession,
}

impl GestureClassifier {
    /// Creates an idle classifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the gesture session currently in progress.
    #[must_use]
    pub fn session(&self) -> GestureSession {
        self.session
    }

    /// Returns `true` when no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.session == GestureSession::Idle
    }

    /// Drops any gesture in progress without emitting a primitive.
    pub fn cancel(&mut self) {
        self.session = GestureSession::Idle;
    }

    /// Classifies one raw event.
    ///
    /// `zoomed` must be `true` while the active item's scale is above its
    /// minimum; it selects between drag-to-pan and swipe-to-navigate for
    /// single-pointer gestures.
    pub fn classify(&mut self, input: &RawInput, zoomed: bool) -> Option<Gesture> {
        match input {
            RawInput::PointerDown { position, button } => {
                if *button != PointerButton::Primary
                    || !zoomed
                    || self.session != GestureSession::Idle
                {
                    return None;
                }
                self.session = GestureSession::MouseDrag;
                Some(Gesture::PanStart(*position))
            }
            RawInput::PointerMove { position } => {
                (self.session == GestureSession::MouseDrag).then_some(Gesture::PanMove(*position))
            }
            RawInput::PointerUp { .. } | RawInput::PointerLeave => {
                if self.session != GestureSession::MouseDrag {
                    return None;
                }
                self.session = GestureSession::Idle;
                Some(Gesture::PanEnd)
            }
            RawInput::TouchStart { touches, timestamp } => {
                self.touch_start(touches, *timestamp, zoomed)
            }
            RawInput::TouchMove { touches, .. } => self.touch_move(touches),
            RawInput::TouchEnd {
                changed,
                remaining,
                timestamp,
            } => self.touch_end(changed, *remaining, *timestamp),
            RawInput::Wheel { delta_y } => {
                Some(Gesture::WheelZoom(ZoomDirection::from_wheel_delta(*delta_y)))
            }
            RawInput::DoubleActivate => Some(Gesture::DoubleActivate),
        }
    }

    fn touch_start(&mut self, touches: &[Point], timestamp: u64, zoomed: bool) -> Option<Gesture> {
        match (self.session, touches) {
            (GestureSession::MouseDrag, _) => None,
            (session, [a, b]) => {
                self.session = GestureSession::Pinch {
                    baseline: a.distance(*b),
                };
                // A finger joining a one-finger pan turns it into a pinch.
                (session == GestureSession::TouchPan).then_some(Gesture::PanEnd)
            }
            (GestureSession::Idle, [p]) => {
                if zoomed {
                    self.session = GestureSession::TouchPan;
                    Some(Gesture::PanStart(*p))
                } else {
                    self.session = GestureSession::Swipe {
                        start: *p,
                        timestamp,
                    };
                    Some(Gesture::SwipeCandidateStart {
                        point: *p,
                        timestamp,
                    })
                }
            }
            _ => None,
        }
    }

    fn touch_move(&mut self, touches: &[Point]) -> Option<Gesture> {
        match (self.session, touches) {
            (GestureSession::Pinch { baseline }, [a, b]) => {
                let distance = a.distance(*b);
                self.session = GestureSession::Pinch { baseline: distance };
                (baseline > 0.0).then(|| Gesture::PinchUpdate(distance / baseline))
            }
            (GestureSession::TouchPan, [p]) => Some(Gesture::PanMove(*p)),
            _ => None,
        }
    }

    fn touch_end(&mut self, changed: &[Point], remaining: usize, timestamp: u64) -> Option<Gesture> {
        match self.session {
            GestureSession::Pinch { .. } if remaining < 2 => {
                self.session = GestureSession::Idle;
                None
            }
            GestureSession::TouchPan if remaining == 0 => {
                self.session = GestureSession::Idle;
                Some(Gesture::PanEnd)
            }
            GestureSession::Swipe { .. } if remaining == 0 => {
                self.session = GestureSession::Idle;
                changed
                    .first()
                    .map(|point| Gesture::SwipeCandidateEnd {
                        point: *point,
                        timestamp,
                    })
            }
            _ => None,
        }
    }
}
