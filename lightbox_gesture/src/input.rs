// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw, host-normalized input events.
//!
//! Hosts translate their platform events (DOM, `winit`, SDL, ...) into
//! [`RawInput`] values carrying only the fields the classifier needs:
//! positions, touch points, wheel delta and a millisecond timestamp.

use kurbo::Point;
use smallvec::SmallVec;

/// Touch points reported by a single touch event.
///
/// Two inline slots cover the common one- and two-finger cases without
/// allocating.
pub type Touches = SmallVec<[Point; 2]>;

/// Mouse button reported with [`RawInput::PointerDown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// The primary (usually left) button.
    #[default]
    Primary,
    /// The secondary (usually right) button.
    Secondary,
    /// The auxiliary (usually middle) button.
    Auxiliary,
}

/// A single raw input event, as seen by the gesture classifier.
#[derive(Clone, Debug, PartialEq)]
pub enum RawInput {
    /// A mouse button was pressed.
    PointerDown {
        /// Pointer position in host coordinates.
        position: Point,
        /// Which button was pressed.
        button: PointerButton,
    },
    /// The mouse moved.
    PointerMove {
        /// Pointer position in host coordinates.
        position: Point,
    },
    /// A mouse button was released.
    PointerUp {
        /// Pointer position in host coordinates.
        position: Point,
    },
    /// The pointer left the viewport; treated like a release.
    PointerLeave,
    /// One or more fingers touched down.
    TouchStart {
        /// All fingers currently on the surface.
        touches: Touches,
        /// Event time in milliseconds.
        timestamp: u64,
    },
    /// One or more fingers moved.
    TouchMove {
        /// All fingers currently on the surface.
        touches: Touches,
        /// Event time in milliseconds.
        timestamp: u64,
    },
    /// One or more fingers lifted.
    TouchEnd {
        /// The fingers that lifted, at their final positions.
        changed: Touches,
        /// Number of fingers still on the surface.
        remaining: usize,
        /// Event time in milliseconds.
        timestamp: u64,
    },
    /// A wheel or trackpad scroll.
    Wheel {
        /// Vertical scroll delta; negative values scroll up.
        delta_y: f64,
    },
    /// A double click or double tap.
    DoubleActivate,
}

impl RawInput {
    /// Convenience constructor for a one-finger [`RawInput::TouchStart`].
    #[must_use]
    pub fn touch_start(position: Point, timestamp: u64) -> Self {
        Self::TouchStart {
            touches: smallvec::smallvec![position],
            timestamp,
        }
    }

    /// Convenience constructor for a one-finger [`RawInput::TouchEnd`] with no
    /// fingers remaining.
    #[must_use]
    pub fn touch_end(position: Point, timestamp: u64) -> Self {
        Self::TouchEnd {
            changed: smallvec::smallvec![position],
            remaining: 0,
            timestamp,
        }
    }

    /// Convenience constructor for a two-finger [`RawInput::TouchStart`].
    #[must_use]
    pub fn pinch_start(a: Point, b: Point, timestamp: u64) -> Self {
        Self::TouchStart {
            touches: smallvec::smallvec![a, b],
            timestamp,
        }
    }

    /// Convenience constructor for a two-finger [`RawInput::TouchMove`].
    #[must_use]
    pub fn pinch_move(a: Point, b: Point, timestamp: u64) -> Self {
        Self::TouchMove {
            touches: smallvec::smallvec![a, b],
            timestamp,
        }
    }
}
