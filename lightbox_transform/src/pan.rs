// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan anchor: map absolute pointer positions onto a translation.
//!
//! ## Usage
//!
//! 1) Start a pan with [`PanAnchor::start`], passing the pointer position and
//!    the translation at that moment.
//! 2) On each move, call [`PanAnchor::translation_at`] to get the new
//!    absolute translation for the pointer position.
//! 3) End the pan with [`PanAnchor::end`].
//!
//! The anchor is `point - translation`, so each move computes an absolute
//! offset rather than accumulating deltas. A dropped intermediate move event
//! therefore never causes drift.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use lightbox_transform::PanAnchor;
//!
//! let mut pan = PanAnchor::default();
//!
//! // Content is already shifted by (10, 0) when the drag starts at (50, 50).
//! pan.start(Point::new(50.0, 50.0), Vec2::new(10.0, 0.0));
//! assert!(pan.is_active());
//!
//! // Moving the pointer by (5, 5) moves the content by (5, 5).
//! let t = pan.translation_at(Point::new(55.0, 55.0)).unwrap();
//! assert_eq!(t, Vec2::new(15.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the anchor of an active pan.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct PanAnchor {
    /// Pointer position minus translation at pan start.
    pub anchor: Option<Vec2>,
}

impl PanAnchor {
    /// Start a pan at `point` while the content is translated by `translation`.
    pub fn start(&mut self, point: Point, translation: Vec2) {
        self.anchor = Some(point.to_vec2() - translation);
    }

    /// Translation that keeps the content under the pointer at `point`.
    pub fn translation_at(&self, point: Point) -> Option<Vec2> {
        self.anchor.map(|anchor| point.to_vec2() - anchor)
    }

    /// End the current pan and reset state.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Returns `true` while a pan is active.
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }
}
