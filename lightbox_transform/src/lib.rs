// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_transform --heading-base-level=0

//! Lightbox Transform: zoom and pan state for a single media item.
//!
//! This crate provides a small, headless model of the visual transform
//! applied to the item currently shown in a media viewer:
//! - A bounded zoom multiplier (wheel steps, pinch ratios, double-activate toggle).
//! - A pan translation driven by an absolute drag anchor.
//! - A [`TransitionHint`] telling the renderer whether to smooth the change.
//!
//! It does **not** interpret raw input or know about item lists. Callers are
//! expected to:
//! - Classify input into gestures at a higher layer (see `lightbox_gesture`).
//! - Call [`ItemTransform::reset`] whenever the active item changes.
//! - Read [`ItemTransform::state`] to render the active item.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use lightbox_transform::{ItemTransform, TransitionHint};
//!
//! let mut t = ItemTransform::default();
//!
//! // Panning is disallowed while unzoomed.
//! assert!(!t.pan_start(Point::new(10.0, 10.0)));
//!
//! // Double-activate zooms to 2.5x; now the item can be dragged.
//! t.double_activate();
//! assert_eq!(t.scale(), 2.5);
//! t.pan_start(Point::new(10.0, 10.0));
//! assert_eq!(t.transition_hint(), TransitionHint::Instant);
//! t.pan_move(Point::new(30.0, 0.0));
//! assert_eq!(t.translation(), Vec2::new(20.0, -10.0));
//! t.pan_end();
//!
//! // A second double-activate returns to the unzoomed, centered state.
//! t.double_activate();
//! assert_eq!(t.scale(), 1.0);
//! assert_eq!(t.translation(), Vec2::ZERO);
//! ```
//!
//! ## Design notes
//!
//! - Scale is a uniform multiplier clamped into [`ZoomSettings`]' range.
//! - Whenever the scale sits at its minimum the translation is zero.
//! - Inputs are clamped, never rejected; there is no error type.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod pan;
mod transform;

pub use modes::{TransitionHint, ZoomSettings};
pub use pan::PanAnchor;
pub use transform::{ItemTransform, TransformState};
