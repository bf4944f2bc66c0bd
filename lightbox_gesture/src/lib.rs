// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_gesture --heading-base-level=0

//! Lightbox Gesture: classify raw pointer, touch, wheel and double-activate
//! input into canonical gesture primitives.
//!
//! A full-screen media viewer receives several mutually exclusive input
//! modalities at once. This crate fuses them into one small vocabulary,
//! [`Gesture`], using an explicit [`GestureSession`] so that illegal sequences
//! (a pan move with no pan start, a touch during a mouse drag) are dropped
//! instead of corrupting downstream state.
//!
//! The disambiguation rules are:
//!
//! - Two fingers start a pinch; every two-finger move emits
//!   [`Gesture::PinchUpdate`] with the ratio to the *previous* sample.
//! - One finger pans while zoomed, and is a swipe candidate while unzoomed.
//! - Mouse drags only pan while zoomed.
//! - Wheel and double-activate are always honored.
//!
//! ```rust
//! use kurbo::Point;
//! use lightbox_gesture::{Gesture, GestureClassifier, RawInput};
//!
//! let mut classifier = GestureClassifier::new();
//!
//! let start = RawInput::pinch_start(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 0);
//! assert_eq!(classifier.classify(&start, false), None);
//!
//! let spread = RawInput::pinch_move(Point::new(0.0, 0.0), Point::new(200.0, 0.0), 16);
//! assert_eq!(classifier.classify(&spread, false), Some(Gesture::PinchUpdate(2.0)));
//! ```
//!
//! The classifier knows nothing about scale or items; callers pass a single
//! `zoomed` flag and route the result themselves.
//!
//! This crate is `no_std`.

#![no_std]

mod classifier;
mod input;
mod primitive;

pub use classifier::{GestureClassifier, GestureSession};
pub use input::{PointerButton, RawInput, Touches};
pub use primitive::{Gesture, ZoomDirection};
