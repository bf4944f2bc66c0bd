// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox --heading-base-level=0

//! Lightbox: a gesture-driven media viewport engine.
//!
//! This crate turns raw pointer, touch, wheel and keyboard input into a
//! coherent zoom / pan / navigate experience for a full-screen viewer over an
//! ordered list of images and videos. It is headless: hosts feed events in and
//! read state out.
//!
//! The pieces, leaf to root:
//!
//! - `lightbox_gesture` classifies raw input into gesture primitives.
//! - `lightbox_transform` owns the active item's scale and translation.
//! - [`Navigator`] owns the active index with wraparound stepping, and
//!   [`SwipeThresholds`] decides when a swipe navigates.
//! - `lightbox_media` preloads neighbors and tracks load status.
//! - [`Viewer`] ties them together: every index change resets the transform,
//!   cancels the gesture in progress, marks the new item as loading and
//!   queues preloads for its neighbors.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use lightbox::{Key, MediaItem, RawInput, Reaction, Viewer};
//!
//! let items = vec![
//!     MediaItem::image("a", "https://example.com/a.jpg"),
//!     MediaItem::image("b", "https://example.com/b.jpg"),
//!     MediaItem::video("c", "https://example.com/c.mp4"),
//! ];
//! let mut viewer = Viewer::new(items, 0);
//!
//! // Opening at index 0 preloads the image neighbor at index 1.
//! let requests = viewer.take_preload_requests();
//! assert_eq!(requests[0].index, 1);
//!
//! // The host reports when the active image has loaded.
//! viewer.on_media_loaded(0);
//! assert!(viewer.is_loaded(0));
//!
//! // Double-tap zooms in; a second one resets.
//! viewer.feed(&RawInput::DoubleActivate);
//! assert_eq!(viewer.transform().scale, 2.5);
//! viewer.feed(&RawInput::DoubleActivate);
//! assert_eq!(viewer.transform().scale, 1.0);
//!
//! // A quick leftward swipe moves to the next item.
//! viewer.feed(&RawInput::touch_start(Point::new(300.0, 200.0), 0));
//! let reaction = viewer.feed(&RawInput::touch_end(Point::new(200.0, 200.0), 120));
//! assert!(matches!(reaction, Reaction::Navigated(_)));
//! assert_eq!(viewer.current_index(), Some(1));
//!
//! // Arrow keys navigate with wraparound; Escape is left to the host.
//! viewer.handle_key(Key::ArrowRight);
//! viewer.handle_key(Key::ArrowRight);
//! assert_eq!(viewer.current_index(), Some(0));
//! assert!(!viewer.handle_key(Key::Escape));
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: use `libm` for float math under `no_std`.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ViewerConfig`] and the
//!   media types.
//!
//! Logging goes through `tracing`; no subscriber is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod navigation;
mod swipe;
mod viewer;

pub use config::{ConfigError, ViewerConfig};
pub use navigation::{NavDirection, Navigator};
pub use swipe::{SwipeCandidate, SwipeThresholds};
pub use viewer::{Key, Reaction, Viewer, ViewerDebugInfo};

pub use lightbox_gesture::{Gesture, GestureSession, PointerButton, RawInput, ZoomDirection};
pub use lightbox_media::{LoadError, LoadStatus, MediaItem, MediaKind, PreloadRequest};
pub use lightbox_transform::{TransformState, TransitionHint, ZoomSettings};
