// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lightbox_media --heading-base-level=0

//! Lightbox Media: the item model and the asynchronous edges of a media viewer.
//!
//! - [`MediaItem`] / [`MediaKind`]: the caller-owned, immutable media list entries.
//! - [`PreloadCache`]: fire-and-forget, deduplicated preloading of neighbors.
//! - [`LoadTracker`]: per-index load status driving placeholder display.
//! - [`LoadError`]: host-reported failure reasons, logged and never propagated.
//!
//! Nothing here performs I/O. The host drains [`PreloadRequest`]s, fetches
//! them however it likes, and reports load completion back by index.
//!
//! ```rust
//! use lightbox_media::{LoadTracker, MediaItem, PreloadCache};
//!
//! let items = vec![
//!     MediaItem::image("1", "https://example.com/1.jpg"),
//!     MediaItem::image("2", "https://example.com/2.jpg"),
//!     MediaItem::video("3", "https://example.com/3.mp4"),
//! ];
//!
//! let mut preload = PreloadCache::new();
//! preload.preload_neighbors(1, 1, &items);
//! // Only the image neighbor is requested.
//! let requests = preload.take_requests();
//! assert_eq!(requests.len(), 1);
//! assert_eq!(requests[0].index, 0);
//!
//! let mut loads = LoadTracker::new();
//! loads.mark_loading(1);
//! assert!(!loads.is_loaded(1));
//! loads.mark_loaded(1);
//! assert!(loads.is_loaded(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod item;
mod load;
mod preload;

pub use error::LoadError;
pub use item::{MediaItem, MediaKind};
pub use load::{LoadStatus, LoadTracker};
pub use preload::{PreloadCache, PreloadRequest};
