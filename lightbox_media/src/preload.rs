// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Speculative, deduplicated preloading of neighboring media.
//!
//! The cache never performs I/O itself. [`PreloadCache::ensure_preloaded`]
//! records the index in a deduplication set and queues a [`PreloadRequest`];
//! the host drains the queue with [`PreloadCache::take_requests`] and fetches
//! each URL fire-and-forget. Failures are reported back through
//! [`PreloadCache::on_failed`], which only logs: the item is fetched again on
//! demand if navigation reaches it.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::error::LoadError;
use crate::item::MediaItem;

/// A fetch the host should perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreloadRequest {
    /// Index of the item in the media list.
    pub index: usize,
    /// URL to fetch.
    pub url: String,
}

/// Deduplicating preload queue.
///
/// Indices are added to the issued set when a request is queued and are never
/// removed, so each index is requested at most once per cache.
#[derive(Clone, Debug, Default)]
pub struct PreloadCache {
    issued: HashSet<usize>,
    pending: VecDeque<PreloadRequest>,
}

impl PreloadCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a preload of `items[index]` unless one was already issued.
    ///
    /// Out-of-range indices and non-preloadable kinds are skipped. Returns
    /// `true` when a new request was queued.
    pub fn ensure_preloaded(&mut self, index: usize, items: &[MediaItem]) -> bool {
        let Some(item) = items.get(index) else {
            return false;
        };
        if !item.kind.is_preloadable() || !self.issued.insert(index) {
            return false;
        }
        tracing::debug!(index, url = %item.url, "queueing preload");
        self.pending.push_back(PreloadRequest {
            index,
            url: item.url.clone(),
        });
        true
    }

    /// Ensures the `radius` items on each side of `center` are preloaded.
    ///
    /// Neighbors outside `0..items.len()` are skipped; there is no wraparound.
    /// The work done is bounded by `items.len()`, whatever the radius.
    /// Returns the number of newly queued requests.
    pub fn preload_neighbors(&mut self, center: usize, radius: usize, items: &[MediaItem]) -> usize {
        let mut queued = 0;
        for distance in 1..=radius.min(items.len()) {
            if let Some(before) = center.checked_sub(distance) {
                queued += usize::from(self.ensure_preloaded(before, items));
            }
            if let Some(after) = center.checked_add(distance) {
                queued += usize::from(self.ensure_preloaded(after, items));
            }
        }
        queued
    }

    /// Returns `true` once a preload for `index` has been issued.
    #[must_use]
    pub fn is_issued(&self, index: usize) -> bool {
        self.issued.contains(&index)
    }

    /// Number of distinct indices ever issued.
    #[must_use]
    pub fn issued_len(&self) -> usize {
        self.issued.len()
    }

    /// Number of requests waiting for the host.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drains the queued requests in issue order.
    pub fn take_requests(&mut self) -> Vec<PreloadRequest> {
        self.pending.drain(..).collect()
    }

    /// Records that the preload for `index` failed.
    ///
    /// The index stays in the issued set; no retry is scheduled.
    pub fn on_failed(&self, index: usize, error: &LoadError) {
        tracing::debug!(index, %error, "preload failed; ignoring");
    }
}
