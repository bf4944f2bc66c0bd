// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::error::LoadError;

/// Load status of one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Not loaded yet; the host should show a placeholder.
    #[default]
    Loading,
    /// Finished loading; the final content can be shown.
    Loaded,
    /// The host reported a failure. Still not loaded.
    Failed,
}

/// Tracks which items have finished loading.
///
/// Unknown indices report [`LoadStatus::Loading`], so [`LoadTracker::is_loaded`]
/// defaults to `false`.
#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    entries: HashMap<usize, LoadStatus>,
}

impl LoadTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `index` as not loaded. Called when it becomes the active item.
    pub fn mark_loading(&mut self, index: usize) {
        self.entries.insert(index, LoadStatus::Loading);
    }

    /// Marks `index` as loaded. Returns `true` if the status changed.
    pub fn mark_loaded(&mut self, index: usize) -> bool {
        self.entries.insert(index, LoadStatus::Loaded) != Some(LoadStatus::Loaded)
    }

    /// Marks `index` as failed. It stays not loaded until a later
    /// [`LoadTracker::mark_loaded`].
    pub fn mark_failed(&mut self, index: usize, error: &LoadError) {
        tracing::warn!(index, %error, "media failed to load");
        self.entries.insert(index, LoadStatus::Failed);
    }

    /// Returns `true` once `index` has finished loading.
    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.status(index) == LoadStatus::Loaded
    }

    /// Returns the status of `index`.
    #[must_use]
    pub fn status(&self, index: usize) -> LoadStatus {
        self.entries.get(&index).copied().unwrap_or_default()
    }

    /// Drops entries further than `radius` from `center`.
    pub fn retain_near(&mut self, center: usize, radius: usize) {
        self.entries.retain(|&index, _| index.abs_diff(center) <= radius);
    }

    /// Number of tracked entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
