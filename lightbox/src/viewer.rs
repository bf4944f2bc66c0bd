// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;
use lightbox_gesture::{Gesture, GestureClassifier, GestureSession, RawInput, ZoomDirection};
use lightbox_media::{LoadError, LoadStatus, LoadTracker, MediaItem, PreloadCache, PreloadRequest};
use lightbox_transform::{ItemTransform, TransformState, TransitionHint};

use crate::config::{ConfigError, ViewerConfig};
use crate::navigation::{NavDirection, Navigator};
use crate::swipe::SwipeCandidate;

/// Keys the host may forward to [`Viewer::handle_key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Go to the previous item.
    ArrowLeft,
    /// Go to the next item.
    ArrowRight,
    /// Close the viewer. Not handled by the engine.
    Escape,
}

/// What a fed input or applied gesture did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing visible changed.
    Ignored,
    /// The active item's transform (or drag flag) changed.
    Transformed,
    /// The active item changed.
    Navigated(NavDirection),
}

/// Gesture-driven media viewport engine for one open viewer.
///
/// `Viewer` owns all mutable viewer state (active index, transform, gesture
/// session, load map and preload set) behind a narrow interface. Hosts feed
/// raw input and load signals in, and read state out for rendering.
///
/// Every index change resets the transform, cancels the gesture in progress,
/// marks the new item as loading and preloads its neighbors.
#[derive(Clone, Debug)]
pub struct Viewer {
    items: Vec<MediaItem>,
    config: ViewerConfig,
    navigator: Navigator,
    transform: ItemTransform,
    classifier: GestureClassifier,
    swipe: Option<SwipeCandidate>,
    preload: PreloadCache,
    loads: LoadTracker,
    revision: u64,
}

impl Viewer {
    /// Opens a viewer on `items` at `start` (clamped into range) with the
    /// default configuration.
    #[must_use]
    pub fn new(items: Vec<MediaItem>, start: usize) -> Self {
        Self::build(items, start, ViewerConfig::default())
    }

    /// Opens a viewer with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails [`ViewerConfig::validate`].
    pub fn with_config(
        items: Vec<MediaItem>,
        start: usize,
        config: ViewerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(items, start, config))
    }

    fn build(items: Vec<MediaItem>, start: usize, config: ViewerConfig) -> Self {
        let mut viewer = Self {
            navigator: Navigator::new(items.len(), start),
            transform: ItemTransform::new(config.zoom),
            classifier: GestureClassifier::new(),
            swipe: None,
            preload: PreloadCache::new(),
            loads: LoadTracker::new(),
            revision: 0,
            items,
            config,
        };
        if let Some(index) = viewer.navigator.current() {
            viewer.enter(index);
        }
        viewer
    }

    /// The media list, in order.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Index of the active item, or `None` when the list is empty.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.navigator.current()
    }

    /// The active item, or `None` when the list is empty.
    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.current_index().and_then(|index| self.items.get(index))
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.navigator.len()
    }

    /// The 1-based position and item count, for "i of N" indicators.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.navigator.position()
    }

    /// The active item's transform.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.transform.state()
    }

    /// How the renderer should apply the current transform.
    #[must_use]
    pub fn transition_hint(&self) -> TransitionHint {
        self.transform.transition_hint()
    }

    /// `true` while a drag is active and the renderer should skip smoothing.
    #[must_use]
    pub fn suppress_transition(&self) -> bool {
        self.transform.suppress_transition()
    }

    /// Returns `true` once `index` has finished loading.
    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.loads.is_loaded(index)
    }

    /// Load status of `index`.
    #[must_use]
    pub fn load_status(&self, index: usize) -> LoadStatus {
        self.loads.status(index)
    }

    /// Counter bumped on every visible change (index, transform, drag flag,
    /// or the active item's load status).
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Steps to the previous item, wrapping from the first to the last.
    ///
    /// Returns `true` if the index changed.
    pub fn go_previous(&mut self) -> bool {
        self.step(NavDirection::Previous)
    }

    /// Steps to the next item, wrapping from the last to the first.
    ///
    /// Returns `true` if the index changed.
    pub fn go_next(&mut self) -> bool {
        self.step(NavDirection::Next)
    }

    /// Jumps to `index`. Out-of-range requests and the current index are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        let from = self.navigator.current();
        if !self.navigator.go_to(index) {
            return false;
        }
        tracing::debug!(?from, to = index, "jumped to item");
        self.enter(index);
        true
    }

    /// Applies a key binding. Returns `true` if the key is bound by the engine.
    ///
    /// [`Key::Escape`] is left to the host.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::ArrowLeft => {
                self.go_previous();
                true
            }
            Key::ArrowRight => {
                self.go_next();
                true
            }
            Key::Escape => false,
        }
    }

    /// Classifies a raw input event and applies the resulting gesture.
    pub fn feed(&mut self, input: &RawInput) -> Reaction {
        if self.navigator.is_empty() {
            return Reaction::Ignored;
        }
        match self.classifier.classify(input, self.transform.is_zoomed()) {
            Some(gesture) => self.apply(gesture),
            None => Reaction::Ignored,
        }
    }

    /// Applies an already classified gesture.
    pub fn apply(&mut self, gesture: Gesture) -> Reaction {
        if self.navigator.is_empty() {
            return Reaction::Ignored;
        }
        tracing::trace!(?gesture, "applying gesture");
        let changed = match gesture {
            Gesture::PanStart(point) => self.transform.pan_start(point),
            Gesture::PanMove(point) => self.transform.pan_move(point),
            Gesture::PanEnd => self.transform.pan_end(),
            Gesture::PinchUpdate(ratio) => {
                self.swipe = None;
                self.transform.pinch(ratio)
            }
            Gesture::WheelZoom(direction) => {
                self.transform.wheel_zoom(direction == ZoomDirection::In)
            }
            Gesture::DoubleActivate => self.transform.double_activate(),
            Gesture::SwipeCandidateStart { point, timestamp } => {
                self.swipe = Some(SwipeCandidate {
                    start: point,
                    timestamp,
                });
                false
            }
            Gesture::SwipeCandidateEnd { point, timestamp } => {
                return self.finish_swipe(point, timestamp);
            }
        };
        // A reset to the minimum scale ends the pan; drop the drag session too.
        if !self.transform.is_dragging()
            && matches!(
                self.classifier.session(),
                GestureSession::MouseDrag | GestureSession::TouchPan
            )
        {
            self.classifier.cancel();
        }
        if changed {
            self.revision += 1;
            Reaction::Transformed
        } else {
            Reaction::Ignored
        }
    }

    /// Records that `index` finished loading. Idempotent.
    pub fn on_media_loaded(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        let changed = self.loads.mark_loaded(index);
        if changed && self.current_index() == Some(index) {
            self.revision += 1;
        }
        changed
    }

    /// Records that `index` failed to load; it stays not loaded.
    pub fn on_media_failed(&mut self, index: usize, error: &LoadError) {
        if index >= self.items.len() {
            return;
        }
        let was = self.loads.status(index);
        self.loads.mark_failed(index, error);
        if was != LoadStatus::Failed && self.current_index() == Some(index) {
            self.revision += 1;
        }
    }

    /// Records that a preload failed. Only logged; no retry is scheduled.
    pub fn on_preload_failed(&self, index: usize, error: &LoadError) {
        self.preload.on_failed(index, error);
    }

    /// Drains the preload requests the host should fetch.
    pub fn take_preload_requests(&mut self) -> Vec<PreloadRequest> {
        self.preload.take_requests()
    }

    /// Snapshot of the viewer state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewerDebugInfo {
        ViewerDebugInfo {
            current_index: self.current_index(),
            item_count: self.item_count(),
            transform: self.transform(),
            session: self.classifier.session(),
            swipe_pending: self.swipe.is_some(),
            preloads_issued: self.preload.issued_len(),
            preloads_pending: self.preload.pending_len(),
            tracked_loads: self.loads.len(),
            revision: self.revision,
        }
    }

    fn step(&mut self, direction: NavDirection) -> bool {
        let from = self.navigator.current();
        let Some(index) = self.navigator.step(direction) else {
            return false;
        };
        tracing::debug!(?from, to = index, ?direction, "navigated");
        self.enter(index);
        true
    }

    fn finish_swipe(&mut self, end: Point, timestamp: u64) -> Reaction {
        let Some(candidate) = self.swipe.take() else {
            return Reaction::Ignored;
        };
        if self.transform.is_zoomed() {
            tracing::trace!("swipe discarded while zoomed");
            return Reaction::Ignored;
        }
        let Some(direction) = self.config.swipe.evaluate(candidate, end, timestamp) else {
            tracing::trace!(
                delta_x = end.x - candidate.start.x,
                elapsed = timestamp.saturating_sub(candidate.timestamp),
                "swipe below thresholds"
            );
            return Reaction::Ignored;
        };
        if self.step(direction) {
            Reaction::Navigated(direction)
        } else {
            Reaction::Ignored
        }
    }

    /// Side effects of `index` becoming the active item.
    fn enter(&mut self, index: usize) {
        self.transform.reset();
        self.classifier.cancel();
        self.swipe = None;
        self.loads.mark_loading(index);
        if let Some(radius) = self.config.load_retention {
            self.loads.retain_near(index, radius);
        }
        self.preload
            .preload_neighbors(index, self.config.preload_radius, &self.items);
        self.revision += 1;
    }
}

/// Debug snapshot of a [`Viewer`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewerDebugInfo {
    /// Active index, if any.
    pub current_index: Option<usize>,
    /// Number of items.
    pub item_count: usize,
    /// Active item's transform.
    pub transform: TransformState,
    /// Gesture in progress.
    pub session: GestureSession,
    /// Whether a swipe candidate is waiting for its end event.
    pub swipe_pending: bool,
    /// Distinct indices ever preloaded.
    pub preloads_issued: usize,
    /// Preload requests not yet drained by the host.
    pub preloads_pending: usize,
    /// Entries in the load map.
    pub tracked_loads: usize,
    /// Current revision counter.
    pub revision: u64,
}
