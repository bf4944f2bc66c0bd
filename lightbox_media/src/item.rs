// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// The kind of media an item holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    /// A still image. Images are preloaded when they neighbor the active item.
    #[default]
    Image,
    /// A video. Videos are never preloaded.
    Video,
}

impl MediaKind {
    /// Returns `true` for kinds that are speculatively fetched ahead of time.
    #[must_use]
    pub fn is_preloadable(self) -> bool {
        self == Self::Image
    }
}

/// One entry in the viewer's ordered media list.
///
/// Items are owned by the caller and never mutated by the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    /// Caller-defined identifier.
    pub id: String,
    /// Location of the media, passed through to preload requests.
    pub url: String,
    /// Image or video.
    pub kind: MediaKind,
    /// Optional alternative text for accessibility.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alt_text: Option<String>,
}

impl MediaItem {
    /// Creates an image item without alt text.
    #[must_use]
    pub fn image(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            kind: MediaKind::Image,
            alt_text: None,
        }
    }

    /// Creates a video item without alt text.
    #[must_use]
    pub fn video(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            kind: MediaKind::Video,
            alt_text: None,
        }
    }

    /// Returns this item with `alt_text` set.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }
}
