// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Why a media load or preload failed, as reported by the host.
///
/// These are never propagated: the viewer records and logs them and degrades
/// to a placeholder.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The request could not be completed.
    #[error("network request failed")]
    Network,
    /// The response could not be decoded as media.
    #[error("media could not be decoded")]
    Decode,
    /// The host abandoned the request.
    #[error("request was cancelled")]
    Cancelled,
    /// Any other host-specific failure.
    #[error("{0}")]
    Other(String),
}
