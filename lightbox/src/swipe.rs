// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::navigation::NavDirection;

/// Where and when a swipe candidate started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeCandidate {
    /// Touch-down position.
    pub start: Point,
    /// Touch-down time in milliseconds.
    pub timestamp: u64,
}

/// Distance and speed a horizontal swipe must exceed to navigate.
///
/// Distances are in the host's input coordinate space; velocity is distance
/// per millisecond. Both comparisons are strict.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeThresholds {
    /// Minimum absolute horizontal travel.
    pub min_distance: f64,
    /// Minimum average horizontal speed.
    pub min_velocity: f64,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            min_velocity: 0.3,
        }
    }
}

impl SwipeThresholds {
    /// Decides whether a swipe from `candidate` to `end` at `end_timestamp`
    /// navigates, and in which direction.
    ///
    /// A rightward swipe goes to the previous item, a leftward one to the next.
    /// A zero (or negative) duration counts as infinitely fast.
    #[must_use]
    pub fn evaluate(
        &self,
        candidate: SwipeCandidate,
        end: Point,
        end_timestamp: u64,
    ) -> Option<NavDirection> {
        let delta_x = end.x - candidate.start.x;
        let distance = delta_x.abs();
        if distance <= self.min_distance {
            return None;
        }
        let elapsed = end_timestamp.saturating_sub(candidate.timestamp);
        let velocity = if elapsed == 0 {
            f64::INFINITY
        } else {
            distance / elapsed as f64
        };
        if velocity <= self.min_velocity {
            return None;
        }
        Some(if delta_x > 0.0 {
            NavDirection::Previous
        } else {
            NavDirection::Next
        })
    }
}
