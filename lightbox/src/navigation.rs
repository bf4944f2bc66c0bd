// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of a one-step navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    /// Toward index 0, wrapping to the last item.
    Previous,
    /// Toward the last index, wrapping to 0.
    Next,
}

/// Current position in an ordered list with wraparound stepping.
///
/// Holds `0 <= current < len` whenever `len > 0`. With `len == 0` there is no
/// current index and every operation is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    len: usize,
}

impl Navigator {
    /// Creates a navigator over `len` items starting at `start`, clamped into range.
    #[must_use]
    pub fn new(len: usize, start: usize) -> Self {
        Self {
            current: start.min(len.saturating_sub(1)),
            len,
        }
    }

    /// Returns the current index, or `None` for an empty list.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The 1-based position and the item count, for "i of N" indicators.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current().map(|current| (current + 1, self.len))
    }

    /// Index one step in `direction`, or `None` when stepping is impossible.
    #[must_use]
    pub fn peek(&self, direction: NavDirection) -> Option<usize> {
        if self.len <= 1 {
            return None;
        }
        Some(match direction {
            NavDirection::Previous if self.current == 0 => self.len - 1,
            NavDirection::Previous => self.current - 1,
            NavDirection::Next if self.current + 1 == self.len => 0,
            NavDirection::Next => self.current + 1,
        })
    }

    /// Steps once in `direction` with wraparound and returns the new index.
    ///
    /// No-op returning `None` when there are fewer than two items.
    pub fn step(&mut self, direction: NavDirection) -> Option<usize> {
        let next = self.peek(direction)?;
        self.current = next;
        Some(next)
    }

    /// Jumps to `index`. Returns `false` when out of range or already current.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }
        self.current = index;
        true
    }
}
