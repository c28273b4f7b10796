//! Responsive visible-card policy for the launches list.
//!
//! Pure presentation over an already-fetched record list: expanding or
//! collapsing never re-fetches.

use serde::Serialize;

/// Viewport width from which three cards fit side by side.
pub const WIDE_MIN_WIDTH: u32 = 1280;
/// Viewport width from which two cards fit side by side.
pub const MEDIUM_MIN_WIDTH: u32 = 640;
/// Upper bound on visible cards once expanded.
pub const MAX_VISIBLE: usize = 9;

/// Cards shown before "show more", by viewport width.
pub fn initial_count(width: u32) -> usize {
    if width >= WIDE_MIN_WIDTH {
        3
    } else if width >= MEDIUM_MIN_WIDTH {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardLayout {
    initial: usize,
    expanded: bool,
}

impl CardLayout {
    pub fn for_width(width: u32) -> Self {
        Self {
            initial: initial_count(width),
            expanded: false,
        }
    }

    pub fn initial(&self) -> usize {
        self.initial
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Recompute the initial count after a resize. The expanded flag is kept.
    pub fn resize(&mut self, width: u32) -> bool {
        let initial = initial_count(width);
        let changed = initial != self.initial;
        self.initial = initial;
        changed
    }

    /// Number of the `total` records to show.
    pub fn visible_len(&self, total: usize) -> usize {
        let limit = if self.expanded {
            MAX_VISIBLE
        } else {
            self.initial
        };
        total.min(limit)
    }

    /// Whether the show-more control is present.
    pub fn can_show_more(&self, total: usize) -> bool {
        total > self.initial
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}
