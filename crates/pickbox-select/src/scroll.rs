//! Nearest-edge scrolling for the option list.

use std::ops::Range;

/// Which slice of the option list is on screen.
///
/// [`reveal`](Viewport::reveal) scrolls only as far as needed to bring a row
/// fully into view, never centering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    rows: usize,
    len: usize,
}

impl Viewport {
    pub fn new(len: usize, rows: usize) -> Self {
        Self {
            offset: 0,
            rows: rows.max(1),
            len,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indices currently on screen.
    pub fn visible(&self) -> Range<usize> {
        self.offset..self.offset.saturating_add(self.rows).min(self.len)
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.clamp();
    }

    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows.max(1);
        self.clamp();
    }

    /// Scroll the minimum distance that puts `index` on screen.
    pub fn reveal(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset.saturating_add(self.rows) {
            self.offset = index + 1 - self.rows;
        }
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.len.saturating_sub(self.rows));
    }
}
