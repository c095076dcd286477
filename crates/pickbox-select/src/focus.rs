//! Keyboard focus cycling across the selects of one form.

/// Tracks which of `len` focusable slots holds focus.
///
/// Moving focus reports both the slot that lost it and the slot that gained
/// it, so the owner can send `Blur` to one and `Focus` to the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRing {
    len: usize,
    focused: usize,
}

/// A focus move: `from` lost focus, `to` gained it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusMove {
    pub from: usize,
    pub to: usize,
}

impl FocusRing {
    /// A ring over `len` slots with focus on the first. `len` is at least 1.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            focused: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a ring has at least one slot.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == index
    }

    /// Move to the next slot, wrapping after the last.
    pub fn next(&mut self) -> Option<FocusMove> {
        self.focus((self.focused + 1) % self.len)
    }

    /// Move to the previous slot, wrapping before the first.
    pub fn prev(&mut self) -> Option<FocusMove> {
        self.focus((self.focused + self.len - 1) % self.len)
    }

    /// Focus `index`, clamped to the last slot. `None` if focus stays put.
    pub fn focus(&mut self, index: usize) -> Option<FocusMove> {
        let to = index.min(self.len - 1);
        if to == self.focused {
            return None;
        }
        let from = std::mem::replace(&mut self.focused, to);
        Some(FocusMove { from, to })
    }
}
