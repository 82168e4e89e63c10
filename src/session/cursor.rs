//! Cursor and scrolling arithmetic.
//!
//! Both types only know lengths and indices, never entries, so every clamp rule
//! can be exercised without a model.

/// Index of the selected entry in the flattened list
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    selected: usize,
}

impl Cursor {
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move by `delta` rows, stopping at either end of a list of `len` entries
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max = len as isize - 1;
        self.selected = (self.selected as isize + delta).clamp(0, max) as usize;
    }

    pub fn to_start(&mut self) {
        self.selected = 0;
    }

    pub fn to_end(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Jump to `index`, clamped to a list of `len` entries
    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index;
        self.clamp(len);
    }

    /// Pull the index back inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// First visible row of a scrolling region
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
}

impl Viewport {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll the minimum needed to show row `target` in `height` rows out of
    /// `total`. When scrolling up, row `anchor` (the target's group header) is
    /// brought into view as well if both fit.
    pub fn follow(&mut self, target: usize, anchor: usize, total: usize, height: usize) -> usize {
        let height = height.max(1);

        if target < self.offset {
            let anchor = anchor.min(target);
            self.offset = if target - anchor < height { anchor } else { target };
        } else if target >= self.offset + height {
            self.offset = target + 1 - height;
        }

        // Do not leave empty space below the last row
        self.offset = self.offset.min(total.saturating_sub(height));
        self.offset
    }
}
