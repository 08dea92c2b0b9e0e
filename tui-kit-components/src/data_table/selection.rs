//! Positional row selection

use std::collections::BTreeSet;

/// Tri-state of the select-all checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

impl CheckState {
    pub fn glyph(self) -> &'static str {
        match self {
            CheckState::Unchecked => "[ ]",
            CheckState::Indeterminate => "[-]",
            CheckState::Checked => "[x]",
        }
    }
}

/// Selected positions in the displayed (sorted) row sequence
///
/// Positions, not record identities: when the sort changes the selection
/// stays on the same screen rows. When the row count changes the selection
/// is dropped, see [`Selection::reconcile`].
#[derive(Debug, Clone, Default)]
pub struct Selection {
    indices: BTreeSet<usize>,
    row_count: usize,
}

impl Selection {
    /// Flip one row. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    /// Clear when every row is selected, otherwise select every row
    pub fn toggle_all(&mut self, len: usize) {
        if len > 0 && self.indices.len() == len {
            self.indices.clear();
        } else {
            self.indices = (0..len).collect();
        }
    }

    pub fn check_state(&self, len: usize) -> CheckState {
        match self.indices.len() {
            0 => CheckState::Unchecked,
            n if n == len => CheckState::Checked,
            _ => CheckState::Indeterminate,
        }
    }

    /// Drop the selection if the row count changed since it was made
    ///
    /// Returns whether anything was dropped.
    pub fn reconcile(&mut self, len: usize) -> bool {
        let changed = len != self.row_count;
        self.row_count = len;
        if changed && !self.indices.is_empty() {
            self.indices.clear();
            return true;
        }
        false
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected positions in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Selected records in ascending position order
    ///
    /// `order` maps display positions to indices in `data`.
    pub fn records<T: Clone>(&self, order: &[usize], data: &[T]) -> Vec<T> {
        self.indices
            .iter()
            .filter_map(|&pos| order.get(pos))
            .filter_map(|&i| data.get(i))
            .cloned()
            .collect()
    }
}
