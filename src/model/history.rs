//! Whole-grid undo/redo history.
//!
//! `past` holds snapshots oldest first; `future` holds snapshots with the
//! next redo at the front. Any new recorded mutation clears `future`.

use std::collections::VecDeque;

use super::grid::{Grid, RecordStore, Snapshot};

/// Linear undo/redo stacks of grid snapshots
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<Snapshot>,
    future: VecDeque<Snapshot>,
    /// Maximum depth of `past`; `None` keeps everything
    limit: Option<usize>,
}

impl History {
    /// History that evicts the oldest snapshots beyond `limit`
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Snapshot the store's current grid into `past`, clear `future`, then
    /// make `next` the current grid.
    ///
    /// This and [`History::checkpoint`] are the only ways `past` grows.
    pub fn record(&mut self, store: &mut RecordStore, next: Grid) {
        let before = store.replace(next);
        self.push_past(Snapshot::from(before));
    }

    /// Push a snapshot of a grid as it was before a change that has already
    /// been applied to the store (live text editing), and clear `future`.
    pub fn checkpoint(&mut self, before: Grid) {
        self.push_past(Snapshot::from(before));
    }

    fn push_past(&mut self, snapshot: Snapshot) {
        self.future.clear();
        self.past.push(snapshot);

        if let Some(limit) = self.limit {
            let excess = self.past.len().saturating_sub(limit);
            if excess > 0 {
                self.past.drain(..excess);
            }
        }
    }

    /// Restore the most recent past snapshot. No-op when `past` is empty.
    pub fn undo(&mut self, store: &mut RecordStore) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = store.replace(previous.into_grid());
        self.future.push_front(Snapshot::from(current));
        true
    }

    /// Re-apply the nearest undone snapshot. No-op when `future` is empty.
    pub fn redo(&mut self, store: &mut RecordStore) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = store.replace(next.into_grid());
        self.past.push(Snapshot::from(current));
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    pub fn redo_count(&self) -> usize {
        self.future.len()
    }
}
