//! Application model - the complete state of a grid session
//!
//! `AppModel` owns the record store, its history, the edit session and the
//! view state. Everything changes through `update::update`.

pub mod columns;
pub mod edit;
pub mod grid;
pub mod history;
pub mod ui;
pub mod view;

pub use columns::{Column, ColumnKind, StatusTone, PRIORITY_OPTIONS, STATUS_OPTIONS};
pub use edit::{EditEffect, EditEvent, EditLocus, EditSession, OpenCell};
pub use grid::{collate, Grid, Record, RecordStore, Snapshot};
pub use history::History;
pub use ui::{PendingConfirm, UiState};
pub use view::{project, CellDisplay, CellView, ProjectedRow, Projection, ViewState};

use crate::config::GridConfig;

/// The complete session state
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Current grid
    pub store: RecordStore,
    /// Undo/redo snapshots of the grid
    pub history: History,
    /// Open cell, if any
    pub edit: EditSession,
    /// Hidden columns and filter
    pub view: ViewState,
    /// Status line and prompts
    pub ui: UiState,
    pub config: GridConfig,
}

impl AppModel {
    /// Session with a blank grid of `config.default_rows` rows
    pub fn new(config: GridConfig) -> Self {
        let grid = Grid::blank(config.default_rows);
        Self::with_grid(grid, config)
    }

    /// Session starting from an existing grid with empty history
    pub fn with_grid(grid: Grid, config: GridConfig) -> Self {
        Self {
            store: RecordStore::new(grid),
            history: History::with_limit(config.history_limit),
            edit: EditSession::default(),
            view: ViewState::default(),
            ui: UiState::with_status("New spreadsheet"),
            config,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.store.current()
    }

    /// Current projection under the view state
    pub fn projection(&self) -> Projection<'_> {
        project(self.store.current(), &self.view)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Check model invariants, panicking with `context` on violation
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        for (row, record) in self.grid().records().iter().enumerate() {
            assert_eq!(
                record.field_count(),
                Column::COUNT,
                "[{}] row {} is missing columns",
                context,
                row
            );
        }
        if let Some(locus) = self.edit.locus() {
            assert!(
                locus.row < self.grid().len(),
                "[{}] edit locus row {} out of range ({} rows)",
                context,
                locus.row,
                self.grid().len()
            );
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
