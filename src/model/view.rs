//! View state and grid projection
//!
//! The projection is what a renderer draws: visible columns in definition
//! order, and the rows that pass the status filter. It borrows the grid and
//! never mutates it. Each projected row remembers its grid row so edits made
//! through the projection address the right record.

use super::columns::{Column, StatusTone};
use super::edit::EditSession;
use super::grid::{Grid, Record};

/// Hidden columns and the status filter. Not part of history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    hidden: Vec<Column>,
    status_filter: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hidden(&self) -> &[Column] {
        &self.hidden
    }

    pub fn is_hidden(&self, column: Column) -> bool {
        self.hidden.contains(&column)
    }

    pub fn has_hidden(&self) -> bool {
        !self.hidden.is_empty()
    }

    /// Replace the hidden set
    pub fn set_hidden(&mut self, columns: impl IntoIterator<Item = Column>) {
        self.hidden.clear();
        for column in columns {
            self.hide(column);
        }
    }

    pub fn hide(&mut self, column: Column) {
        if !self.hidden.contains(&column) {
            self.hidden.push(column);
            self.hidden.sort();
        }
    }

    pub fn show(&mut self, column: Column) {
        self.hidden.retain(|&c| c != column);
    }

    pub fn show_all(&mut self) {
        self.hidden.clear();
    }

    pub fn status_filter(&self) -> Option<&str> {
        self.status_filter.as_deref()
    }

    /// Set the exact Status value to filter on; blank clears the filter
    pub fn set_status_filter(&mut self, value: Option<String>) {
        self.status_filter = value.filter(|v| !v.is_empty());
    }

    /// Visible columns in definition order
    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .iter()
            .copied()
            .filter(|c| !self.is_hidden(*c))
            .collect()
    }

    /// Whether a record passes the filter (exact, case-sensitive match)
    pub fn matches(&self, record: &Record) -> bool {
        match &self.status_filter {
            Some(value) => record.get(Column::Status) == value,
            None => true,
        }
    }
}

/// A row of the projection
#[derive(Debug, Clone, Copy)]
pub struct ProjectedRow<'a> {
    /// Index of this record in the grid
    pub source_row: usize,
    pub record: &'a Record,
}

/// How a cell should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellDisplay {
    /// Read-only value
    Plain,
    /// Read-only Status value with color coding
    Tagged(StatusTone),
    /// Open free-text cell
    TextInput,
    /// Open enum cell offering these options plus blank
    Select(&'static [&'static str]),
}

/// Everything a renderer needs for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView<'a> {
    pub column: Column,
    pub value: &'a str,
    pub display: CellDisplay,
}

/// Filtered, column-hidden view of a grid
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    pub columns: Vec<Column>,
    pub rows: Vec<ProjectedRow<'a>>,
}

/// Derive the projection of `grid` under `view`
pub fn project<'a>(grid: &'a Grid, view: &ViewState) -> Projection<'a> {
    let rows = grid
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| view.matches(record))
        .map(|(source_row, record)| ProjectedRow { source_row, record })
        .collect();

    Projection {
        columns: view.visible_columns(),
        rows,
    }
}

impl<'a> Projection<'a> {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Map a projected row index back to its grid row
    pub fn source_row(&self, projected: usize) -> Option<usize> {
        self.rows.get(projected).map(|r| r.source_row)
    }

    /// Projected index of a grid row, if it passes the filter
    pub fn projected_row(&self, source_row: usize) -> Option<usize> {
        self.rows.iter().position(|r| r.source_row == source_row)
    }

    /// Whether `column` is visible in this projection
    pub fn shows(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Cells of one projected row, dispatched on column kind
    pub fn cells(&self, projected: usize, edit: &EditSession) -> Vec<CellView<'a>> {
        let Some(row) = self.rows.get(projected) else {
            return Vec::new();
        };
        self.columns
            .iter()
            .map(|&column| cell_view(row, column, edit))
            .collect()
    }
}

fn cell_view<'a>(row: &ProjectedRow<'a>, column: Column, edit: &EditSession) -> CellView<'a> {
    let value = row.record.get(column);
    let editing = edit.is_editing(row.source_row, column);

    let display = match (editing, column.kind().options()) {
        (true, Some(options)) => CellDisplay::Select(options),
        (true, None) => CellDisplay::TextInput,
        (false, _) if column == Column::Status => match StatusTone::for_status(value) {
            Some(tone) => CellDisplay::Tagged(tone),
            None => CellDisplay::Plain,
        },
        (false, _) => CellDisplay::Plain,
    };

    CellView {
        column,
        value,
        display,
    }
}
