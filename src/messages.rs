//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::model::Column;

/// Cell editing messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Pointer/activation on a cell. `row` is a projected row index.
    Activate { row: usize, column: Column },
    /// Replace the open text cell's value (live, no history)
    Input(String),
    /// Append a character to the open text cell
    InsertChar(char),
    /// Remove the last character of the open text cell
    DeleteBackward,
    /// Choose an option in the open enum cell (commits immediately)
    Select(String),
    /// Focus left the open cell
    Blur,
}

/// History-recorded grid commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMsg {
    Undo,
    Redo,
    /// Append one blank record at the end
    AddRow,
    /// Stable sort on the Job Request column
    SortByJobRequest,
}

/// View-state messages. These never touch history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMsg {
    /// Hide the configured preset of columns
    HideFields,
    /// Show every column
    ShowFields,
    HideColumn(Column),
    ShowColumn(Column),
    /// Exact Status value to filter on; `None` or blank clears the filter
    SetFilter(Option<String>),
}

/// Application messages (file operations, new grid, lifecycle)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Ask to discard the grid for a blank one
    NewGrid,
    /// Answer to the pending confirmation
    Confirmed(bool),
    /// Start loading a file
    OpenFile(PathBuf),
    /// File content arrived (or failed to)
    FileLoaded {
        path: PathBuf,
        result: Result<String, String>,
    },
    /// Replace the grid from an in-memory payload
    LoadText(String),
    /// Export the grid; `None` uses the configured file name
    SaveFile(Option<PathBuf>),
    /// Export finished
    SaveCompleted(Result<PathBuf, String>),
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Edit(EditMsg),
    Grid(GridMsg),
    View(ViewMsg),
    App(AppMsg),
}
