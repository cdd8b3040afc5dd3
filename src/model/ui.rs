//! UI state - status line, pending confirmation, busy flags

/// A question waiting on the user before a command proceeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConfirm {
    /// "New" discards the grid
    ClearGrid,
}

impl PendingConfirm {
    pub fn prompt(self) -> &'static str {
        match self {
            PendingConfirm::ClearGrid => "Are you sure you want to clear the spreadsheet?",
        }
    }
}

/// UI state that lives outside the grid and its history
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Message displayed in the status line
    pub status_message: String,
    /// Question awaiting an answer, if any
    pub pending_confirm: Option<PendingConfirm>,
    /// Whether a file is currently being loaded
    pub is_loading: bool,
    /// Whether a file is currently being saved
    pub is_saving: bool,
}

impl UiState {
    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::default()
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Check if the UI is busy (loading or saving)
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_saving
    }
}
