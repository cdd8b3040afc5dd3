//! Command types for the Elm-style architecture
//!
//! `CommandId` names each toolbar action; `Cmd` is a side effect returned
//! from `update` for the runtime to perform.

use std::path::PathBuf;

use crate::model::AppModel;

// ============================================================================
// Toolbar Registry
// ============================================================================

/// Identifies a toolbar command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    New,
    Open,
    Save,
    Undo,
    Redo,
    AddRow,
    HideFields,
    ShowFields,
    Sort,
    Filter,
    Quit,
}

/// A toolbar command definition
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    pub label: &'static str,
    /// Script syntax accepted by the shell
    pub usage: &'static str,
    pub keybinding: Option<&'static str>,
}

/// Static registry of all toolbar commands, in toolbar order
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::New,
        label: "New",
        usage: "new",
        keybinding: Some("⌘N"),
    },
    CommandDef {
        id: CommandId::Open,
        label: "Open",
        usage: "open <path>",
        keybinding: Some("⌘O"),
    },
    CommandDef {
        id: CommandId::Save,
        label: "Save",
        usage: "save [path]",
        keybinding: Some("⌘S"),
    },
    CommandDef {
        id: CommandId::Undo,
        label: "Undo",
        usage: "undo",
        keybinding: Some("⌘Z"),
    },
    CommandDef {
        id: CommandId::Redo,
        label: "Redo",
        usage: "redo",
        keybinding: Some("⇧⌘Z"),
    },
    CommandDef {
        id: CommandId::AddRow,
        label: "Add Row",
        usage: "add-row",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::HideFields,
        label: "Hide Fields",
        usage: "hide [column]",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::ShowFields,
        label: "Show Fields",
        usage: "show [column]",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::Sort,
        label: "Sort by Job Request",
        usage: "sort",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::Filter,
        label: "Filter Status",
        usage: "filter [status]",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::Quit,
        label: "Quit",
        usage: "quit",
        keybinding: Some("⌘Q"),
    },
];

impl CommandId {
    pub fn def(self) -> &'static CommandDef {
        // Every id has exactly one entry in COMMANDS
        COMMANDS
            .iter()
            .find(|cmd| cmd.id == self)
            .unwrap_or(&COMMANDS[0])
    }

    /// Whether the command can run in the model's current state
    pub fn is_enabled(self, model: &AppModel) -> bool {
        match self {
            CommandId::Undo => model.can_undo(),
            CommandId::Redo => model.can_redo(),
            CommandId::Open | CommandId::Save => !model.ui.is_busy(),
            _ => true,
        }
    }
}

/// Toolbar buttons to show, with their enabled state.
///
/// Only one of Hide Fields / Show Fields appears: Show Fields while any
/// column is hidden.
pub fn toolbar(model: &AppModel) -> Vec<(&'static CommandDef, bool)> {
    let hiding = model.view.has_hidden();
    COMMANDS
        .iter()
        .filter(|cmd| match cmd.id {
            CommandId::HideFields => !hiding,
            CommandId::ShowFields => hiding,
            CommandId::Quit => false,
            _ => true,
        })
        .map(|cmd| (cmd, cmd.id.is_enabled(model)))
        .collect()
}

// ============================================================================
// Side-Effect Commands (returned from update)
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Redraw the projection
    Redraw,
    /// Write file contents asynchronously
    SaveFile { path: PathBuf, content: String },
    /// Read file contents asynchronously
    LoadFile { path: PathBuf },
    /// Ask the user a yes/no question; answer arrives as `AppMsg::Confirmed`
    Confirm { prompt: String },
    /// Report an error to the user
    ShowError { message: String },
    /// Request application exit
    Quit,
}
