//! Cell edit session state machine
//!
//! At most one cell is open at a time. The session itself never touches the
//! grid; each transition returns the effects the caller must apply.
//!
//! | State  | Event           | Column kind | Next   | Effects                        |
//! |--------|-----------------|-------------|--------|--------------------------------|
//! | Closed | Activate(b)     | any         | Open b | none                           |
//! | Open a | Activate(a)     | any         | Open a | none                           |
//! | Open a | Activate(b)     | text        | Open b | close a (CommitText)           |
//! | Open a | Activate(b)     | enum        | Open b | none, a closes uncommitted     |
//! | Open a | Input(v)        | text        | Open a | Live(v)                        |
//! | Open a | Select(v)       | enum        | Closed | CommitChoice(v)                |
//! | Open a | Blur            | text        | Closed | CommitText                     |
//! | Open a | Blur            | enum        | Closed | none                           |
//!
//! Any other combination is ignored and leaves the state unchanged.

use super::columns::Column;

/// Address of a cell in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditLocus {
    /// Row index into the grid (not the projection)
    pub row: usize,
    pub column: Column,
}

impl EditLocus {
    pub fn new(row: usize, column: Column) -> Self {
        Self { row, column }
    }
}

/// The currently open cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCell {
    pub locus: EditLocus,
    /// Value when the cell was opened
    pub original: String,
    /// Latest live value (free text only)
    pub pending: String,
}

impl OpenCell {
    pub fn is_modified(&self) -> bool {
        self.pending != self.original
    }
}

/// Input to the edit state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Pointer/activation on a cell; `current` is its stored value
    Activate { locus: EditLocus, current: String },
    /// New full value typed into a free-text cell
    Input(String),
    /// Option chosen in an enum cell
    Select(String),
    /// Focus left the open cell
    Blur,
}

/// Store/history work produced by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEffect {
    /// Write the value to the store without recording history
    Live { locus: EditLocus, value: String },
    /// A free-text cell closed; history records the grid with `original`
    /// in place of the live value
    CommitText {
        locus: EditLocus,
        original: String,
        changed: bool,
    },
    /// An enum choice; history records the grid before `value` is written
    CommitChoice { locus: EditLocus, value: String },
}

/// Edit session: closed, or one open cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open(OpenCell),
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open(_))
    }

    pub fn locus(&self) -> Option<EditLocus> {
        match self {
            EditSession::Open(cell) => Some(cell.locus),
            EditSession::Closed => None,
        }
    }

    pub fn open_cell(&self) -> Option<&OpenCell> {
        match self {
            EditSession::Open(cell) => Some(cell),
            EditSession::Closed => None,
        }
    }

    /// Whether `row`/`column` is the open cell
    pub fn is_editing(&self, row: usize, column: Column) -> bool {
        self.locus() == Some(EditLocus::new(row, column))
    }

    /// Run one transition, returning the effects to apply in order
    pub fn apply(&mut self, event: EditEvent) -> Vec<EditEffect> {
        let state = std::mem::take(self);
        let (next, effects) = transition(state, event);
        *self = next;
        effects
    }

    /// Close whatever is open using the column's normal close rule
    pub fn close(&mut self) -> Vec<EditEffect> {
        self.apply(EditEvent::Blur)
    }
}

fn transition(state: EditSession, event: EditEvent) -> (EditSession, Vec<EditEffect>) {
    match (state, event) {
        (EditSession::Closed, EditEvent::Activate { locus, current }) => {
            (open(locus, current), Vec::new())
        }
        (EditSession::Open(cell), EditEvent::Activate { locus, current }) => {
            if cell.locus == locus {
                return (EditSession::Open(cell), Vec::new());
            }
            let effects = close_effects(cell);
            (open(locus, current), effects)
        }
        (EditSession::Open(mut cell), EditEvent::Input(value))
            if !cell.locus.column.kind().is_enum() =>
        {
            cell.pending = value.clone();
            let effect = EditEffect::Live {
                locus: cell.locus,
                value,
            };
            (EditSession::Open(cell), vec![effect])
        }
        (EditSession::Open(cell), EditEvent::Select(value))
            if cell.locus.column.kind().is_enum() =>
        {
            if !cell.locus.column.kind().accepts_choice(&value) {
                tracing::warn!(
                    column = %cell.locus.column,
                    value = %value,
                    "rejected unrecognized option"
                );
                return (EditSession::Open(cell), Vec::new());
            }
            let effect = EditEffect::CommitChoice {
                locus: cell.locus,
                value,
            };
            (EditSession::Closed, vec![effect])
        }
        (EditSession::Open(cell), EditEvent::Blur) => (EditSession::Closed, close_effects(cell)),
        (state, event) => {
            tracing::debug!(?event, open = state.is_open(), "edit event ignored");
            (state, Vec::new())
        }
    }
}

fn open(locus: EditLocus, current: String) -> EditSession {
    EditSession::Open(OpenCell {
        locus,
        original: current.clone(),
        pending: current,
    })
}

fn close_effects(cell: OpenCell) -> Vec<EditEffect> {
    if cell.locus.column.kind().is_enum() {
        return Vec::new();
    }
    let changed = cell.is_modified();
    vec![EditEffect::CommitText {
        locus: cell.locus,
        original: cell.original,
        changed,
    }]
}
