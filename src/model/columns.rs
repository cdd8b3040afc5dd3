//! Column definitions for the job request grid
//!
//! The column set is fixed at compile time. Columns can be hidden from the
//! projection but never added, removed or reordered.

/// Recognized values for the Status column, in menu order
pub const STATUS_OPTIONS: &[&str] = &["In-Process", "Need to Start", "Blocked", "Complete"];

/// Recognized values for the Priority column, in menu order
pub const PRIORITY_OPTIONS: &[&str] = &["High", "Medium", "Low"];

/// How a column is edited and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Arbitrary text, edited live with a commit on blur
    FreeText,
    /// One of [`STATUS_OPTIONS`] or blank, committed on selection
    Status,
    /// One of [`PRIORITY_OPTIONS`] or blank, committed on selection
    Priority,
}

impl ColumnKind {
    /// Fixed option list for enum kinds, `None` for free text
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            ColumnKind::FreeText => None,
            ColumnKind::Status => Some(STATUS_OPTIONS),
            ColumnKind::Priority => Some(PRIORITY_OPTIONS),
        }
    }

    /// Whether the column commits immediately on selection
    pub fn is_enum(self) -> bool {
        !matches!(self, ColumnKind::FreeText)
    }

    /// Whether `value` may be chosen from this column's editor.
    ///
    /// The blank value is always selectable ("unset").
    pub fn accepts_choice(self, value: &str) -> bool {
        match self.options() {
            Some(options) => value.is_empty() || options.contains(&value),
            None => true,
        }
    }
}

/// A column of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    JobRequest,
    Submitted,
    Status,
    Submitter,
    Url,
    Assigned,
    Priority,
    DueDate,
    EstValue,
}

impl Column {
    /// All columns in display order
    pub const ALL: [Column; 9] = [
        Column::JobRequest,
        Column::Submitted,
        Column::Status,
        Column::Submitter,
        Column::Url,
        Column::Assigned,
        Column::Priority,
        Column::DueDate,
        Column::EstValue,
    ];

    /// Number of columns in every record
    pub const COUNT: usize = Self::ALL.len();

    /// Header label, also the field name in saved files
    pub fn name(self) -> &'static str {
        match self {
            Column::JobRequest => "Job Request",
            Column::Submitted => "Submitted",
            Column::Status => "Status",
            Column::Submitter => "Submitter",
            Column::Url => "URL",
            Column::Assigned => "Assigned",
            Column::Priority => "Priority",
            Column::DueDate => "Due Date",
            Column::EstValue => "Est. Value",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::Status => ColumnKind::Status,
            Column::Priority => ColumnKind::Priority,
            _ => ColumnKind::FreeText,
        }
    }

    /// Position in [`Column::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a column by its exact header label
    pub fn from_name(name: &str) -> Option<Column> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Color coding for a displayed Status value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Yellow,
    Gray,
    Red,
    Green,
}

impl StatusTone {
    /// Tone for a Status value; unrecognized and blank values have none
    pub fn for_status(value: &str) -> Option<StatusTone> {
        match value {
            "In-Process" => Some(StatusTone::Yellow),
            "Need to Start" => Some(StatusTone::Gray),
            "Blocked" => Some(StatusTone::Red),
            "Complete" => Some(StatusTone::Green),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusTone::Yellow => "yellow",
            StatusTone::Gray => "gray",
            StatusTone::Red => "red",
            StatusTone::Green => "green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_matches_order() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn test_from_name_roundtrips_every_column() {
        for column in Column::ALL {
            assert_eq!(Column::from_name(column.name()), Some(column));
        }
        assert_eq!(Column::from_name("status"), None);
        assert_eq!(Column::from_name(""), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Column::Status.kind(), ColumnKind::Status);
        assert_eq!(Column::Priority.kind(), ColumnKind::Priority);
        assert_eq!(Column::Url.kind(), ColumnKind::FreeText);
        assert!(Column::Status.kind().is_enum());
        assert!(!Column::JobRequest.kind().is_enum());
    }

    #[test]
    fn test_accepts_choice() {
        assert!(ColumnKind::Status.accepts_choice("Blocked"));
        assert!(ColumnKind::Status.accepts_choice(""));
        assert!(!ColumnKind::Status.accepts_choice("blocked"));
        assert!(!ColumnKind::Priority.accepts_choice("Complete"));
        assert!(ColumnKind::FreeText.accepts_choice("anything"));
    }

    #[test]
    fn test_status_tone_falls_through_for_unknown() {
        assert_eq!(StatusTone::for_status("Complete"), Some(StatusTone::Green));
        assert_eq!(StatusTone::for_status(""), None);
        assert_eq!(StatusTone::for_status("Done"), None);
    }
}
