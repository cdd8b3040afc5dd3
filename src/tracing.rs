//! Tracing setup and session state diffing
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,grid=debug` - scoped filtering
//! - `RUST_LOG=jobgrid::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/jobgrid/logs/jobgrid.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, EditLocus};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never mixes with rendered tables.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight summary of session state for diffing around an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    pub rows: usize,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub locus: Option<EditLocus>,
    pub visible_rows: usize,
}

impl GridSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            rows: model.grid().len(),
            undo_depth: model.history.undo_count(),
            redo_depth: model.history.redo_count(),
            locus: model.edit.locus(),
            visible_rows: model.projection().row_count(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &GridSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.rows != other.rows {
            changes.push(format!("rows: {} → {}", self.rows, other.rows));
        }
        if self.undo_depth != other.undo_depth || self.redo_depth != other.redo_depth {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.undo_depth, self.redo_depth, other.undo_depth, other.redo_depth
            ));
        }
        if self.locus != other.locus {
            changes.push(format!(
                "edit: {} → {}",
                describe_locus(self.locus),
                describe_locus(other.locus)
            ));
        }
        if self.visible_rows != other.visible_rows {
            changes.push(format!(
                "visible rows: {} → {}",
                self.visible_rows, other.visible_rows
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe_locus(locus: Option<EditLocus>) -> String {
    match locus {
        Some(l) => format!("({}, {})", l.row, l.column),
        None => "closed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let model = AppModel::default();
        let a = GridSnapshot::from_model(&model);
        assert_eq!(a.diff(&a.clone()), None);
    }

    #[test]
    fn test_diff_reports_history_and_locus() {
        let before = GridSnapshot {
            rows: 2,
            undo_depth: 0,
            redo_depth: 0,
            locus: None,
            visible_rows: 2,
        };
        let after = GridSnapshot {
            undo_depth: 1,
            locus: Some(EditLocus::new(1, Column::Url)),
            ..before.clone()
        };
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("history: 0/0 → 1/0"));
        assert!(diff.contains("edit: closed → (1, URL)"));
    }
}
