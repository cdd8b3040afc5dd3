//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/jobgrid/config.yaml`

use serde::{Deserialize, Serialize};

use crate::model::Column;

/// Session configuration loaded at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of blank rows in a new grid
    #[serde(default = "default_rows")]
    pub default_rows: usize,
    /// Column names hidden by "Hide Fields"
    #[serde(default = "default_hidden_fields")]
    pub hidden_fields: Vec<String>,
    /// File name used by "Save" when no path is given
    #[serde(default = "default_save_file_name")]
    pub save_file_name: String,
    /// Maximum undo depth; absent means unbounded
    #[serde(default)]
    pub history_limit: Option<usize>,
    /// Record an undo step when a text cell closes with its value unchanged
    #[serde(default)]
    pub record_unchanged_text_edits: bool,
}

fn default_rows() -> usize {
    28
}

fn default_hidden_fields() -> Vec<String> {
    vec![Column::Url.name().to_string(), Column::EstValue.name().to_string()]
}

fn default_save_file_name() -> String {
    "spreadsheet.json".to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_rows: default_rows(),
            hidden_fields: default_hidden_fields(),
            save_file_name: default_save_file_name(),
            history_limit: None,
            record_unchanged_text_edits: false,
        }
    }
}

impl GridConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.validated()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with their defaults
    fn validated(mut self) -> Self {
        if self.default_rows == 0 {
            tracing::warn!(
                "default_rows must be at least 1, using {}",
                default_rows()
            );
            self.default_rows = default_rows();
        }
        self
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::ensure_config_dir()?.join(crate::config_paths::CONFIG_FILE_NAME);

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Columns named by `hidden_fields`; unknown names are skipped
    pub fn hidden_columns(&self) -> Vec<Column> {
        self.hidden_fields
            .iter()
            .filter_map(|name| {
                let column = Column::from_name(name);
                if column.is_none() {
                    tracing::warn!("Ignoring unknown column in hidden_fields: {:?}", name);
                }
                column
            })
            .collect()
    }
}
