//! JSON load/save for grids
//!
//! Files are an array of objects keyed by column name. Field order inside
//! an object carries no meaning. Loading normalises each object into a full
//! record; saving writes every column in column order.

use serde_json::Value;

use crate::model::{Column, Grid, Record};

/// Why a payload could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Not valid JSON
    InvalidJson { message: String, line: usize },
    /// Valid JSON, but the top level is not an array
    NotAnArray,
    /// An array element is not an object
    NotAnObject { index: usize },
}

impl LoadError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            LoadError::InvalidJson { .. } => "Invalid JSON file!".to_string(),
            LoadError::NotAnArray | LoadError::NotAnObject { .. } => {
                "Invalid file format!".to_string()
            }
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::InvalidJson { message, line } => {
                write!(f, "JSON parse error at line {}: {}", line, message)
            }
            LoadError::NotAnArray => write!(f, "top-level value is not an array"),
            LoadError::NotAnObject { index } => {
                write!(f, "element {} is not an object", index)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Parse a saved grid
pub fn parse_grid(content: &str) -> Result<Grid, LoadError> {
    let value: Value = serde_json::from_str(content).map_err(|e| LoadError::InvalidJson {
        message: e.to_string(),
        line: e.line(),
    })?;

    let Value::Array(items) = value else {
        return Err(LoadError::NotAnArray);
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(record_from_object(index, fields)),
            _ => Err(LoadError::NotAnObject { index }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Grid::from_records(records))
}

fn record_from_object(index: usize, fields: serde_json::Map<String, Value>) -> Record {
    let mut record = Record::blank();
    for (name, value) in fields {
        match Column::from_name(&name) {
            Some(column) => record.set(column, cell_text(value)),
            None => tracing::debug!(row = index, field = %name, "dropping unknown field"),
        }
    }
    record
}

/// String form of a JSON value stored in a cell
fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Pretty-printed JSON array of the grid's records
pub fn grid_to_json(grid: &Grid) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(grid)
}
