//! jobgrid - Elm-style job request spreadsheet core
//!
//! This crate provides the grid model, its undo/redo history, the cell edit
//! session and the filtered view, all driven through `update::update`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod persist;
pub mod render;
pub mod script;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::AppModel;
