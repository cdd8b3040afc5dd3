//! App message handlers (new, open, save, confirmation)

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Grid, PendingConfirm};
use crate::persist::{grid_to_json, parse_grid};
use crate::util::filename_for_display;

use super::edit::close_open_cell;

/// Handle app messages (file operations, new grid)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::NewGrid => {
            close_open_cell(model);
            let pending = PendingConfirm::ClearGrid;
            model.ui.pending_confirm = Some(pending);
            Some(Cmd::Confirm {
                prompt: pending.prompt().to_string(),
            })
        }

        AppMsg::Confirmed(accepted) => {
            let Some(pending) = model.ui.pending_confirm.take() else {
                tracing::debug!("confirmation with nothing pending ignored");
                return None;
            };
            if !accepted {
                model.ui.set_status("Cancelled");
                return Some(Cmd::Redraw);
            }
            match pending {
                PendingConfirm::ClearGrid => {
                    let blank = Grid::blank(model.config.default_rows);
                    model.history.record(&mut model.store, blank);
                    model.ui.set_status("New spreadsheet");
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::OpenFile(path) => {
            close_open_cell(model);
            model.ui.is_loading = true;
            model.ui.set_status("Loading...");
            Some(Cmd::LoadFile { path })
        }

        AppMsg::FileLoaded { path, result } => {
            model.ui.is_loading = false;
            let name = filename_for_display(&path);
            match result {
                Ok(content) => load_content(model, &content, &name),
                Err(e) => {
                    tracing::error!("Failed to read {}: {}", path.display(), e);
                    model.ui.set_status(format!("Error: {}", e));
                    Some(Cmd::ShowError { message: e })
                }
            }
        }

        AppMsg::LoadText(content) => load_content(model, &content, "input"),

        AppMsg::SaveFile(path) => {
            close_open_cell(model);
            let path = path.unwrap_or_else(|| PathBuf::from(&model.config.save_file_name));
            match grid_to_json(model.grid()) {
                Ok(content) => {
                    model.ui.is_saving = true;
                    model.ui.set_status("Saving...");
                    Some(Cmd::SaveFile { path, content })
                }
                Err(e) => {
                    tracing::error!("Failed to serialize grid: {}", e);
                    let message = format!("Could not save: {}", e);
                    model.ui.set_status(message.clone());
                    Some(Cmd::ShowError { message })
                }
            }
        }

        AppMsg::SaveCompleted(result) => {
            model.ui.is_saving = false;
            match result {
                Ok(path) => {
                    tracing::info!("Saved {} rows to {}", model.grid().len(), path.display());
                    model.ui.set_status(format!("Saved: {}", path.display()));
                    Some(Cmd::Redraw)
                }
                Err(e) => {
                    model.ui.set_status(format!("Error: {}", e));
                    Some(Cmd::ShowError { message: e })
                }
            }
        }

        AppMsg::Quit => {
            close_open_cell(model);
            Some(Cmd::Quit)
        }
    }
}

/// Parse a payload and, on success, replace the grid as one history step
fn load_content(model: &mut AppModel, content: &str, source: &str) -> Option<Cmd> {
    close_open_cell(model);

    match parse_grid(content) {
        Ok(grid) => {
            let rows = grid.len();
            model.history.record(&mut model.store, grid);
            tracing::info!("Loaded {} rows from {}", rows, source);
            model.ui.set_status(format!("Loaded: {} ({} rows)", source, rows));
            Some(Cmd::Redraw)
        }
        Err(e) => {
            tracing::warn!("Rejected {}: {}", source, e);
            let message = e.user_message();
            model.ui.set_status(format!("Error: {}", message));
            Some(Cmd::ShowError { message })
        }
    }
}
