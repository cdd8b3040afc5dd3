//! History-recorded grid commands: undo, redo, add row, sort

use crate::commands::Cmd;
use crate::messages::GridMsg;
use crate::model::{AppModel, Column};

use super::edit::close_open_cell;

/// Handle grid messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    close_open_cell(model);

    match msg {
        GridMsg::Undo => {
            if model.history.undo(&mut model.store) {
                model.ui.set_status("Undo");
            } else {
                model.ui.set_status("Nothing to undo");
            }
        }

        GridMsg::Redo => {
            if model.history.redo(&mut model.store) {
                model.ui.set_status("Redo");
            } else {
                model.ui.set_status("Nothing to redo");
            }
        }

        GridMsg::AddRow => {
            let mut next = model.grid().clone();
            next.push_blank();
            let rows = next.len();
            model.history.record(&mut model.store, next);
            model.ui.set_status(format!("Added row {}", rows));
        }

        GridMsg::SortByJobRequest => {
            let mut next = model.grid().clone();
            next.sort_by_column(Column::JobRequest);
            model.history.record(&mut model.store, next);
            model.ui.set_status("Sorted by Job Request");
        }
    }

    tracing::debug!(
        undo = model.history.undo_count(),
        redo = model.history.redo_count(),
        "grid command applied"
    );
    Some(Cmd::Redraw)
}
