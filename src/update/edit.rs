//! Cell editing update functions

use crate::commands::Cmd;
use crate::messages::EditMsg;
use crate::model::{AppModel, EditEffect, EditEvent, EditLocus};

/// Handle cell editing messages
pub fn update_edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::Activate { row, column } => {
            let Some(source_row) = model.projection().source_row(row) else {
                tracing::debug!(row, "activate outside projection ignored");
                return None;
            };
            if model.view.is_hidden(column) {
                tracing::debug!(%column, "activate on hidden column ignored");
                return None;
            }
            let current = model
                .store
                .cell(source_row, column)
                .unwrap_or_default()
                .to_string();
            let locus = EditLocus::new(source_row, column);
            apply_event(model, EditEvent::Activate { locus, current })
        }

        EditMsg::Input(value) => apply_event(model, EditEvent::Input(value)),

        EditMsg::InsertChar(ch) => {
            let mut value = model.edit.open_cell()?.pending.clone();
            value.push(ch);
            apply_event(model, EditEvent::Input(value))
        }

        EditMsg::DeleteBackward => {
            let mut value = model.edit.open_cell()?.pending.clone();
            if value.pop().is_none() {
                return None;
            }
            apply_event(model, EditEvent::Input(value))
        }

        EditMsg::Select(value) => apply_event(model, EditEvent::Select(value)),

        EditMsg::Blur => apply_event(model, EditEvent::Blur),
    }
}

fn apply_event(model: &mut AppModel, event: EditEvent) -> Option<Cmd> {
    let effects = model.edit.apply(event);
    apply_effects(model, effects);
    Some(Cmd::Redraw)
}

/// Close the open cell, if any, committing it by its column's close rule
pub(crate) fn close_open_cell(model: &mut AppModel) {
    if model.edit.is_open() {
        let effects = model.edit.close();
        apply_effects(model, effects);
    }
}

/// Apply edit effects to the store and history, in order
pub(crate) fn apply_effects(model: &mut AppModel, effects: Vec<EditEffect>) {
    for effect in effects {
        match effect {
            EditEffect::Live { locus, value } => {
                if !model.store.set_cell(locus.row, locus.column, value) {
                    tracing::warn!(row = locus.row, column = %locus.column, "live edit out of range");
                }
            }

            EditEffect::CommitText {
                locus,
                original,
                changed,
            } => {
                if !changed && !model.config.record_unchanged_text_edits {
                    tracing::debug!(column = %locus.column, "text cell closed unchanged");
                    continue;
                }
                // The store already holds the live value; rebuild the grid
                // as it was when the cell opened.
                let mut before = model.store.current().clone();
                before.set(locus.row, locus.column, original);
                model.history.checkpoint(before);
                model
                    .ui
                    .set_status(format!("Edited {} in row {}", locus.column, locus.row + 1));
            }

            EditEffect::CommitChoice { locus, value } => {
                let mut next = model.store.current().clone();
                if !next.set(locus.row, locus.column, value.as_str()) {
                    tracing::warn!(row = locus.row, column = %locus.column, "choice out of range");
                    continue;
                }
                model.history.record(&mut model.store, next);
                let shown = if value.is_empty() { "(blank)" } else { &value };
                model
                    .ui
                    .set_status(format!("{} set to {}", locus.column, shown));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::messages::Msg;
    use crate::model::Column;
    use crate::update::update;

    fn edit(model: &mut AppModel, msg: EditMsg) {
        update(model, Msg::Edit(msg));
    }

    #[test]
    fn test_keystrokes_build_pending_value() {
        let mut model = AppModel::default();
        edit(&mut model, EditMsg::Activate { row: 0, column: Column::JobRequest });
        edit(&mut model, EditMsg::InsertChar('a'));
        edit(&mut model, EditMsg::InsertChar('b'));
        edit(&mut model, EditMsg::DeleteBackward);
        edit(&mut model, EditMsg::InsertChar('c'));
        assert_eq!(model.grid().get(0, Column::JobRequest), Some("ac"));
        assert_eq!(model.history.undo_count(), 0);
    }

    #[test]
    fn test_delete_backward_on_empty_is_noop() {
        let mut model = AppModel::default();
        edit(&mut model, EditMsg::Activate { row: 0, column: Column::Assigned });
        assert_eq!(update(&mut model, Msg::Edit(EditMsg::DeleteBackward)), None);
    }

    #[test]
    fn test_unchanged_blur_records_nothing_by_default() {
        let mut model = AppModel::default();
        edit(&mut model, EditMsg::Activate { row: 0, column: Column::Url });
        edit(&mut model, EditMsg::Blur);
        assert_eq!(model.history.undo_count(), 0);
    }

    #[test]
    fn test_unchanged_blur_records_when_configured() {
        let config = GridConfig {
            record_unchanged_text_edits: true,
            ..GridConfig::default()
        };
        let mut model = AppModel::new(config);
        edit(&mut model, EditMsg::Activate { row: 0, column: Column::Url });
        edit(&mut model, EditMsg::Blur);
        assert_eq!(model.history.undo_count(), 1);
    }

    #[test]
    fn test_activate_outside_projection_ignored() {
        let mut model = AppModel::default();
        let rows = model.grid().len();
        let cmd = update(
            &mut model,
            Msg::Edit(EditMsg::Activate { row: rows, column: Column::Status }),
        );
        assert_eq!(cmd, None);
        assert!(!model.edit.is_open());
    }

    #[test]
    fn test_activate_hidden_column_ignored() {
        let mut model = AppModel::default();
        model.view.hide(Column::Url);
        edit(&mut model, EditMsg::Activate { row: 0, column: Column::Url });
        assert!(!model.edit.is_open());
    }

    #[test]
    fn test_select_sets_status_message() {
        let mut model = AppModel::default();
        edit(&mut model, EditMsg::Activate { row: 0, column: Column::Priority });
        edit(&mut model, EditMsg::Select("High".into()));
        assert_eq!(model.ui.status_message, "Priority set to High");
    }
}
