//! View-state update functions (hidden columns, status filter)
//!
//! None of these touch the grid or history.

use crate::commands::Cmd;
use crate::messages::ViewMsg;
use crate::model::AppModel;

use super::edit::close_open_cell;

/// Handle view messages
pub fn update_view(model: &mut AppModel, msg: ViewMsg) -> Option<Cmd> {
    close_open_cell(model);

    match msg {
        ViewMsg::HideFields => {
            let preset = model.config.hidden_columns();
            let names: Vec<&str> = preset.iter().map(|c| c.name()).collect();
            model.view.set_hidden(preset.iter().copied());
            model.ui.set_status(format!("Hidden: {}", names.join(", ")));
        }

        ViewMsg::ShowFields => {
            model.view.show_all();
            model.ui.set_status("Showing all fields");
        }

        ViewMsg::HideColumn(column) => {
            model.view.hide(column);
            model.ui.set_status(format!("Hidden: {}", column));
        }

        ViewMsg::ShowColumn(column) => {
            model.view.show(column);
            model.ui.set_status(format!("Showing: {}", column));
        }

        ViewMsg::SetFilter(value) => {
            model.view.set_status_filter(value);
            let status = match model.view.status_filter() {
                Some(value) => format!(
                    "Filter: {} ({} rows)",
                    value,
                    model.projection().row_count()
                ),
                None => "Filter cleared".to_string(),
            };
            model.ui.set_status(status);
        }
    }

    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Msg;
    use crate::model::Column;
    use crate::update::update;

    #[test]
    fn test_hide_fields_uses_configured_preset() {
        let mut model = AppModel::default();
        model.config.hidden_fields = vec!["Assigned".to_string(), "Bogus".to_string()];
        update(&mut model, Msg::View(ViewMsg::HideFields));
        assert_eq!(model.view.hidden(), &[Column::Assigned]);
    }

    #[test]
    fn test_blank_filter_clears() {
        let mut model = AppModel::default();
        update(
            &mut model,
            Msg::View(ViewMsg::SetFilter(Some("Blocked".into()))),
        );
        assert_eq!(model.projection().row_count(), 0);
        update(&mut model, Msg::View(ViewMsg::SetFilter(Some(String::new()))));
        assert_eq!(model.view.status_filter(), None);
        assert_eq!(model.ui.status_message, "Filter cleared");
    }

    #[test]
    fn test_view_commands_leave_history_alone() {
        let mut model = AppModel::default();
        update(&mut model, Msg::View(ViewMsg::HideColumn(Column::Submitted)));
        update(&mut model, Msg::View(ViewMsg::ShowFields));
        assert!(!model.can_undo());
    }
}
