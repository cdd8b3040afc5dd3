//! Script-driven session tests: command lines parsed and run through `update`

mod common;

use jobgrid::commands::Cmd;
use jobgrid::messages::{AppMsg, Msg};
use jobgrid::model::{AppModel, Column};
use jobgrid::render::{render_model, RenderOptions};
use jobgrid::script::{parse_line, ScriptCommand};
use jobgrid::update::update;

/// Run script lines, answering confirmations with `answer`
fn run(model: &mut AppModel, script: &str, answer: bool) -> Vec<Cmd> {
    let mut cmds = Vec::new();
    for line in script.lines() {
        let ScriptCommand::Dispatch(msgs) = parse_line(line).unwrap() else {
            continue;
        };
        for msg in msgs {
            if let Some(cmd) = update(model, msg) {
                if let Cmd::Confirm { .. } = cmd {
                    update(model, Msg::App(AppMsg::Confirmed(answer)));
                }
                cmds.push(cmd);
            }
        }
    }
    cmds
}

#[test]
fn test_scripted_session() {
    let mut model = common::test_model(3);
    run(
        &mut model,
        r#"
        # fill two jobs
        set 1 "Job Request" "Replace gutters"
        set 1 Status Blocked
        set 2 "Job Request" "Fix gate"
        set 2 status complete
        edit 3 Assigned
        append Kim
        blur
        "#,
        true,
    );

    assert_eq!(model.grid().get(0, Column::Status), Some("Blocked"));
    // Option values are case-sensitive; "complete" is rejected
    assert_eq!(model.grid().get(1, Column::Status), Some(""));
    assert_eq!(model.grid().get(2, Column::Assigned), Some("Kim"));
    assert_eq!(model.history.undo_count(), 4);
}

#[test]
fn test_scripted_filter_then_edit() {
    let mut model = common::model_with_jobs(&[
        ("Roof", "Blocked"),
        ("Paint", "Complete"),
        ("Sink", "Blocked"),
    ]);
    run(
        &mut model,
        "filter Blocked\nset 2 Priority High\nfilter\n",
        true,
    );
    assert_eq!(model.grid().get(2, Column::Priority), Some("High"));
    assert_eq!(model.grid().get(1, Column::Priority), Some(""));
    assert_eq!(model.view.status_filter(), None);
}

#[test]
fn test_scripted_new_declined() {
    let mut model = common::model_with_jobs(&[("Roof", "Blocked")]);
    let cmds = run(&mut model, "new", false);
    assert!(matches!(cmds.as_slice(), [Cmd::Confirm { .. }]));
    assert_eq!(model.grid().len(), 1);
    assert!(!model.can_undo());
}

#[test]
fn test_scripted_load_error() {
    let mut model = common::test_model(2);
    let cmds = run(&mut model, "load [oops", true);
    assert_eq!(
        cmds,
        vec![Cmd::ShowError {
            message: "Invalid JSON file!".into()
        }]
    );
    assert_eq!(model.grid().len(), 2);
}

#[test]
fn test_render_after_script() {
    let mut model = common::test_model(2);
    run(
        &mut model,
        "set 1 \"Job Request\" Deck\nset 1 Status Complete\nhide",
        true,
    );
    let screen = render_model(&model, RenderOptions::default());
    let lines: Vec<&str> = screen.lines().collect();

    assert!(lines[0].contains("[Show Fields]"));
    assert!(lines[0].contains("[Undo]"));
    assert!(!lines[1].contains("URL"));
    assert!(lines[3].contains("Deck"));
    assert!(lines[3].contains("Complete [green]"));
    assert!(lines.last().unwrap().starts_with("Hidden: URL, Est. Value"));
}
