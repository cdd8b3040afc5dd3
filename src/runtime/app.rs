//! Shell loop: reads script lines, dispatches messages, executes commands

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use anyhow::Result;

use jobgrid::commands::{Cmd, COMMANDS};
use jobgrid::messages::{AppMsg, Msg};
use jobgrid::model::AppModel;
use jobgrid::render::{render_model, RenderOptions};
use jobgrid::script::{parse_line, ScriptCommand};
use jobgrid::update::update;
use jobgrid::util::{filename_for_display, read_grid_file};

/// Shell commands that are not toolbar buttons
const EDIT_HELP: &[(&str, &str)] = &[
    ("edit <row> <column>", "Open a cell"),
    ("type <text>", "Replace the open text cell's value"),
    ("append <text>", "Type characters into the open text cell"),
    ("backspace [n]", "Delete characters from the open text cell"),
    ("select [option]", "Choose an option in the open Status/Priority cell"),
    ("blur", "Close the open cell"),
    ("set <row> <column> [value]", "Edit a cell in one step"),
    ("load <json>", "Replace the grid with a JSON payload"),
    ("yes | no", "Answer a confirmation"),
    ("print", "Show the grid"),
    ("help", "Show this list"),
];

/// Whether the loop should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    model: AppModel,
    render_options: RenderOptions,
    /// Print the grid after every command
    echo: bool,
}

impl App {
    pub fn new(model: AppModel, echo: bool) -> Self {
        Self {
            model,
            render_options: RenderOptions::default(),
            echo,
        }
    }

    /// Run until input ends or `quit`
    pub fn run(
        &mut self,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
        interactive: bool,
    ) -> Result<()> {
        if self.echo {
            self.print(out)?;
        }

        let mut line = String::new();
        loop {
            if interactive {
                write!(out, "> ")?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match parse_line(&line) {
                Ok(ScriptCommand::Empty) => {}
                Ok(ScriptCommand::Help) => print_help(out)?,
                Ok(ScriptCommand::Print) => self.print(out)?,
                Ok(ScriptCommand::Dispatch(msgs)) => {
                    for msg in msgs {
                        if self.dispatch(msg, input, out)? == Flow::Quit {
                            return Ok(());
                        }
                    }
                    if self.echo {
                        self.print(out)?;
                    }
                }
                Err(e) => {
                    tracing::warn!("Bad command {:?}: {}", line.trim(), e);
                    writeln!(out, "error: {}", e)?;
                }
            }
        }

        tracing::debug!("input ended");
        Ok(())
    }

    /// Load a grid file before reading commands
    pub fn open(&mut self, path: PathBuf, out: &mut dyn Write) -> Result<()> {
        let mut no_input = std::io::empty();
        self.dispatch(Msg::App(AppMsg::OpenFile(path)), &mut no_input, out)?;
        Ok(())
    }

    /// Send one message through `update` and execute its command
    fn dispatch(
        &mut self,
        msg: Msg,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Flow> {
        match update(&mut self.model, msg) {
            Some(cmd) => self.process_cmd(cmd, input, out),
            None => Ok(Flow::Continue),
        }
    }

    fn process_cmd(
        &mut self,
        cmd: Cmd,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Flow> {
        match cmd {
            Cmd::Redraw => Ok(Flow::Continue),
            Cmd::SaveFile { path, content } => {
                let (tx, rx) = mpsc::channel();
                std::thread::spawn(move || {
                    let result = std::fs::write(&path, content)
                        .map(|_| path)
                        .map_err(|e| e.to_string());
                    let _ = tx.send(Msg::App(AppMsg::SaveCompleted(result)));
                });
                self.await_io(rx, input, out)
            }
            Cmd::LoadFile { path } => {
                let (tx, rx) = mpsc::channel();
                std::thread::spawn(move || {
                    let result = read_grid_file(&path)
                        .map_err(|e| e.user_message(&filename_for_display(&path)));
                    let _ = tx.send(Msg::App(AppMsg::FileLoaded { path, result }));
                });
                self.await_io(rx, input, out)
            }
            Cmd::Confirm { prompt } => {
                write!(out, "{} [y/N] ", prompt)?;
                out.flush()?;
                let mut answer = String::new();
                input.read_line(&mut answer)?;
                let accepted = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
                self.dispatch(Msg::App(AppMsg::Confirmed(accepted)), input, out)
            }
            Cmd::ShowError { message } => {
                writeln!(out, "error: {}", message)?;
                Ok(Flow::Continue)
            }
            Cmd::Quit => Ok(Flow::Quit),
        }
    }

    /// Block until the I/O thread reports back, then apply its result.
    /// Commands run one at a time, so a script never races a load.
    fn await_io(
        &mut self,
        rx: Receiver<Msg>,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Flow> {
        match rx.recv() {
            Ok(msg) => self.dispatch(msg, input, out),
            Err(e) => {
                // Only reachable if the worker thread panicked before sending
                tracing::error!("file worker exited without a result: {}", e);
                self.process_cmd(
                    Cmd::ShowError {
                        message: "File operation failed".to_string(),
                    },
                    input,
                    out,
                )
            }
        }
    }

    fn print(&self, out: &mut dyn Write) -> Result<()> {
        write!(out, "{}", render_model(&self.model, self.render_options))?;
        Ok(())
    }
}

fn print_help(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Toolbar:")?;
    for cmd in COMMANDS {
        writeln!(
            out,
            "  {:<28} {:<20} {}",
            cmd.usage,
            cmd.label,
            cmd.keybinding.unwrap_or("")
        )?;
    }
    writeln!(out, "Editing:")?;
    for (usage, about) in EDIT_HELP {
        writeln!(out, "  {:<28} {}", usage, about)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobgrid::config::GridConfig;
    use jobgrid::model::Column;

    fn run_script(app: &mut App, script: &str) -> String {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        app.run(&mut input, &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_save_waits_for_writer_and_keeps_running() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        let mut app = App::new(AppModel::new(GridConfig::default()), false);

        let script = format!(
            "set 1 \"Job Request\" Roof\nsave {}\nprint\n",
            path.display()
        );
        let out = run_script(&mut app, &script);

        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("\"Job Request\": \"Roof\""));
        assert!(out.contains("Saved: "));
    }

    #[test]
    fn test_failed_save_reports_error_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("jobs.json");
        let mut app = App::new(AppModel::new(GridConfig::default()), false);

        let script = format!("save {}\nadd-row\n", path.display());
        let out = run_script(&mut app, &script);

        assert!(out.contains("error: "));
        assert_eq!(app.model.grid().len(), GridConfig::default().default_rows + 1);
        assert_eq!(app.model.grid().get(0, Column::JobRequest), Some(""));
    }

    #[test]
    fn test_open_missing_file_keeps_grid() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(AppModel::new(GridConfig::default()), false);
        let mut out = Vec::new();
        app.open(dir.path().join("nope.json"), &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().starts_with("error: "));
        assert_eq!(app.model.grid().len(), GridConfig::default().default_rows);
        assert!(!app.model.ui.is_loading);
    }
}
