//! Line-oriented command language for the grid shell
//!
//! Each line is one command. Arguments are separated by whitespace;
//! double quotes group words and allow `\"` and `\\` escapes. Rows are the
//! 1-based numbers shown in the table gutter.
//!
//! ```text
//! edit 3 "Job Request"
//! type "Fix the fence"
//! blur
//! set 2 Status Complete
//! filter Blocked
//! ```

use std::path::PathBuf;

use crate::messages::{AppMsg, EditMsg, GridMsg, Msg, ViewMsg};
use crate::model::Column;

/// Errors when parsing a script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    UnknownCommand(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    TooManyArguments(&'static str),
    InvalidRow(String),
    InvalidCount(String),
    UnknownColumn(String),
    UnterminatedQuote,
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::UnknownCommand(cmd) => write!(f, "unknown command: {}", cmd),
            ScriptError::MissingArgument { command, argument } => {
                write!(f, "{} needs {}", command, argument)
            }
            ScriptError::TooManyArguments(cmd) => write!(f, "too many arguments for {}", cmd),
            ScriptError::InvalidRow(row) => write!(f, "invalid row: {}", row),
            ScriptError::InvalidCount(n) => write!(f, "invalid count: {}", n),
            ScriptError::UnknownColumn(name) => write!(f, "unknown column: {}", name),
            ScriptError::UnterminatedQuote => write!(f, "unterminated quote"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// A parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Blank line or comment
    Empty,
    /// Messages to dispatch in order
    Dispatch(Vec<Msg>),
    /// Print the grid
    Print,
    /// List commands
    Help,
}

impl ScriptCommand {
    fn one(msg: Msg) -> Self {
        ScriptCommand::Dispatch(vec![msg])
    }
}

/// Parse one line of script
pub fn parse_line(line: &str) -> Result<ScriptCommand, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ScriptCommand::Empty);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (line, ""),
    };
    let keyword = keyword.to_lowercase();

    // Raw payload, not tokenized
    if keyword == "load" {
        if rest.is_empty() {
            return Err(ScriptError::MissingArgument {
                command: "load",
                argument: "a JSON payload",
            });
        }
        return Ok(ScriptCommand::one(Msg::App(AppMsg::LoadText(rest.to_string()))));
    }

    let args = tokenize(rest)?;

    let command = match keyword.as_str() {
        "help" | "?" => {
            no_args("help", &args)?;
            ScriptCommand::Help
        }
        "print" | "p" => {
            no_args("print", &args)?;
            ScriptCommand::Print
        }
        "quit" | "exit" => {
            no_args("quit", &args)?;
            ScriptCommand::one(Msg::App(AppMsg::Quit))
        }

        "new" => {
            no_args("new", &args)?;
            ScriptCommand::one(Msg::App(AppMsg::NewGrid))
        }
        "yes" | "y" => ScriptCommand::one(Msg::App(AppMsg::Confirmed(true))),
        "no" | "n" => ScriptCommand::one(Msg::App(AppMsg::Confirmed(false))),
        "open" => {
            let path = one_arg("open", "a path", &args)?;
            ScriptCommand::one(Msg::App(AppMsg::OpenFile(PathBuf::from(path))))
        }
        "save" => {
            let path = optional_arg("save", &args)?.map(PathBuf::from);
            ScriptCommand::one(Msg::App(AppMsg::SaveFile(path)))
        }

        "undo" => grid_command("undo", GridMsg::Undo, &args)?,
        "redo" => grid_command("redo", GridMsg::Redo, &args)?,
        "add-row" | "add" => grid_command("add-row", GridMsg::AddRow, &args)?,
        "sort" => grid_command("sort", GridMsg::SortByJobRequest, &args)?,

        "hide" => match optional_arg("hide", &args)? {
            Some(name) => ScriptCommand::one(Msg::View(ViewMsg::HideColumn(parse_column(name)?))),
            None => ScriptCommand::one(Msg::View(ViewMsg::HideFields)),
        },
        "show" => match optional_arg("show", &args)? {
            Some(name) => ScriptCommand::one(Msg::View(ViewMsg::ShowColumn(parse_column(name)?))),
            None => ScriptCommand::one(Msg::View(ViewMsg::ShowFields)),
        },
        "filter" => {
            let value = optional_arg("filter", &args)?.map(str::to_string);
            ScriptCommand::one(Msg::View(ViewMsg::SetFilter(value)))
        }

        "edit" => {
            let (row, column) = cell_args("edit", &args)?;
            if args.len() > 2 {
                return Err(ScriptError::TooManyArguments("edit"));
            }
            ScriptCommand::one(Msg::Edit(EditMsg::Activate { row, column }))
        }
        "type" => {
            let text = one_arg("type", "text", &args)?;
            ScriptCommand::one(Msg::Edit(EditMsg::Input(text.to_string())))
        }
        "append" => {
            let text = one_arg("append", "text", &args)?;
            ScriptCommand::Dispatch(
                text.chars()
                    .map(|ch| Msg::Edit(EditMsg::InsertChar(ch)))
                    .collect(),
            )
        }
        "backspace" => {
            let count = match optional_arg("backspace", &args)? {
                Some(n) => n
                    .parse::<usize>()
                    .map_err(|_| ScriptError::InvalidCount(n.to_string()))?,
                None => 1,
            };
            ScriptCommand::Dispatch(vec![Msg::Edit(EditMsg::DeleteBackward); count])
        }
        "select" => {
            let value = optional_arg("select", &args)?.unwrap_or_default();
            ScriptCommand::one(Msg::Edit(EditMsg::Select(value.to_string())))
        }
        "blur" => {
            no_args("blur", &args)?;
            ScriptCommand::one(Msg::Edit(EditMsg::Blur))
        }
        "set" => {
            let (row, column) = cell_args("set", &args)?;
            let value = match &args[2..] {
                [] => String::new(),
                [value] => value.clone(),
                _ => return Err(ScriptError::TooManyArguments("set")),
            };
            set_cell(row, column, value)
        }

        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };

    Ok(command)
}

/// Open a cell, write a value, and close it
fn set_cell(row: usize, column: Column, value: String) -> ScriptCommand {
    let activate = Msg::Edit(EditMsg::Activate { row, column });
    if column.kind().is_enum() {
        ScriptCommand::Dispatch(vec![activate, Msg::Edit(EditMsg::Select(value))])
    } else {
        ScriptCommand::Dispatch(vec![
            activate,
            Msg::Edit(EditMsg::Input(value)),
            Msg::Edit(EditMsg::Blur),
        ])
    }
}

fn grid_command(
    name: &'static str,
    msg: GridMsg,
    args: &[String],
) -> Result<ScriptCommand, ScriptError> {
    no_args(name, args)?;
    Ok(ScriptCommand::one(Msg::Grid(msg)))
}

fn no_args(command: &'static str, args: &[String]) -> Result<(), ScriptError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ScriptError::TooManyArguments(command))
    }
}

fn one_arg<'a>(
    command: &'static str,
    argument: &'static str,
    args: &'a [String],
) -> Result<&'a str, ScriptError> {
    match args {
        [arg] => Ok(arg.as_str()),
        [] => Err(ScriptError::MissingArgument { command, argument }),
        _ => Err(ScriptError::TooManyArguments(command)),
    }
}

fn optional_arg<'a>(
    command: &'static str,
    args: &'a [String],
) -> Result<Option<&'a str>, ScriptError> {
    match args {
        [] => Ok(None),
        [arg] => Ok(Some(arg.as_str())),
        _ => Err(ScriptError::TooManyArguments(command)),
    }
}

/// Parse `ROW COLUMN`, converting the 1-based row to a projected index
fn cell_args(command: &'static str, args: &[String]) -> Result<(usize, Column), ScriptError> {
    let [row, column, ..] = args else {
        return Err(ScriptError::MissingArgument {
            command,
            argument: "a row and a column",
        });
    };
    let row = row
        .parse::<usize>()
        .ok()
        .and_then(|r| r.checked_sub(1))
        .ok_or_else(|| ScriptError::InvalidRow(row.clone()))?;
    Ok((row, parse_column(column)?))
}

/// Column by exact name, case-insensitive name, or name without
/// punctuation (`estvalue`, `due-date`)
pub fn parse_column(name: &str) -> Result<Column, ScriptError> {
    if let Some(column) = Column::from_name(name) {
        return Ok(column);
    }
    let key = squash(name);
    Column::ALL
        .iter()
        .copied()
        .find(|c| squash(c.name()) == key)
        .ok_or_else(|| ScriptError::UnknownColumn(name.to_string()))
}

fn squash(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split arguments on whitespace, honouring double quotes
fn tokenize(input: &str) -> Result<Vec<String>, ScriptError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            '\\' if in_quotes => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => return Err(ScriptError::UnterminatedQuote),
            },
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(ScriptError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(line: &str) -> Vec<Msg> {
        match parse_line(line).unwrap() {
            ScriptCommand::Dispatch(msgs) => msgs,
            other => panic!("expected Dispatch for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line("   ").unwrap(), ScriptCommand::Empty);
        assert_eq!(parse_line("# note").unwrap(), ScriptCommand::Empty);
    }

    #[test]
    fn test_tokenize_quotes_and_escapes() {
        assert_eq!(
            tokenize(r#"3 "Job Request" "say \"hi\"" """#).unwrap(),
            vec!["3", "Job Request", "say \"hi\"", ""]
        );
        assert_eq!(tokenize(r#""open"#), Err(ScriptError::UnterminatedQuote));
    }

    #[test]
    fn test_edit_uses_one_based_rows() {
        assert_eq!(
            dispatch(r#"edit 1 "Job Request""#),
            vec![Msg::Edit(EditMsg::Activate {
                row: 0,
                column: Column::JobRequest
            })]
        );
        assert_eq!(
            parse_line("edit 0 Status"),
            Err(ScriptError::InvalidRow("0".into()))
        );
    }

    #[test]
    fn test_column_aliases() {
        assert_eq!(parse_column("Est. Value"), Ok(Column::EstValue));
        assert_eq!(parse_column("estvalue"), Ok(Column::EstValue));
        assert_eq!(parse_column("due-date"), Ok(Column::DueDate));
        assert_eq!(parse_column("url"), Ok(Column::Url));
        assert!(matches!(parse_column("Notes"), Err(ScriptError::UnknownColumn(_))));
    }

    #[test]
    fn test_set_dispatches_by_column_kind() {
        let msgs = dispatch("set 2 Status Complete");
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[1], Msg::Edit(EditMsg::Select("Complete".into())));

        let msgs = dispatch(r#"set 2 Assigned "Kim Lee""#);
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[2], Msg::Edit(EditMsg::Blur));
    }

    #[test]
    fn test_append_expands_to_keystrokes() {
        assert_eq!(
            dispatch("append ab"),
            vec![
                Msg::Edit(EditMsg::InsertChar('a')),
                Msg::Edit(EditMsg::InsertChar('b'))
            ]
        );
        assert_eq!(dispatch("backspace 2").len(), 2);
    }

    #[test]
    fn test_view_commands() {
        assert_eq!(dispatch("hide"), vec![Msg::View(ViewMsg::HideFields)]);
        assert_eq!(
            dispatch("show url"),
            vec![Msg::View(ViewMsg::ShowColumn(Column::Url))]
        );
        assert_eq!(
            dispatch(r#"filter "Need to Start""#),
            vec![Msg::View(ViewMsg::SetFilter(Some("Need to Start".into())))]
        );
        assert_eq!(dispatch("filter"), vec![Msg::View(ViewMsg::SetFilter(None))]);
    }

    #[test]
    fn test_load_keeps_raw_payload() {
        assert_eq!(
            dispatch(r#"load [{"Job Request": "a  b"}]"#),
            vec![Msg::App(AppMsg::LoadText(r#"[{"Job Request": "a  b"}]"#.into()))]
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_line("frobnicate"),
            Err(ScriptError::UnknownCommand("frobnicate".into()))
        );
        assert_eq!(parse_line("undo now"), Err(ScriptError::TooManyArguments("undo")));
        assert!(matches!(
            parse_line("open"),
            Err(ScriptError::MissingArgument { command: "open", .. })
        ));
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(dispatch("UNDO"), vec![Msg::Grid(GridMsg::Undo)]);
        assert_eq!(parse_line("Print").unwrap(), ScriptCommand::Print);
    }
}
