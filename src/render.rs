//! Plain-text grid rendering
//!
//! Renders a projection as an aligned table with:
//! - Row number gutter (1-based projected index)
//! - Column headers
//! - Cell truncation with an ellipsis
//! - The open cell wrapped in brackets
//! - Status tones as a suffix tag

use crate::commands::toolbar;
use crate::model::{AppModel, CellDisplay, CellView, EditSession, Projection};

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum characters shown per cell, including any tag
    pub max_cell_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { max_cell_width: 24 }
    }
}

/// Check if a string looks like a number (for right-alignment)
pub fn is_number(s: &str) -> bool {
    let s = s.trim_start_matches('$').replace(',', "");
    !s.is_empty() && s.parse::<f64>().is_ok()
}

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

fn cell_text(cell: &CellView<'_>, max_chars: usize) -> String {
    match cell.display {
        CellDisplay::Plain => truncate_text(cell.value, max_chars),
        CellDisplay::Tagged(tone) => {
            let tag = format!(" [{}]", tone.label());
            let room = max_chars.saturating_sub(tag.chars().count());
            format!("{}{}", truncate_text(cell.value, room), tag)
        }
        CellDisplay::TextInput | CellDisplay::Select(_) => {
            let room = max_chars.saturating_sub(2);
            format!("[{}]", truncate_text(cell.value, room))
        }
    }
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let fill = width.saturating_sub(text.chars().count());
    if right_align {
        format!("{}{}", " ".repeat(fill), text)
    } else {
        format!("{}{}", text, " ".repeat(fill))
    }
}

/// Render a projection as a text table
pub fn render_table(
    projection: &Projection<'_>,
    edit: &EditSession,
    options: RenderOptions,
) -> String {
    let rows: Vec<Vec<(String, bool)>> = (0..projection.row_count())
        .map(|projected| {
            projection
                .cells(projected, edit)
                .iter()
                .map(|cell| {
                    let text = cell_text(cell, options.max_cell_width);
                    (text, is_number(cell.value))
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = projection
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let header = truncate_text(column.name(), options.max_cell_width);
            rows.iter()
                .map(|row| row[i].0.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let gutter = projection.row_count().max(1).to_string().len();
    let mut out = String::new();

    let mut header = " ".repeat(gutter);
    for (column, width) in projection.columns.iter().zip(&widths) {
        header.push_str(" | ");
        let name = truncate_text(column.name(), options.max_cell_width);
        header.push_str(&pad(&name, *width, false));
    }
    out.push_str(header.trim_end());
    out.push('\n');

    let mut rule = "-".repeat(gutter);
    for width in &widths {
        rule.push_str("-+-");
        rule.push_str(&"-".repeat(*width));
    }
    out.push_str(&rule);
    out.push('\n');

    for (projected, row) in rows.iter().enumerate() {
        let mut line = pad(&(projected + 1).to_string(), gutter, true);
        for ((text, numeric), width) in row.iter().zip(&widths) {
            line.push_str(" | ");
            line.push_str(&pad(text, *width, *numeric));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Toolbar line: enabled commands as labels, disabled ones in parentheses
pub fn render_toolbar(model: &AppModel) -> String {
    toolbar(model)
        .iter()
        .map(|(cmd, enabled)| {
            if *enabled {
                format!("[{}]", cmd.label)
            } else {
                format!("({})", cmd.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Status line with filter and open-cell details
pub fn render_status(model: &AppModel) -> String {
    let mut parts = vec![model.ui.status_message.clone()];
    if let Some(filter) = model.view.status_filter() {
        parts.push(format!("filter: {}", filter));
    }
    if let Some(cell) = model.edit.open_cell() {
        let mut editing = format!("editing record {} {}", cell.locus.row + 1, cell.locus.column);
        if let Some(options) = cell.locus.column.kind().options() {
            editing.push_str(&format!(" (options: {})", options.join(", ")));
        }
        parts.push(editing);
    }
    parts.retain(|p| !p.is_empty());
    parts.join(" | ")
}

/// Full screen: toolbar, table and status line
pub fn render_model(model: &AppModel, options: RenderOptions) -> String {
    let mut out = render_toolbar(model);
    out.push('\n');
    out.push_str(&render_table(&model.projection(), &model.edit, options));
    out.push_str(&render_status(model));
    out.push('\n');
    out
}
