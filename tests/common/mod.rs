//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use jobgrid::commands::Cmd;
use jobgrid::config::GridConfig;
use jobgrid::messages::{EditMsg, Msg};
use jobgrid::model::{AppModel, Column, Grid, Record};
use jobgrid::update::update;

/// Create a test model with `rows` blank rows
pub fn test_model(rows: usize) -> AppModel {
    let config = GridConfig {
        default_rows: rows,
        ..GridConfig::default()
    };
    AppModel::new(config)
}

/// Create a test model whose rows have the given Job Request and Status
pub fn model_with_jobs(jobs: &[(&str, &str)]) -> AppModel {
    let records = jobs
        .iter()
        .map(|(job, status)| {
            Record::from_pairs([(Column::JobRequest, *job), (Column::Status, *status)])
        })
        .collect();
    AppModel::with_grid(Grid::from_records(records), GridConfig::default())
}

pub fn send(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    update(model, msg)
}

/// Open the cell at a projected row
pub fn activate(model: &mut AppModel, row: usize, column: Column) {
    update(model, Msg::Edit(EditMsg::Activate { row, column }));
}

/// Type each character of `text` into the open cell
pub fn type_chars(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::Edit(EditMsg::InsertChar(ch)));
    }
}

pub fn blur(model: &mut AppModel) {
    update(model, Msg::Edit(EditMsg::Blur));
}

/// Open a free-text cell, replace its value and close it
pub fn set_text(model: &mut AppModel, row: usize, column: Column, value: &str) {
    activate(model, row, column);
    update(model, Msg::Edit(EditMsg::Input(value.to_string())));
    blur(model);
}

/// Open an enum cell and choose an option
pub fn set_choice(model: &mut AppModel, row: usize, column: Column, value: &str) {
    activate(model, row, column);
    update(model, Msg::Edit(EditMsg::Select(value.to_string())));
}

/// Values of one column, top to bottom
pub fn column_values(model: &AppModel, column: Column) -> Vec<String> {
    model
        .grid()
        .records()
        .iter()
        .map(|r| r.get(column).to_string())
        .collect()
}

/// Number of cells that differ between two grids of equal length
pub fn changed_cells(a: &Grid, b: &Grid) -> usize {
    a.records()
        .iter()
        .zip(b.records())
        .map(|(ra, rb)| {
            Column::ALL
                .iter()
                .filter(|&&c| ra.get(c) != rb.get(c))
                .count()
        })
        .sum()
}
