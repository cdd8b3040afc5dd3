//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod edit;
mod grid;
mod view;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::messages::{AppMsg, EditMsg};
#[cfg(debug_assertions)]
use crate::tracing::GridSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use edit::update_edit;
pub use grid::update_grid;
pub use view::update_view;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::View(m) => view::update_view(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after session state, logs the diff and checks invariants.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Keystrokes are too frequent to log one by one
    let is_noisy = matches!(
        &msg,
        Msg::Edit(EditMsg::InsertChar(_)) | Msg::Edit(EditMsg::DeleteBackward)
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = GridSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = GridSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "grid", %diff, "state changed");
    }

    model.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Grid::AddRow`
/// - `Edit::InsertChar('x')`
/// - `View::SetFilter(Some("Blocked"))`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::View(m) => format!("View::{:?}", m),
        Msg::App(AppMsg::LoadText(text)) => format!("App::LoadText({} bytes)", text.len()),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
