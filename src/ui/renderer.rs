//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. It dispatches on the
//! body view model (loading, empty, grid, detail) and wraps every mode in the
//! shared chrome (header, borders, footer, optional search bar).
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyViewModel, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// appropriate body renderer (loading, empty, grid, or detail).
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `print!`. Does not clear the
/// screen or manage cursor position; Zellij composites the pane.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
///
/// The chrome (header, borders, footer, search bar when active) is drawn for
/// every mode; the body area between the borders is filled by the matching
/// component renderer.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let body_row = components::render_chrome_top(vm, theme, cols);

    match &vm.body {
        BodyViewModel::Loading => components::render_loading(theme, body_row, cols),
        BodyViewModel::Empty(empty) => {
            components::render_empty_state(empty, theme, body_row, cols);
        }
        BodyViewModel::Grid { items } => {
            components::render_grid(body_row, items, theme, cols);
        }
        BodyViewModel::Detail { panel, sidebar } => {
            components::render_detail(body_row, panel, sidebar, theme, rows, cols);
        }
    }

    components::render_chrome_bottom(vm, theme, rows, cols);
}
