//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the different UI
//! elements. Each component renders a specific part of the interface; the
//! layout functions assemble them around the mode-specific body.
//!
//! # Components
//!
//! - [`header`]: Title bar with branding and result count
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`grid`]: Results list with TITLE and CHANNEL columns
//! - [`detail`]: Detail panel (player line, metadata, description) + sidebar
//! - [`empty`]: Empty state and loading messages

mod detail;
mod empty;
mod footer;
mod grid;
mod header;
mod search;

pub use detail::render_detail;
pub use empty::{render_empty_state, render_loading};
pub use grid::render_grid;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the top chrome: header, border, and the search bar when active.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, search mode only]
/// ```
///
/// # Returns
///
/// The first row available for the body.
pub fn render_chrome_top(vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    current_row
}

/// Renders the bottom chrome: border and footer pinned to the last rows.
pub fn render_chrome_bottom(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
