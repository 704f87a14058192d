//! Results grid component renderer.
//!
//! This module renders the search results as a two-column table with TITLE
//! and CHANNEL columns, with full-row selection highlighting.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GridItem;

/// Fixed width of the TITLE column in characters.
const TITLE_COL_WIDTH: usize = 56;

/// Renders the grid column headers followed by the visible rows.
///
/// # Parameters
///
/// * `row` - Starting row position (1-indexed)
/// * `items` - Visible grid rows (already windowed to the pane height)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position
pub fn render_grid(row: usize, items: &[GridItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = render_grid_headers(row, theme);
    for item in items {
        current_row = render_grid_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders the "TITLE" and "CHANNEL" column headers with bold styling.
fn render_grid_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<TITLE_COL_WIDTH$} {:<}", "TITLE", "CHANNEL");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a single grid row.
///
/// # Layout
///
/// ```text
/// TITLE (up to 54 chars) [2 spaces] CHANNEL (remaining width) [padding]
/// ```
///
/// The row is padded to fill the entire terminal width so the selection
/// background renders as a solid bar.
fn render_grid_row(row: usize, item: &GridItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let title = helpers::truncate(&item.title, TITLE_COL_WIDTH.saturating_sub(2));
    print!("{title:<TITLE_COL_WIDTH$} ");

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    let channel_width = cols.saturating_sub(TITLE_COL_WIDTH + 1);
    let channel = helpers::truncate(&item.channel, channel_width);
    print!("{channel}");

    let used = TITLE_COL_WIDTH + 1 + channel.chars().count();
    if used < cols {
        print!("{}", " ".repeat(cols - used));
    }
    print!("{}", Theme::reset());

    row + 1
}
