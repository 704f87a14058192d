//! Empty state and loading message renderers.
//!
//! This module renders the centered messages shown when the results grid has
//! nothing to display: the empty state after a search with no results, and
//! the loading message while a search is in flight.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// Displays a centered two-line message when no videos are available.
/// Typically shown when:
/// - No search has produced results yet
/// - The last search returned zero items
/// - The last search failed and the grid was cleared
///
/// # Parameters
///
/// * `empty` - Empty state information (message and subtitle)
/// * `theme` - Active color theme
/// * `start_row` - First body row (below the chrome)
/// * `cols` - Terminal width in columns
///
/// # Layout
///
/// ```text
/// [3 blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Both lines are horizontally centered. The message uses the
/// `empty_state_fg` theme color, the subtitle uses `text_dim` with dim
/// styling.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, start_row: usize, cols: usize) {
    let msg_row = start_row + 3;

    render_centered_line(msg_row, &empty.message, &theme.colors.empty_state_fg, cols);

    position_cursor(msg_row + 1, 1);
    let sub_len = empty.subtitle.chars().count().min(cols);
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", Theme::dim());
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}

/// Renders the loading message shown while a search request is in flight.
///
/// A single centered line in the accent color, at the same vertical position
/// as the empty state message.
pub fn render_loading(theme: &Theme, start_row: usize, cols: usize) {
    render_centered_line(start_row + 3, "Loading videos...", &theme.colors.accent, cols);
}

fn render_centered_line(row: usize, text: &str, color: &str, cols: usize) {
    let len = text.chars().count().min(cols);
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
