//! Search box component renderer.
//!
//! This module renders the query input box shown while search mode is
//! active, between the header border and the results.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// A 3-line bordered box holding the query as typed so far. Unlike the grid
/// below it, the box does not follow a cursor: the query is whatever will be
/// submitted on Enter, unrelated to any search already in flight.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌────────────────────┐ [margin]
/// [margin] │ Search: lofi beats │ [margin]
/// [margin] └────────────────────┘ [margin]
/// ```
///
/// Borders use the `search_bar_border` theme color and the query uses
/// `text_normal`. Width math is character-based so multi-byte queries do not
/// skew the right border.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let search_text = format!(" Search: {}", search.query);
    let padding = inner_width.saturating_sub(search_text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
