//! Detail view component renderer.
//!
//! This module renders the detail layout: a left panel showing the selected
//! video (player line, title, metadata, description) next to a right sidebar
//! listing the full result set for quick switching.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailPanel, SidebarItem};

/// Fixed width of the sidebar in characters.
const SIDEBAR_WIDTH: usize = 36;

/// Minimum pane width below which the sidebar is dropped entirely.
const MIN_COLS_FOR_SIDEBAR: usize = 70;

/// Renders the detail layout: panel on the left, sidebar on the right.
///
/// # Parameters
///
/// * `start_row` - First body row (below the chrome)
/// * `panel` - Detail panel contents for the selected video
/// * `sidebar` - Visible sidebar rows (already windowed to the pane height)
/// * `theme` - Active color theme
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Layout
///
/// ```text
/// ▶ https://www.youtube.com/embed/...   │ UP NEXT
///                                       │ ▶ Current video · Channel
/// Video Title                           │   Other video · Channel
/// 1,234,567 views • Jan 5, 2024         │   ...
///
/// Description text wrapped to the
/// panel width...
/// ```
///
/// On panes narrower than [`MIN_COLS_FOR_SIDEBAR`] the sidebar and separator
/// are omitted and the panel takes the full width.
pub fn render_detail(
    start_row: usize,
    panel: &DetailPanel,
    sidebar: &[SidebarItem],
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    let last_body_row = rows.saturating_sub(3);
    let has_sidebar = cols >= MIN_COLS_FOR_SIDEBAR;

    let panel_width = if has_sidebar {
        cols.saturating_sub(SIDEBAR_WIDTH + 3)
    } else {
        cols
    };

    render_panel(start_row, panel, theme, panel_width, last_body_row);

    if has_sidebar {
        let separator_col = panel_width + 2;
        let sidebar_col = separator_col + 2;
        render_separator(start_row, separator_col, theme, last_body_row);
        render_sidebar(start_row, sidebar_col, sidebar, theme, last_body_row);
    }
}

/// Renders the vertical separator between the panel and the sidebar.
fn render_separator(start_row: usize, col: usize, theme: &Theme, last_body_row: usize) {
    print!("{}", Theme::fg(&theme.colors.border));
    for row in start_row..=last_body_row {
        position_cursor(row, col);
        print!("│");
    }
    print!("{}", Theme::reset());
}

/// Renders the left panel: player line, then title, metadata, and wrapped
/// description once the detail payload has arrived.
fn render_panel(
    start_row: usize,
    panel: &DetailPanel,
    theme: &Theme,
    width: usize,
    last_body_row: usize,
) {
    let mut row = start_row;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.accent));
    print!("▶ {}", helpers::truncate(&panel.embed_url, width.saturating_sub(2)));
    print!("{}", Theme::reset());
    row += 2;

    let Some(title) = &panel.title else {
        // Detail fetch still pending: the player line stands alone.
        if row <= last_body_row {
            position_cursor(row, 1);
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", Theme::dim());
            print!("Loading details...");
            print!("{}", Theme::reset());
        }
        return;
    };

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    for line in helpers::wrap_text(title, width).into_iter().take(2) {
        if row > last_body_row {
            break;
        }
        position_cursor(row, 1);
        print!("{line}");
        row += 1;
    }
    print!("{}", Theme::reset());

    if let Some(meta) = &panel.meta {
        if row <= last_body_row {
            position_cursor(row, 1);
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", helpers::truncate(meta, width));
            print!("{}", Theme::reset());
            row += 1;
        }
    }
    row += 1;

    if let Some(description) = &panel.description {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        for line in helpers::wrap_text(description, width) {
            if row > last_body_row {
                break;
            }
            position_cursor(row, 1);
            print!("{line}");
            row += 1;
        }
        print!("{}", Theme::reset());
    }
}

/// Renders the sidebar: an "UP NEXT" header followed by one line per video.
///
/// The playing row carries a `▶` marker in the `now_playing_fg` color; the
/// cursor row is drawn with the selection colors.
fn render_sidebar(
    start_row: usize,
    col: usize,
    items: &[SidebarItem],
    theme: &Theme,
    last_body_row: usize,
) {
    position_cursor(start_row, col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("UP NEXT");
    print!("{}", Theme::reset());

    let mut row = start_row + 1;
    for item in items {
        if row > last_body_row {
            break;
        }
        render_sidebar_row(row, col, item, theme);
        row += 1;
    }
}

fn render_sidebar_row(row: usize, col: usize, item: &SidebarItem, theme: &Theme) {
    position_cursor(row, col);

    if item.is_playing {
        print!("{}", Theme::fg(&theme.colors.now_playing_fg));
        print!("▶ ");
    } else {
        print!("  ");
    }

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let line = format!("{} · {}", item.title, item.channel);
    print!("{}", helpers::truncate(&line, SIDEBAR_WIDTH.saturating_sub(2)));
    print!("{}", Theme::reset());
}
