use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the application header with branding.
///
/// # Returns
///
/// The next available row position
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let title = &header.title;
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", Theme::bold());
    print!("{}", title);

    // Pad the rest of the line so a header background fills the full width
    let title_width = title.chars().count();
    if title_width < cols {
        print!("{}", " ".repeat(cols - title_width));
    }
    print!("{}", Theme::reset());

    row + 1
}
