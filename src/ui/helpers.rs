//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning,
//! width-aware truncation, and simple word wrapping for the description
//! panel. All rendering in this plugin is direct ANSI output via `print!`,
//! with Zellij compositing the pane.

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI sequence `\x1b[{row};{col}H`. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates text to `max_width` characters, appending `...` when it is cut.
///
/// Operates on character counts, not bytes, so multi-byte titles survive.
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return chars[..max_width].iter().collect();
    }
    let mut truncated: String = chars[..max_width - 3].iter().collect();
    truncated.push_str("...");
    truncated
}

/// Wraps text into lines no wider than `max_width` characters.
///
/// Breaks on whitespace where possible; a single word longer than the width
/// is split hard. Explicit newlines in the input are honored, and empty
/// input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(max_width) {
                    lines.push(chunk.iter().collect());
                }
                continue;
            }

            let current_len = current.chars().count();
            if current.is_empty() {
                current.push_str(word);
            } else if current_len + 1 + word_len <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_appends_ellipsis_only_when_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title", 10), "a very ...");
        assert_eq!(truncate("abc", 2), "ab");
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn wrap_splits_oversized_words_hard() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_honors_explicit_newlines() {
        assert_eq!(wrap_text("first\n\nsecond", 20), vec!["first", "", "second"]);
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("anything", 0).is_empty());
    }
}
