use unicode_width::UnicodeWidthChar;

pub mod markdown;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// Simulates ratatui `Wrap { trim: true }` wrapping: explicit newlines break
/// lines, and lines wrap at `max_width` display columns with trailing
/// whitespace trimmed. Returns (line_text, start_index, end_index) per
/// visual line.
fn simulate_wrapped_lines(text: &str, max_width: usize) -> Vec<(String, usize, usize)> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut line_start = 0;

    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            lines.push((current.trim_end().to_string(), line_start, idx));
            current = String::new();
            current_width = 0;
            line_start = idx + 1;
            continue;
        }

        let ch_width = ch.width().unwrap_or(1);
        if current_width + ch_width > max_width && current_width > 0 {
            lines.push((current.trim_end().to_string(), line_start, idx));
            current = ch.to_string();
            current_width = ch_width;
            line_start = idx;
        } else {
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() || text.ends_with('\n') {
        lines.push((current.trim_end().to_string(), line_start, text.len()));
    }

    lines
}

/// Number of visual lines `text` occupies when wrapped at `max_width`.
pub fn estimate_wrapped_height(text: &str, max_width: usize) -> usize {
    if max_width == 0 {
        return 0;
    }
    simulate_wrapped_lines(text, max_width).len()
}

/// Highest useful scroll offset for content of `content_height` lines in a
/// viewport of `visible_height` lines.
pub fn max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height.saturating_sub(visible_height) as u16
}

/// Maps a byte cursor index inside `text` to its (visual line, column) after
/// wrapping at `max_width`. Used to place the terminal cursor in input
/// fields that wrap.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor_index: usize,
    max_width: usize,
) -> (usize, usize) {
    if text.is_empty() || cursor_index == 0 {
        return (0, 0);
    }

    let wrapped = simulate_wrapped_lines(text, max_width);

    for (line_idx, (_, start, end)) in wrapped.iter().enumerate() {
        if cursor_index >= *start && cursor_index <= *end {
            return (line_idx, cursor_index - start);
        }
    }

    // Cursor sits past the last line (e.g. inside trimmed trailing space).
    if let Some((last_text, _, last_end)) = wrapped.last()
        && cursor_index >= *last_end
    {
        return (wrapped.len() - 1, last_text.chars().count());
    }

    (0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_cursor_empty_text() {
        assert_eq!(calculate_wrapped_cursor_position("", 0, 10), (0, 0));
    }

    #[test]
    fn test_cursor_start_of_text() {
        assert_eq!(calculate_wrapped_cursor_position("Hello world", 0, 10), (0, 0));
    }

    #[test]
    fn test_cursor_single_line() {
        assert_eq!(calculate_wrapped_cursor_position("Hello", 3, 10), (0, 3));
    }

    #[test]
    fn test_cursor_wraps_to_second_line() {
        let text = "This is a long line that should wrap";
        assert_eq!(calculate_wrapped_cursor_position(text, 15, 10), (1, 5));
    }

    #[test]
    fn test_cursor_multiple_wraps() {
        let text = "This is a very long text that will definitely wrap multiple times";
        assert_eq!(calculate_wrapped_cursor_position(text, 25, 10), (2, 5));
    }

    #[test]
    fn test_cursor_beyond_text() {
        assert_eq!(calculate_wrapped_cursor_position("Hi", 10, 10), (0, 2));
    }

    #[test]
    fn test_cursor_exact_wrap_boundary() {
        assert_eq!(calculate_wrapped_cursor_position("0123456789", 10, 10), (0, 10));
    }

    #[test]
    fn test_explicit_newlines_break_lines() {
        let lines = simulate_wrapped_lines("Line 1\nLine 2\nLine 3", 20);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].0, "Line 1");
        assert_eq!(lines[1].0, "Line 2");
        assert_eq!(lines[2].0, "Line 3");
    }

    #[test]
    fn test_cursor_after_newline() {
        assert_eq!(calculate_wrapped_cursor_position("Line 1\nLine 2", 8, 20), (1, 1));
    }

    #[test]
    fn test_estimate_wrapped_height() {
        assert_eq!(estimate_wrapped_height("short", 10), 1);
        assert_eq!(estimate_wrapped_height("0123456789abcde", 10), 2);
        assert_eq!(estimate_wrapped_height("a\nb\nc", 10), 3);
    }

    #[test]
    fn test_max_scroll_bounds() {
        assert_eq!(max_scroll(10, 4), 6);
        assert_eq!(max_scroll(3, 10), 0);
    }

    #[test]
    fn test_mixed_newlines_and_wrapping() {
        let lines = simulate_wrapped_lines("Short\nThis is a longer line that should wrap", 10);
        assert_eq!(lines[0].0, "Short");
        assert!(lines.len() > 2);
    }
}
