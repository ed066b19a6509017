use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

/// Render model output to ratatui lines. Supports **bold**, *italic*,
/// `code`, - / * / numbered lists and # headings; anything else passes
/// through as plain text.
pub fn render_markdown(content: &str) -> Vec<Line<'static>> {
    let numbered_re = Regex::new(r"^(\d+)\.\s+(.*)$").unwrap();
    let mut result: Vec<Line<'static>> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();

        if let Some(heading) = trimmed
            .strip_prefix("### ")
            .or_else(|| trimmed.strip_prefix("## "))
            .or_else(|| trimmed.strip_prefix("# "))
        {
            result.push(Line::from(Span::styled(
                heading.to_string(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
            continue;
        }

        if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            let mut spans = vec![Span::from("  • ")];
            spans.extend(parse_inline(item));
            result.push(Line::from(spans));
            continue;
        }

        if let Some(caps) = numbered_re.captures(trimmed) {
            let num = caps.get(1).unwrap().as_str();
            let item = caps.get(2).unwrap().as_str();
            let mut spans = vec![Span::from(format!("  {}. ", num))];
            spans.extend(parse_inline(item));
            result.push(Line::from(spans));
            continue;
        }

        if trimmed.is_empty() {
            result.push(Line::from(""));
        } else {
            result.push(Line::from(parse_inline(line)));
        }
    }

    result
}

/// Parse inline markdown: **bold**, *italic*, `code`
fn parse_inline(text: &str) -> Vec<Span<'static>> {
    let inline_re = Regex::new(r"(\*\*(.+?)\*\*|\*(.+?)\*|`([^`]+)`)").unwrap();
    let mut spans = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let Some(m) = inline_re.find(remaining) else {
            spans.push(Span::from(remaining.to_string()));
            break;
        };

        if m.start() > 0 {
            spans.push(Span::from(remaining[..m.start()].to_string()));
        }

        let caps = inline_re.captures(m.as_str()).unwrap();
        if let Some(bold) = caps.get(2) {
            spans.push(Span::styled(
                bold.as_str().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        } else if let Some(italic) = caps.get(3) {
            spans.push(Span::styled(
                italic.as_str().to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        } else if let Some(code) = caps.get(4) {
            spans.push(Span::styled(
                code.as_str().to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        remaining = &remaining[m.end()..];
    }

    if spans.is_empty() {
        spans.push(Span::from(String::new()));
    }

    spans
}
