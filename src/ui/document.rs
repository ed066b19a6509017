use crate::models::{AskOutcome, DocumentSession, SummaryState};
use crate::ui::layout::calculate_document_chunks;
use crate::utils::markdown::render_markdown;
use crate::utils::{calculate_wrapped_cursor_position, estimate_wrapped_height, max_scroll};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_document(f: &mut Frame, session: &mut DocumentSession, ai_enabled: bool) {
    let layout = calculate_document_chunks(f.area());

    let header_text = format!(
        "{} - {} chars",
        session.file_name,
        session.text.chars().count()
    );
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    // Preview panel, scrollable with bounds so it cannot drift past the end.
    let visible_height = layout.preview_area.height.saturating_sub(2) as usize;
    let text_width = layout.preview_area.width.saturating_sub(2) as usize;
    let content_height = estimate_wrapped_height(session.preview(), text_width.max(1));
    let bounded_scroll = session
        .preview_scroll
        .min(max_scroll(content_height, visible_height));
    session.preview_scroll = bounded_scroll;

    let preview = Paragraph::new(session.preview())
        .wrap(Wrap { trim: true })
        .scroll((bounded_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Extracted Text Preview"),
        );
    f.render_widget(preview, layout.preview_area);

    let summary_content = match &session.summary {
        SummaryState::Ready(summary) => Text::from(render_markdown(summary)),
        SummaryState::TooShort => Text::from(Span::styled(
            "Text too short to summarize.",
            Style::default().fg(Color::Yellow),
        )),
        SummaryState::Failed(reason) => Text::from(Span::styled(
            reason.as_str(),
            Style::default().fg(Color::Red),
        )),
    };
    let summary = Paragraph::new(summary_content)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Summary"));
    f.render_widget(summary, layout.summary_area);

    let input_content = if session.ask.input.is_empty() {
        Text::from(Span::styled(
            "[Type a question here...]",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::from(session.ask.input.as_str())
    };
    let input = Paragraph::new(input_content)
        .block(Block::default().borders(Borders::ALL).title("Ask Anything"));
    f.render_widget(input, layout.input_area);

    let input_width = layout.input_area.width.saturating_sub(2) as usize;
    let (cursor_line, cursor_col) =
        calculate_wrapped_cursor_position(&session.ask.input, session.ask.cursor, input_width.max(1));
    f.set_cursor_position((
        layout.input_area.x + 1 + cursor_col as u16,
        layout.input_area.y + 1 + cursor_line as u16,
    ));

    let answer_content = match &session.ask.outcome {
        Some(AskOutcome::Answered(answer)) => {
            let mut text = Text::default();
            text.push_line(Line::from(Span::styled(
                "Answer:",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            text.extend(render_markdown(answer));
            text
        }
        Some(AskOutcome::Failed(reason)) => Text::from(Span::styled(
            reason.as_str(),
            Style::default().fg(Color::Red),
        )),
        None => Text::from(Span::styled(
            "Ask a question about the document and press Enter.",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let answer = Paragraph::new(answer_content)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Answer"));
    f.render_widget(answer, layout.answer_area);

    let mut basic_spans = vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Ask  "),
        Span::styled(
            "Ctrl+G",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Generate Questions  "),
    ];
    if !session.quiz.is_empty() {
        basic_spans.extend([
            Span::styled(
                "Ctrl+Q",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Resume Quiz  "),
        ]);
    }
    basic_spans.extend([
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Scroll Preview  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Back to Menu"),
    ]);
    let mut help_text = vec![Line::from(basic_spans)];

    if let Some(notice) = &session.notice {
        help_text.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        )));
    } else if !ai_enabled {
        help_text.push(Line::from(Span::styled(
            "Assistant disabled - set OPENROUTER_API_KEY",
            Style::default().fg(Color::Yellow),
        )));
    }

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
