use crate::models::DocumentSession;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::calculate_wrapped_cursor_position;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_quiz(f: &mut Frame, session: &DocumentSession) {
    let layout = calculate_quiz_chunks(f.area());
    let quiz = &session.quiz;

    let progress = format!(
        "Question {} / {} - {}",
        quiz.current + 1,
        quiz.len(),
        session.file_name
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question_text = Text::from(quiz.questions[quiz.current].as_str());
    let question = Paragraph::new(question_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let user_answer = quiz.user_answers[quiz.current].as_str();
    let answer_content = if user_answer.is_empty() {
        Text::from(Span::styled(
            "[Type your answer here...]",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::from(user_answer)
    };
    let answer = Paragraph::new(answer_content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your Answer (Enter to continue)"),
        );
    f.render_widget(answer, layout.answer_area);

    let text_width = layout.answer_area.width.saturating_sub(2) as usize;
    let (cursor_line, cursor_col) =
        calculate_wrapped_cursor_position(user_answer, quiz.cursor, text_width.max(1));
    f.set_cursor_position((
        layout.answer_area.x + 1 + cursor_col as u16,
        layout.answer_area.y + 1 + cursor_line as u16,
    ));

    let enter_label = if quiz.current + 1 == quiz.len() {
        " Evaluate  "
    } else {
        " Next  "
    };

    let mut help_text = vec![Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(enter_label),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Navigate  "),
        Span::styled(
            "Ctrl+R",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Regenerate  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Back"),
    ])];

    if let Some(notice) = &session.notice {
        help_text.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Close Document")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Return to the menu? The summary, answers and quiz are discarded.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Back to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Keep Working)  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
