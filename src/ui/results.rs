use crate::models::DocumentSession;
use crate::ui::layout::calculate_results_chunks;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_results(f: &mut Frame, session: &DocumentSession) {
    let layout = calculate_results_chunks(f.area());
    let quiz = &session.quiz;

    let title_text = format!("Evaluation Results - {}", session.file_name);
    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let grades = quiz.grades();
    let correct = grades.iter().filter(|g| **g).count();

    let mut content = Text::default();
    content.push_line(Line::from(format!("Score: {} / {}", correct, quiz.len())));
    content.push_line(Line::from(""));

    for (i, question) in quiz.questions.iter().enumerate() {
        let verdict = if grades[i] {
            Span::styled(
                format!("Q{}: Correct!", i + 1),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!("Q{}: Incorrect!", i + 1),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        };
        content.push_line(Line::from(verdict));
        content.push_line(Line::from(format!("   {}", truncate_string(question, 80))));
        content.push_line(Line::from(format!(
            "   Your Answer: {}",
            truncate_string(&quiz.user_answers[i], 76)
        )));
        content.push_line(Line::from(format!(
            "   Correct Answer: {}",
            truncate_string(&quiz.reference_answers[i], 73)
        )));
        content.push_line(Line::from(""));
    }

    let results = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(results, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Regenerate Quiz  "),
        Span::styled(
            "d",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Document  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Main Menu  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
