use crate::ai::DEFAULT_MODEL;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use std::path::{Path, PathBuf};

pub fn draw_menu(
    f: &mut Frame,
    documents_dir: &Path,
    files: &[PathBuf],
    selected_index: usize,
    ai_enabled: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(f.area());

    let title = Paragraph::new("Document Assistant v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = if files.is_empty() {
        vec![
            ListItem::new(format!(
                "No PDF or TXT files found in {}",
                documents_dir.display()
            ))
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]
    } else {
        files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                let style = if i == selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(name).style(style)
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select a Document"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(list, chunks[1]);

    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[2]);

    let status_content = if let Some(error) = error {
        vec![Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ))]
    } else if ai_enabled {
        vec![
            Line::from("Assistant: Enabled"),
            Line::from(format!("Model: {}", model_label())),
        ]
    } else {
        vec![
            Line::from("Assistant: Disabled"),
            Line::from("Set OPENROUTER_API_KEY"),
        ]
    };

    let status = Paragraph::new(status_content)
        .style(Style::default().fg(if error.is_some() {
            Color::Red
        } else if ai_enabled {
            Color::Green
        } else {
            Color::Yellow
        }))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, footer_chunks[0]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Navigate  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Open  "),
        Span::styled(
            "Esc/Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, footer_chunks[1]);
}

fn model_label() -> String {
    std::env::var("DOC_ASSISTANT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}
