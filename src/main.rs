use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use doc_assistant::ai::EngineCell;
use doc_assistant::models::{AppState, DocumentSession};
use doc_assistant::{extract, logger, session, ui};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

fn main() -> io::Result<()> {
    logger::init();

    let ai_enabled = std::env::var("OPENROUTER_API_KEY").is_ok();
    let documents_dir = extract::documents_dir();
    let files = extract::list_documents(&documents_dir);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::Menu;
    let mut selected_file_index: usize = 0;
    let mut menu_error: Option<String> = None;
    let mut document_session: Option<DocumentSession> = None;
    let mut engine = EngineCell::new(ai_enabled);

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => ui::draw_menu(
                f,
                &documents_dir,
                &files,
                selected_file_index,
                ai_enabled,
                menu_error.as_deref(),
            ),
            AppState::Document => {
                if let Some(session) = &mut document_session {
                    ui::draw_document(f, session, ai_enabled);
                }
            }
            AppState::Quiz => {
                if let Some(session) = &document_session {
                    ui::draw_quiz(f, session);
                }
            }
            AppState::Results => {
                if let Some(session) = &document_session {
                    ui::draw_results(f, session);
                }
            }
            AppState::QuitConfirm => ui::draw_quit_confirmation(f),
        })?;

        if let Event::Key(key) = event::read()? {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            match app_state {
                AppState::Menu => match key.code {
                    KeyCode::Up => {
                        if selected_file_index > 0 {
                            selected_file_index -= 1;
                        }
                    }
                    KeyCode::Down => {
                        if selected_file_index < files.len().saturating_sub(1) {
                            selected_file_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        if !files.is_empty() {
                            match session::load_document(&files[selected_file_index], &mut engine) {
                                Ok(session) => {
                                    document_session = Some(session);
                                    menu_error = None;
                                    app_state = AppState::Document;
                                }
                                Err(e) => {
                                    logger::log(&format!("load failed: {}", e));
                                    menu_error = Some(e.to_string());
                                }
                            }
                        }
                    }
                    KeyCode::Esc | KeyCode::Char('q') => break,
                    _ => {}
                },
                AppState::Document => {
                    if let Some(session) = &mut document_session {
                        session::handle_document_input(session, &mut engine, key, &mut app_state);
                    }
                }
                AppState::Quiz => {
                    if let Some(session) = &mut document_session {
                        session::handle_quiz_input(session, &mut engine, key, &mut app_state);
                    }
                }
                AppState::Results => match key.code {
                    KeyCode::Char('r') => {
                        if let Some(session) = &mut document_session
                            && session::generate_quiz(session, &mut engine)
                        {
                            app_state = AppState::Quiz;
                        }
                    }
                    KeyCode::Char('d') | KeyCode::Esc => {
                        app_state = AppState::Document;
                    }
                    KeyCode::Char('m') => {
                        app_state = AppState::Menu;
                        document_session = None;
                    }
                    _ => {}
                },
                AppState::QuitConfirm => match key.code {
                    KeyCode::Char('y') => {
                        app_state = AppState::Menu;
                        document_session = None;
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        app_state = AppState::Document;
                    }
                    _ => {}
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
