use crate::ai::EngineCell;
use crate::ai::engine::SUMMARY_MIN_CHARS;
use crate::extract;
use crate::logger;
use crate::models::{AppState, AskOutcome, DocumentSession, SummaryState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;

/// Extract a document and summarize it once. Documents at or below the
/// threshold skip summarization and take the warning path.
pub fn load_document(
    path: &Path,
    engine: &mut EngineCell,
) -> Result<DocumentSession, extract::ExtractError> {
    let text = extract::extract_file(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    logger::log(&format!("loaded {} ({} chars)", file_name, text.chars().count()));

    let summary = if text.chars().count() > SUMMARY_MIN_CHARS {
        match engine.get().and_then(|e| e.summarize(&text)) {
            Ok(summary) => SummaryState::Ready(summary),
            Err(e) => SummaryState::Failed(e.to_string()),
        }
    } else {
        SummaryState::TooShort
    };

    Ok(DocumentSession::new(file_name, text, summary))
}

/// Regenerate the quiz wholesale. Returns true when a non-empty quiz was
/// installed; on failure the previous quiz is left untouched and a notice
/// is set instead.
pub fn generate_quiz(session: &mut DocumentSession, engine: &mut EngineCell) -> bool {
    match engine.get().and_then(|e| e.build_quiz(&session.text)) {
        Ok(quiz) if quiz.is_empty() => {
            session.notice = Some("The model produced no usable questions.".to_string());
            false
        }
        Ok(quiz) => {
            session.quiz = quiz;
            session.notice = None;
            true
        }
        Err(e) => {
            session.notice = Some(format!("Could not generate questions: {}", e));
            false
        }
    }
}

fn submit_question(session: &mut DocumentSession, engine: &mut EngineCell) {
    let question = session.ask.input.trim().to_string();
    if question.is_empty() {
        return;
    }

    let outcome = match engine.get().and_then(|e| e.answer(&question, &session.text)) {
        Ok(answer) => AskOutcome::Answered(answer),
        Err(e) => AskOutcome::Failed(format!("Error getting answer: {}", e)),
    };
    session.ask.outcome = Some(outcome);
}

pub fn handle_document_input(
    session: &mut DocumentSession,
    engine: &mut EngineCell,
    key: KeyEvent,
    app_state: &mut AppState,
) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuitConfirm;
        }
        KeyCode::Up => {
            session.preview_scroll = session.preview_scroll.saturating_sub(1);
        }
        KeyCode::Down => {
            session.preview_scroll = session.preview_scroll.saturating_add(1);
        }
        KeyCode::Enter => {
            submit_question(session, engine);
        }
        KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if generate_quiz(session, engine) {
                *app_state = AppState::Quiz;
            }
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !session.quiz.is_empty() {
                *app_state = AppState::Quiz;
            }
        }
        KeyCode::Left => {
            session.ask.cursor = move_left(&session.ask.input, session.ask.cursor);
        }
        KeyCode::Right => {
            session.ask.cursor = move_right(&session.ask.input, session.ask.cursor);
        }
        KeyCode::Backspace => {
            if session.ask.cursor > 0 {
                let new_cursor = move_left(&session.ask.input, session.ask.cursor);
                session.ask.input.remove(new_cursor);
                session.ask.cursor = new_cursor;
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            session.ask.input.insert(session.ask.cursor, c);
            session.ask.cursor += c.len_utf8();
        }
        _ => {}
    }
}

pub fn handle_quiz_input(
    session: &mut DocumentSession,
    engine: &mut EngineCell,
    key: KeyEvent,
    app_state: &mut AppState,
) {
    if session.quiz.is_empty() {
        if key.code == KeyCode::Esc {
            *app_state = AppState::Document;
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Document;
        }
        KeyCode::Up => {
            if session.quiz.current > 0 {
                session.quiz.current -= 1;
                session.quiz.cursor = session.quiz.user_answers[session.quiz.current].len();
            }
        }
        KeyCode::Down => {
            if session.quiz.current < session.quiz.len() - 1 {
                session.quiz.current += 1;
                session.quiz.cursor = session.quiz.user_answers[session.quiz.current].len();
            }
        }
        KeyCode::Enter => {
            if session.quiz.current < session.quiz.len() - 1 {
                session.quiz.current += 1;
                session.quiz.cursor = session.quiz.user_answers[session.quiz.current].len();
            } else {
                session.quiz.evaluated = true;
                *app_state = AppState::Results;
            }
        }
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            generate_quiz(session, engine);
        }
        KeyCode::Left => {
            let answer = &session.quiz.user_answers[session.quiz.current];
            session.quiz.cursor = move_left(answer, session.quiz.cursor);
        }
        KeyCode::Right => {
            let answer = &session.quiz.user_answers[session.quiz.current];
            session.quiz.cursor = move_right(answer, session.quiz.cursor);
        }
        KeyCode::Backspace => {
            if session.quiz.cursor > 0 {
                let answer = &mut session.quiz.user_answers[session.quiz.current];
                let new_cursor = move_left(answer, session.quiz.cursor);
                answer.remove(new_cursor);
                session.quiz.cursor = new_cursor;
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let answer = &mut session.quiz.user_answers[session.quiz.current];
            answer.insert(session.quiz.cursor, c);
            session.quiz.cursor += c.len_utf8();
        }
        _ => {}
    }
}

fn move_left(text: &str, cursor: usize) -> usize {
    text[..cursor]
        .chars()
        .next_back()
        .map(|c| cursor - c.len_utf8())
        .unwrap_or(0)
}

fn move_right(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .chars()
        .next()
        .map(|c| cursor + c.len_utf8())
        .unwrap_or(cursor)
}
