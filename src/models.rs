use crate::quiz::QuizState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    Menu,
    Document,
    Quiz,
    Results,
    QuitConfirm,
}

/// Outcome of the one-shot summarization performed at document load.
#[derive(Debug, PartialEq)]
pub enum SummaryState {
    Ready(String),
    /// Document at or below the length threshold; a warning is shown instead.
    TooShort,
    Failed(String),
}

#[derive(Debug, PartialEq)]
pub enum AskOutcome {
    Answered(String),
    Failed(String),
}

/// Ask-anything panel state: the editable question and the last outcome.
#[derive(Debug, Default)]
pub struct AskState {
    pub input: String,
    pub cursor: usize,
    pub outcome: Option<AskOutcome>,
}

/// Everything the interactive session holds for one loaded document.
/// Dropped wholesale when the user returns to the menu; nothing persists.
#[derive(Debug)]
pub struct DocumentSession {
    pub file_name: String,
    pub text: String,
    pub summary: SummaryState,
    pub ask: AskState,
    pub quiz: QuizState,
    pub notice: Option<String>,
    pub preview_scroll: u16,
}

impl DocumentSession {
    pub fn new(file_name: String, text: String, summary: SummaryState) -> Self {
        DocumentSession {
            file_name,
            text,
            summary,
            ask: AskState::default(),
            quiz: QuizState::default(),
            notice: None,
            preview_scroll: 0,
        }
    }

    /// The slice of the text the preview panel shows.
    pub fn preview(&self) -> &str {
        crate::extract::preview(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_text(text: &str) -> DocumentSession {
        DocumentSession::new("doc.txt".into(), text.into(), SummaryState::TooShort)
    }

    #[test]
    fn test_new_session_starts_clean() {
        let session = session_with_text("hello");
        assert!(session.ask.input.is_empty());
        assert!(session.ask.outcome.is_none());
        assert!(session.quiz.is_empty());
        assert!(!session.quiz.evaluated);
        assert!(session.notice.is_none());
    }

    #[test]
    fn test_preview_is_text_prefix() {
        let text = "b".repeat(4000);
        let session = session_with_text(&text);
        assert_eq!(session.preview().len(), crate::extract::PREVIEW_CHARS);
        assert!(text.starts_with(session.preview()));
    }

    #[test]
    fn test_short_document_preview_is_whole_text() {
        let session = session_with_text("tiny document");
        assert_eq!(session.preview(), "tiny document");
    }

    #[test]
    fn test_app_state_transitions() {
        let mut state = AppState::Menu;
        assert_eq!(state, AppState::Menu);
        state = AppState::Document;
        assert_eq!(state, AppState::Document);
        state = AppState::Quiz;
        assert_eq!(state, AppState::Quiz);
        state = AppState::Results;
        assert_eq!(state, AppState::Results);
    }
}
