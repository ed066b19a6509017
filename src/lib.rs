pub mod ai;
pub mod extract;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use ai::{DEFAULT_MODEL, EngineCell, InferenceEngine, InferenceError, ModelConfig};
pub use extract::{ExtractError, PREVIEW_CHARS, documents_dir, extract_file, list_documents};
pub use models::{AppState, AskOutcome, DocumentSession, SummaryState};
pub use quiz::{ANSWER_SENTINEL, MAX_QUESTIONS, QuizState, grade, split_sentences};
pub use session::{generate_quiz, handle_document_input, handle_quiz_input, load_document};
pub use ui::{draw_document, draw_menu, draw_quit_confirmation, draw_quiz, draw_results};
pub use utils::calculate_wrapped_cursor_position;
