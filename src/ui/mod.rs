pub mod document;
pub mod layout;
mod menu;
mod quiz;
mod results;

pub use document::draw_document;
pub use layout::{calculate_document_chunks, calculate_quiz_chunks, calculate_results_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use results::draw_results;
