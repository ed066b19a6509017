use crate::ai::client::{ModelConfig, OpenRouterClient};
use crate::logger;
use crate::quiz::{ANSWER_SENTINEL, MAX_QUESTIONS, QuizState, split_sentences};
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tokio::runtime::Runtime;

/// Documents at or below this many characters are not summarized.
pub const SUMMARY_MIN_CHARS: usize = 500;
/// The summarizer only sees this much of the document.
pub const SUMMARY_INPUT_CHARS: usize = 2000;
/// The question generator only sees this much of the document.
pub const QUIZ_INPUT_CHARS: usize = 1000;

const QUIZ_INSTRUCTION: &str = "Generate 3 logic or comprehension questions from this document:";

const SUMMARY_SYSTEM: &str =
    "You are a document assistant. Summarize the provided document excerpt in 50 to 150 words. \
     Respond with the summary only.";

const ANSWER_SYSTEM: &str =
    "You are a document assistant answering questions from a provided context. \
     Be concise and answer with spans of the context.";

const QUIZ_SYSTEM: &str =
    "You are an educational assistant creating comprehension questions. \
     Write each question as its own sentence, nothing else.";

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("assistant disabled: set OPENROUTER_API_KEY to enable it")]
    Disabled,

    #[error("{0}")]
    Client(String),

    #[error("{0}")]
    Completion(String),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("could not parse model response: {0}")]
    Malformed(String),
}

/// The seam between session logic and the network. The OpenRouter client is
/// the production implementation; tests script a mock.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str)
    -> Result<String, InferenceError>;
}

#[derive(Debug, Deserialize)]
struct AnswerPayload {
    answer: String,
}

/// The three inference capabilities behind one blocking facade. Created at
/// most once per process and shared by reference; every call runs on the
/// caller's thread via `block_on`.
pub struct InferenceEngine {
    runtime: Runtime,
    backend: Box<dyn CompletionBackend>,
}

impl InferenceEngine {
    pub fn new(config: ModelConfig) -> Result<Self, InferenceError> {
        let runtime = Runtime::new().map_err(|e| InferenceError::Client(e.to_string()))?;
        let backend: Box<dyn CompletionBackend> = Box::new(OpenRouterClient::new(config)?);
        Ok(InferenceEngine { runtime, backend })
    }

    #[cfg(test)]
    pub fn with_backend(backend: Box<dyn CompletionBackend>) -> Self {
        InferenceEngine {
            runtime: Runtime::new().unwrap(),
            backend,
        }
    }

    /// Summarize the head of the document. Callers are expected to skip
    /// documents at or below `SUMMARY_MIN_CHARS`.
    pub fn summarize(&self, text: &str) -> Result<String, InferenceError> {
        logger::log("summarize: sending request");
        let excerpt = char_prefix(text, SUMMARY_INPUT_CHARS);
        let response = self
            .runtime
            .block_on(self.backend.complete(SUMMARY_SYSTEM, excerpt))?;

        let summary = clean_response(&response);
        if summary.is_empty() {
            return Err(InferenceError::EmptyResponse);
        }
        logger::log("summarize: ok");
        Ok(summary)
    }

    /// Answer a free-form question against the full document text.
    pub fn answer(&self, question: &str, context: &str) -> Result<String, InferenceError> {
        logger::log(&format!("answer: asking {:?}", question));
        let prompt = answer_prompt(question, context);
        let response = self.runtime.block_on(self.backend.complete(ANSWER_SYSTEM, &prompt))?;

        let cleaned = clean_json_response(&response);
        let payload: AnswerPayload = serde_json::from_str(&cleaned)
            .map_err(|e| InferenceError::Malformed(format!("{} (raw: {})", e, response)))?;

        let answer = payload.answer.trim().to_string();
        if answer.is_empty() {
            return Err(InferenceError::EmptyResponse);
        }
        logger::log("answer: ok");
        Ok(answer)
    }

    /// Free-text continuation split into sentence-like units, at most
    /// `MAX_QUESTIONS`. Fewer usable units simply yield a shorter list.
    pub fn generate_questions(&self, text: &str) -> Result<Vec<String>, InferenceError> {
        logger::log("generate_questions: sending request");
        let prompt = format!("{}\n{}", QUIZ_INSTRUCTION, char_prefix(text, QUIZ_INPUT_CHARS));
        let response = self.runtime.block_on(self.backend.complete(QUIZ_SYSTEM, &prompt))?;

        let mut questions = split_sentences(&clean_response(&response));
        questions.truncate(MAX_QUESTIONS);
        logger::log(&format!("generate_questions: {} usable units", questions.len()));
        Ok(questions)
    }

    /// Generate a whole quiz: questions, then one reference answer per
    /// question. A failed answer lookup degrades to the sentinel instead of
    /// aborting the rest.
    pub fn build_quiz(&self, text: &str) -> Result<QuizState, InferenceError> {
        let questions = self.generate_questions(text)?;

        let mut reference_answers = Vec::with_capacity(questions.len());
        for question in &questions {
            match self.answer(question, text) {
                Ok(answer) => reference_answers.push(answer),
                Err(e) => {
                    logger::log(&format!("build_quiz: reference answer failed: {}", e));
                    reference_answers.push(ANSWER_SENTINEL.to_string());
                }
            }
        }

        Ok(QuizState::from_generated(questions, reference_answers))
    }
}

/// Lazily-initialized, process-owned engine handle. `enabled` mirrors
/// whether the API key was present at startup.
pub struct EngineCell {
    enabled: bool,
    engine: Option<InferenceEngine>,
}

impl EngineCell {
    pub fn new(enabled: bool) -> Self {
        EngineCell { enabled, engine: None }
    }

    #[cfg(test)]
    pub fn with_backend(backend: Box<dyn CompletionBackend>) -> Self {
        EngineCell {
            enabled: true,
            engine: Some(InferenceEngine::with_backend(backend)),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn get(&mut self) -> Result<&InferenceEngine, InferenceError> {
        if !self.enabled {
            return Err(InferenceError::Disabled);
        }
        if self.engine.is_none() {
            self.engine = Some(InferenceEngine::new(ModelConfig::from_env())?);
        }
        Ok(self.engine.as_ref().unwrap())
    }
}

fn answer_prompt(question: &str, context: &str) -> String {
    format!(
        r#"Answer the question using only the provided context and respond ONLY with valid JSON.

Context:
{}

Question: {}

IMPORTANT:

- Respond ONLY with this exact JSON structure (no markdown, no extra text):
{{
    "answer": "the shortest span of the context that answers the question"
}}
- If the context does not state the answer outright, use the closest supported span anyway.
"#,
        context, question
    )
}

/// Strip markdown fences and matching wrapping quotes from a plain-text
/// model response.
fn clean_response(response: &str) -> String {
    let mut cleaned = response.trim().to_string();

    if cleaned.starts_with("```") {
        let lines: Vec<&str> = cleaned.lines().collect();
        if lines.len() > 2 {
            cleaned = lines[1..lines.len() - 1].join("\n");
        }
    }

    let trimmed = cleaned.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        return trimmed[1..trimmed.len() - 1].trim().to_string();
    }

    trimmed.to_string()
}

/// Cut a JSON object out of a response that may wrap it in fences or prose.
fn clean_json_response(response: &str) -> String {
    let mut cleaned = response.trim().to_string();

    if cleaned.starts_with("```") {
        let lines: Vec<&str> = cleaned.lines().collect();
        if lines.len() > 2 {
            cleaned = lines[1..lines.len() - 1].join("\n");
        }
    }

    if let Some(start) = cleaned.find('{')
        && let Some(end) = cleaned.rfind('}')
    {
        cleaned = cleaned[start..=end].to_string();
    }

    cleaned.trim().to_string()
}

fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
pub use mock::MockBackend;


#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(responses: Vec<Result<String, InferenceError>>) -> InferenceEngine {
        InferenceEngine::with_backend(Box::new(MockBackend::new(responses)))
    }

    #[test]
    fn test_clean_response_plain() {
        assert_eq!(clean_response("A short summary."), "A short summary.");
    }

    #[test]
    fn test_clean_response_fenced() {
        let fenced = "```\nA short summary.\n```";
        assert_eq!(clean_response(fenced), "A short summary.");
    }

    #[test]
    fn test_clean_response_quoted() {
        assert_eq!(clean_response("\"A short summary.\""), "A short summary.");
    }

    #[test]
    fn test_clean_json_response_simple() {
        let json = r#"{"answer":"Paris"}"#;
        assert_eq!(clean_json_response(json), r#"{"answer":"Paris"}"#);
    }

    #[test]
    fn test_clean_json_response_markdown() {
        let json = "```json\n{\"answer\": \"Paris\"}\n```";
        assert_eq!(clean_json_response(json), r#"{"answer": "Paris"}"#);
    }

    #[test]
    fn test_clean_json_response_with_text() {
        let json = r#"Here you go: {"answer": "Paris"} hope that helps"#;
        assert_eq!(clean_json_response(json), r#"{"answer": "Paris"}"#);
    }

    #[test]
    fn test_char_prefix_bounds() {
        assert_eq!(char_prefix("hello", 10), "hello");
        assert_eq!(char_prefix("hello", 3), "hel");
        assert_eq!(char_prefix("ééééé", 2), "éé");
    }

    #[test]
    fn test_summarize_cleans_response() {
        let engine = engine_with(vec![Ok("```\nThe summary.\n```".into())]);
        assert_eq!(engine.summarize("some long document text").unwrap(), "The summary.");
    }

    #[test]
    fn test_summarize_empty_response_is_error() {
        let engine = engine_with(vec![Ok("   ".into())]);
        assert!(matches!(
            engine.summarize("text"),
            Err(InferenceError::EmptyResponse)
        ));
    }

    #[test]
    fn test_answer_parses_json_payload() {
        let engine = engine_with(vec![Ok(r#"{"answer": "Paris"}"#.into())]);
        assert_eq!(engine.answer("Capital of France?", "ctx").unwrap(), "Paris");
    }

    #[test]
    fn test_answer_malformed_json_is_error() {
        let engine = engine_with(vec![Ok("the answer is Paris".into())]);
        assert!(matches!(
            engine.answer("Capital of France?", "ctx"),
            Err(InferenceError::Malformed(_))
        ));
    }

    #[test]
    fn test_generate_questions_truncates_to_three() {
        let engine = engine_with(vec![Ok(
            "What is X? What is Y? What is Z? What is W?".into()
        )]);
        let questions = engine.generate_questions("doc").unwrap();
        assert_eq!(questions.len(), MAX_QUESTIONS);
        assert_eq!(questions[0], "What is X?");
    }

    #[test]
    fn test_generate_questions_fewer_than_three() {
        let engine = engine_with(vec![Ok("Only one question?".into())]);
        let questions = engine.generate_questions("doc").unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_build_quiz_sequences_aligned() {
        let engine = engine_with(vec![
            Ok("Q one? Q two?".into()),
            Ok(r#"{"answer": "A1"}"#.into()),
            Ok(r#"{"answer": "A2"}"#.into()),
        ]);
        let quiz = engine.build_quiz("doc").unwrap();
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.reference_answers, vec!["A1", "A2"]);
        assert_eq!(quiz.user_answers, vec!["", ""]);
        assert!(!quiz.evaluated);
    }

    #[test]
    fn test_build_quiz_failed_answer_becomes_sentinel() {
        let engine = engine_with(vec![
            Ok("Q one? Q two?".into()),
            Err(InferenceError::Completion("boom".into())),
            Ok(r#"{"answer": "A2"}"#.into()),
        ]);
        let quiz = engine.build_quiz("doc").unwrap();
        assert_eq!(quiz.reference_answers, vec![ANSWER_SENTINEL, "A2"]);
        assert_eq!(quiz.questions.len(), quiz.user_answers.len());
    }

    #[test]
    fn test_build_quiz_generation_failure_propagates() {
        let engine = engine_with(vec![Err(InferenceError::Completion("down".into()))]);
        assert!(engine.build_quiz("doc").is_err());
    }

    #[test]
    fn test_disabled_cell_reports_disabled() {
        let mut cell = EngineCell::new(false);
        assert!(matches!(cell.get(), Err(InferenceError::Disabled)));
        assert!(!cell.enabled());
    }
}
