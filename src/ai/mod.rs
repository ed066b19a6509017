pub mod client;
pub mod engine;

pub use client::{DEFAULT_MODEL, ModelConfig, OpenRouterClient};
pub use engine::{CompletionBackend, EngineCell, InferenceEngine, InferenceError};
