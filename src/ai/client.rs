use crate::ai::engine::{CompletionBackend, InferenceError};
use async_trait::async_trait;
use openrouter_api::{
    models::provider_preferences::ProviderPreferences,
    models::provider_preferences::ProviderSort,
    types::chat::{ChatCompletionRequest, Message},
};
use serde::Serialize;

pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

#[derive(Debug, Clone, Serialize)]
pub struct ModelConfig {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ModelConfig {
    /// Model selection comes from `DOC_ASSISTANT_MODEL` when set.
    pub fn from_env() -> Self {
        ModelConfig {
            model: std::env::var("DOC_ASSISTANT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            temperature: Some(DEFAULT_TEMPERATURE),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
        }
    }
}

#[derive(Debug)]
pub struct OpenRouterClient {
    client: openrouter_api::OpenRouterClient<openrouter_api::Ready>,
    config: ModelConfig,
}

impl OpenRouterClient {
    pub fn new(config: ModelConfig) -> Result<Self, InferenceError> {
        let client = openrouter_api::OpenRouterClient::quick()
            .map_err(|e| InferenceError::Client(format!("failed to create OpenRouter client: {}", e)))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CompletionBackend for OpenRouterClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, InferenceError> {
        let messages = vec![
            Message::text("system", system_prompt),
            Message::text("user", user_prompt),
        ];

        let provider = ProviderPreferences::new().with_sort(ProviderSort::Throughput);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            provider: Some(provider),
            stream: None,
            response_format: None,
            tools: None,
            tool_choice: None,
            models: None,
            transforms: None,
            route: None,
            user: None,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: None,
            top_k: None,
            frequency_penalty: None,
            presence_penalty: None,
            repetition_penalty: None,
            min_p: None,
            top_a: None,
            seed: None,
            stop: None,
            logit_bias: None,
            logprobs: None,
            top_logprobs: None,
            prediction: None,
            parallel_tool_calls: None,
            verbosity: None,
        };

        let response = self
            .client
            .chat()
            .map_err(|e| InferenceError::Client(e.to_string()))?
            .chat_completion(request)
            .await
            .map_err(|e| InferenceError::Completion(format!("OpenRouter API error: {}", e)))?;

        let Some(choice) = response.choices.first() else {
            return Err(InferenceError::EmptyResponse);
        };

        match &choice.message.content {
            openrouter_api::MessageContent::Text(text) => Ok(text.clone()),
            openrouter_api::MessageContent::Parts(parts) => {
                let text_parts: Vec<String> = parts
                    .iter()
                    .filter_map(|p| {
                        if let openrouter_api::ContentPart::Text(tc) = p {
                            Some(tc.text.clone())
                        } else {
                            None
                        }
                    })
                    .collect();
                Ok(text_parts.join("\n"))
            }
        }
    }
}
