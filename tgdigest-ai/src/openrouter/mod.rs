mod models;

use crate::openrouter::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::{AiError, AiResult, Config, Summarizer};

pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    max_tokens: u32,
}

impl OpenRouterClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            max_tokens: config.max_tokens,
        }
    }
}

impl Summarizer for OpenRouterClient {
    async fn summarize(&self, prompt: &str, model: &str) -> AiResult<String> {
        if prompt.is_empty() {
            return Ok("No messages to summarize.".to_string());
        }

        tracing::info!(%model, "requesting summary via OpenRouter");

        let request = ChatRequest {
            model: model.to_string(),
            max_tokens: self.max_tokens,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        // Check status before parsing
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "OpenRouter API error");
            return Err(AiError::Api(format!("{status}: {body}")));
        }

        let response = response.json::<ChatResponse>().await?;

        if let Some(error) = response.error {
            return Err(AiError::Api(error.message));
        }

        Ok(response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_else(|| "No summary generated.".to_string()))
    }
}
