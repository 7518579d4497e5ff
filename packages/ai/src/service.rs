// ABOUTME: Chat completion client for the external completion endpoint
// ABOUTME: One POST per request, first-choice extraction, failure classification

use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("No API key configured")]
    MissingCredential,

    #[error("API returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type CompletionResult<T> = Result<T, CompletionError>;

/// One completion call: role instruction, user prompt, sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub system_instruction: &'a str,
    pub user_prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the external chat-completion endpoint. No retry, no caching.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CompletionClient {
    /// Create HTTP client with timeout configuration
    fn create_client() -> Client {
        Client::builder()
            .timeout(Duration::from_secs(600))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client")
    }

    /// Endpoint comes from FINCREW_COMPLETIONS_URL, credential from
    /// OPENROUTER_API_KEY.
    pub fn from_env() -> Self {
        let endpoint = env::var(fincrew_config::FINCREW_COMPLETIONS_URL)
            .unwrap_or_else(|_| fincrew_config::DEFAULT_COMPLETIONS_URL.to_string());
        let api_key = env::var(fincrew_config::OPENROUTER_API_KEY)
            .ok()
            .filter(|key| !key.is_empty());

        Self {
            client: Self::create_client(),
            endpoint,
            api_key,
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Self::create_client(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// Send one completion request and return the first choice's content.
    ///
    /// A missing credential short-circuits before any network call.
    pub async fn complete(&self, request: CompletionRequest<'_>) -> CompletionResult<String> {
        let api_key = self.api_key.as_ref().ok_or(CompletionError::MissingCredential)?;

        let body = ChatRequest {
            model: request.model.to_string(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: request.system_instruction.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: request.user_prompt.to_string(),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        info!(
            "Sending completion request: model={}, max_tokens={}",
            body.model, body.max_tokens
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Completion request timed out");
                    CompletionError::Unexpected("Request timed out. The completion service may be overloaded or unavailable.".to_string())
                } else if e.is_connect() {
                    error!("Failed to connect to completion endpoint: {}", e);
                    CompletionError::Unexpected(format!("Connection failed: {e}"))
                } else {
                    error!("Completion request failed: {}", e);
                    CompletionError::Unexpected(e.to_string())
                }
            })?;

        let status = response.status();
        info!("Received completion response: status={}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Completion endpoint error: {} - {}", status, body);
            return Err(CompletionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Unexpected(format!("Failed to parse response: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::Unexpected("Response contained no choices".to_string())
            })?;

        Ok(content)
    }
}

impl Default for CompletionClient {
    fn default() -> Self {
        Self::from_env()
    }
}
