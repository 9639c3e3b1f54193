//! Chat-completion API client
//!
//! Encapsulates every call to the external LLM provider. The provider speaks
//! the OpenAI-compatible `chat/completions` wire format.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::errors::DilemmaError;

/// Anything that can turn a system + user instruction pair into text.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Returns the first choice's text exactly as the provider produced it.
    async fn complete(&self, system: &str, user: &str) -> Result<String, DilemmaError>;

    /// Lists the provider's models, returning how many are available.
    async fn list_models(&self) -> Result<usize, DilemmaError>;
}

#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Together AI (or any OpenAI-compatible) chat-completion client
pub struct CompletionClient {
    http: Client,
    base_url: String,
    model_name: String,
}

impl CompletionClient {
    /// # Errors
    ///
    /// Returns an error if the API key cannot be used as a header value or
    /// the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, DilemmaError> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", config.together_api_key))
            .map_err(|e| DilemmaError::Config(format!("Invalid Authorization header: {e}")))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| DilemmaError::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.together_base_url.clone(),
            model_name: config.together_model.clone(),
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[must_use]
    pub fn build_prompt(system: &str, user: &str) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(system.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(user.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }
}

/// Converts prompt messages into the `{"role", "content"}` objects the
/// completion endpoint expects. Non-text content is dropped.
#[must_use]
pub fn build_wire_messages(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|msg| {
            let role = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };
            match &msg.content {
                Content::Text(text) => Some(json!({ "role": role, "content": text })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

/// Fails with the raw (lossily decoded) body on any non-2xx status.
async fn ensure_success(response: Response) -> Result<Response, DilemmaError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let raw = response.bytes().await.map_err(|e| {
        DilemmaError::Http(format!(
            "Failed to read error response body (status {status}): {e}"
        ))
    })?;
    Err(DilemmaError::upstream(status.as_u16(), &raw))
}

#[async_trait]
impl CompletionService for CompletionClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DilemmaError> {
        let prompt = Self::build_prompt(system, user);

        #[cfg(feature = "debug-logs")]
        info!("Using completion prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        debug!(
            "Requesting completion with {} messages in prompt",
            prompt.len()
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": build_wire_messages(&prompt),
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DilemmaError::Http(format!("Completion request failed: {e}")))?;

        let body: CompletionBody = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| {
                DilemmaError::Completion(format!("Failed to parse completion response: {e}"))
            })?;

        let text = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DilemmaError::Completion("No choices in response".to_string()))?
            .message
            .content
            .ok_or_else(|| DilemmaError::Completion("No text in response".to_string()))?;

        info!(chars = text.chars().count(), "Completion received");
        Ok(text)
    }

    async fn list_models(&self) -> Result<usize, DilemmaError> {
        let response = self
            .http
            .get(format!("{}/models", self.base_url))
            .send()
            .await
            .map_err(|e| DilemmaError::Http(format!("Model listing request failed: {e}")))?;

        let listing: Value = ensure_success(response).await?.json().await.map_err(|e| {
            DilemmaError::Completion(format!("Failed to parse model listing: {e}"))
        })?;

        // Together returns a bare array; OpenAI wraps it in `data`.
        let count = listing
            .as_array()
            .or_else(|| listing.get("data").and_then(Value::as_array))
            .map(Vec::len)
            .ok_or_else(|| DilemmaError::Completion("Unexpected model listing shape".to_string()))?;

        info!(models = count, "Model listing succeeded");
        Ok(count)
    }
}
