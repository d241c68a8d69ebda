//! Client for OpenAI-compatible chat-completion endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::{ProviderConfig, SecureString};

use super::error::RewriteError;
use super::traits::RewriteProvider;

/// Client for the chat-completions rewrite call.
///
/// Configuration, credentials and the system prompt are fixed at
/// construction; a missing key is reported by [`rewrite`] rather than here.
///
/// [`rewrite`]: RewriteProvider::rewrite
pub struct ChatCompletionsClient {
    client: Client,
    config: ProviderConfig,
    api_key: Option<SecureString>,
    system_prompt: String,
}

impl ChatCompletionsClient {
    /// Create a new client. Fails only if the HTTP client cannot be built.
    pub fn new(
        config: ProviderConfig,
        api_key: Option<SecureString>,
        system_prompt: String,
    ) -> Result<Self, RewriteError> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            api_key,
            system_prompt,
        })
    }

    /// Check if an API key is available.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the request body: the system prompt, then the notes untouched.
    fn build_request<'a>(&'a self, notes: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: notes,
                },
            ],
        }
    }
}

#[async_trait]
impl RewriteProvider for ChatCompletionsClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn rewrite(&self, notes: &str) -> Result<String, RewriteError> {
        let Some(api_key) = &self.api_key else {
            tracing::warn!(
                env = %self.config.api_key_env,
                "Rewrite requested without an API key"
            );
            return Err(RewriteError::NotConfigured);
        };

        let url = self.config.endpoint();
        let request_body = self.build_request(notes);

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            notes_len = notes.len(),
            "Sending rewrite request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key.expose()))
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&request_body)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Rewrite API error"
            );

            return Err(RewriteError::Status {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response.text().await?;
        let content = extract_content(&response_text)?;

        tracing::info!(
            status = %status,
            latency_ms,
            output_len = content.len(),
            "Rewrite completed"
        );

        Ok(content)
    }
}

/// Take the first choice's message content from a success body.
fn extract_content(body: &str) -> Result<String, RewriteError> {
    let response: ChatResponse = serde_json::from_str(body).map_err(|e| {
        RewriteError::Parse(format!("Failed to parse response JSON: {}", e))
    })?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| RewriteError::Parse("response contained no choices".to_string()))?;

    choice
        .message
        .content
        .ok_or_else(|| RewriteError::Parse("first choice has no message content".to_string()))
}

/// Chat-completions request format.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Chat-completions response format (only the fields we read).
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
    content: Option<String>,
}
