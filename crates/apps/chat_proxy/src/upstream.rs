use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ChatConfig;
use crate::error::ChatError;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: String,
}

/// OpenAI-compatible chat completion client with bounded retries.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: Arc<ChatConfig>,
}

impl UpstreamClient {
    pub fn new(http: reqwest::Client, config: ChatConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    /// One visitor message in, one assistant reply out.
    pub async fn complete(&self, message: &str) -> Result<String, ChatError> {
        let limit = self.config.timeout;
        match tokio::time::timeout(limit, self.complete_with_retries(message)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("chat upstream timed out after {limit:?}");
                Err(ChatError::Timeout(limit))
            }
        }
    }

    async fn complete_with_retries(&self, message: &str) -> Result<String, ChatError> {
        let url = self.config.completions_url();
        let body = CompletionRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.config.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let mut attempt = 0u32;
        loop {
            match self.send_once(&url, &body).await {
                Ok(reply) => return Ok(reply),
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    let delay = self
                        .config
                        .base_backoff
                        .saturating_mul(2u32.saturating_pow(attempt));
                    attempt += 1;
                    warn!(
                        attempt,
                        max = self.config.max_retries,
                        "chat upstream failed: {err}; retrying in {delay:?}"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn send_once(
        &self,
        url: &str,
        body: &CompletionRequest<'_>,
    ) -> Result<String, ChatError> {
        let mut request = self.http.post(url).json(body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let details = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(ChatError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        let parsed: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| ChatError::InvalidReply(e.to_string()))?;
        let reply = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ChatError::InvalidReply("no choices".to_string()))?;
        debug!(chars = reply.chars().count(), "chat upstream replied");
        Ok(reply)
    }
}
