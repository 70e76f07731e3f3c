//! OpenAI adapter (chat completions).
//!
//! Implements the `crb-core` CompletionClient over the `chat/completions`
//! endpoint.

use async_trait::async_trait;
use serde::Serialize;

use crb_core::model::{
    client::CompletionClient,
    types::{ChatMessage, CompletionError, CompletionRequest},
};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

// The relay enforces its own wall clock around `complete`; this bound only
// keeps a wedged connection from outliving the process-level expectations.
const HTTP_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct OpenAiClient {
    api_key: String,
    http: reqwest::Client,
    url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("reqwest client build");
        Self {
            api_key: api_key.into(),
            http,
            url: CHAT_COMPLETIONS_URL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

/// Pull the generated text out of a `chat/completions` response.
///
/// A missing or null `content` on an otherwise well-formed choice is an
/// empty generation, not an error; the relay substitutes its own apology.
fn extract_content(v: &serde_json::Value) -> Result<String, CompletionError> {
    let choices = v
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| CompletionError::Malformed("missing choices".to_string()))?;
    let first = choices
        .first()
        .ok_or_else(|| CompletionError::Malformed("empty choices".to_string()))?;

    Ok(first
        .pointer("/message/content")
        .and_then(|c| c.as_str())
        .unwrap_or("")
        .to_string())
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, req: CompletionRequest) -> Result<String, CompletionError> {
        let body = ChatCompletionBody {
            model: &req.model,
            messages: &req.messages,
            max_tokens: req.max_tokens,
        };

        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout
                } else {
                    CompletionError::Transport(format!("openai request error: {e}"))
                }
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        let v: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| CompletionError::Malformed(format!("openai json error: {e}")))?;

        extract_content(&v)
    }
}
