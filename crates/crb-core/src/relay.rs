//! The completion relay: one inbound question, one bounded upstream call,
//! one user-facing answer. Upstream failures never escape this module; they
//! are replaced with fixed apology strings and logged.

use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    model::{
        client::CompletionClient,
        types::{ChatMessage, CompletionError, CompletionRequest, Role},
    },
};

/// Fixed instruction prepended to every request. There is no conversation
/// memory; this plus the user's text is the whole prompt.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant. Answer briefly and to the point.";

pub const TRUNCATION_NOTICE: &str = "\n\n(The reply was shortened due to Telegram message limits)";

pub const EMPTY_REPLY_APOLOGY: &str =
    "Sorry, something went wrong while processing your request.";

pub const UPSTREAM_ERROR_APOLOGY: &str =
    "Sorry, something went wrong while processing your request. Please try again later.";

pub const TIMEOUT_APOLOGY: &str =
    "Sorry, the request took too long. Please try again or rephrase your question.";

pub struct CompletionRelay {
    client: Arc<dyn CompletionClient>,
    model: String,
    max_tokens: u32,
    timeout: Duration,
    reply_char_limit: usize,
}

impl CompletionRelay {
    pub fn new(cfg: &Config, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            model: cfg.completion_model.clone(),
            max_tokens: cfg.completion_max_tokens,
            timeout: cfg.completion_timeout,
            reply_char_limit: cfg.telegram_safe_limit,
        }
    }

    /// Relay one question. Always yields text ready to send to the user.
    pub async fn complete(&self, prompt: &str) -> String {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::new(Role::System, SYSTEM_PROMPT),
                ChatMessage::new(Role::User, prompt),
            ],
            max_tokens: self.max_tokens,
        };

        let reply = match tokio::time::timeout(self.timeout, self.client.complete(request)).await {
            Ok(Ok(text)) => text,
            Ok(Err(CompletionError::Timeout)) | Err(_) => {
                tracing::error!(timeout = ?self.timeout, "completion request timed out");
                return TIMEOUT_APOLOGY.to_string();
            }
            Ok(Err(err)) => {
                tracing::error!(error = %err, "completion request failed");
                return UPSTREAM_ERROR_APOLOGY.to_string();
            }
        };

        if reply.is_empty() {
            tracing::warn!("completion succeeded but generated no content");
            return EMPTY_REPLY_APOLOGY.to_string();
        }

        self.clip(&reply)
    }

    /// Keep only the first `reply_char_limit` characters and mark the cut.
    /// The rest of the reply is dropped; we never split into multiple
    /// messages.
    fn clip(&self, reply: &str) -> String {
        if reply.chars().count() <= self.reply_char_limit {
            return reply.to_string();
        }

        let mut out: String = reply.chars().take(self.reply_char_limit).collect();
        out.push_str(TRUNCATION_NOTICE);
        out
    }
}
