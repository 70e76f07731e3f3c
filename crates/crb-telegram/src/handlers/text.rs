use std::sync::Arc;

use teloxide::prelude::*;

use crb_core::{domain::ChatId, messaging::types::ChatAction};

use crate::router::AppState;

pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text().map(|s| s.to_string()) else {
        return Ok(());
    };
    if text.trim().is_empty() {
        return Ok(());
    }

    let chat_id = ChatId(msg.chat.id.0);
    let user_id = msg.from().map(|u| u.id.0);
    let username = msg
        .from()
        .and_then(|u| u.username.clone())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info!(user_id = ?user_id, username = %username, "received a question");

    // Best-effort typing indicator while the completion runs.
    if let Err(err) = state
        .messenger
        .send_chat_action(chat_id, ChatAction::Typing)
        .await
    {
        tracing::debug!(chat_id = chat_id.0, error = %err, "failed to send typing action");
    }

    // The relay substitutes apologies for upstream failures, so this is
    // always sendable text.
    let reply = state.relay.complete(&text).await;

    match state.messenger.send_text(chat_id, &reply).await {
        Ok(_) => {
            tracing::info!(user_id = ?user_id, username = %username, "sent a reply");
        }
        Err(err) => {
            tracing::error!(
                user_id = ?user_id,
                username = %username,
                error = %err,
                "failed to send reply"
            );
        }
    }

    Ok(())
}
