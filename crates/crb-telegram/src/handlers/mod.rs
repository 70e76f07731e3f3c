//! Telegram update handlers.
//!
//! Each handler is a thin adapter: it maps teloxide types to core types,
//! calls the matching core service, and logs failures with enough context to
//! diagnose after the fact.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};

use crate::router::AppState;

mod callback;
mod commands;
mod text;

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    callback::handle_callback(q, state).await
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        tracing::warn!(chat_id = msg.chat.id.0, "received a message without text");
        return Ok(());
    };

    if text.starts_with('/') {
        return commands::handle_command(msg, state).await;
    }

    text::handle_text(msg, state).await
}
