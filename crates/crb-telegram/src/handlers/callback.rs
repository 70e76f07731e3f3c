use std::sync::Arc;

use teloxide::prelude::*;

use crb_core::{
    domain::{ChatId, MessageId, MessageRef, UserId},
    messaging::types::ButtonPress,
};

use crate::router::AppState;

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(message) = q.message.as_ref() else {
        // No originating message means nothing to edit; just clear the
        // client-side spinner.
        if let Err(err) = state.messenger.answer_callback(&q.id).await {
            tracing::debug!(error = %err, "failed to answer detached button press");
        }
        return Ok(());
    };

    let chat_id = ChatId(message.chat.id.0);
    let press = ButtonPress {
        callback_id: q.id.clone(),
        chat_id,
        user_id: UserId(q.from.id.0 as i64),
        username: q.from.username.clone(),
        data: q.data.clone().unwrap_or_default(),
        message: Some(MessageRef {
            chat_id,
            message_id: MessageId(message.id.0),
        }),
    };

    if let Err(err) = state.menu.handle_press(&press).await {
        tracing::error!(
            chat_id = press.chat_id.0,
            user_id = press.user_id.0,
            error = %err,
            "failed to handle menu button"
        );
    }

    Ok(())
}
