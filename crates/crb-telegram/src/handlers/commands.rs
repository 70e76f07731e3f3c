use std::sync::Arc;

use teloxide::prelude::*;

use crb_core::{
    commands::{Command, CommandReply},
    domain::ChatId,
};

use crate::router::AppState;

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    // Unregistered tokens never appear in the platform command menu; if one
    // arrives anyway, drop it without a reply.
    let Some(cmd) = Command::parse(text) else {
        tracing::debug!(chat_id = msg.chat.id.0, "ignoring unregistered command");
        return Ok(());
    };

    let chat_id = ChatId(msg.chat.id.0);

    if cmd == Command::Start {
        let user_id = msg.from().map(|u| u.id.0);
        tracing::info!(user_id = ?user_id, "new user started the bot");
    }

    let outcome = match cmd.reply() {
        CommandReply::Static(body) => state.messenger.send_text(chat_id, body).await.map(|_| ()),
        CommandReply::OpenMenu => state.menu.open(chat_id).await,
    };

    if let Err(err) = outcome {
        tracing::error!(
            chat_id = chat_id.0,
            command = cmd.name(),
            error = %err,
            "failed to reply to command"
        );
    }

    Ok(())
}
