use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::{ChatAction, InlineKeyboard},
    Result,
};

/// Cross-messenger port.
///
/// Telegram is the first implementation; the surface is exactly the outbound
/// operations the relay needs, so future adapters can fit behind it.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef>;

    async fn send_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<MessageRef>;

    /// Edit a previously sent message in place, optionally replacing its
    /// keyboard.
    async fn edit_text(
        &self,
        msg: MessageRef,
        text: &str,
        keyboard: Option<InlineKeyboard>,
    ) -> Result<()>;

    async fn send_chat_action(&self, chat_id: ChatId, action: ChatAction) -> Result<()>;

    /// Acknowledge a button press (clears the client-side spinner).
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;

    /// Register the command list the platform surfaces to users.
    async fn set_commands(&self, commands: &[(&'static str, &'static str)]) -> Result<()>;
}
