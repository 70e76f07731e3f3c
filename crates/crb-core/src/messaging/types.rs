use crate::domain::{ChatId, MessageRef, UserId};

/// Inline keyboard attached below a message, row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// Outgoing "chat action" (typing indicator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
}

/// A button press delivered by the platform.
///
/// `message` is the menu card the button hangs off; it is absent when the
/// original message is no longer available (e.g. too old), in which case
/// there is nothing to edit.
#[derive(Clone, Debug)]
pub struct ButtonPress {
    pub callback_id: String,
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub username: Option<String>,
    pub data: String,
    pub message: Option<MessageRef>,
}
