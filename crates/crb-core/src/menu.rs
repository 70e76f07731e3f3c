//! Two-level inline menu: one root screen, five topic screens, rendered by
//! editing the same message card in place.

use std::sync::Arc;

use crate::{
    catalog::{self, Topic},
    domain::ChatId,
    messaging::{
        port::MessagingPort,
        types::{ButtonPress, InlineButton, InlineKeyboard},
    },
    Result,
};

/// Callback data on the topic screens' back button.
pub const BACK_CALLBACK: &str = "back_to_menu";

pub const BACK_LABEL: &str = "◀️ Back to menu";

/// Sent as a fresh message when the in-place edit fails.
pub const MENU_REOPEN_HINT: &str = "Something went wrong. Please open the menu again: /menu";

/// A transition decoded from button callback data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Show(Topic),
    Back,
}

impl MenuAction {
    /// Unrecognized data yields `None`; the press is then ignored entirely.
    pub fn parse(data: &str) -> Option<MenuAction> {
        if data == BACK_CALLBACK {
            return Some(MenuAction::Back);
        }
        Topic::from_key(data).map(MenuAction::Show)
    }
}

/// One rendered menu state. Rebuilt from the catalog on every transition;
/// nothing is stored between presses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuScreen {
    pub text: &'static str,
    pub keyboard: InlineKeyboard,
}

pub fn render_root() -> MenuScreen {
    MenuScreen {
        text: catalog::MENU_PROMPT,
        keyboard: root_keyboard(),
    }
}

pub fn render_topic(topic: Topic) -> MenuScreen {
    MenuScreen {
        text: topic.text(),
        keyboard: topic_keyboard(),
    }
}

/// Five topic buttons, two per row except the last.
fn root_keyboard() -> InlineKeyboard {
    let button = |t: Topic| InlineButton::new(t.label(), t.key());
    InlineKeyboard {
        rows: vec![
            vec![button(Topic::About), button(Topic::Help)],
            vec![button(Topic::Examples), button(Topic::Categories)],
            vec![button(Topic::Settings)],
        ],
    }
}

fn topic_keyboard() -> InlineKeyboard {
    InlineKeyboard {
        rows: vec![vec![InlineButton::new(BACK_LABEL, BACK_CALLBACK)]],
    }
}

pub struct MenuService {
    messenger: Arc<dyn MessagingPort>,
}

impl MenuService {
    pub fn new(messenger: Arc<dyn MessagingPort>) -> Self {
        Self { messenger }
    }

    /// Send a fresh root menu card.
    pub async fn open(&self, chat_id: ChatId) -> Result<()> {
        let screen = render_root();
        self.messenger
            .send_keyboard(chat_id, screen.text, screen.keyboard)
            .await?;
        Ok(())
    }

    /// Handle one button press: acknowledge it, then edit the card in place.
    ///
    /// If the edit fails (message deleted, content unchanged, permissions),
    /// the user gets a fresh message pointing back at /menu instead of a
    /// crashed handler.
    pub async fn handle_press(&self, press: &ButtonPress) -> Result<()> {
        if let Err(err) = self.messenger.answer_callback(&press.callback_id).await {
            tracing::debug!(error = %err, "failed to answer button press");
        }

        let Some(action) = MenuAction::parse(&press.data) else {
            return Ok(());
        };
        let Some(target) = press.message else {
            return Ok(());
        };

        let screen = match action {
            MenuAction::Show(topic) => render_topic(topic),
            MenuAction::Back => render_root(),
        };

        if let Err(err) = self
            .messenger
            .edit_text(target, screen.text, Some(screen.keyboard))
            .await
        {
            tracing::warn!(
                chat_id = press.chat_id.0,
                user_id = press.user_id.0,
                username = ?press.username,
                error = %err,
                "menu edit failed, asking the user to re-open"
            );
            self.messenger
                .send_text(press.chat_id, MENU_REOPEN_HINT)
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        domain::{MessageId, MessageRef, UserId},
        errors::Error,
        messaging::types::ChatAction,
    };

    #[test]
    fn root_layout_is_two_two_one() {
        let screen = render_root();
        assert_eq!(screen.text, catalog::MENU_PROMPT);

        let rows = &screen.keyboard.rows;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 2);
        assert_eq!(rows[2].len(), 1);

        let keys: Vec<&str> = rows
            .iter()
            .flatten()
            .map(|b| b.callback_data.as_str())
            .collect();
        assert_eq!(
            keys,
            vec!["about", "help", "examples", "categories", "settings"]
        );
    }

    #[test]
    fn topic_screens_return_the_catalog_entry_verbatim() {
        for topic in Topic::ALL {
            let screen = render_topic(topic);
            assert_eq!(screen.text, topic.text());
            assert_eq!(screen.keyboard.rows.len(), 1);
            assert_eq!(screen.keyboard.rows[0].len(), 1);
            assert_eq!(screen.keyboard.rows[0][0].callback_data, BACK_CALLBACK);
        }
    }

    #[test]
    fn parses_transitions() {
        assert_eq!(MenuAction::parse("about"), Some(MenuAction::Show(Topic::About)));
        assert_eq!(MenuAction::parse(BACK_CALLBACK), Some(MenuAction::Back));
        assert_eq!(MenuAction::parse("bogus"), None);
        assert_eq!(MenuAction::parse(""), None);
    }

    #[derive(Default)]
    struct RecordingMessenger {
        fail_edits: bool,
        events: Mutex<Vec<String>>,
    }

    impl RecordingMessenger {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[async_trait]
    impl MessagingPort for RecordingMessenger {
        async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef> {
            self.push(format!("send:{text}"));
            Ok(MessageRef {
                chat_id,
                message_id: MessageId(1),
            })
        }

        async fn send_keyboard(
            &self,
            chat_id: ChatId,
            text: &str,
            keyboard: InlineKeyboard,
        ) -> Result<MessageRef> {
            self.push(format!("send_keyboard:{text}:{}", keyboard.rows.len()));
            Ok(MessageRef {
                chat_id,
                message_id: MessageId(1),
            })
        }

        async fn edit_text(
            &self,
            _msg: MessageRef,
            text: &str,
            _keyboard: Option<InlineKeyboard>,
        ) -> Result<()> {
            if self.fail_edits {
                return Err(Error::External("message is not modified".to_string()));
            }
            self.push(format!("edit:{text}"));
            Ok(())
        }

        async fn send_chat_action(&self, _chat_id: ChatId, _action: ChatAction) -> Result<()> {
            Ok(())
        }

        async fn answer_callback(&self, _callback_id: &str) -> Result<()> {
            self.push("answer".to_string());
            Ok(())
        }

        async fn set_commands(
            &self,
            _commands: &[(&'static str, &'static str)],
        ) -> Result<()> {
            Ok(())
        }
    }

    fn press(data: &str) -> ButtonPress {
        let chat_id = ChatId(7);
        ButtonPress {
            callback_id: "cb".to_string(),
            chat_id,
            user_id: UserId(42),
            username: None,
            data: data.to_string(),
            message: Some(MessageRef {
                chat_id,
                message_id: MessageId(99),
            }),
        }
    }

    #[tokio::test]
    async fn press_edits_the_card_in_place() {
        let messenger = Arc::new(RecordingMessenger::default());
        let menu = MenuService::new(messenger.clone());

        menu.handle_press(&press("about")).await.unwrap();

        assert_eq!(
            messenger.events(),
            vec!["answer".to_string(), format!("edit:{}", Topic::About.text())]
        );
    }

    #[tokio::test]
    async fn back_returns_to_the_root_screen() {
        let messenger = Arc::new(RecordingMessenger::default());
        let menu = MenuService::new(messenger.clone());

        menu.handle_press(&press(BACK_CALLBACK)).await.unwrap();

        assert_eq!(
            messenger.events(),
            vec!["answer".to_string(), format!("edit:{}", catalog::MENU_PROMPT)]
        );
    }

    #[tokio::test]
    async fn unknown_data_is_a_pass_through() {
        let messenger = Arc::new(RecordingMessenger::default());
        let menu = MenuService::new(messenger.clone());

        menu.handle_press(&press("bogus")).await.unwrap();

        // Acknowledged, but neither edited nor replaced.
        assert_eq!(messenger.events(), vec!["answer".to_string()]);
    }

    #[tokio::test]
    async fn failed_edit_falls_back_to_a_fresh_hint() {
        let messenger = Arc::new(RecordingMessenger {
            fail_edits: true,
            ..Default::default()
        });
        let menu = MenuService::new(messenger.clone());

        menu.handle_press(&press(BACK_CALLBACK)).await.unwrap();

        assert_eq!(
            messenger.events(),
            vec!["answer".to_string(), format!("send:{MENU_REOPEN_HINT}")]
        );
    }
}
