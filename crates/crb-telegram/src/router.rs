use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use crb_core::{
    commands::Command, config::Config, menu::MenuService, messaging::port::MessagingPort,
    model::client::CompletionClient, relay::CompletionRelay,
};

use crate::handlers;
use crate::TelegramMessenger;

/// Everything a handler needs, injected at construction time. There is no
/// other shared state; all of it is read-only for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<CompletionRelay>,
    pub menu: Arc<MenuService>,
    pub messenger: Arc<dyn MessagingPort>,
}

pub async fn run_polling(cfg: Arc<Config>, client: Arc<dyn CompletionClient>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        tracing::info!(username = me.username(), "bot connected");
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    // Surface the command list in the platform UI. Failing here is a startup
    // failure and falls into the supervisor's retry path.
    messenger
        .set_commands(&Command::descriptions())
        .await
        .map_err(|e| anyhow::anyhow!("failed to register commands: {e}"))?;

    // Updates queued while the process was down are stale; drop them before
    // the first poll.
    bot.delete_webhook().drop_pending_updates(true).await?;

    let state = Arc::new(AppState {
        relay: Arc::new(CompletionRelay::new(&cfg, client)),
        menu: Arc::new(MenuService::new(messenger.clone())),
        messenger,
    });

    tracing::info!("bot started, waiting for updates (Ctrl+C to stop)");

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
