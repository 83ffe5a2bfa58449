use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use cmdbot_core::{
    command::Commander,
    config::Config,
    messaging::MessagingPort,
    routing::{DirectRouter, MentionRouter},
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub direct: DirectRouter,
    pub mention: MentionRouter,
    pub messenger: Arc<dyn MessagingPort>,
    pub bot_username: String,
}

/// Build the client from the configured credentials and run the blocking
/// long-polling loop. Returns only when the dispatcher shuts down.
pub async fn run_polling(cfg: Arc<Config>, commander: Arc<Commander>) -> anyhow::Result<()> {
    // Telegram bot tokens are exactly "<appid>:<secret>".
    let bot = Bot::new(format!("{}:{}", cfg.appid, cfg.secret));

    let me = bot.get_me().await?;
    let bot_username = me.username().to_string();
    println!("cmdbot started: @{bot_username}");
    println!("Commands loaded: {}", commander.len());

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let state = Arc::new(AppState {
        direct: DirectRouter::new(commander),
        mention: MentionRouter::new(me.user.first_name.clone()),
        messenger,
        bot_username,
    });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// True when `text` contains `@username` as a standalone token.
///
/// Telegram usernames are case-insensitive, so the comparison is too.
pub fn mentions(text: &str, username: &str) -> bool {
    let needle = format!("@{}", username.to_lowercase());
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '!' | '?' | ':' | ';'))
        .any(|token| token == needle)
}
