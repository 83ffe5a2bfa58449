//! Telegram update handlers.
//!
//! Each handler translates the teloxide message into the core's inbound
//! model and forwards it to the matching router. Dispatch failures never
//! escape here; only reply-send errors are logged.

use std::sync::Arc;

use teloxide::prelude::*;

use cmdbot_core::domain::{ChatId, InboundMessage, UserId};

use crate::router::{mentions, AppState};

mod direct;
mod mention;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(inbound) = to_inbound(&msg) else {
        return Ok(());
    };

    if msg.chat.is_private() {
        return direct::handle_direct(inbound, state).await;
    }

    if mentions(&inbound.content, &state.bot_username) {
        return mention::handle_mention(inbound, state).await;
    }

    Ok(())
}

fn to_inbound(msg: &Message) -> Option<InboundMessage> {
    let user = msg.from()?;
    let content = msg.text()?.to_string();

    Some(InboundMessage {
        chat_id: ChatId(msg.chat.id.0),
        user_id: UserId(user.id.0 as i64),
        username: user.username.clone(),
        content,
    })
}
