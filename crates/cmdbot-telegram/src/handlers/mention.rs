use std::sync::Arc;

use teloxide::prelude::*;

use cmdbot_core::domain::InboundMessage;

use crate::router::AppState;

pub async fn handle_mention(msg: InboundMessage, state: Arc<AppState>) -> ResponseResult<()> {
    if let Err(e) = state.mention.handle(&msg, state.messenger.as_ref()).await {
        tracing::warn!(chat = msg.chat_id.0, "failed to send reply: {e}");
    }

    Ok(())
}
