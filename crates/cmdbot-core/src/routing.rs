use std::sync::Arc;

use crate::{
    command::{Commander, Dispatch},
    domain::InboundMessage,
    messaging::MessagingPort,
    Result,
};

/// Reply sent when dispatch fails for any reason. The failure taxonomy stays
/// internal; logs carry the distinction.
pub const FAILURE_REPLY: &str = "Failed to execute command.";

/// Reply sent on success when the command has no configured response text.
pub const SUCCESS_REPLY: &str = "Executed command successfully.";

/// Routes direct messages: the message text (outer whitespace trimmed) is the
/// command name, and the reply reports the dispatch outcome.
#[derive(Clone)]
pub struct DirectRouter {
    commander: Arc<Commander>,
}

impl DirectRouter {
    pub fn new(commander: Arc<Commander>) -> Self {
        Self { commander }
    }

    /// Compose the reply for an inbound direct message.
    ///
    /// Pure except for the process launch inside dispatch; never fails, so a
    /// broken command can not take down the message handler.
    pub fn reply_for(&self, msg: &InboundMessage) -> String {
        let name = msg.content.trim();

        match self.commander.dispatch(name) {
            Dispatch::Success(response) => {
                let reply = if response.is_empty() {
                    SUCCESS_REPLY.to_string()
                } else {
                    response
                };
                tracing::info!(
                    from = %msg.sender(),
                    command = name,
                    reply = %reply,
                    "executed command"
                );
                reply
            }
            outcome => {
                tracing::info!(
                    from = %msg.sender(),
                    command = name,
                    outcome = ?outcome,
                    "failed command"
                );
                FAILURE_REPLY.to_string()
            }
        }
    }

    pub async fn handle(&self, msg: &InboundMessage, messenger: &dyn MessagingPort) -> Result<()> {
        let reply = self.reply_for(msg);
        messenger.send_text(msg.chat_id, &reply).await
    }
}

/// Routes mention messages: no command table, just a static acknowledgment
/// echoing the content and the bot's display name.
#[derive(Clone)]
pub struct MentionRouter {
    bot_name: String,
}

impl MentionRouter {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
        }
    }

    pub fn reply_for(&self, msg: &InboundMessage) -> String {
        tracing::info!(from = %msg.sender(), "mentioned by user");
        format!("{} received: {}", self.bot_name, msg.content)
    }

    pub async fn handle(&self, msg: &InboundMessage, messenger: &dyn MessagingPort) -> Result<()> {
        let reply = self.reply_for(msg);
        messenger.send_text(msg.chat_id, &reply).await
    }
}
