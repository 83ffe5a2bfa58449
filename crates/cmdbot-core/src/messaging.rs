use async_trait::async_trait;

use crate::{domain::ChatId, Result};

/// Cross-messenger port.
///
/// Telegram is the first implementation; the shape is small on purpose so
/// other adapters (and test doubles) can fit behind the same interface.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    /// Send a plain-text reply into a chat.
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
