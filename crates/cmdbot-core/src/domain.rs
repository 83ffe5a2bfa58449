/// Chat user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Platform-agnostic view of an incoming chat message.
///
/// Adapter crates translate their SDK's message type into this; the lifecycle
/// of the underlying SDK object stays with the adapter.
#[derive(Clone, Debug)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub username: Option<String>,
    pub content: String,
}

impl InboundMessage {
    /// Sender identity for log lines: username when known, id otherwise.
    pub fn sender(&self) -> String {
        match &self.username {
            Some(name) => format!("@{name}"),
            None => format!("id:{}", self.user_id.0),
        }
    }
}
