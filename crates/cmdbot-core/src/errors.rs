/// Core error type for the bot.
///
/// Adapter crates should map their specific errors into this type so the bot
/// core can handle failures consistently. Config failures are fatal at
/// startup; command-dispatch failures are values (`command::Dispatch`), not
/// errors, and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("missing config entry: {0}")]
    MissingEntry(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
