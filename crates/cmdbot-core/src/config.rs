use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    command::CommandTable,
    errors::Error,
    Result,
};

/// Typed configuration for the bot, loaded once at startup from a JSON file
/// and never mutated afterwards.
///
/// File format:
///
/// ```json
/// {
///   "appid": "...",
///   "secret": "...",
///   "commands": {
///     "ping": { "execute": ["echo", "pong"], "response": "pong!" }
///   }
/// }
/// ```
///
/// `commands` may be omitted entirely.
#[derive(Clone, Debug)]
pub struct Config {
    pub appid: String,
    pub secret: String,
    pub commands: CommandTable,
}

impl Config {
    /// Load config from a JSON file.
    ///
    /// Fails with `Error::Io` when the file cannot be read and `Error::Json`
    /// when its content is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let doc: Value = serde_json::from_str(&text)?;
        Self::from_value(&doc)
    }

    /// Build a config from an already-parsed JSON document.
    pub fn from_value(doc: &Value) -> Result<Self> {
        let appid: String = require_entry(doc, "appid")?;
        let secret: String = require_entry(doc, "secret")?;
        let commands: CommandTable = optional_entry(doc, "commands")?.unwrap_or_default();

        Ok(Self {
            appid,
            secret,
            commands,
        })
    }
}

/// Get a required config entry by key.
///
/// Keys are always passed explicitly; an absent or empty value fails with
/// `Error::MissingEntry` so startup never proceeds with partial credentials.
fn require_entry<T: DeserializeOwned>(doc: &Value, key: &str) -> Result<T> {
    match doc.get(key) {
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(Error::MissingEntry(key.to_string()))
        }
        Some(v) => Ok(serde_json::from_value(v.clone())?),
        None => Err(Error::MissingEntry(key.to_string())),
    }
}

/// Get an optional config entry by key, `None` when absent.
fn optional_entry<T: DeserializeOwned>(doc: &Value, key: &str) -> Result<Option<T>> {
    match doc.get(key) {
        Some(v) => Ok(Some(serde_json::from_value(v.clone())?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_full_config() {
        let doc = json!({
            "appid": "A",
            "secret": "S",
            "commands": {
                "ping": { "execute": ["echo", "pong"], "response": "pong!" }
            }
        });

        let cfg = Config::from_value(&doc).unwrap();
        assert_eq!(cfg.appid, "A");
        assert_eq!(cfg.secret, "S");
        assert_eq!(cfg.commands.len(), 1);
        let ping = &cfg.commands["ping"];
        assert_eq!(ping.execute.as_deref(), Some(&["echo".to_string(), "pong".to_string()][..]));
        assert_eq!(ping.response.as_deref(), Some("pong!"));
        assert_eq!(ping.shell, None);
    }

    #[test]
    fn missing_appid_is_a_missing_entry() {
        let doc = json!({ "secret": "S" });
        match Config::from_value(&doc) {
            Err(Error::MissingEntry(key)) => assert_eq!(key, "appid"),
            other => panic!("expected MissingEntry, got {other:?}"),
        }
    }

    #[test]
    fn missing_secret_is_a_missing_entry() {
        let doc = json!({ "appid": "A" });
        match Config::from_value(&doc) {
            Err(Error::MissingEntry(key)) => assert_eq!(key, "secret"),
            other => panic!("expected MissingEntry, got {other:?}"),
        }
    }

    #[test]
    fn empty_credential_counts_as_missing() {
        let doc = json!({ "appid": "  ", "secret": "S" });
        match Config::from_value(&doc) {
            Err(Error::MissingEntry(key)) => assert_eq!(key, "appid"),
            other => panic!("expected MissingEntry, got {other:?}"),
        }
    }

    #[test]
    fn omitted_commands_defaults_to_empty_table() {
        let doc = json!({ "appid": "A", "secret": "S" });
        let cfg = Config::from_value(&doc).unwrap();
        assert!(cfg.commands.is_empty());
    }

    #[test]
    fn malformed_file_is_a_json_error() {
        let path = std::env::temp_dir().join(format!("cmdbot-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        match Config::load(&path) {
            Err(Error::Json(_)) => {}
            other => panic!("expected Json error, got {other:?}"),
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let path = std::env::temp_dir().join(format!("cmdbot-absent-{}.json", std::process::id()));
        match Config::load(&path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn commands_round_trip_without_coercing_defaults() {
        let original = json!({
            "ping": { "execute": ["echo", "pong"], "response": "pong!" },
            "bare": { "execute": ["true"] },
            "sh": { "execute": ["echo hi"], "shell": true }
        });
        let doc = json!({ "appid": "A", "secret": "S", "commands": original });

        let cfg = Config::from_value(&doc).unwrap();
        let reserialized = serde_json::to_value(&cfg.commands).unwrap();
        assert_eq!(reserialized, doc["commands"]);
    }
}
