//! Core domain + application logic for the command bot.
//!
//! This crate is intentionally framework-agnostic. The chat platform lives
//! behind a port (trait) implemented in the adapter crate.

pub mod command;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;
pub mod routing;

pub use errors::{Error, Result};
