//! Error types for the bot core.
//!
//! [`SignerError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error: storage, messaging platform or handler.
#[derive(Error, Debug)]
pub enum SignerError {
    #[error("Database error: {0}")]
    Database(String),

    /// The messaging platform rejected or failed a request (permission, length, rate limit, network).
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Private message without a sender (should not happen on Telegram).
    #[error("Message has no sender")]
    NoSender,
}

/// Result type for core operations; uses [`SignerError`].
pub type Result<T> = std::result::Result<T, SignerError>;
