//! # signer-core
//!
//! Core types and traits for the channel signature bot: [`Bot`] (the messaging platform),
//! [`Handler`], message/chat/user types, errors, and tracing initialization.
//! Transport-agnostic; the Telegram implementation lives in the `signature-bot` crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, Result, SignerError};
pub use logger::init_tracing;
pub use types::{
    Chat, ChatKind, ChatRef, ContentKind, Handler, HandlerResponse, Membership, Message,
    ToCoreMessage, ToCoreUser, User,
};

pub use rich_text::{RichText, Span, SpanKind};
