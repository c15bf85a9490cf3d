//! Bot abstraction over the messaging platform.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation wraps teloxide. Tests substitute
//! a recording mock.

use async_trait::async_trait;
use rich_text::Span;

use crate::error::Result;
use crate::types::{Chat, ChatRef, Membership};

/// Platform calls the bot needs. Every call may fail with [`crate::SignerError::Bot`]
/// (permission revoked, text too long, rate limited, network).
#[async_trait]
pub trait Bot: Send + Sync {
    /// The bot's own user id.
    fn bot_user_id(&self) -> i64;

    /// Resolves a username or id to the chat it names.
    async fn resolve_chat(&self, reference: &ChatRef) -> Result<Chat>;

    /// The given user's standing in `chat_id`.
    async fn get_membership(&self, chat_id: i64, user_id: i64) -> Result<Membership>;

    /// Sends a message; `spans` may be empty.
    async fn send_message(&self, chat: &Chat, text: &str, spans: &[Span]) -> Result<()>;

    /// Replaces the text and formatting of a text message.
    async fn edit_message_text(
        &self,
        chat: &Chat,
        message_id: i32,
        text: &str,
        spans: &[Span],
    ) -> Result<()>;

    /// Replaces the caption and caption formatting of a media message.
    async fn edit_message_caption(
        &self,
        chat: &Chat,
        message_id: i32,
        caption: &str,
        spans: &[Span],
    ) -> Result<()>;
}
