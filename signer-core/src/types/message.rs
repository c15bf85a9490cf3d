//! Message type for the core model.

use chrono::{DateTime, Utc};
use rich_text::{RichText, Span};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// What carries the message's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    /// Plain text message; `text` is the body.
    Text,
    /// Photo, video, document, audio or animation; `text` is the caption (possibly empty).
    Media,
    /// Anything else (stickers, polls, service messages); `text` is empty.
    Other,
}

/// A single message with its sender, chat, and formatted text (body or caption).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    /// Sender; None for channel posts.
    pub user: Option<User>,
    pub chat: Chat,
    pub content_kind: ContentKind,
    pub text: String,
    /// Formatting of `text` (entities for text, caption entities for media).
    pub spans: Vec<Span>,
    /// Set when the message belongs to an album.
    pub media_group_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// The message's text and spans as a mergeable fragment.
    pub fn rich_text(&self) -> RichText {
        RichText::new(self.text.clone(), self.spans.clone())
    }

    pub fn sender_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}
