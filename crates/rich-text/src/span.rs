//! Formatting span model.

use serde::{Deserialize, Serialize};

/// Kind of a formatting span, one-to-one with Telegram `MessageEntity.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Blockquote,
    ExpandableBlockquote,
    Code,
    /// Code block; `language` may carry a hint.
    Pre,
    /// Clickable text; `url` is required.
    TextLink,
    /// Mention of a user without username; `mentioned_user` is required.
    TextMention,
    /// `custom_emoji_id` is required.
    CustomEmoji,
}

/// User referenced by a [`SpanKind::TextMention`] span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionedUser {
    pub id: u64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// One formatting span. `offset` and `length` are UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub kind: SpanKind,
    pub offset: usize,
    pub length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentioned_user: Option<MentionedUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
}

impl Span {
    /// Span without extension fields (bold, italic, url, ...).
    pub fn new(kind: SpanKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            mentioned_user: None,
            language: None,
            custom_emoji_id: None,
        }
    }

    pub fn text_link(offset: usize, length: usize, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(SpanKind::TextLink, offset, length)
        }
    }

    pub fn text_mention(offset: usize, length: usize, user: MentionedUser) -> Self {
        Self {
            mentioned_user: Some(user),
            ..Self::new(SpanKind::TextMention, offset, length)
        }
    }

    pub fn pre(offset: usize, length: usize, language: Option<String>) -> Self {
        Self {
            language,
            ..Self::new(SpanKind::Pre, offset, length)
        }
    }

    pub fn custom_emoji(offset: usize, length: usize, custom_emoji_id: impl Into<String>) -> Self {
        Self {
            custom_emoji_id: Some(custom_emoji_id.into()),
            ..Self::new(SpanKind::CustomEmoji, offset, length)
        }
    }

    /// Copy of this span moved right by `delta` UTF-16 units.
    pub fn shifted(&self, delta: usize) -> Self {
        Self {
            offset: self.offset + delta,
            ..self.clone()
        }
    }

    /// First UTF-16 unit after the span.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_keeps_extension_fields() {
        let span = Span::text_link(3, 4, "https://example.com");
        let moved = span.shifted(10);
        assert_eq!(moved.offset, 13);
        assert_eq!(moved.length, 4);
        assert_eq!(moved.url.as_deref(), Some("https://example.com"));
        assert_eq!(span.offset, 3);
    }

    #[test]
    fn test_serde_omits_absent_fields() {
        let json = serde_json::to_string(&Span::new(SpanKind::Bold, 6, 5)).unwrap();
        assert_eq!(json, r#"{"kind":"bold","offset":6,"length":5}"#);
    }

    #[test]
    fn test_serde_reads_extension_fields() {
        let span: Span = serde_json::from_str(
            r#"{"kind":"custom_emoji","offset":0,"length":2,"custom_emoji_id":"5368324170671202286"}"#,
        )
        .unwrap();
        assert_eq!(span, Span::custom_emoji(0, 2, "5368324170671202286"));
        assert_eq!(span.end(), 2);
    }
}
