//! Conversion between teloxide `MessageEntity` and [`Span`].

use rich_text::{MentionedUser, Span, SpanKind};
use teloxide::types::{CustomEmojiId, MessageEntity, MessageEntityKind, User, UserId};
use tracing::warn;

/// Converts an entity to a span. Returns None for entity kinds the bot does not know.
pub fn span_from_entity(entity: &MessageEntity) -> Option<Span> {
    let (offset, length) = (entity.offset, entity.length);
    let plain = |kind| Span::new(kind, offset, length);
    let span = match &entity.kind {
        MessageEntityKind::Mention => plain(SpanKind::Mention),
        MessageEntityKind::Hashtag => plain(SpanKind::Hashtag),
        MessageEntityKind::Cashtag => plain(SpanKind::Cashtag),
        MessageEntityKind::BotCommand => plain(SpanKind::BotCommand),
        MessageEntityKind::Url => plain(SpanKind::Url),
        MessageEntityKind::Email => plain(SpanKind::Email),
        MessageEntityKind::PhoneNumber => plain(SpanKind::PhoneNumber),
        MessageEntityKind::Bold => plain(SpanKind::Bold),
        MessageEntityKind::Italic => plain(SpanKind::Italic),
        MessageEntityKind::Underline => plain(SpanKind::Underline),
        MessageEntityKind::Strikethrough => plain(SpanKind::Strikethrough),
        MessageEntityKind::Spoiler => plain(SpanKind::Spoiler),
        MessageEntityKind::Blockquote => plain(SpanKind::Blockquote),
        MessageEntityKind::ExpandableBlockquote => plain(SpanKind::ExpandableBlockquote),
        MessageEntityKind::Code => plain(SpanKind::Code),
        MessageEntityKind::Pre { language } => Span::pre(offset, length, language.clone()),
        MessageEntityKind::TextLink { url } => Span::text_link(offset, length, url.as_str()),
        MessageEntityKind::TextMention { user } => Span::text_mention(
            offset,
            length,
            MentionedUser {
                id: user.id.0,
                is_bot: user.is_bot,
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
                username: user.username.clone(),
            },
        ),
        MessageEntityKind::CustomEmoji { custom_emoji_id } => {
            Span::custom_emoji(offset, length, custom_emoji_id.0.clone())
        }
        #[allow(unreachable_patterns)]
        other => {
            warn!(kind = ?other, offset, "Ignoring unknown entity kind");
            return None;
        }
    };
    Some(span)
}

pub fn spans_from_entities(entities: &[MessageEntity]) -> Vec<Span> {
    entities.iter().filter_map(span_from_entity).collect()
}

/// Converts a span back to an entity. Returns None when a required extension field is missing
/// or a text_link URL does not parse.
pub fn entity_from_span(span: &Span) -> Option<MessageEntity> {
    let kind = match span.kind {
        SpanKind::Mention => MessageEntityKind::Mention,
        SpanKind::Hashtag => MessageEntityKind::Hashtag,
        SpanKind::Cashtag => MessageEntityKind::Cashtag,
        SpanKind::BotCommand => MessageEntityKind::BotCommand,
        SpanKind::Url => MessageEntityKind::Url,
        SpanKind::Email => MessageEntityKind::Email,
        SpanKind::PhoneNumber => MessageEntityKind::PhoneNumber,
        SpanKind::Bold => MessageEntityKind::Bold,
        SpanKind::Italic => MessageEntityKind::Italic,
        SpanKind::Underline => MessageEntityKind::Underline,
        SpanKind::Strikethrough => MessageEntityKind::Strikethrough,
        SpanKind::Spoiler => MessageEntityKind::Spoiler,
        SpanKind::Blockquote => MessageEntityKind::Blockquote,
        SpanKind::ExpandableBlockquote => MessageEntityKind::ExpandableBlockquote,
        SpanKind::Code => MessageEntityKind::Code,
        SpanKind::Pre => MessageEntityKind::Pre {
            language: span.language.clone(),
        },
        SpanKind::TextLink => {
            let raw = span.url.as_deref()?;
            match reqwest::Url::parse(raw) {
                Ok(url) => MessageEntityKind::TextLink { url },
                Err(e) => {
                    warn!(url = %raw, error = %e, "Dropping text_link span with invalid URL");
                    return None;
                }
            }
        }
        SpanKind::TextMention => {
            let user = span.mentioned_user.as_ref()?;
            MessageEntityKind::TextMention {
                user: User {
                    id: UserId(user.id),
                    is_bot: user.is_bot,
                    first_name: user.first_name.clone(),
                    last_name: user.last_name.clone(),
                    username: user.username.clone(),
                    language_code: None,
                    is_premium: false,
                    added_to_attachment_menu: false,
                },
            }
        }
        SpanKind::CustomEmoji => MessageEntityKind::CustomEmoji {
            custom_emoji_id: CustomEmojiId(span.custom_emoji_id.clone()?),
        },
    };
    Some(MessageEntity {
        kind,
        offset: span.offset,
        length: span.length,
    })
}

pub fn entities_from_spans(spans: &[Span]) -> Vec<MessageEntity> {
    spans
        .iter()
        .filter_map(|span| {
            let entity = entity_from_span(span);
            if entity.is_none() {
                warn!(kind = ?span.kind, offset = span.offset, "Span dropped on conversion");
            }
            entity
        })
        .collect()
}
