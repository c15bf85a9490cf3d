//! Conversion of teloxide users, chats and messages into core types.

use signer_core::{Chat, ChatKind, ContentKind, Message, ToCoreMessage, ToCoreUser, User};

use super::entities::spans_from_entities;

/// Telegram user → core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram chat → core [`Chat`].
pub fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    let kind = if chat.is_channel() {
        ChatKind::Channel
    } else if chat.is_supergroup() {
        ChatKind::Supergroup
    } else if chat.is_group() {
        ChatKind::Group
    } else {
        ChatKind::Private
    };
    Chat {
        id: chat.id.0,
        kind,
        title: chat.title().map(str::to_string),
        username: chat.username().map(str::to_string),
    }
}

/// Telegram message or channel post → core [`Message`]. Text messages carry their body and
/// entities; captionable media carry the caption and caption entities.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        let (content_kind, text, entities) = if let Some(text) = msg.text() {
            (ContentKind::Text, text, msg.entities().unwrap_or_default())
        } else if self.is_captionable_media() {
            (
                ContentKind::Media,
                msg.caption().unwrap_or_default(),
                msg.caption_entities().unwrap_or_default(),
            )
        } else {
            (ContentKind::Other, "", &[][..])
        };

        Message {
            id: msg.id.0,
            user: msg.from.as_ref().map(|u| TelegramUserWrapper(u).to_core()),
            chat: core_chat(&msg.chat),
            content_kind,
            text: text.to_string(),
            spans: spans_from_entities(entities),
            media_group_id: msg.media_group_id().map(|id| id.to_string()),
            created_at: msg.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Photo, video, document, audio or animation.
    fn is_captionable_media(&self) -> bool {
        let msg = self.0;
        msg.photo().is_some()
            || msg.video().is_some()
            || msg.document().is_some()
            || msg.audio().is_some()
            || msg.animation().is_some()
    }
}
