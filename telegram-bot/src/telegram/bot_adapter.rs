//! Wraps teloxide::Bot and implements [`signer_core::Bot`]. Production code talks to Telegram;
//! tests substitute another Bot impl.

use async_trait::async_trait;
use rich_text::Span;
use signer_core::{Bot as CoreBot, Chat, ChatKind, ChatRef, Membership, Result, SignerError};
use teloxide::{
    prelude::*,
    types::{ChatFullInfo, LinkPreviewOptions, MessageId, Recipient},
};

use super::entities::entities_from_spans;

fn bot_error(e: teloxide::RequestError) -> SignerError {
    SignerError::Bot(e.to_string())
}

fn core_chat_info(info: &ChatFullInfo) -> Chat {
    let kind = if info.is_channel() {
        ChatKind::Channel
    } else if info.is_supergroup() {
        ChatKind::Supergroup
    } else if info.is_group() {
        ChatKind::Group
    } else {
        ChatKind::Private
    };
    Chat {
        id: info.id.0,
        kind,
        title: info.title().map(str::to_string),
        username: info.username().map(str::to_string),
    }
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
    user_id: i64,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot and the bot's own user id (from getMe).
    pub fn new(bot: teloxide::Bot, user_id: i64) -> Self {
        Self { bot, user_id }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    fn bot_user_id(&self) -> i64 {
        self.user_id
    }

    async fn resolve_chat(&self, reference: &ChatRef) -> Result<Chat> {
        let recipient = match reference {
            ChatRef::Username(name) => Recipient::ChannelUsername(name.clone()),
            ChatRef::Id(id) => Recipient::Id(ChatId(*id)),
        };
        let info = self.bot.get_chat(recipient).await.map_err(bot_error)?;
        Ok(core_chat_info(&info))
    }

    async fn get_membership(&self, chat_id: i64, user_id: i64) -> Result<Membership> {
        let member = self
            .bot
            .get_chat_member(ChatId(chat_id), UserId(user_id as u64))
            .await
            .map_err(bot_error)?;
        Ok(Membership {
            can_edit_messages: member.kind.can_edit_messages(),
        })
    }

    async fn send_message(&self, chat: &Chat, text: &str, spans: &[Span]) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), text.to_string());
        let request = if spans.is_empty() {
            request
        } else {
            request.entities(entities_from_spans(spans))
        };
        request.await.map_err(bot_error)?;
        Ok(())
    }

    async fn edit_message_text(
        &self,
        chat: &Chat,
        message_id: i32,
        text: &str,
        spans: &[Span],
    ) -> Result<()> {
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(message_id), text.to_string())
            .entities(entities_from_spans(spans))
            .link_preview_options(LinkPreviewOptions {
                is_disabled: true,
                url: None,
                prefer_small_media: false,
                prefer_large_media: false,
                show_above_text: false,
            })
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn edit_message_caption(
        &self,
        chat: &Chat,
        message_id: i32,
        caption: &str,
        spans: &[Span],
    ) -> Result<()> {
        self.bot
            .edit_message_caption(ChatId(chat.id), MessageId(message_id))
            .caption(caption.to_string())
            .caption_entities(entities_from_spans(spans))
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}
