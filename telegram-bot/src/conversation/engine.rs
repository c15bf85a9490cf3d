//! Admin conversation state machine.
//!
//! `/add`, `/edit` and `/delete` start a flow (replacing any flow in progress); the admin's next
//! non-command message is the answer to the current step. The state is taken out of the session
//! before a step runs and written back only when the step yields a next state, so any failure,
//! including an error returned with `?`, leaves the admin IDLE.

use std::sync::Arc;

use rich_text::{merge, Direction, RichText};
use signer_core::{Bot, Chat, ChatRef, ContentKind, HandlerError, Message, Result};
use storage::SignatureStore;
use tracing::{info, instrument, warn};

use super::commands::Command;
use super::failure::{Flow, FlowFailure};
use super::session::SessionStore;
use super::state::ConversationState;
use super::texts;

/// Replies for one step and the state to continue in (None = IDLE).
struct Step {
    replies: Vec<RichText>,
    next: Option<ConversationState>,
}

impl Step {
    fn done(reply: impl Into<RichText>) -> Self {
        Self {
            replies: vec![reply.into()],
            next: None,
        }
    }

    fn then(reply: impl Into<RichText>, next: ConversationState) -> Self {
        Self {
            replies: vec![reply.into()],
            next: Some(next),
        }
    }
}

pub struct ConversationEngine {
    bot: Arc<dyn Bot>,
    store: Arc<dyn SignatureStore>,
    sessions: SessionStore,
    bot_username: Option<String>,
}

impl ConversationEngine {
    pub fn new(
        bot: Arc<dyn Bot>,
        store: Arc<dyn SignatureStore>,
        sessions: SessionStore,
        bot_username: Option<String>,
    ) -> Self {
        Self {
            bot,
            store,
            sessions,
            bot_username,
        }
    }

    /// Handles one private message from an admin. Returns the text of the last reply sent.
    #[instrument(skip(self, message), fields(message_id = message.id))]
    pub async fn handle(&self, message: &Message) -> Result<String> {
        let admin_id = message.sender_id().ok_or(HandlerError::NoSender)?;
        let mut session = self.sessions.lock(admin_id).await;

        let command = match message.content_kind {
            ContentKind::Text => Command::from_text(&message.text, self.bot_username.as_deref()),
            _ => None,
        };

        let step = match command {
            Some(command) => {
                info!(admin_id, command = ?command, "Command received");
                self.run_command(admin_id, command, session.take()).await
            }
            None => match session.take() {
                Some(state) => {
                    info!(admin_id, state = state.name(), "Conversation step");
                    self.run_step(admin_id, state, message).await
                }
                None => Ok(Step::done(texts::UNKNOWN_COMMAND)),
            },
        };

        let step = step.unwrap_or_else(|failure| {
            warn!(admin_id, failure = %failure, "Conversation aborted");
            Step::done(failure.user_message())
        });

        let sent = self.send_replies(&message.chat, step.replies).await;
        if sent.is_ok() {
            *session = step.next;
        }
        let idle = session.is_none();
        drop(session);
        if idle {
            self.sessions.release(admin_id).await;
        }
        sent
    }

    /// Sends the replies in order and returns the text of the last one.
    async fn send_replies(&self, chat: &Chat, replies: Vec<RichText>) -> Result<String> {
        let mut last = String::new();
        for reply in replies {
            self.bot.send_message(chat, &reply.text, &reply.spans).await?;
            last = reply.text;
        }
        Ok(last)
    }

    /// `/add`, `/edit` and `/delete` replace `previous`; other commands keep it.
    async fn run_command(
        &self,
        admin_id: i64,
        command: Command,
        previous: Option<ConversationState>,
    ) -> std::result::Result<Step, FlowFailure> {
        let keep = |reply: RichText| Step {
            replies: vec![reply],
            next: previous,
        };
        let step = match command {
            Command::Start | Command::Help => keep(RichText::plain(texts::usage(
                self.bot_username.as_deref(),
            ))),
            Command::Info => keep(texts::limits_info()),
            Command::List => keep(RichText::plain(self.list_channels(admin_id).await?)),
            Command::Add => Step::then(
                texts::ASK_CHANNEL_FOR_ADD,
                ConversationState::AwaitingChannelLink,
            ),
            Command::Edit => Step::then(
                texts::ASK_CHANNEL_FOR_EDIT,
                ConversationState::AwaitingEditSignature,
            ),
            Command::Delete => Step::then(
                texts::ASK_CHANNEL_FOR_DELETE,
                ConversationState::AwaitingDeleteChannelLink,
            ),
        };
        Ok(step)
    }

    async fn run_step(
        &self,
        admin_id: i64,
        state: ConversationState,
        message: &Message,
    ) -> std::result::Result<Step, FlowFailure> {
        match state {
            ConversationState::AwaitingChannelLink => self.accept_channel(&message.text).await,
            ConversationState::AwaitingNewSignature { channel_id } => {
                self.save_signature(admin_id, channel_id, message).await
            }
            ConversationState::AwaitingEditSignature => {
                self.preview_signature(admin_id, &message.text).await
            }
            ConversationState::AwaitingDeleteChannelLink => {
                self.delete_channel(admin_id, &message.text).await
            }
        }
    }

    /// Resolves the admin's text to a channel.
    async fn resolve_channel(&self, text: &str) -> std::result::Result<Chat, FlowFailure> {
        let reference = ChatRef::parse(text).ok_or_else(|| {
            FlowFailure::ChannelUnresolved(format!("not a channel reference: {:?}", text))
        })?;
        let chat = self
            .bot
            .resolve_chat(&reference)
            .await
            .map_err(|e| FlowFailure::ChannelUnresolved(e.to_string()))?;
        if !chat.is_channel() {
            return Err(FlowFailure::ChannelUnresolved(format!(
                "{} is not a channel",
                reference
            )));
        }
        Ok(chat)
    }

    async fn accept_channel(&self, text: &str) -> std::result::Result<Step, FlowFailure> {
        let chat = self.resolve_channel(text).await?;
        let membership = self
            .bot
            .get_membership(chat.id, self.bot.bot_user_id())
            .await
            .map_err(|e| FlowFailure::Platform(e.to_string()))?;
        if !membership.can_edit_messages {
            return Err(FlowFailure::NoEditRights(chat.id));
        }

        info!(channel_id = chat.id, "Channel accepted, awaiting signature");
        Ok(Step::then(
            texts::channel_accepted(&chat.display_title()),
            ConversationState::AwaitingNewSignature {
                channel_id: chat.id,
            },
        ))
    }

    async fn save_signature(
        &self,
        admin_id: i64,
        channel_id: i64,
        message: &Message,
    ) -> std::result::Result<Step, FlowFailure> {
        if message.content_kind != ContentKind::Text || message.text.trim().is_empty() {
            return Ok(Step::then(
                texts::ASK_SIGNATURE_AS_TEXT,
                ConversationState::AwaitingNewSignature { channel_id },
            ));
        }

        self.store
            .put(admin_id, channel_id, &message.text, &message.spans)
            .await?;
        info!(
            admin_id,
            channel_id,
            spans = message.spans.len(),
            "Signature saved"
        );
        Ok(Step::done(texts::SIGNATURE_SAVED))
    }

    async fn preview_signature(
        &self,
        admin_id: i64,
        text: &str,
    ) -> std::result::Result<Step, FlowFailure> {
        let chat = self.resolve_channel(text).await?;
        let record = self
            .store
            .get_by_channel(chat.id)
            .await?
            .filter(|r| r.is_owned_by(admin_id) && !r.text.is_empty())
            .ok_or(FlowFailure::NotFound(Flow::Edit))?;

        let header = RichText::plain(texts::current_signature_header(&chat.display_title()));
        let preview = merge(&record.rich_text(), &header, "\n\n", Direction::Prepend);

        Ok(Step {
            replies: vec![preview, RichText::plain(texts::ASK_NEW_SIGNATURE)],
            next: Some(ConversationState::AwaitingNewSignature {
                channel_id: chat.id,
            }),
        })
    }

    async fn delete_channel(
        &self,
        admin_id: i64,
        text: &str,
    ) -> std::result::Result<Step, FlowFailure> {
        let chat = self.resolve_channel(text).await?;
        if !self.store.delete(admin_id, chat.id).await? {
            return Err(FlowFailure::NotFound(Flow::Delete));
        }
        info!(admin_id, channel_id = chat.id, "Channel removed");
        Ok(Step::done(texts::channel_deleted(&chat.display_title())))
    }

    async fn list_channels(&self, admin_id: i64) -> std::result::Result<String, FlowFailure> {
        let channels = self.store.list_channels(admin_id).await?;
        if channels.is_empty() {
            return Ok(texts::NO_CHANNELS.to_string());
        }

        let mut text = String::from("Your channels:\n");
        for channel_id in channels {
            match self.bot.resolve_chat(&ChatRef::Id(channel_id)).await {
                Ok(chat) => {
                    let username = chat
                        .username
                        .as_ref()
                        .map(|u| format!(" (@{})", u))
                        .unwrap_or_default();
                    text.push_str(&format!(
                        "- {} (ID: {}){}\n",
                        chat.display_title(),
                        channel_id,
                        username
                    ));
                }
                Err(e) => {
                    warn!(channel_id, error = %e, "Could not resolve registered channel");
                    text.push_str(&format!("- Unknown channel (ID: {})\n", channel_id));
                }
            }
        }
        Ok(text)
    }
}
