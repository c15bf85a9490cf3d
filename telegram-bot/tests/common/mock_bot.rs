//! Mock implementation of [`signature_bot::Bot`] for integration tests.
//!
//! Knows a fixed set of chats and the bot's rights in each, and records every outgoing call so
//! tests can assert on replies and edits without hitting Telegram.

use async_trait::async_trait;
use rich_text::Span;
use signature_bot::{Bot, Chat, ChatRef, Membership, Result, SignerError};
use std::collections::HashMap;
use std::sync::Mutex;

pub const BOT_USER_ID: i64 = 999;

/// One recorded outgoing call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Send {
        chat_id: i64,
        text: String,
        spans: Vec<Span>,
    },
    EditText {
        chat_id: i64,
        message_id: i32,
        text: String,
        spans: Vec<Span>,
    },
    EditCaption {
        chat_id: i64,
        message_id: i32,
        caption: String,
        spans: Vec<Span>,
    },
}

#[derive(Default)]
pub struct MockBot {
    /// Chats by "@username" and by id.
    chats: Mutex<HashMap<String, Chat>>,
    can_edit: Mutex<HashMap<i64, bool>>,
    /// When set, every edit fails with this description.
    edit_error: Mutex<Option<String>>,
    calls: Mutex<Vec<Call>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `chat` resolvable by id and (if set) username; the bot's edit right is `can_edit`.
    pub fn with_chat(self, chat: Chat, can_edit: bool) -> Self {
        {
            let mut chats = self.chats.lock().unwrap();
            if let Some(username) = &chat.username {
                chats.insert(format!("@{}", username), chat.clone());
            }
            chats.insert(chat.id.to_string(), chat.clone());
        }
        self.can_edit.lock().unwrap().insert(chat.id, can_edit);
        self
    }

    pub fn reject_edits(&self, description: &str) {
        *self.edit_error.lock().unwrap() = Some(description.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts of every `send_message`, in order.
    pub fn sent_texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Send { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn last_sent(&self) -> Option<(String, Vec<Span>)> {
        self.calls().into_iter().rev().find_map(|c| match c {
            Call::Send { text, spans, .. } => Some((text, spans)),
            _ => None,
        })
    }

    /// Edit calls only.
    pub fn edits(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::Send { .. }))
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn edit_result(&self) -> Result<()> {
        match self.edit_error.lock().unwrap().clone() {
            Some(description) => Err(SignerError::Bot(description)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Bot for MockBot {
    fn bot_user_id(&self) -> i64 {
        BOT_USER_ID
    }

    async fn resolve_chat(&self, reference: &ChatRef) -> Result<Chat> {
        self.chats
            .lock()
            .unwrap()
            .get(&reference.to_string())
            .cloned()
            .ok_or_else(|| SignerError::Bot("Bad Request: chat not found".to_string()))
    }

    async fn get_membership(&self, chat_id: i64, user_id: i64) -> Result<Membership> {
        assert_eq!(user_id, BOT_USER_ID, "membership should be checked for the bot itself");
        self.can_edit
            .lock()
            .unwrap()
            .get(&chat_id)
            .map(|&can_edit_messages| Membership { can_edit_messages })
            .ok_or_else(|| SignerError::Bot("Bad Request: member not found".to_string()))
    }

    async fn send_message(&self, chat: &Chat, text: &str, spans: &[Span]) -> Result<()> {
        self.record(Call::Send {
            chat_id: chat.id,
            text: text.to_string(),
            spans: spans.to_vec(),
        });
        Ok(())
    }

    async fn edit_message_text(
        &self,
        chat: &Chat,
        message_id: i32,
        text: &str,
        spans: &[Span],
    ) -> Result<()> {
        self.record(Call::EditText {
            chat_id: chat.id,
            message_id,
            text: text.to_string(),
            spans: spans.to_vec(),
        });
        self.edit_result()
    }

    async fn edit_message_caption(
        &self,
        chat: &Chat,
        message_id: i32,
        caption: &str,
        spans: &[Span],
    ) -> Result<()> {
        self.record(Call::EditCaption {
            chat_id: chat.id,
            message_id,
            caption: caption.to_string(),
            spans: spans.to_vec(),
        });
        self.edit_result()
    }
}
