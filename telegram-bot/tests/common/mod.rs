//! Shared fixtures: chats, messages and a handler chain wired to a [`MockBot`].

#![allow(dead_code)]

pub mod mock_bot;

use std::sync::{Arc, Once};

use chrono::Utc;
use rich_text::Span;
use signature_bot::{
    build_handler_chain, BotComponents, Chat, ChatKind, ContentKind, HandlerChain, Message,
    SessionStore, User,
};
use storage::{InMemorySignatureStore, SignatureStore};
use tracing_subscriber::{fmt, EnvFilter};

use mock_bot::MockBot;

pub const ADMIN_A: i64 = 1001;
pub const ADMIN_B: i64 = 2002;

pub const FOO_ID: i64 = -1001000000001;
pub const BAR_ID: i64 = -1001000000002;

static TRACING_INIT: Once = Once::new();

/// Test tracing to the test writer; level from RUST_LOG, default warn.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = fmt().with_env_filter(env_filter).with_test_writer().try_init();
    });
}

pub fn channel(id: i64, username: &str, title: &str) -> Chat {
    Chat {
        id,
        kind: ChatKind::Channel,
        title: Some(title.to_string()),
        username: Some(username.to_string()),
    }
}

pub fn foo_channel() -> Chat {
    channel(FOO_ID, "foo", "Foo News")
}

pub fn bar_channel() -> Chat {
    channel(BAR_ID, "bar", "Bar Daily")
}

fn admin(id: i64) -> User {
    User {
        id,
        username: None,
        first_name: Some("Admin".to_string()),
        last_name: None,
    }
}

/// Private text message from `admin_id`, with formatting.
pub fn private_formatted(admin_id: i64, text: &str, spans: Vec<Span>) -> Message {
    Message {
        id: 1,
        user: Some(admin(admin_id)),
        chat: Chat::private(admin_id),
        content_kind: ContentKind::Text,
        text: text.to_string(),
        spans,
        media_group_id: None,
        created_at: Utc::now(),
    }
}

pub fn private_text(admin_id: i64, text: &str) -> Message {
    private_formatted(admin_id, text, Vec::new())
}

/// Private sticker (no text).
pub fn private_sticker(admin_id: i64) -> Message {
    Message {
        content_kind: ContentKind::Other,
        ..private_text(admin_id, "")
    }
}

pub fn text_post(chat: &Chat, message_id: i32, text: &str, spans: Vec<Span>) -> Message {
    Message {
        id: message_id,
        user: None,
        chat: chat.clone(),
        content_kind: ContentKind::Text,
        text: text.to_string(),
        spans,
        media_group_id: None,
        created_at: Utc::now(),
    }
}

pub fn media_post(
    chat: &Chat,
    message_id: i32,
    caption: &str,
    spans: Vec<Span>,
    media_group_id: Option<&str>,
) -> Message {
    Message {
        content_kind: ContentKind::Media,
        media_group_id: media_group_id.map(str::to_string),
        ..text_post(chat, message_id, caption, spans)
    }
}

/// Chain, mock bot and store as the runner would assemble them.
pub struct Harness {
    pub bot: Arc<MockBot>,
    pub store: Arc<InMemorySignatureStore>,
    pub sessions: SessionStore,
    pub chain: HandlerChain,
}

impl Harness {
    pub fn new(bot: MockBot) -> Self {
        Self::with_store(bot, Arc::new(InMemorySignatureStore::new()))
    }

    pub fn with_store(bot: MockBot, store: Arc<InMemorySignatureStore>) -> Self {
        init_tracing();
        let bot = Arc::new(bot);
        let sessions = SessionStore::new();
        let components = BotComponents {
            bot: bot.clone(),
            store: store.clone() as Arc<dyn SignatureStore>,
            sessions: sessions.clone(),
            bot_username: Some("signer_bot".to_string()),
        };
        let chain = build_handler_chain(&components);
        Self {
            bot,
            store,
            sessions,
            chain,
        }
    }

    /// Sends a private text and returns the chain's response reply text.
    pub async fn say(&self, admin_id: i64, text: &str) -> String {
        self.say_message(private_text(admin_id, text)).await
    }

    pub async fn say_message(&self, message: Message) -> String {
        match self.chain.handle(&message).await.expect("chain failed") {
            signature_bot::HandlerResponse::Reply(text) => text,
            other => panic!("expected a reply, got {:?}", other),
        }
    }
}
