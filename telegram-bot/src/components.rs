//! Component factory: builds the teloxide bot, the signature store and the handler chain.
//! Isolates assembly from the runner so tests can build the same chain around a mock Bot.

use anyhow::{Context, Result};
use signer_core::Bot;
use std::sync::Arc;
use storage::{SignatureStore, SqliteSignatureStore};
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::conversation::{ConversationEngine, SessionStore};
use crate::handlers::{ChannelPostHandler, ConversationHandler, LoggingHandler};
use crate::pipeline::PostRewriter;

/// The bot's own account, read once at startup via getMe.
#[derive(Debug, Clone)]
pub struct BotIdentity {
    pub user_id: i64,
    pub username: Option<String>,
}

/// Everything the handler chain needs for one dispatcher run.
#[derive(Clone)]
pub struct BotComponents {
    pub bot: Arc<dyn Bot>,
    pub store: Arc<dyn SignatureStore>,
    pub sessions: SessionStore,
    pub bot_username: Option<String>,
}

/// Creates the teloxide Bot, pointing it at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Opens (and creates if needed) the SQLite signature store.
#[instrument]
pub async fn open_store(database_url: &str) -> Result<Arc<dyn SignatureStore>> {
    let store = SqliteSignatureStore::open(database_url).await.map_err(|e| {
        error!(error = %e, database_url = %database_url, "Failed to open signature store");
        anyhow::anyhow!("Failed to open signature store: {}", e)
    })?;
    info!(database_url = %database_url, "Signature store ready");
    Ok(Arc::new(store))
}

/// Builds the chain: logging → channel posts → admin conversations.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    let rewriter = PostRewriter::new(components.bot.clone(), components.store.clone());
    let engine = ConversationEngine::new(
        components.bot.clone(),
        components.store.clone(),
        components.sessions.clone(),
        components.bot_username.clone(),
    );
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(ChannelPostHandler::new(rewriter)))
        .add_handler(Arc::new(ConversationHandler::new(engine)))
}
