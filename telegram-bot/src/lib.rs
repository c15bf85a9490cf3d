//! # signature-bot
//!
//! Telegram bot that appends an admin-defined, formatted signature to every new post in the
//! admin's channels. Wires the signature store, the admin conversation state machine and the
//! post rewrite pipeline into a handler chain driven by the teloxide dispatcher.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod conversation;
pub mod handlers;
pub mod pipeline;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use signer_core::{
    Bot, Chat, ChatKind, ChatRef, ContentKind, Handler, HandlerResponse, Membership, Message,
    Result, SignerError, User,
};

pub use chain::HandlerChain;
pub use components::{build_handler_chain, BotComponents, BotIdentity};
pub use config::{BaseConfig, BotConfig};
pub use conversation::{Command, ConversationEngine, ConversationState, FlowFailure, SessionStore};
pub use handlers::{ChannelPostHandler, ConversationHandler, LoggingHandler};
pub use pipeline::{PostRewriter, RewriteOutcome, SkipReason, SIGNATURE_SEPARATOR};
pub use runner::{run_bot, supervise};
pub use telegram::{TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
