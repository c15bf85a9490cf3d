//! Telegram layer: adapters, entity conversion, Bot implementation, dispatcher.

mod adapters;
mod bot_adapter;
pub mod entities;
mod runner;

pub use adapters::{core_chat, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::{register_commands, run_dispatcher};
