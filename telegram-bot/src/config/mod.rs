//! Bot configuration: BaseConfig (Telegram + log + DB) + restart delay.

mod base;
mod bot_config;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::{BotConfig, DEFAULT_RESTART_DELAY_SECS};
