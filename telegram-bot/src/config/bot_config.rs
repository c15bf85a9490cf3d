//! BotConfig: BaseConfig + supervision settings. Use load() for env-based loading.

use anyhow::{bail, Result};
use std::env;
use std::time::Duration;

use super::BaseConfig;

/// Default pause before the dispatcher is restarted after a crash.
pub const DEFAULT_RESTART_DELAY_SECS: u64 = 15;

/// Bot config: BaseConfig + restart delay. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    /// RESTART_DELAY_SECS
    pub restart_delay_secs: u64,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let restart_delay_secs = env::var("RESTART_DELAY_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RESTART_DELAY_SECS);
        Ok(Self {
            base,
            restart_delay_secs,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if self.restart_delay_secs == 0 {
            bail!("RESTART_DELAY_SECS must be at least 1");
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn restart_delay(&self) -> Duration {
        Duration::from_secs(self.restart_delay_secs)
    }
}
