//! Startup and supervision.
//!
//! Startup failures (bad config, getMe, store open) end the process. After that the dispatcher
//! runs in a spawned task; if it panics or a restart cannot reopen the store, it is started again
//! after the configured delay. A clean stop (Ctrl-C) ends the process.

use anyhow::{Context, Result};
use signer_core::{init_tracing, Bot};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use storage::SignatureStore;
use tracing::{error, info, instrument, warn};
use teloxide::requests::Requester;

use crate::components::{
    build_handler_chain, build_teloxide_bot, open_store, BotComponents, BotIdentity,
};
use crate::config::BotConfig;
use crate::conversation::SessionStore;
use crate::telegram::{register_commands, run_dispatcher, TelegramBotAdapter};

/// Runs `run_once` in a fresh task until it returns `Ok`. Errors and panics are logged and the
/// run is retried after `restart_delay`. `run_once` receives the 1-based attempt number.
pub async fn supervise<F, Fut>(restart_delay: Duration, mut run_once: F) -> Result<()>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        match tokio::spawn(run_once(attempt)).await {
            Ok(Ok(())) => {
                info!(attempt, "Bot stopped");
                return Ok(());
            }
            Ok(Err(e)) => error!(attempt, error = %e, "Bot run failed"),
            Err(e) => error!(attempt, error = %e, "Bot run panicked"),
        }
        warn!(
            attempt,
            delay_secs = restart_delay.as_secs(),
            "Restarting bot after delay"
        );
        tokio::time::sleep(restart_delay).await;
    }
}

/// Main entry: validate config, init logging, connect, open the store, then supervise the dispatcher.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file()))?;

    info!(database_url = %config.database_url(), "Initializing bot");

    let teloxide_bot = build_teloxide_bot(&config)?;
    let me = teloxide_bot
        .get_me()
        .await
        .context("Failed to reach Telegram (getMe); check BOT_TOKEN")?;
    let identity = BotIdentity {
        user_id: me.user.id.0 as i64,
        username: me.user.username.clone(),
    };
    info!(bot_id = identity.user_id, username = ?identity.username, "Bot connected");

    register_commands(&teloxide_bot).await;

    let mut initial_store = Some(open_store(config.database_url()).await?);
    let database_url = config.database_url().to_string();

    supervise(config.restart_delay(), move |attempt| {
        let store = initial_store.take();
        let teloxide_bot = teloxide_bot.clone();
        let identity = identity.clone();
        let database_url = database_url.clone();
        async move {
            let store: Arc<dyn SignatureStore> = match store {
                Some(store) => store,
                None => open_store(&database_url).await?,
            };
            let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(
                teloxide_bot.clone(),
                identity.user_id,
            ));
            let components = BotComponents {
                bot,
                store,
                sessions: SessionStore::new(),
                bot_username: identity.username,
            };
            info!(attempt, "Bot started successfully");
            run_dispatcher(teloxide_bot, build_handler_chain(&components)).await;
            Ok(())
        }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// **Test: panics and errors are restarted; the first Ok ends supervision.**
    ///
    /// **Setup:** run 1 panics, run 2 returns Err, run 3 returns Ok.
    /// **Expected:** supervise returns Ok after exactly three runs.
    #[tokio::test]
    async fn test_supervise_restarts_until_clean_exit() {
        let runs = Arc::new(AtomicU32::new(0));
        let counter = runs.clone();

        let result = supervise(Duration::ZERO, move |attempt| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move {
                match attempt {
                    1 => panic!("dispatcher crashed"),
                    2 => anyhow::bail!("store unavailable"),
                    _ => Ok(()),
                }
            }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(runs.load(Ordering::SeqCst), 3);
    }

    /// **Test: the restart waits for the configured delay.**
    #[tokio::test(start_paused = true)]
    async fn test_supervise_waits_between_runs() {
        let started = tokio::time::Instant::now();

        supervise(Duration::from_secs(15), |attempt| async move {
            if attempt == 1 {
                anyhow::bail!("first run fails");
            }
            Ok(())
        })
        .await
        .unwrap();

        assert!(started.elapsed() >= Duration::from_secs(15));
    }
}
