//! Dispatcher runner: converts private messages and channel posts to core::Message and passes
//! them to the HandlerChain. Updates of one chat are handled in order; different chats run
//! concurrently.

use teloxide::{prelude::*, utils::command::BotCommands};
use tracing::{error, info, instrument, warn};

use signer_core::ToCoreMessage;

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;
use crate::conversation::Command;

/// Registers the command list shown in Telegram clients. Failures are logged and ignored.
pub async fn register_commands(bot: &teloxide::Bot) {
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }
}

async fn on_update(msg: teloxide::types::Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    if let Err(e) = chain.handle(&core_msg).await {
        error!(
            error = %e,
            chat_id = core_msg.chat.id,
            message_id = core_msg.id,
            "Handler chain failed"
        );
    }
    Ok(())
}

/// Runs the dispatcher until Ctrl-C.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) {
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_update))
        .branch(Update::filter_channel_post().endpoint(on_update));

    info!("Dispatcher started");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("Dispatcher stopped");
}
