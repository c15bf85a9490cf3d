//! Logs each update in before() and the response in after(); always continues.

use async_trait::async_trait;
use signer_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            chat_id = message.chat.id,
            chat_kind = ?message.chat.kind,
            user_id = ?message.sender_id(),
            message_id = message.id,
            content_kind = ?message.content_kind,
            text_len = message.text.len(),
            spans = message.spans.len(),
            "Received update"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            chat_id = message.chat.id,
            message_id = message.id,
            response = ?response,
            "Processed update"
        );
        Ok(())
    }
}
