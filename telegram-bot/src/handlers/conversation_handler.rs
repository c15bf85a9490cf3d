//! Handler for private chats: drives the admin conversation and replies with its last text.

use async_trait::async_trait;
use signer_core::{Handler, HandlerResponse, Message, Result};
use tracing::instrument;

use crate::conversation::ConversationEngine;

pub struct ConversationHandler {
    engine: ConversationEngine,
}

impl ConversationHandler {
    pub fn new(engine: ConversationEngine) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        // Groups and supergroups are not served.
        if !message.chat.is_private() {
            return Ok(HandlerResponse::Ignore);
        }
        let reply = self.engine.handle(message).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
