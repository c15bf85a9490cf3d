//! Handler for channel posts: runs the post rewrite pipeline and stops the chain.

use async_trait::async_trait;
use signer_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, instrument};

use crate::pipeline::{PostRewriter, RewriteOutcome};

pub struct ChannelPostHandler {
    rewriter: PostRewriter,
}

impl ChannelPostHandler {
    pub fn new(rewriter: PostRewriter) -> Self {
        Self { rewriter }
    }
}

#[async_trait]
impl Handler for ChannelPostHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.chat.is_channel() {
            return Ok(HandlerResponse::Continue);
        }

        let outcome = self.rewriter.rewrite(message).await?;
        if let RewriteOutcome::Skipped(reason) = outcome {
            debug!(
                channel_id = message.chat.id,
                message_id = message.id,
                reason = ?reason,
                "Post skipped"
            );
        }
        Ok(HandlerResponse::Stop)
    }
}
