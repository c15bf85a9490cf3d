//! Post rewrite pipeline: appends the channel's signature to each new channel post.

use std::sync::Arc;

use rich_text::{merge, Direction};
use signer_core::{Bot, ContentKind, Message, Result, SignerError};
use storage::SignatureStore;
use tracing::{info, instrument, warn};

/// Separator between the post body and the signature.
pub const SIGNATURE_SEPARATOR: &str = "\n\n";

/// Why a post was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Album item without caption; only the captioned item of an album is signed.
    CaptionlessAlbumItem,
    NotRegistered,
    /// Channel registered with an empty signature text.
    EmptySignature,
    /// Neither text nor captionable media (sticker, poll, service message).
    UnsupportedContent,
}

/// Result of processing one channel post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    Edited,
    Skipped(SkipReason),
    /// The platform refused the edit; the post stays unsigned.
    Rejected(String),
}

/// Looks up the channel's signature and edits the post with the merged text.
pub struct PostRewriter {
    bot: Arc<dyn Bot>,
    store: Arc<dyn SignatureStore>,
}

impl PostRewriter {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn SignatureStore>) -> Self {
        Self { bot, store }
    }

    /// Rewrites one channel post. Storage failures are returned as errors; platform
    /// rejections of the edit are logged and reported as [`RewriteOutcome::Rejected`].
    #[instrument(skip(self, post), fields(channel_id = post.chat.id, message_id = post.id))]
    pub async fn rewrite(&self, post: &Message) -> Result<RewriteOutcome> {
        if post.media_group_id.is_some() && post.text.is_empty() {
            return Ok(RewriteOutcome::Skipped(SkipReason::CaptionlessAlbumItem));
        }
        if post.content_kind == ContentKind::Other {
            return Ok(RewriteOutcome::Skipped(SkipReason::UnsupportedContent));
        }

        let record = self
            .store
            .get_by_channel(post.chat.id)
            .await
            .map_err(|e| SignerError::Database(e.to_string()))?;
        let Some(record) = record else {
            return Ok(RewriteOutcome::Skipped(SkipReason::NotRegistered));
        };
        if record.text.is_empty() {
            return Ok(RewriteOutcome::Skipped(SkipReason::EmptySignature));
        }

        let signed = merge(
            &post.rich_text(),
            &record.rich_text(),
            SIGNATURE_SEPARATOR,
            Direction::Append,
        );

        let result = match post.content_kind {
            ContentKind::Text => {
                self.bot
                    .edit_message_text(&post.chat, post.id, &signed.text, &signed.spans)
                    .await
            }
            _ => {
                self.bot
                    .edit_message_caption(&post.chat, post.id, &signed.text, &signed.spans)
                    .await
            }
        };

        match result {
            Ok(()) => {
                info!(
                    channel_id = post.chat.id,
                    message_id = post.id,
                    admin_id = record.admin_id,
                    "Post signed"
                );
                Ok(RewriteOutcome::Edited)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    channel_id = post.chat.id,
                    message_id = post.id,
                    "Platform rejected signature edit, post left unsigned"
                );
                Ok(RewriteOutcome::Rejected(e.to_string()))
            }
        }
    }
}

// End-to-end tests live in tests/pipeline_test.rs
