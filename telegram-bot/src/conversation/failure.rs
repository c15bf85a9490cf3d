//! Failures that abort a conversation step, and the only place they become user-facing text.

use storage::StorageError;
use thiserror::Error;

/// Flow in which a registration lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Edit,
    Delete,
}

#[derive(Debug, Error)]
pub enum FlowFailure {
    #[error("channel reference could not be resolved: {0}")]
    ChannelUnresolved(String),

    #[error("bot cannot edit messages in channel {0}")]
    NoEditRights(i64),

    /// No registration owned by the requesting admin. Covers both "absent" and "owned by
    /// someone else" so the two are indistinguishable.
    #[error("no registration for this admin ({0:?})")]
    NotFound(Flow),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for FlowFailure {
    fn from(e: StorageError) -> Self {
        FlowFailure::Internal(e.to_string())
    }
}

impl FlowFailure {
    pub fn user_message(&self) -> &'static str {
        match self {
            FlowFailure::ChannelUnresolved(_) => {
                "Could not find the channel. Check that the link is correct and that I have been added to the channel. Operation cancelled."
            }
            FlowFailure::NoEditRights(_) => {
                "I am not an administrator of this channel or I am not allowed to edit messages there. Operation cancelled."
            }
            FlowFailure::NotFound(Flow::Edit) => {
                "This channel is not in your list. Use /add to register it."
            }
            FlowFailure::NotFound(Flow::Delete) => {
                "This channel is not in your list. Nothing was deleted."
            }
            FlowFailure::Platform(_) => {
                "Telegram did not answer the permission check. Please try again later. Operation cancelled."
            }
            FlowFailure::Internal(_) => "Something went wrong on my side. Operation cancelled.",
        }
    }
}
