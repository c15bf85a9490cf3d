//! Conversation states. IDLE is the absence of a state.

/// Step an admin is in while registering, editing or removing a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// After `/add`: waiting for the channel reference.
    AwaitingChannelLink,
    /// Channel resolved (or current signature previewed): waiting for the signature message.
    AwaitingNewSignature { channel_id: i64 },
    /// After `/edit`: waiting for the channel reference.
    AwaitingEditSignature,
    /// After `/delete`: waiting for the channel reference.
    AwaitingDeleteChannelLink,
}

impl ConversationState {
    pub fn name(&self) -> &'static str {
        match self {
            ConversationState::AwaitingChannelLink => "awaiting_channel_link",
            ConversationState::AwaitingNewSignature { .. } => "awaiting_new_signature",
            ConversationState::AwaitingEditSignature => "awaiting_edit_signature",
            ConversationState::AwaitingDeleteChannelLink => "awaiting_delete_channel_link",
        }
    }
}
