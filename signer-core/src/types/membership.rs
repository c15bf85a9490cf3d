//! The bot's standing in a chat, as reported by the platform.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// True when the member may edit other members' posts (channel admin with edit rights, or owner).
    pub can_edit_messages: bool,
}
