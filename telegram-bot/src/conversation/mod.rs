//! Admin conversations: commands, per-admin sessions and the registration state machine.

mod commands;
mod engine;
mod failure;
mod session;
mod state;
pub mod texts;

pub use commands::Command;
pub use engine::ConversationEngine;
pub use failure::{Flow, FlowFailure};
pub use session::{SessionGuard, SessionStore};
pub use state::ConversationState;
