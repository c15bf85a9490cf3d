//! Handler implementations: logging, channel posts, admin conversations.

mod channel_post_handler;
mod conversation_handler;
mod logging_handler;

pub use channel_post_handler::ChannelPostHandler;
pub use conversation_handler::ConversationHandler;
pub use logging_handler::LoggingHandler;
