//! Core types: user, chat, message, membership, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod handler;
mod membership;
mod message;
mod response;
mod user;

pub use chat::{Chat, ChatKind, ChatRef};
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use membership::Membership;
pub use message::{ContentKind, Message};
pub use response::HandlerResponse;
pub use user::User;
