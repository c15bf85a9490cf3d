//! # Rich text
//!
//! Formatting spans as Telegram models them, and the arithmetic needed to combine two
//! independently formatted fragments into one.
//!
//! ## Offsets
//!
//! Every `offset` and `length` is measured in **UTF-16 code units**, not bytes or chars.
//! A character outside the Basic Multilingual Plane (most emoji) occupies two units.
//! [`utf16_len`] is the only function in the workspace that should be used to measure text
//! before shifting a span.
//!
//! ## Usage
//!
//! - [`merge`] appends (or prepends) a fragment and shifts the spans of the side that moved.
//! - [`RichTextBuilder`] assembles formatted bot replies piece by piece.
//!
//! ## External interactions
//!
//! - **Telegram**: spans map one-to-one to `MessageEntity` values sent with edit/send requests.
//! - **storage**: spans are serialised with serde (snake_case kinds, optional fields omitted).

mod builder;
mod merge;
mod span;
mod utf16;

pub use builder::RichTextBuilder;
pub use merge::{merge, Direction, RichText};
pub use span::{MentionedUser, Span, SpanKind};
pub use utf16::utf16_len;
