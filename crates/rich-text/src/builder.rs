//! Incremental construction of formatted text.

use crate::merge::RichText;
use crate::span::{Span, SpanKind};
use crate::utf16::utf16_len;

/// Builds a [`RichText`] piece by piece, tracking UTF-16 offsets.
///
/// ```
/// use rich_text::{RichTextBuilder, SpanKind};
///
/// let text = RichTextBuilder::new()
///     .push("Limit: ")
///     .push_styled("4096", SpanKind::Bold)
///     .build();
/// assert_eq!(text.text, "Limit: 4096");
/// assert_eq!(text.spans[0].offset, 7);
/// ```
#[derive(Debug, Default)]
pub struct RichTextBuilder {
    text: String,
    spans: Vec<Span>,
    cursor: usize,
}

impl RichTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unformatted text.
    pub fn push(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self.cursor += utf16_len(text);
        self
    }

    /// Appends text covered by one span of `kind`. Empty text adds no span.
    pub fn push_styled(mut self, text: &str, kind: SpanKind) -> Self {
        let length = utf16_len(text);
        if length > 0 {
            self.spans.push(Span::new(kind, self.cursor, length));
        }
        self.text.push_str(text);
        self.cursor += length;
        self
    }

    pub fn newline(self) -> Self {
        self.push("\n")
    }

    pub fn build(self) -> RichText {
        RichText {
            text: self.text,
            spans: self.spans,
        }
    }
}
