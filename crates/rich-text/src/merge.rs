//! Concatenation of two formatted fragments with span recomputation.

use crate::span::Span;
use crate::utf16::utf16_len;

/// Text plus the spans that format it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    pub text: String,
    pub spans: Vec<Span>,
}

impl RichText {
    pub fn new(text: impl Into<String>, spans: Vec<Span>) -> Self {
        Self {
            text: text.into(),
            spans,
        }
    }

    /// Text without formatting.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    /// True when the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Length of the text in UTF-16 code units.
    pub fn utf16_len(&self) -> usize {
        utf16_len(&self.text)
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

/// Where the addition goes relative to the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `base + separator + addition`
    Append,
    /// `addition + separator + base`
    Prepend,
}

/// Joins `base` and `addition` with `separator`.
///
/// The fragment that ends up first keeps its spans as they are and they come first in the
/// result; the spans of the fragment that ends up second are shifted by the UTF-16 length of
/// everything in front of it (first fragment plus separator). Both fragments occupy disjoint
/// ranges, so no overlap handling is needed.
pub fn merge(base: &RichText, addition: &RichText, separator: &str, direction: Direction) -> RichText {
    let (first, second) = match direction {
        Direction::Append => (base, addition),
        Direction::Prepend => (addition, base),
    };

    let mut text = String::with_capacity(first.text.len() + separator.len() + second.text.len());
    text.push_str(&first.text);
    text.push_str(separator);
    let delta = utf16_len(&text);
    text.push_str(&second.text);

    let mut spans = Vec::with_capacity(first.spans.len() + second.spans.len());
    spans.extend(first.spans.iter().cloned());
    spans.extend(second.spans.iter().map(|s| s.shifted(delta)));

    RichText { text, spans }
}
