//! UTF-16 length of Rust strings.

/// Number of UTF-16 code units needed to encode `s`.
///
/// Chars above U+FFFF count as 2 (a surrogate pair); everything else counts as 1.
#[inline]
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}
