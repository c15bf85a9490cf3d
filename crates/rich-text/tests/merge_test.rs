//! Tests for [`rich_text::merge`] over mixed scripts.
//!
//! Covers the append/prepend text layout, the shift applied to the moved side, and that the
//! unmoved side keeps both its values and its position in the span list.

use rich_text::{merge, utf16_len, Direction, MentionedUser, RichText, Span, SpanKind};

fn samples() -> Vec<RichText> {
    vec![
        RichText::default(),
        RichText::new("Hello world", vec![Span::new(SpanKind::Bold, 6, 5)]),
        RichText::new(
            "🎉 Launch",
            vec![Span::new(SpanKind::Bold, 0, 2), Span::new(SpanKind::Italic, 3, 6)],
        ),
        RichText::new(
            "Подпись €5",
            vec![Span::text_link(0, 7, "https://t.me/channel")],
        ),
        RichText::new(
            "👨‍👩‍👧 family by Ann",
            vec![Span::text_mention(
                19,
                3,
                MentionedUser {
                    id: 42,
                    is_bot: false,
                    first_name: "Ann".to_string(),
                    last_name: None,
                    username: None,
                },
            )],
        ),
    ]
}

/// **Test: APPEND layout and shift hold for every pair of samples.**
///
/// **Expected:** text is `T + sep + A`; base spans come first and are unchanged; each addition
/// span's offset grows by `utf16_len(T + sep)`.
#[test]
fn test_append_preserves_spans_for_all_pairs() {
    for sep in ["\n\n", "", " | "] {
        for base in samples() {
            for addition in samples() {
                let merged = merge(&base, &addition, sep, Direction::Append);
                assert_eq!(merged.text, format!("{}{}{}", base.text, sep, addition.text));

                let delta = utf16_len(&format!("{}{}", base.text, sep));
                assert_eq!(merged.spans.len(), base.spans.len() + addition.spans.len());
                assert_eq!(&merged.spans[..base.spans.len()], &base.spans[..]);
                for (moved, original) in merged.spans[base.spans.len()..].iter().zip(&addition.spans) {
                    assert_eq!(moved.offset, original.offset + delta);
                    assert_eq!(moved.length, original.length);
                    assert_eq!(moved.kind, original.kind);
                }
            }
        }
    }
}

/// **Test: PREPEND puts the addition first and shifts the base.**
#[test]
fn test_prepend_preserves_spans_for_all_pairs() {
    for base in samples() {
        for addition in samples() {
            let merged = merge(&base, &addition, "\n", Direction::Prepend);
            assert_eq!(merged.text, format!("{}\n{}", addition.text, base.text));

            let delta = utf16_len(&addition.text) + 1;
            assert_eq!(&merged.spans[..addition.spans.len()], &addition.spans[..]);
            for (moved, original) in merged.spans[addition.spans.len()..].iter().zip(&base.spans) {
                assert_eq!(moved, &original.shifted(delta));
            }
        }
    }
}

/// **Test: Emoji-bearing post; offsets are computed from UTF-16 units, not chars.**
///
/// **Setup:** `"🎉 Launch"` is 9 UTF-16 units (2 + 1 + 6) but 8 chars.
/// **Expected:** bold span at 6 in the signature lands at 6 + 9 + 2 = 17.
#[test]
fn test_emoji_post_signature_offset() {
    let post = RichText::plain("🎉 Launch");
    assert_eq!(utf16_len(&post.text), 9);
    assert_eq!(post.text.chars().count(), 8);

    let signature = RichText::new("Hello world", vec![Span::new(SpanKind::Bold, 6, 5)]);
    let merged = merge(&post, &signature, "\n\n", Direction::Append);

    assert_eq!(merged.spans, vec![Span::new(SpanKind::Bold, 17, 5)]);
    // The span covers exactly "world" when read back in UTF-16.
    let units: Vec<u16> = merged.text.encode_utf16().collect();
    let covered = String::from_utf16(&units[17..22]).unwrap();
    assert_eq!(covered, "world");
}
