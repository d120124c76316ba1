//! Character-level helpers shared by the extractor and the prompt builders.
//!
//! Every length here is counted in `char`s, never bytes, so truncating a
//! CJK headline never splits a code point.

/// Returns at most `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Strips each text fragment and concatenates them with no separator.
/// Whitespace runs inside a fragment become a single space.
pub fn join_stripped<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for fragment in fragments {
        for (i, word) in fragment.split_whitespace().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(word);
        }
    }
    out
}
