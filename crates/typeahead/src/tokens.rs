//! # Whitespace tokens
//!
//! Helpers for locating the word being typed at the end of an input buffer. Tokens are runs of
//! non-whitespace characters, using Unicode's definition of whitespace.

/// Returns the last whitespace-delimited token in `text`.
///
/// The result is empty when `text` is empty or ends in whitespace, since the user hasn't started
/// typing the next word yet.
///
/// ```
/// use typeahead::tokens::last_token;
///
/// assert_eq!(last_token("What is a su"), "su");
/// assert_eq!(last_token("What is a "), "");
/// ```
pub fn last_token(text: &str) -> &str {
    let head = strip_last_token(text);

    return &text[head.len()..];
}

/// Replace the last token in `text` with `replacement`, followed by a single space.
///
/// Everything before the last token, including the original separators, is kept as-is.
pub fn replace_last_token(text: &str, replacement: &str) -> String {
    let head = strip_last_token(text);
    let mut out = String::with_capacity(head.len() + replacement.len() + 1);

    out.push_str(head);
    out.push_str(replacement);
    out.push(' ');

    return out;
}

/// Iterate over the whitespace-delimited words in `text`.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

fn strip_last_token(text: &str) -> &str {
    text.trim_end_matches(|c: char| !c.is_whitespace())
}
