//! Keyword tokenisation and case-insensitive substring matching.
//!
//! # Examples
//! ```
//! use roamwise_core::keywords::{contains_ignore_case, tokenize};
//!
//! assert_eq!(tokenize("Surf, Sun  sand"), ["surf", "sun", "sand"]);
//! assert!(contains_ignore_case("Beach & Coast", "coast"));
//! ```

/// Split `text` on whitespace and commas into lowercase tokens.
///
/// Empty fragments are dropped, so `"a,,b"` yields two tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Report whether `needle` occurs in `haystack`, ignoring case.
///
/// An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Report whether the already-lowercased `token` occurs in any field.
///
/// Tokens from [`tokenize`] are lowercase, so only the fields are folded.
pub fn any_field_contains<'a, I>(fields: I, token: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(token))
}
