//! POSIX shell quoting for display.
//!
//! The rendered string can be pasted into `sh` and yields the same tokens.
//! It is only ever shown to the user; execution never goes through a shell.

use regex::Regex;
use std::sync::LazyLock;

static UNSAFE_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_@%+=:,./-]").unwrap());

/// Quote a single token.
pub fn quote(token: &str) -> String {
    if token.is_empty() {
        return "''".to_string();
    }
    if !UNSAFE_CHAR.is_match(token) {
        return token.to_string();
    }
    format!("'{}'", token.replace('\'', r#"'"'"'"#))
}

/// Quote every token and join them with single spaces.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| quote(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
