//! Character-safety filtering and record id checks shared by the formatters.
//!
//! Values that end up in an unquoted position (identifiers, class names,
//! projections) or inside a double-quoted literal are passed through
//! [`filter_unsafe`], which keeps:
//!
//! - Unicode alphanumerics
//! - the space character
//! - `_ - . : # @ * ( ) , < > = ! % + [ ] /`
//!
//! Everything else (quotes, backslash, `;`, backtick, `$`, `?`, braces, `|`,
//! `&`, tabs and newlines) is dropped silently.

use std::sync::OnceLock;

const SAFE_PUNCTUATION: &[char] = &[
    ' ', '_', '-', '.', ':', '#', '@', '*', '(', ')', ',', '<', '>', '=', '!', '%', '+', '[', ']',
    '/',
];

/// Returns `true` if `c` may appear in a rendered value.
pub fn is_safe_char(c: char) -> bool {
    c.is_alphanumeric() || SAFE_PUNCTUATION.contains(&c)
}

/// Strip every character that is unsafe in a value position.
pub fn filter_unsafe(input: &str) -> String {
    input.chars().filter(|&c| is_safe_char(c)).collect()
}

fn rid_regex() -> &'static regex::Regex {
    static RID_RE: OnceLock<regex::Regex> = OnceLock::new();
    RID_RE.get_or_init(|| {
        regex::Regex::new(r"^#?(\d+):(\d+)$").expect("invalid built-in record id regex")
    })
}

/// Returns `true` if `s` is a record id (`#12:0` or `12:0`).
pub fn is_rid(s: &str) -> bool {
    rid_regex().is_match(s.trim())
}

/// Normalize a record id to its `#cluster:position` form.
///
/// Returns `None` when `s` is not a record id.
pub fn normalize_rid(s: &str) -> Option<String> {
    let caps = rid_regex().captures(s.trim())?;
    Some(format!("#{}:{}", &caps[1], &caps[2]))
}
