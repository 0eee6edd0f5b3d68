//! Markdown heading classification
//!
//! Detection happens in two independent stages:
//! 1. [`heading_token`] recognizes a heading line and pulls out its first token
//! 2. [`is_version_token`] decides whether that token looks like a version
//!
//! Format examples:
//! - `## 1.2.0` -> token `1.2.0`
//! - `### [v2.0.0] - 2024-05-01` -> token `v2.0.0`
//! - `# Changelog` -> token `Changelog` (rejected by stage 2)

/// Extract the token following a run of `#` characters.
///
/// The line is trimmed first. At least one `#` must be followed by whitespace,
/// then either a bracketed `[token]` or a bare run of non-whitespace.
/// Returns `None` for anything that is not a heading.
pub fn heading_token(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let rest = trimmed.trim_start_matches('#');
    if rest.len() == trimmed.len() || !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rest = rest.trim_start();
    if rest.is_empty() {
        return None;
    }

    let bracketed = rest
        .strip_prefix('[')
        .and_then(|inner| inner.find(']').map(|end| &inner[..end]))
        .filter(|token| !token.is_empty());
    if bracketed.is_some() {
        return bracketed;
    }

    rest.split_whitespace().next()
}

/// Whether a token starts with `MAJOR.MINOR`, optionally prefixed by `v`.
///
/// Only the prefix is checked: `1.0.0-beta.1` and `2.1` both qualify.
pub fn is_version_token(token: &str) -> bool {
    let token = token.strip_prefix('v').unwrap_or(token);

    let major_len = leading_digits(token);
    if major_len == 0 {
        return false;
    }

    match token[major_len..].strip_prefix('.') {
        Some(after_dot) => leading_digits(after_dot) > 0,
        None => false,
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Version token of a heading line, if the line is a version heading.
pub(crate) fn version_heading(line: &str) -> Option<&str> {
    heading_token(line).filter(|token| is_version_token(token))
}
