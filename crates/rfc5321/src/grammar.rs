//! Compiled grammar patterns.
//!
//! Every pattern is anchored with `\A` and `\z`, so a match always covers
//! the whole input.

use std::sync::LazyLock;

use regex::Regex;

/// `atext` runs separated by single dots.
#[allow(clippy::expect_used)]
static DOT_ATOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A[A-Za-z0-9!#$%&'*+\-/=?^_`{|}~]+(?:\.[A-Za-z0-9!#$%&'*+\-/=?^_`{|}~]+)*\z")
        .expect("Failed to compile dot-atom regex")
});

/// Interior of a quoted local-part: `"` and `\` only as `\"` or `\\`.
#[allow(clippy::expect_used)]
static QUOTED_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\A(?:[^"\\]|\\["\\])+\z"#).expect("Failed to compile quoted-string regex")
});

/// `[display-name] <local@domain>`.
///
/// Groups: 1 = display name (optional), 2 = local-part, 3 = domain.
#[allow(clippy::expect_used)]
static BRACKETED_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\A(?:((?:"(?:[^"\\]|\\.)*"|[^<]+?))\s*)?<([^@]+)@([^>]+)>\z"#)
        .expect("Failed to compile bracketed address regex")
});

/// Pieces of a `Name <local@domain>` match, as captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bracketed<'a> {
    pub display_name: Option<&'a str>,
    pub local_part: &'a str,
    pub domain: &'a str,
}

/// Returns true if `input` is a dot-atom.
pub(crate) fn is_dot_atom(input: &str) -> bool {
    DOT_ATOM.is_match(input)
}

/// Returns true if `input` is a valid quoted-string interior.
pub(crate) fn is_quoted_string(input: &str) -> bool {
    QUOTED_STRING.is_match(input)
}

/// Matches the bracketed form against the whole input.
pub(crate) fn match_bracketed(input: &str) -> Option<Bracketed<'_>> {
    let captures = BRACKETED_ADDRESS.captures(input)?;
    Some(Bracketed {
        display_name: captures.get(1).map(|m| m.as_str()),
        local_part: captures.get(2)?.as_str(),
        domain: captures.get(3)?.as_str(),
    })
}
