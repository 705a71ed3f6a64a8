//! Email address type.

use std::fmt;
use std::str::FromStr;

use rfc1123::Domain;

use crate::MAX_ADDRESS_LENGTH;
use crate::error::{Error, Result};
use crate::grammar;
use crate::local_part::LocalPart;

/// RFC 5321 email address with an optional display name.
///
/// Accepts both `local@domain` and `Name <local@domain>`. Equality and
/// hashing are structural over all three components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    display_name: Option<String>,
    local_part: LocalPart,
    domain: Domain,
}

impl EmailAddress {
    /// Creates an address from already-validated components.
    ///
    /// The display name is trimmed of surrounding spaces and tabs (line breaks
    /// are kept); nothing else is checked.
    #[must_use]
    pub fn new(display_name: Option<String>, local_part: LocalPart, domain: Domain) -> Self {
        Self {
            display_name: display_name.map(|name| trim_inline(&name).to_string()),
            local_part,
            domain,
        }
    }

    /// Parses `Name <local@domain>`, `<local@domain>` or `local@domain`.
    ///
    /// The bracketed form is tried first and must match the whole input;
    /// otherwise the input is split at its first `@`.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered: [`Error::TotalLengthExceeded`]
    /// for an over-long bracketed address, [`Error::MissingAtSign`] for a bare
    /// address without `@`, or the local-part/domain error.
    pub fn parse(input: &str) -> Result<Self> {
        if let Some(bracketed) = grammar::match_bracketed(input) {
            tracing::trace!("Parsing bracketed address");

            let display_name = bracketed.display_name.map(unquote_display_name);

            let length =
                bracketed.local_part.chars().count() + 1 + bracketed.domain.chars().count();
            if length > MAX_ADDRESS_LENGTH {
                tracing::debug!(length, "Address too long");
                return Err(Error::TotalLengthExceeded(length));
            }

            return Ok(Self::new(
                display_name,
                LocalPart::new(bracketed.local_part)?,
                Domain::new(bracketed.domain)?,
            ));
        }

        tracing::trace!("Parsing bare address");
        let Some((local, domain)) = input.split_once('@') else {
            tracing::debug!(reason = "missing @", "Rejected address");
            return Err(Error::MissingAtSign);
        };

        Ok(Self::new(None, LocalPart::new(local)?, Domain::new(domain)?))
    }

    /// Returns a copy with the display name replaced.
    #[must_use]
    pub fn with_display_name(self, display_name: Option<String>) -> Self {
        Self::new(display_name, self.local_part, self.domain)
    }

    /// Returns the display name, if present.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Returns the local-part.
    #[must_use]
    pub const fn local_part(&self) -> &LocalPart {
        &self.local_part
    }

    /// Returns the domain.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns `local@domain`, without any display name.
    #[must_use]
    pub fn address_value(&self) -> String {
        format!("{}@{}", self.local_part, self.domain.name())
    }
}

/// Trims whitespace other than line breaks from both ends.
fn trim_inline(name: &str) -> &str {
    name.trim_matches(|c: char| {
        c.is_whitespace()
            && !matches!(
                c,
                '\n' | '\r' | '\u{b}' | '\u{c}' | '\u{85}' | '\u{2028}' | '\u{2029}'
            )
    })
}

/// Strips one layer of quotes from a captured display name and unescapes
/// `\"` then `\\`. Unquoted names are only trimmed. A lone `"` counts as
/// both quotes and yields an empty name.
fn unquote_display_name(captured: &str) -> String {
    let trimmed = trim_inline(captured);
    if trimmed == "\"" {
        return String::new();
    }
    match trimmed.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(inner) => inner.replace("\\\"", "\"").replace("\\\\", "\\"),
        None => trimmed.to_string(),
    }
}

/// A name needs quoting if it has anything besides letters, digits and whitespace.
fn needs_quoting(name: &str) -> bool {
    name.chars()
        .any(|c| !c.is_alphabetic() && !c.is_numeric() && !c.is_whitespace())
}

fn quote_display_name(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) if needs_quoting(name) => write!(
                f,
                "{} <{}@{}>",
                quote_display_name(name),
                self.local_part,
                self.domain.name()
            ),
            Some(name) => write!(f, "{name} <{}@{}>", self.local_part, self.domain.name()),
            None => write!(f, "{}@{}", self.local_part, self.domain.name()),
        }
    }
}

impl FromStr for EmailAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(address: EmailAddress) -> Self {
        address.to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
