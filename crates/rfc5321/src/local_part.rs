//! Local-part (text before `@`).

use std::fmt;
use std::str::FromStr;

use crate::MAX_LOCAL_PART_LENGTH;
use crate::error::{Error, Result};
use crate::grammar;

/// RFC 5321 local-part.
///
/// Either a dot-atom (`john.doe`) or a quoted string (`"john doe"`). The
/// original text is kept as-is, surrounding quotes included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalPart {
    storage: Storage,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Storage {
    DotAtom(String),
    Quoted(String),
}

impl LocalPart {
    /// Creates a local-part from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LocalPartTooLong`] if the input is longer than 64
    /// characters, [`Error::InvalidQuotedString`] if a quoted local-part has
    /// an invalid interior, and [`Error::InvalidDotAtom`] otherwise.
    pub fn new(input: impl Into<String>) -> Result<Self> {
        let input = input.into();

        let length = input.chars().count();
        if length > MAX_LOCAL_PART_LENGTH {
            tracing::debug!(length, "Local-part too long");
            return Err(Error::LocalPartTooLong(length));
        }

        let storage = if let Some(interior) = quoted_interior(&input) {
            if !grammar::is_quoted_string(interior) {
                tracing::debug!(local_part = %input, reason = "quoted-string", "Rejected local-part");
                return Err(Error::InvalidQuotedString);
            }
            Storage::Quoted(input)
        } else {
            if !grammar::is_dot_atom(&input) {
                tracing::debug!(local_part = %input, reason = "dot-atom", "Rejected local-part");
                return Err(Error::InvalidDotAtom);
            }
            Storage::DotAtom(input)
        };

        Ok(Self { storage })
    }

    /// Returns the local-part exactly as it was given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match &self.storage {
            Storage::DotAtom(s) | Storage::Quoted(s) => s,
        }
    }

    /// Returns true if this is a quoted-string local-part.
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        matches!(self.storage, Storage::Quoted(_))
    }
}

/// Strips one layer of surrounding double quotes.
fn quoted_interior(input: &str) -> Option<&str> {
    input.strip_prefix('"')?.strip_suffix('"')
}

impl FromStr for LocalPart {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for LocalPart {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for LocalPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
