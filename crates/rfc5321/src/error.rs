//! Error types for address parsing.

use crate::{MAX_ADDRESS_LENGTH, MAX_LOCAL_PART_LENGTH};

/// Result type alias for address operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Address validation errors.
///
/// The first failure short-circuits a parse; nothing is aggregated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Bare address has no `@`.
    #[error("Email address must contain @")]
    MissingAtSign,

    /// Local-part does not match the dot-atom grammar.
    #[error("Invalid local-part format (before @)")]
    InvalidDotAtom,

    /// Quoted local-part has an invalid interior.
    #[error("Invalid quoted string format in local-part")]
    InvalidQuotedString,

    /// Local-part is longer than 64 characters.
    #[error("Local-part length {0} exceeds maximum of {max}", max = MAX_LOCAL_PART_LENGTH)]
    LocalPartTooLong(usize),

    /// Bracketed `local@domain` is longer than 254 characters.
    #[error("Total length {0} exceeds maximum of {max}", max = MAX_ADDRESS_LENGTH)]
    TotalLengthExceeded(usize),

    /// Domain rejected by the domain validator.
    #[error(transparent)]
    Domain(#[from] rfc1123::Error),
}

impl Error {
    /// Returns true if the local-part was rejected.
    #[must_use]
    pub const fn is_local_part_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDotAtom | Self::InvalidQuotedString | Self::LocalPartTooLong(_)
        )
    }
}
