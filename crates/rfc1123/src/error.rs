//! Error types for domain validation.

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Domain validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Domain is empty.
    #[error("Domain cannot be empty")]
    Empty,

    /// Domain exceeds the maximum length.
    #[error("Domain length {0} exceeds maximum of {max}", max = crate::MAX_LENGTH)]
    TooLong(usize),

    /// Domain contains an empty label (e.g. `example..com`).
    #[error("Domain contains an empty label")]
    EmptyLabel,

    /// A label exceeds the maximum label length.
    #[error("Label '{0}' exceeds maximum of {max} characters", max = crate::MAX_LABEL_LENGTH)]
    LabelTooLong(String),

    /// A label contains invalid characters or hyphen placement.
    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    /// Address literal has nothing between the brackets.
    #[error("Address literal cannot be empty")]
    EmptyAddressLiteral,

    /// Address literal is not a valid IPv4 address.
    #[error("Invalid IPv4 address literal: {0}")]
    InvalidIpv4(String),

    /// Address literal is not a valid IPv6 address.
    #[error("Invalid IPv6 address literal: {0}")]
    InvalidIpv6(String),
}

impl Error {
    /// Returns true if this error came from an address literal (`[...]`).
    #[must_use]
    pub const fn is_address_literal_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyAddressLiteral | Self::InvalidIpv4(_) | Self::InvalidIpv6(_)
        )
    }
}
