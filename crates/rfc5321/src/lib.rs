//! # rfc5321
//!
//! Parsing, validation and serialization of RFC 5321 email addresses.
//!
//! ## Features
//!
//! - **Two surface forms**: bare `local@domain` and `Name <local@domain>`
//! - **Local-part grammar**: dot-atom and quoted-string, with the 64
//!   character limit
//! - **Length limits**: 254 characters for a bracketed `local@domain`
//! - **Canonical output**: display names are quoted and escaped only when
//!   they need it
//! - **Domains**: host names and address literals via [`rfc1123`]
//!
//! ## Quick Start
//!
//! ```
//! use rfc5321::EmailAddress;
//!
//! let addr = EmailAddress::parse("\"Doe, Jane\" <jane@example.com>")?;
//! assert_eq!(addr.display_name(), Some("Doe, Jane"));
//! assert_eq!(addr.address_value(), "jane@example.com");
//! assert_eq!(addr.to_string(), "\"Doe, Jane\" <jane@example.com>");
//!
//! let bare: EmailAddress = "jane@example.com".parse()?;
//! assert_eq!(bare.display_name(), None);
//! # Ok::<(), rfc5321::Error>(())
//! ```
//!
//! ## Cargo Features
//!
//! - `serde`: (de)serialize [`EmailAddress`] as its string form. Decoding
//!   re-validates through [`EmailAddress::parse`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod address;
mod error;
mod grammar;
mod local_part;

pub use address::EmailAddress;
pub use error::{Error, Result};
pub use local_part::LocalPart;
pub use rfc1123::Domain;

/// Maximum length of a local-part, in characters.
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Maximum length of `local@domain` in the bracketed form, in characters.
pub const MAX_ADDRESS_LENGTH: usize = 254;
