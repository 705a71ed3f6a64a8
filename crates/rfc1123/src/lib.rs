//! # rfc1123
//!
//! Domain validation for mail addresses: RFC 1123 host names and the
//! RFC 5321 address-literal forms.
//!
//! ## Example
//!
//! ```
//! use rfc1123::Domain;
//!
//! let host = Domain::new("mail.example.com")?;
//! assert_eq!(host.name(), "mail.example.com");
//!
//! let literal = Domain::new("[192.168.1.1]")?;
//! assert!(literal.is_address_literal());
//! # Ok::<(), rfc1123::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod domain;
mod error;

pub use domain::Domain;
pub use error::{Error, Result};

/// Maximum length of a domain, in characters.
pub const MAX_LENGTH: usize = 255;

/// Maximum length of a single host-name label, in characters.
pub const MAX_LABEL_LENGTH: usize = 63;
