//! Domain type.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{MAX_LABEL_LENGTH, MAX_LENGTH};

/// Tag that introduces an IPv6 address literal (RFC 5321 section 4.1.3).
const IPV6_TAG: &str = "IPv6:";

/// A validated domain: either an RFC 1123 host name or a bracketed
/// address literal such as `[192.168.1.1]` or `[IPv6:2001:db8::1]`.
///
/// The canonical name is the validated input, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    name: String,
    literal: Option<IpAddr>,
}

impl Domain {
    /// Creates a domain from a host name or address literal.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, contains an invalid
    /// label, or is a malformed address literal.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let literal = validate(&name).inspect_err(|e| {
            tracing::debug!(domain = %name, reason = %e, "Rejected domain");
        })?;
        Ok(Self { name, literal })
    }

    /// Creates an address-literal domain from an IP address.
    #[must_use]
    pub fn from_ip(addr: IpAddr) -> Self {
        let name = match addr {
            IpAddr::V4(v4) => format!("[{v4}]"),
            IpAddr::V6(v6) => format!("[{IPV6_TAG}{v6}]"),
        };
        Self {
            name,
            literal: Some(addr),
        }
    }

    /// Returns the canonical textual form.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this domain is a bracketed address literal.
    #[must_use]
    pub const fn is_address_literal(&self) -> bool {
        self.literal.is_some()
    }

    /// Returns the IP address of an address literal.
    #[must_use]
    pub const fn ip_addr(&self) -> Option<IpAddr> {
        self.literal
    }

    /// Returns the dot-separated labels of a host name.
    ///
    /// Address literals have no labels.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.literal
            .is_none()
            .then(|| self.name.split('.'))
            .into_iter()
            .flatten()
    }
}

fn validate(name: &str) -> Result<Option<IpAddr>> {
    if name.is_empty() {
        return Err(Error::Empty);
    }

    let length = name.chars().count();
    if length > MAX_LENGTH {
        return Err(Error::TooLong(length));
    }

    if let Some(interior) = name.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        tracing::trace!(interior, "Parsing address literal");
        return parse_address_literal(interior).map(Some);
    }

    for label in name.split('.') {
        validate_label(label)?;
    }
    Ok(None)
}

fn parse_address_literal(interior: &str) -> Result<IpAddr> {
    if interior.is_empty() {
        return Err(Error::EmptyAddressLiteral);
    }

    let tagged = interior
        .get(..IPV6_TAG.len())
        .filter(|tag| tag.eq_ignore_ascii_case(IPV6_TAG))
        .map(|_| &interior[IPV6_TAG.len()..]);

    match tagged {
        Some(v6) => parse_ipv6(v6, interior),
        None if interior.contains(':') => parse_ipv6(interior, interior),
        None => interior
            .parse::<Ipv4Addr>()
            .map(IpAddr::V4)
            .map_err(|_| Error::InvalidIpv4(interior.to_string())),
    }
}

fn parse_ipv6(addr: &str, interior: &str) -> Result<IpAddr> {
    addr.parse::<Ipv6Addr>()
        .map(IpAddr::V6)
        .map_err(|_| Error::InvalidIpv6(interior.to_string()))
}

/// Checks one label: 1-63 letters, digits or hyphens, no hyphen at either end.
fn validate_label(label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(Error::EmptyLabel);
    }
    if label.chars().count() > MAX_LABEL_LENGTH {
        return Err(Error::LabelTooLong(label.to_string()));
    }

    let valid_chars = label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid_chars || label.starts_with('-') || label.ends_with('-') {
        return Err(Error::InvalidLabel(label.to_string()));
    }
    Ok(())
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Domain {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Domain {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Domain {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.name)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Domain {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::new(name).map_err(serde::de::Error::custom)
    }
}
