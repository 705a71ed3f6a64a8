//! End-to-end parsing and serialization tests.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rfc5321::{Domain, EmailAddress, Error, LocalPart, MAX_LOCAL_PART_LENGTH};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const DOT_ATOM: &str = "[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]{1,10}(\\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]{1,10}){0,4}";
const HOST_NAME: &str = "[a-z]([a-z0-9-]{0,10}[a-z0-9])?(\\.[a-z]([a-z0-9-]{0,10}[a-z0-9])?){0,3}";

#[test]
fn test_documented_examples() {
    init_tracing();

    let addr = EmailAddress::parse("a@b").unwrap();
    assert_eq!(addr.display_name(), None);
    assert_eq!(addr.local_part().as_str(), "a");
    assert_eq!(addr.domain().name(), "b");

    let addr = EmailAddress::parse("Jane Doe <jane@example.com>").unwrap();
    assert_eq!(addr.display_name(), Some("Jane Doe"));
    assert_eq!(addr.address_value(), "jane@example.com");

    let addr = EmailAddress::parse("\"Jane, Doe\" <jane@example.com>").unwrap();
    assert_eq!(addr.display_name(), Some("Jane, Doe"));

    assert_eq!(
        EmailAddress::parse("plainaddress"),
        Err(Error::MissingAtSign)
    );
}

#[test]
fn test_error_messages() {
    init_tracing();

    assert_eq!(
        EmailAddress::parse("plainaddress").unwrap_err().to_string(),
        "Email address must contain @"
    );
    assert_eq!(
        EmailAddress::parse("a..b@example.com").unwrap_err().to_string(),
        "Invalid local-part format (before @)"
    );
    assert_eq!(
        EmailAddress::parse("\"a\"b\"@example.com")
            .unwrap_err()
            .to_string(),
        "Invalid quoted string format in local-part"
    );
    assert_eq!(
        LocalPart::new("x".repeat(65)).unwrap_err().to_string(),
        "Local-part length 65 exceeds maximum of 64"
    );
    let long = format!("<{}@{}>", "x".repeat(100), "y".repeat(154));
    assert_eq!(
        EmailAddress::parse(&long).unwrap_err().to_string(),
        "Total length 255 exceeds maximum of 254"
    );
}

#[test]
fn test_error_classification() {
    assert!(Error::InvalidDotAtom.is_local_part_error());
    assert!(Error::LocalPartTooLong(65).is_local_part_error());
    assert!(!Error::MissingAtSign.is_local_part_error());
    assert!(!Error::TotalLengthExceeded(255).is_local_part_error());
}

#[test]
fn test_components_reassemble() {
    let addr = EmailAddress::new(
        Some("Postmaster".to_string()),
        LocalPart::new("postmaster").unwrap(),
        Domain::new("[IPv6:2001:db8::1]").unwrap(),
    );
    assert_eq!(addr.to_string(), "Postmaster <postmaster@[IPv6:2001:db8::1]>");
    assert_eq!(EmailAddress::parse(&addr.to_string()).unwrap(), addr);
}

proptest! {
    #[test]
    fn dot_atoms_are_accepted(s in DOT_ATOM) {
        prop_assert!(s.chars().count() <= MAX_LOCAL_PART_LENGTH);
        let local = LocalPart::new(s.clone()).unwrap();
        prop_assert_eq!(local.as_str(), s.as_str());
        prop_assert!(!local.is_quoted());
    }

    #[test]
    fn over_long_local_parts_are_rejected(s in "\\PC{65,100}") {
        let length = s.chars().count();
        prop_assert_eq!(LocalPart::new(s), Err(Error::LocalPartTooLong(length)));
    }

    #[test]
    fn parsing_never_panics(s in "\\PC{0,80}") {
        let _ = LocalPart::new(s.clone());
        let _ = EmailAddress::parse(&s);
    }

    #[test]
    fn round_trip(
        name in prop::option::of("[A-Za-z0-9 ,.:;()<>@\"\\\\]{0,20}"),
        local in DOT_ATOM,
        domain in HOST_NAME,
    ) {
        let addr = EmailAddress::new(
            name,
            LocalPart::new(local).unwrap(),
            Domain::new(domain).unwrap(),
        );
        let reparsed = EmailAddress::parse(&addr.to_string()).unwrap();
        prop_assert_eq!(reparsed, addr);
    }

    #[test]
    fn quoted_local_parts_round_trip(
        interior in "([A-Za-z0-9 ,.:;()<>]|\\\\\"|\\\\\\\\){1,20}",
        domain in HOST_NAME,
    ) {
        let input = format!("\"{interior}\"@{domain}");
        let addr = EmailAddress::parse(&input).unwrap();
        prop_assert!(addr.local_part().is_quoted());
        prop_assert_eq!(addr.to_string(), input);
    }
}
