use ferrous_dig_domain::{DnsClass, DomainError, Question, RecordType, ServerIdentifier};
use std::net::IpAddr;

#[test]
fn test_question_parse_valid() {
    let question = Question::parse("example.com", RecordType::MX).unwrap();

    assert_eq!(&*question.name, "example.com");
    assert_eq!(question.record_type, RecordType::MX);
    assert_eq!(question.class, DnsClass::IN);
    assert_eq!(question.fqdn(), "example.com.");
}

#[test]
fn test_question_parse_keeps_trailing_dot() {
    let question = Question::parse("example.com.", RecordType::A).unwrap();
    assert_eq!(question.fqdn(), "example.com.");
}

#[test]
fn test_question_parse_rejects_bad_names() {
    assert!(matches!(
        Question::parse("", RecordType::A),
        Err(DomainError::InvalidDomainName(_))
    ));
    assert!(Question::parse("a..b", RecordType::A).is_err());

    let long_label = format!("{}.com", "x".repeat(64));
    assert!(Question::parse(&long_label, RecordType::A).is_err());
}

#[test]
fn test_question_with_name_keeps_type_and_class() {
    let original = Question::new("www.example.com", RecordType::MX, DnsClass::CH);
    let renamed = original.with_name("other.example.com");

    assert_eq!(&*renamed.name, "other.example.com");
    assert_eq!(renamed.record_type, RecordType::MX);
    assert_eq!(renamed.class, DnsClass::CH);
}

#[test]
fn test_question_display() {
    let question = Question::internet("example.com", RecordType::A);
    assert_eq!(question.to_string(), "example.com.\t\tIN\tA");
}

#[test]
fn test_server_identifier_parse_address() {
    let v4 = ServerIdentifier::parse("198.41.0.4").unwrap();
    assert_eq!(v4, ServerIdentifier::Address("198.41.0.4".parse::<IpAddr>().unwrap()));
    assert_eq!(v4.hostname(), None);

    let v6 = ServerIdentifier::parse("[2001:503:ba3e::2:30]").unwrap();
    assert!(matches!(v6, ServerIdentifier::Address(IpAddr::V6(_))));
}

#[test]
fn test_server_identifier_parse_hostname() {
    let host = ServerIdentifier::parse("a.gtld-servers.net.").unwrap();

    assert_eq!(host.hostname(), Some("a.gtld-servers.net"));
    assert_eq!(host.to_string(), "a.gtld-servers.net");
}

#[test]
fn test_server_identifier_parse_rejects_garbage() {
    assert!(ServerIdentifier::parse("").is_none());
    assert!(ServerIdentifier::parse(".").is_none());
    assert!(ServerIdentifier::parse("two words").is_none());
    assert!("".parse::<ServerIdentifier>().is_err());
}
