use insta::assert_snapshot;
use proptest::prelude::*;

use super::*;

const INVALID: &[&str] = &[
    "nolocalpart.com",
    "test@example.com test",
    "user  name@example.com",
    "user   name@example.com",
    "example.@example.co.uk",
    "example@example@example.co.uk",
    "(test_exampel@example.fr}",
    "example(example)example@example.co.uk",
    ".example@localhost",
    "ex\\ample@localhost",
    "example@local\\host",
    "example@localhost.",
    "user name@example.com",
    "username@ example . com",
    "example@(fake}.com",
    "example@(fake.com",
    "username@example,com",
    "usern,ame@example.com",
    "user[na]me@example.com",
    "\"\"\"@iana.org",
    "\"\\\"@iana.org",
    "\"test\"test@iana.org",
    "\"test\"\"test\"@iana.org",
    "\"test\".\"test\"@iana.org",
    "\"test\".test@iana.org",
    "\"test\"\0@iana.org",
    "\"test\\\"@iana.org",
    "\r\ntest@iana.org",
    "\r\n test@iana.org",
    "\r\n \r\ntest@iana.org",
    "\r\n \r\n test@iana.org",
    "test@iana.org \r\n",
    "test@iana.org \r\n ",
    "test@iana.org \r\n \r\n",
    "test@iana.org \r\n\r\n",
    "test@iana.org  \r\n\r\n ",
    "test@iana/icann.org",
    "test@foo;bar.com",
    "\u{1}a@test.com",
];

const VALID: &[&str] = &[
    "example@example.com",
    "example@example.co.uk",
    "example_underscore@example.fr",
    "example@localhost",
    "exam'ple@example.com",
    "exam\\ ple@example.com",
    "example((example))@fakedfake.co.uk",
    "example@faked(fake).co.uk",
    "example+@example.com",
    "инфо@письмо.рф",
    "\"username\"@example.com",
    "\"user,name\"@example.com",
    "\"user name\"@example.com",
    "\"user@name\"@example.com",
    "\"\\a\"@iana.org",
    "\"test\\ test\"@iana.org",
    "\"\"@iana.org",
    "\"\\\"\"@iana.org",
    "\"\\\\\"@iana.org",
];

fn codes(warnings: &[Warning]) -> String {
    warnings
        .iter()
        .map(|w| w.code())
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn rejects_invalid_addresses() {
    let validator = EmailValidator::new();
    for email in INVALID {
        let report = validator.validate(email);
        assert!(!report.valid, "{email:?} should be invalid");
        assert!(report.error.is_some(), "{email:?} should carry an error");
        assert!(report.warnings.is_empty());
    }
}

#[test]
fn accepts_valid_addresses() {
    let validator = EmailValidator::new();
    for email in VALID {
        let report = validator.validate(email);
        assert!(report.valid, "{email:?} should be valid: {:?}", report.reasons);
    }
}

#[test]
fn plain_address_has_no_warnings() {
    let report = validate_email("example@example.com", ValidationMode::Relaxed);
    assert!(report.valid);
    assert!(!report.has_warnings());
    assert_eq!(report.local, "example");
    assert_eq!(report.domain, "example.com");
}

#[test]
fn domain_literal_is_valid_with_warnings() {
    let validator = EmailValidator::new();
    let report = validator.validate("test@[127.0.0.1]");
    assert!(report.valid);
    assert!(report.has_warnings());
    assert_eq!(report.warnings, vec![Warning::AddressLiteral]);
    assert_eq!(
        parse_email("test@[127.0.0.0]"),
        Ok(vec![Warning::AddressLiteral])
    );
}

#[test]
fn reports_the_failure_kind() {
    let cases = [
        ("\"abc@example.com", InvalidEmail::UnclosedDoubleQuote),
        ("a..b@example.com", InvalidEmail::ConsecutiveDots),
        ("test@iana.org \r\n\r\n", InvalidEmail::ConsecutiveCrlf),
        ("test\r\n\r\n @iana.org", InvalidEmail::ConsecutiveCrlf),
        ("test@iana.org\r\n", InvalidEmail::CrlfAtEnd),
        ("test@iana.org \r\n ", InvalidEmail::CrlfAtEnd),
        ("\r\ntest@iana.org", InvalidEmail::CrlfAtEnd),
        ("te\rst@iana.org", InvalidEmail::CrNoLf),
        ("test\n@iana.org", InvalidEmail::ExpectingCtext),
        ("\"test\"\0@iana.org", InvalidEmail::ExpectingCtext),
        ("user name@example.com", InvalidEmail::AtextAfterCfws),
        ("example(example)example@example.co.uk", InvalidEmail::AtextAfterComment),
        ("example@(fake.com", InvalidEmail::UnclosedComment),
        ("nolocalpart.com", InvalidEmail::NoDomainPart),
        ("@example.com", InvalidEmail::NoLocalPart),
        ("test@", InvalidEmail::NoDomainPart),
        ("a@@example.com", InvalidEmail::ConsecutiveAt),
        ("\"test\"test@iana.org", InvalidEmail::ExpectingAt),
        ("user@-example.com", InvalidEmail::DomainHyphened),
        ("user@[1.2.3.4", InvalidEmail::UnclosedDomainLiteral),
        ("\"\\\\\\\"@iana.org", InvalidEmail::UnclosedDoubleQuote),
        (" @x.com", InvalidEmail::NoLocalPart),
        ("(c)@x.com", InvalidEmail::NoLocalPart),
        ("a@ ", InvalidEmail::NoDomainPart),
        ("a@(c)", InvalidEmail::NoDomainPart),
        ("a.(c)@x.com", InvalidEmail::DotAtEnd),
        ("a. @x.com", InvalidEmail::DotAtEnd),
        ("(c).a@x.com", InvalidEmail::DotAtStart),
        (" .a@x.com", InvalidEmail::DotAtStart),
    ];
    for (email, expected) in cases {
        assert_eq!(parse_email(email), Err(expected), "{email:?}");
        let report = validate_email(email, ValidationMode::Relaxed);
        assert_eq!(report.error, Some(expected));
        assert_eq!(report.reasons, vec![expected.to_string()]);
    }
}

#[test]
fn warnings_keep_local_then_domain_order() {
    let warnings = parse_email("\"a b\"(c)@ example.com(d)").expect("valid address");
    assert_snapshot!(codes(&warnings), @"quoted_string,comment,cfws_near_at,cfws_near_at,comment");
}

#[test]
fn nested_comment_warnings() {
    let warnings = parse_email("example((example))@fakedfake.co.uk").expect("valid address");
    assert_snapshot!(codes(&warnings), @"comment,cfws_near_at");
}

#[test]
fn escaped_space_is_a_quoted_pair() {
    assert_eq!(
        parse_email("exam\\ ple@example.com"),
        Ok(vec![Warning::QuotedPair])
    );
}

#[test]
fn strict_mode_rejects_warnings() {
    let strict = EmailValidator::with_mode(ValidationMode::Strict);
    let report = strict.validate("\"username\"@example.com");
    assert!(!report.valid);
    assert_eq!(report.error, None);
    assert_eq!(report.warnings, vec![Warning::QuotedString]);
    assert_eq!(report.reasons, vec!["quoted string local part".to_string()]);

    assert!(strict.is_valid("example@example.com"));
    assert!(EmailValidator::new().is_valid("\"username\"@example.com"));
}

#[test]
fn length_limits_are_warnings() {
    let local = "a".repeat(65);
    let report = validate_email(&format!("{local}@example.com"), ValidationMode::Relaxed);
    assert!(report.valid);
    assert_eq!(report.warnings, vec![Warning::LocalTooLong]);

    let label = "b".repeat(60);
    let domain = [label.as_str(); 5].join(".");
    let warnings = parse_email(&format!("a@{domain}")).expect("valid address");
    assert_eq!(warnings, vec![Warning::DomainTooLong, Warning::TooLong]);
}

#[test]
fn report_keeps_original_parts() {
    let report = validate_email("\"user@name\"@example.com", ValidationMode::Strict);
    assert_eq!(report.original, "\"user@name\"@example.com");
    assert_eq!(report.local, "\"user@name\"");
    assert_eq!(report.domain, "example.com");
    assert_eq!(report.mode, ValidationMode::Strict);
}

proptest! {
    #[test]
    fn dot_atoms_are_clean(
        local in "[a-z0-9_+-]{1,12}(\\.[a-z0-9_+-]{1,12}){0,3}",
        domain in "[a-z0-9]{1,12}(\\.[a-z]{2,6}){1,3}",
    ) {
        let email = format!("{local}@{domain}");
        prop_assert_eq!(parse_email(&email), Ok(vec![]));
    }

    #[test]
    fn closed_quoted_strings_never_fail(content in "[a-z0-9 @.,()\\[\\]:]{0,20}") {
        let email = format!("\"{content}\"@example.com");
        prop_assert_eq!(parse_email(&email), Ok(vec![Warning::QuotedString]));
    }

    #[test]
    fn dot_placement_decides_verdict(
        local in "[a.]{1,8}",
        cfws in prop::sample::select(vec!["", " ", "(c)"]),
        domain in "[a.]{1,8}",
    ) {
        let clean = |part: &str| {
            !part.starts_with('.') && !part.ends_with('.') && !part.contains("..")
        };
        let email = format!("{local}{cfws}@{domain}");
        let report = validate_email(&email, ValidationMode::Relaxed);
        prop_assert_eq!(report.valid, clean(&local) && clean(&domain), "{:?}", email);
    }

    #[test]
    fn never_panics(email in "\\PC{0,40}|[a@.\"\\\\() \\t\\r\\n\\[\\]]{0,24}") {
        let report = validate_email(&email, ValidationMode::Relaxed);
        prop_assert_eq!(report.valid, report.error.is_none());
    }
}
