use std::fmt;

/// Soft findings: the address is accepted but uses a legacy or unusual form.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// RFC 5321 quoted-string local part.
    QuotedString,
    /// Escaped character outside a quoted string (obs-qp).
    QuotedPair,
    Comment,
    /// CFWS right before or after the `@` separator.
    CfwsNearAt,
    /// Folding whitespace.
    Fws,
    DomainLiteral,
    /// Domain literal holding an IPv4 or `IPv6:` address.
    AddressLiteral,
    LocalTooLong,
    LabelTooLong,
    DomainTooLong,
    TooLong,
}

impl Warning {
    pub fn code(self) -> &'static str {
        match self {
            Self::QuotedString => "quoted_string",
            Self::QuotedPair => "quoted_pair",
            Self::Comment => "comment",
            Self::CfwsNearAt => "cfws_near_at",
            Self::Fws => "fws",
            Self::DomainLiteral => "domain_literal",
            Self::AddressLiteral => "address_literal",
            Self::LocalTooLong => "local_too_long",
            Self::LabelTooLong => "label_too_long",
            Self::DomainTooLong => "domain_too_long",
            Self::TooLong => "too_long",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::QuotedString => "quoted string local part",
            Self::QuotedPair => "deprecated quoted pair",
            Self::Comment => "comment present",
            Self::CfwsNearAt => "deprecated CFWS near '@'",
            Self::Fws => "folding whitespace",
            Self::DomainLiteral => "domain literal",
            Self::AddressLiteral => "address literal",
            Self::LocalTooLong => "local part longer than 64 octets",
            Self::LabelTooLong => "domain label longer than 63 octets",
            Self::DomainTooLong => "domain longer than 255 octets",
            Self::TooLong => "address longer than 254 octets",
        };
        f.write_str(msg)
    }
}
