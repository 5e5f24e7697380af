use thiserror::Error;

/// Hard syntax failure. The first one raised ends the validation.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidEmail {
    #[error("unclosed double quote")]
    UnclosedDoubleQuote,
    #[error("unclosed comment")]
    UnclosedComment,
    #[error("atext directly after a comment")]
    AtextAfterComment,
    #[error("atext directly after folding whitespace")]
    AtextAfterCfws,
    #[error("CR without LF")]
    CrNoLf,
    #[error("consecutive CRLF")]
    ConsecutiveCrlf,
    #[error("CRLF at the end")]
    CrlfAtEnd,
    #[error("expected ctext")]
    ExpectingCtext,
    #[error("consecutive dots")]
    ConsecutiveDots,

    #[error("no local part")]
    NoLocalPart,
    #[error("no domain part")]
    NoDomainPart,
    #[error("consecutive '@'")]
    ConsecutiveAt,
    #[error("expected atext")]
    ExpectingAtext,
    #[error("expected '@' after quoted string")]
    ExpectingAt,
    #[error("expected dtext")]
    ExpectingDtext,
    #[error("dot at start")]
    DotAtStart,
    #[error("dot at end")]
    DotAtEnd,
    #[error("closing parenthesis without opening one")]
    UnopenedComment,
    #[error("unclosed domain literal")]
    UnclosedDomainLiteral,
    #[error("domain label starts or ends with '-'")]
    DomainHyphened,
}

impl InvalidEmail {
    pub fn code(self) -> &'static str {
        match self {
            Self::UnclosedDoubleQuote => "unclosed_double_quote",
            Self::UnclosedComment => "unclosed_comment",
            Self::AtextAfterComment => "atext_after_comment",
            Self::AtextAfterCfws => "atext_after_cfws",
            Self::CrNoLf => "cr_no_lf",
            Self::ConsecutiveCrlf => "consecutive_crlf",
            Self::CrlfAtEnd => "crlf_at_end",
            Self::ExpectingCtext => "expecting_ctext",
            Self::ConsecutiveDots => "consecutive_dots",
            Self::NoLocalPart => "no_local_part",
            Self::NoDomainPart => "no_domain_part",
            Self::ConsecutiveAt => "consecutive_at",
            Self::ExpectingAtext => "expecting_atext",
            Self::ExpectingAt => "expecting_at",
            Self::ExpectingDtext => "expecting_dtext",
            Self::DotAtStart => "dot_at_start",
            Self::DotAtEnd => "dot_at_end",
            Self::UnopenedComment => "unopened_comment",
            Self::UnclosedDomainLiteral => "unclosed_domain_literal",
            Self::DomainHyphened => "domain_hyphened",
        }
    }
}
