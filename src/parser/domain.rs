use std::net::{Ipv4Addr, Ipv6Addr};

use crate::lexer::{FWS_KINDS, Lexer, TokenKind};

use super::rules::{check_consecutive_dots, is_fws, parse_comment, parse_fws};
use super::{InvalidEmail, PartParser, Warning};

/// RFC 5321 §4.5.3.1.2
const MAX_DOMAIN_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

/// Tokens allowed after a domain literal.
const AFTER_LITERAL: [TokenKind; 8] = [
    TokenKind::Eoi,
    TokenKind::OpenParen,
    TokenKind::Space,
    TokenKind::HTab,
    TokenKind::Cr,
    TokenKind::Lf,
    TokenKind::Crlf,
    TokenKind::Nul,
];

/// Domain grammar: dot-separated labels or a `[...]` literal, with CFWS.
///
/// Starts on the separating `@` when the part was cut from a full address.
pub struct DomainPart;

impl PartParser for DomainPart {
    fn walk(lexer: &mut Lexer<'_>, warnings: &mut Vec<Warning>) -> Result<(), InvalidEmail> {
        if lexer.current().is(TokenKind::At) {
            lexer.next();
        }
        let start = lexer.current().offset;
        match lexer.current().kind {
            TokenKind::At => return Err(InvalidEmail::ConsecutiveAt),
            TokenKind::Eoi => return Err(InvalidEmail::NoDomainPart),
            TokenKind::Dot => return Err(InvalidEmail::DotAtStart),
            _ => {}
        }

        let mut seen_label = false;
        let mut trailing_dot = false;
        let mut literal = false;
        let mut pending_fold = false;

        loop {
            let token = *lexer.current();
            if literal && !token.is_any(&AFTER_LITERAL) {
                return Err(InvalidEmail::ExpectingAtext);
            }

            match token.kind {
                TokenKind::Eoi => {
                    if pending_fold {
                        return Err(InvalidEmail::CrlfAtEnd);
                    }
                    if !seen_label && !literal {
                        return Err(InvalidEmail::NoDomainPart);
                    }
                    if trailing_dot {
                        return Err(InvalidEmail::DotAtEnd);
                    }
                    break;
                }
                TokenKind::Atom => {
                    check_label(token.text, warnings)?;
                    seen_label = true;
                    trailing_dot = false;
                }
                TokenKind::Dot => {
                    check_consecutive_dots(lexer)?;
                    if !seen_label {
                        return Err(InvalidEmail::DotAtStart);
                    }
                    trailing_dot = true;
                }
                TokenKind::OpenParen => parse_comment(lexer, warnings)?,
                TokenKind::CloseParen => return Err(InvalidEmail::UnopenedComment),
                TokenKind::OpenBracket => {
                    if seen_label {
                        return Err(InvalidEmail::ExpectingAtext);
                    }
                    parse_domain_literal(lexer, warnings)?;
                    literal = true;
                }
                TokenKind::At => {
                    if lexer.previous_is(TokenKind::At) {
                        return Err(InvalidEmail::ConsecutiveAt);
                    }
                    return Err(InvalidEmail::ExpectingAtext);
                }
                TokenKind::Backslash
                | TokenKind::DQuote
                | TokenKind::CloseBracket
                | TokenKind::Colon => return Err(InvalidEmail::ExpectingAtext),
                TokenKind::Space
                | TokenKind::HTab
                | TokenKind::Cr
                | TokenKind::Lf
                | TokenKind::Crlf
                | TokenKind::Nul => {
                    if is_fws(lexer) || token.is(TokenKind::Nul) {
                        parse_fws(lexer, warnings)?;
                    }
                    pending_fold |= token.is(TokenKind::Crlf);
                }
            }

            if !token.is_any(&FWS_KINDS) {
                pending_fold = false;
            }
            lexer.next();
        }

        if lexer.input().len() - start > MAX_DOMAIN_LEN {
            warnings.push(Warning::DomainTooLong);
        }
        Ok(())
    }
}

/// Labels: ASCII alphanumeric, '-' or UTF-8 (IDN left as is), no '-' at the edges.
fn check_label(label: &str, warnings: &mut Vec<Warning>) -> Result<(), InvalidEmail> {
    let chars_ok = label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || (!c.is_ascii() && !c.is_control()));
    if !chars_ok {
        return Err(InvalidEmail::ExpectingAtext);
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(InvalidEmail::DomainHyphened);
    }
    if label.len() > MAX_LABEL_LEN {
        warnings.push(Warning::LabelTooLong);
    }
    Ok(())
}

/// Consumes `[ ... ]`, leaving the cursor on `]`.
fn parse_domain_literal(
    lexer: &mut Lexer<'_>,
    warnings: &mut Vec<Warning>,
) -> Result<(), InvalidEmail> {
    let mut content = String::new();

    loop {
        lexer.next();
        let token = *lexer.current();
        match token.kind {
            TokenKind::CloseBracket => break,
            TokenKind::Eoi => return Err(InvalidEmail::UnclosedDomainLiteral),
            TokenKind::Atom => {
                if token.text.chars().any(char::is_control) {
                    return Err(InvalidEmail::ExpectingDtext);
                }
                content.push_str(token.text);
            }
            TokenKind::Dot | TokenKind::Colon => content.push_str(token.text),
            TokenKind::Space | TokenKind::HTab => {
                warnings.push(Warning::Fws);
                content.push(' ');
            }
            _ => return Err(InvalidEmail::ExpectingDtext),
        }
    }

    if is_address_literal(&content) {
        warnings.push(Warning::AddressLiteral);
    } else {
        warnings.push(Warning::DomainLiteral);
    }
    Ok(())
}

fn is_address_literal(content: &str) -> bool {
    match content.get(..5) {
        Some(tag) if tag.eq_ignore_ascii_case("IPv6:") => {
            content[5..].parse::<Ipv6Addr>().is_ok()
        }
        _ => content.parse::<Ipv4Addr>().is_ok(),
    }
}
