use crate::lexer::{FWS_KINDS, Lexer, TokenKind, WSP_KINDS};

use super::rules::{
    check_consecutive_dots, check_double_quote, escaped, is_fws, parse_comment, parse_fws,
};
use super::{InvalidEmail, PartParser, Warning};

/// RFC 5321 §4.5.3.1.1
const MAX_LOCAL_LEN: usize = 64;

/// Tokens that may not follow a closed quoted string.
const AFTER_QUOTE_FORBIDDEN: [TokenKind; 7] = [
    TokenKind::Atom,
    TokenKind::Dot,
    TokenKind::DQuote,
    TokenKind::Backslash,
    TokenKind::OpenBracket,
    TokenKind::CloseBracket,
    TokenKind::Colon,
];

/// Local-part grammar: dot-atom or quoted-string, with CFWS around it.
///
/// Stops on the separating `@` (which must be the last token) or at the end.
pub struct LocalPart;

impl PartParser for LocalPart {
    fn walk(lexer: &mut Lexer<'_>, warnings: &mut Vec<Warning>) -> Result<(), InvalidEmail> {
        match lexer.current().kind {
            TokenKind::At | TokenKind::Eoi => return Err(InvalidEmail::NoLocalPart),
            TokenKind::Dot => return Err(InvalidEmail::DotAtStart),
            _ => {}
        }

        let mut has_closing_quote = false;
        let mut seen_text = false;
        let mut trailing_dot = false;
        let mut pending_fold = false;

        let end = loop {
            let token = *lexer.current();
            if has_closing_quote && token.is_any(&AFTER_QUOTE_FORBIDDEN) {
                return Err(InvalidEmail::ExpectingAt);
            }

            match token.kind {
                TokenKind::Eoi => {
                    if pending_fold {
                        return Err(InvalidEmail::CrlfAtEnd);
                    }
                    check_ends_cleanly(seen_text || has_closing_quote, trailing_dot)?;
                    break token.offset;
                }
                TokenKind::At => {
                    if lexer.is_next_token(TokenKind::At) {
                        return Err(InvalidEmail::ConsecutiveAt);
                    }
                    if !lexer.is_next_token(TokenKind::Eoi) {
                        return Err(InvalidEmail::ExpectingAtext);
                    }
                    check_ends_cleanly(seen_text || has_closing_quote, trailing_dot)?;
                    break token.offset;
                }
                TokenKind::DQuote => {
                    if seen_text {
                        return Err(InvalidEmail::ExpectingAtext);
                    }
                    has_closing_quote = check_double_quote(lexer, warnings, has_closing_quote)?;
                }
                TokenKind::OpenParen => parse_comment(lexer, warnings)?,
                TokenKind::CloseParen => return Err(InvalidEmail::UnopenedComment),
                TokenKind::Dot => {
                    check_consecutive_dots(lexer)?;
                    // CFWS ne compte pas comme texte autour du point
                    if !seen_text {
                        return Err(InvalidEmail::DotAtStart);
                    }
                    trailing_dot = true;
                }
                TokenKind::Backslash => {
                    // seul un blanc peut être échappé hors quoted-string
                    if !lexer.is_next_token_any(&WSP_KINDS) {
                        return Err(InvalidEmail::ExpectingAtext);
                    }
                    warnings.push(Warning::QuotedPair);
                    seen_text = true;
                    trailing_dot = false;
                }
                TokenKind::Atom => {
                    if !token.text.chars().all(is_atext) {
                        return Err(InvalidEmail::ExpectingAtext);
                    }
                    seen_text = true;
                    trailing_dot = false;
                }
                TokenKind::OpenBracket | TokenKind::CloseBracket | TokenKind::Colon => {
                    return Err(InvalidEmail::ExpectingAtext);
                }
                TokenKind::Space
                | TokenKind::HTab
                | TokenKind::Cr
                | TokenKind::Lf
                | TokenKind::Crlf
                | TokenKind::Nul => {
                    if is_fws(lexer) || token.is(TokenKind::Nul) {
                        parse_fws(lexer, warnings)?;
                        pending_fold |= token.is(TokenKind::Crlf);
                    } else if escaped(lexer) {
                        seen_text = true;
                    }
                }
            }

            if !token.is_any(&FWS_KINDS) {
                pending_fold = false;
            }
            lexer.next();
        };

        if end > MAX_LOCAL_LEN {
            warnings.push(Warning::LocalTooLong);
        }
        Ok(())
    }
}

fn check_ends_cleanly(has_content: bool, trailing_dot: bool) -> Result<(), InvalidEmail> {
    if !has_content {
        return Err(InvalidEmail::NoLocalPart);
    }
    if trailing_dot {
        return Err(InvalidEmail::DotAtEnd);
    }
    Ok(())
}

/// atext RFC 5322 (+ UTF-8 non ASCII, RFC 6531)
pub(crate) fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || (!c.is_ascii() && !c.is_control())
        || matches!(
            c,
            '!' | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '-'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}
