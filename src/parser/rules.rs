//! Grammar rules shared by the local-part and domain-part walkers.
//!
//! Every rule looks at the lexer's current token, may consume tokens, and
//! either pushes warnings or returns the first hard failure.

use crate::lexer::{FWS_KINDS, Lexer, TokenKind, WSP_KINDS};

use super::{InvalidEmail, Warning};

/// `true` when the current token is escaped by a preceding backslash.
///
/// A backslash before atom text is not an escape (`\a` in a quoted string is
/// just text for this check).
pub fn escaped(lexer: &Lexer<'_>) -> bool {
    lexer.previous_is(TokenKind::Backslash) && !lexer.current().is(TokenKind::Atom)
}

/// `true` when the delimiter under the cursor is escaped: an odd run of
/// backslashes right before it (`\\"` closes, `\\\"` does not).
fn escapes_terminator(lexer: &Lexer<'_>) -> bool {
    let run = lexer.tokens()[..lexer.position()]
        .iter()
        .rev()
        .take_while(|token| token.is(TokenKind::Backslash))
        .count();
    run % 2 == 1
}

/// Handles a quoted-string region opened by the current `"`.
///
/// Returns the new "closing quote seen" state. Outside a `"`, or once the
/// region is already closed, the state is returned untouched. On success the
/// cursor sits on the closing quote.
pub fn check_double_quote(
    lexer: &mut Lexer<'_>,
    warnings: &mut Vec<Warning>,
    has_closing_quote: bool,
) -> Result<bool, InvalidEmail> {
    if !lexer.current().is(TokenKind::DQuote) || has_closing_quote {
        return Ok(has_closing_quote);
    }

    warnings.push(Warning::QuotedString);

    let mut closed = lexer.find(TokenKind::DQuote);
    while closed && escapes_terminator(lexer) {
        closed = lexer.find(TokenKind::DQuote);
    }
    if !closed {
        return Err(InvalidEmail::UnclosedDoubleQuote);
    }
    Ok(true)
}

/// Skips a comment opened by the current `(`, nested ones included.
///
/// The cursor is left on the matching `)`.
pub fn parse_comment(
    lexer: &mut Lexer<'_>,
    warnings: &mut Vec<Warning>,
) -> Result<(), InvalidEmail> {
    let mut depth = 1usize;
    while depth > 0 {
        if !lexer.find_any(&[TokenKind::OpenParen, TokenKind::CloseParen]) {
            return Err(InvalidEmail::UnclosedComment);
        }
        if escapes_terminator(lexer) {
            continue;
        }
        if lexer.current().is(TokenKind::OpenParen) {
            depth += 1;
        } else {
            depth -= 1;
        }
    }

    warnings.push(Warning::Comment);

    if lexer.is_next_token(TokenKind::Atom) {
        return Err(InvalidEmail::AtextAfterComment);
    }
    if lexer.is_next_token(TokenKind::At) {
        warnings.push(Warning::CfwsNearAt);
    }
    Ok(())
}

pub fn check_consecutive_dots(lexer: &Lexer<'_>) -> Result<(), InvalidEmail> {
    if lexer.current().is(TokenKind::Dot) && lexer.is_next_token(TokenKind::Dot) {
        return Err(InvalidEmail::ConsecutiveDots);
    }
    Ok(())
}

pub fn is_fws(lexer: &Lexer<'_>) -> bool {
    lexer.current().is_any(&FWS_KINDS) && !escaped(lexer)
}

/// Checks the whitespace token under the cursor. Does not consume it.
///
/// Fold structure is checked first, then what may follow the whitespace.
pub fn parse_fws(lexer: &Lexer<'_>, warnings: &mut Vec<Warning>) -> Result<(), InvalidEmail> {
    check_crlf_in_fws(lexer)?;

    let current = lexer.current().kind;
    if current == TokenKind::Cr {
        return Err(InvalidEmail::CrNoLf);
    }
    if lexer.is_next_token(TokenKind::Atom) && !lexer.previous_is(TokenKind::At) {
        return Err(InvalidEmail::AtextAfterCfws);
    }
    if matches!(current, TokenKind::Lf | TokenKind::Nul) {
        return Err(InvalidEmail::ExpectingCtext);
    }

    if lexer.is_next_token(TokenKind::At) || lexer.previous_is(TokenKind::At) {
        warnings.push(Warning::CfwsNearAt);
    } else {
        warnings.push(Warning::Fws);
    }
    Ok(())
}

fn check_crlf_in_fws(lexer: &Lexer<'_>) -> Result<(), InvalidEmail> {
    if !lexer.current().is(TokenKind::Crlf) {
        return Ok(());
    }
    if lexer.is_next_token(TokenKind::Crlf) {
        return Err(InvalidEmail::ConsecutiveCrlf);
    }
    // a fold must carry at least one WSP
    if !lexer.is_next_token_any(&WSP_KINDS) {
        return Err(InvalidEmail::CrlfAtEnd);
    }
    Ok(())
}
