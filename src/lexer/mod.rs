//! Tokenizer for address text.
//!
//! [`Lexer::new`] turns the input into a token stream once; the parser then
//! moves a cursor over it. The stream always ends with a
//! [`TokenKind::Eoi`] token so [`Lexer::current`] can always be read.

mod token;

pub use token::{FWS_KINDS, Token, TokenKind, WSP_KINDS};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: tokenize(input),
            position: 0,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> &Token<'a> {
        &self.tokens[self.position]
    }

    /// Token just behind the cursor, `None` on the first token.
    pub fn previous(&self) -> Option<&Token<'a>> {
        self.position
            .checked_sub(1)
            .map(|index| &self.tokens[index])
    }

    pub fn previous_is(&self, kind: TokenKind) -> bool {
        self.previous().is_some_and(|token| token.is(kind))
    }

    /// Token after the cursor; the end-of-input token once there is none.
    pub fn lookahead(&self) -> &Token<'a> {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.position + 1).min(last)]
    }

    pub fn is_at_end(&self) -> bool {
        self.current().is(TokenKind::Eoi)
    }

    /// Moves the cursor one token forward. No-op on end of input.
    pub fn next(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub fn is_next_token(&self, kind: TokenKind) -> bool {
        self.lookahead().is(kind)
    }

    pub fn is_next_token_any(&self, kinds: &[TokenKind]) -> bool {
        self.lookahead().is_any(kinds)
    }

    /// Consumes tokens until one of `kind` is under the cursor.
    ///
    /// The current token is skipped (callers stand on the opening delimiter).
    /// Returns `false` with the cursor on end of input when nothing matched.
    pub fn find(&mut self, kind: TokenKind) -> bool {
        self.find_any(&[kind])
    }

    pub fn find_any(&mut self, kinds: &[TokenKind]) -> bool {
        loop {
            self.next();
            if self.current().is_any(kinds) {
                return true;
            }
            if self.is_at_end() {
                return false;
            }
        }
    }
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut atom_start: Option<usize> = None;
    let mut chars = input.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let Some(mut kind) = TokenKind::of_special(c) else {
            atom_start.get_or_insert(offset);
            continue;
        };

        if let Some(start) = atom_start.take() {
            tokens.push(Token::new(TokenKind::Atom, &input[start..offset], start));
        }

        let mut end = offset + c.len_utf8();
        if kind == TokenKind::Cr && chars.next_if(|&(_, next)| next == '\n').is_some() {
            kind = TokenKind::Crlf;
            end += 1;
        }
        tokens.push(Token::new(kind, &input[offset..end], offset));
    }

    if let Some(start) = atom_start {
        tokens.push(Token::new(TokenKind::Atom, &input[start..], start));
    }
    tokens.push(Token::new(TokenKind::Eoi, "", input.len()));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input).tokens().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_is_only_eoi() {
        let lexer = Lexer::new("");
        assert_eq!(lexer.tokens().len(), 1);
        assert!(lexer.is_at_end());
        assert!(lexer.previous().is_none());
    }

    #[test]
    fn splits_specials_and_atoms() {
        use TokenKind::*;
        assert_eq!(
            kinds("a.b@ex-ample.com"),
            vec![Atom, Dot, Atom, At, Atom, Dot, Atom, Eoi]
        );
        assert_eq!(
            kinds("\"a b\"(c)[d]:\\"),
            vec![
                DQuote, Atom, Space, Atom, DQuote, OpenParen, Atom, CloseParen, OpenBracket,
                Atom, CloseBracket, Colon, Backslash, Eoi
            ]
        );
    }

    #[test]
    fn crlf_is_a_single_token() {
        use TokenKind::*;
        assert_eq!(kinds("\r\n \r\r\n\n\0\t"), vec![Crlf, Space, Cr, Crlf, Lf, Nul, HTab, Eoi]);
        let lexer = Lexer::new("a\r\n");
        assert_eq!(lexer.tokens()[1].text, "\r\n");
        assert_eq!(lexer.tokens()[2].offset, 3);
    }

    #[test]
    fn non_ascii_stays_in_atoms() {
        let lexer = Lexer::new("инфо@письмо.рф");
        assert_eq!(lexer.tokens()[0].text, "инфо");
        assert_eq!(lexer.tokens()[2].text, "письмо");
        assert_eq!(lexer.tokens()[2].offset, "инфо@".len());
    }

    #[test]
    fn cursor_moves_and_stops_at_end() {
        let mut lexer = Lexer::new("a.");
        assert!(lexer.previous().is_none());
        assert!(lexer.is_next_token(TokenKind::Dot));
        lexer.next();
        assert!(lexer.previous_is(TokenKind::Atom));
        assert!(lexer.is_next_token_any(&[TokenKind::Eoi, TokenKind::At]));
        lexer.next();
        lexer.next();
        lexer.next();
        assert!(lexer.is_at_end());
        assert_eq!(lexer.position(), 2);
        assert_eq!(*lexer.lookahead(), TokenKind::Eoi);
    }

    #[test]
    fn find_lands_on_match() {
        let mut lexer = Lexer::new("\"abc\"@x");
        assert!(lexer.find(TokenKind::DQuote));
        assert_eq!(lexer.position(), 2);
        assert!(lexer.is_next_token(TokenKind::At));
    }

    #[test]
    fn find_skips_current_token() {
        let mut lexer = Lexer::new("\"\"");
        assert!(lexer.find(TokenKind::DQuote));
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn find_failure_leaves_cursor_at_end() {
        let mut lexer = Lexer::new("(abc");
        assert!(!lexer.find(TokenKind::CloseParen));
        assert!(lexer.is_at_end());
        assert!(!lexer.find(TokenKind::CloseParen));
    }

    proptest! {
        #[test]
        fn token_texts_rebuild_input(input in "\\PC*|[a.@\"\\\\() \\t\\r\\n\\x00\\[\\]:]{0,40}") {
            let lexer = Lexer::new(&input);
            let rebuilt: String = lexer.tokens().iter().map(|t| t.text).collect();
            prop_assert_eq!(rebuilt, input.clone());
            prop_assert_eq!(lexer.tokens().last().map(|t| t.kind), Some(TokenKind::Eoi));
            for token in lexer.tokens() {
                prop_assert_eq!(&input[token.offset..token.offset + token.text.len()], token.text);
            }
        }
    }
}
