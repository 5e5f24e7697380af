/// Kinds of tokens recognised in an address.
///
/// Every special character is its own token; anything else is grouped into
/// maximal [`TokenKind::Atom`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of ordinary characters (atext, labels, dtext...).
    Atom,
    Dot,
    At,
    DQuote,
    Backslash,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Colon,
    Space,
    HTab,
    /// Carriage return not followed by a line feed.
    Cr,
    Lf,
    Crlf,
    Nul,
    /// End of input. Always the last token of a stream.
    Eoi,
}

/// Folding whitespace candidates.
pub const FWS_KINDS: [TokenKind; 5] = [
    TokenKind::HTab,
    TokenKind::Space,
    TokenKind::Cr,
    TokenKind::Lf,
    TokenKind::Crlf,
];

/// Whitespace allowed right after a CRLF fold.
pub const WSP_KINDS: [TokenKind; 2] = [TokenKind::Space, TokenKind::HTab];

impl TokenKind {
    pub fn is_any(self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self)
    }

    pub(crate) fn of_special(c: char) -> Option<Self> {
        let kind = match c {
            '.' => Self::Dot,
            '@' => Self::At,
            '"' => Self::DQuote,
            '\\' => Self::Backslash,
            '(' => Self::OpenParen,
            ')' => Self::CloseParen,
            '[' => Self::OpenBracket,
            ']' => Self::CloseBracket,
            ':' => Self::Colon,
            ' ' => Self::Space,
            '\t' => Self::HTab,
            '\r' => Self::Cr,
            '\n' => Self::Lf,
            '\0' => Self::Nul,
            _ => return None,
        };
        Some(kind)
    }
}

/// A token and the slice of input it matched.
///
/// Equality only looks at [`Token::kind`]; the text is there to rebuild
/// literal content (domain literals, length checks).
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset in the lexed input.
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, offset: usize) -> Self {
        Self { kind, text, offset }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_any(&self, kinds: &[TokenKind]) -> bool {
        self.kind.is_any(kinds)
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Token<'_> {}

impl PartialEq<TokenKind> for Token<'_> {
    fn eq(&self, other: &TokenKind) -> bool {
        self.kind == *other
    }
}
