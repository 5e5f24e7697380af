#![forbid(unsafe_code)]
//! mailsyntax — validation syntaxique d'adresses e-mail (RFC 5321/5322)
//!
//! Un [`Lexer`] découpe l'adresse en tokens, puis les walkers [`LocalPart`]
//! et [`DomainPart`] appliquent les règles de grammaire partagées
//! ([`parser::rules`]). Le résultat est soit une liste de [`Warning`]
//! (adresse acceptée), soit une erreur [`InvalidEmail`].
//!
//! ```
//! use mailsyntax::{ValidationMode, Warning, validate_email};
//!
//! let report = validate_email("test@[127.0.0.1]", ValidationMode::Relaxed);
//! assert!(report.valid);
//! assert_eq!(report.warnings, vec![Warning::AddressLiteral]);
//! ```

pub mod lexer;
pub mod parser;
pub mod validator;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{DomainPart, InvalidEmail, LocalPart, PartParser, Warning, parse_part};
pub use validator::{
    EmailValidator, ValidationMode, ValidationReport, parse_email, validate_email,
};
