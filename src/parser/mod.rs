//! Grammar walkers over the token stream.
//!
//! [`LocalPart`] and [`DomainPart`] drive the shared [`rules`] in the order
//! of their RFC 5322 production. Each walk gets its own [`Lexer`] and its own
//! warning list; the first hard failure ends it.

mod domain;
mod error;
mod local;
pub mod rules;
mod warning;

pub use domain::DomainPart;
pub use error::InvalidEmail;
pub use local::LocalPart;
pub use warning::Warning;

use crate::lexer::Lexer;

/// One address part grammar.
pub trait PartParser {
    /// Walks the whole stream, pushing warnings as it goes.
    fn walk(lexer: &mut Lexer<'_>, warnings: &mut Vec<Warning>) -> Result<(), InvalidEmail>;
}

/// Tokenizes `text` and walks it with the `P` grammar.
pub fn parse_part<P: PartParser>(text: &str) -> Result<Vec<Warning>, InvalidEmail> {
    let mut lexer = Lexer::new(text);
    let mut warnings = Vec::new();

    if let Err(err) = P::walk(&mut lexer, &mut warnings) {
        #[cfg(feature = "with-tracing")]
        tracing::trace!(
            part = text,
            position = lexer.position(),
            code = err.code(),
            "address part rejected"
        );
        return Err(err);
    }
    Ok(warnings)
}
