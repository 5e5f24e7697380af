mod types;

pub use types::{ValidationMode, ValidationReport};

use crate::parser::{DomainPart, InvalidEmail, LocalPart, Warning, parse_part};

/// RFC 5321 §4.5.3.1.3 (path limit minus the angle brackets)
const MAX_ADDRESS_LEN: usize = 254;

/// Parses a whole address: local part, then domain part.
///
/// The separator is the last `@`; the local walker sees the text up to and
/// including it, the domain walker the text starting on it. Warnings come
/// back in local-then-domain order.
pub fn parse_email(email: &str) -> Result<Vec<Warning>, InvalidEmail> {
    let at = email.rfind('@').ok_or(InvalidEmail::NoDomainPart)?;

    let mut warnings = parse_part::<LocalPart>(&email[..=at])?;
    warnings.extend(parse_part::<DomainPart>(&email[at..])?);

    if email.len() > MAX_ADDRESS_LEN {
        warnings.push(Warning::TooLong);
    }
    Ok(warnings)
}

pub fn validate_email(email: &str, mode: ValidationMode) -> ValidationReport {
    // décomposer même si invalide, pour le rapport
    let (local, domain) = email.rsplit_once('@').unwrap_or((email, ""));

    let (valid, warnings, error, reasons) = match parse_email(email) {
        Ok(warnings) => {
            let valid = mode == ValidationMode::Relaxed || warnings.is_empty();
            let reasons = if valid {
                Vec::new()
            } else {
                warnings.iter().map(ToString::to_string).collect()
            };
            (valid, warnings, None, reasons)
        }
        Err(err) => (false, Vec::new(), Some(err), vec![err.to_string()]),
    };

    #[cfg(feature = "with-tracing")]
    tracing::debug!(
        email,
        valid,
        warnings = warnings.len(),
        error = error.map(InvalidEmail::code),
        "address validated"
    );

    ValidationReport {
        original: email.to_string(),
        local: local.to_string(),
        domain: domain.to_string(),
        mode,
        valid,
        warnings,
        error,
        reasons,
    }
}

/// Validation réutilisable avec un mode fixé.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator {
    mode: ValidationMode,
}

impl EmailValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn validate(&self, email: &str) -> ValidationReport {
        validate_email(email, self.mode)
    }

    pub fn is_valid(&self, email: &str) -> bool {
        self.validate(email).valid
    }
}

#[cfg(test)]
mod tests;
