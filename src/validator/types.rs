use crate::parser::{InvalidEmail, Warning};

/// `Relaxed` accepte les adresses avec warnings, `Strict` les rejette.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    Strict,
    #[default]
    Relaxed,
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub original: String,
    pub local: String,
    pub domain: String,
    pub mode: ValidationMode,
    pub valid: bool,
    /// Vide si l'adresse a été rejetée par une erreur de syntaxe.
    pub warnings: Vec<Warning>,
    pub error: Option<InvalidEmail>,
    pub reasons: Vec<String>,
}

impl ValidationReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
