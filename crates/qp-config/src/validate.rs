//! Configuration validation errors and semantic validation.

use crate::run::RunConfig;
use qp_common::AuthorName;
use thiserror::Error;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 12,
            ValidationError::ParseError(_) => 13,
            ValidationError::SemanticError(_) => 14,
            ValidationError::MissingField(_) => 15,
            ValidationError::InvalidValue { .. } => 16,
            ValidationError::VersionMismatch { .. } => 17,
        }
    }
}

impl From<ValidationError> for qp_common::Error {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::IoError(_) | ValidationError::ParseError(_) => {
                qp_common::Error::InvalidConfig(err.to_string())
            }
            _ => qp_common::Error::Config(err.to_string()),
        }
    }
}

/// Validate a run configuration semantically.
///
/// Returns the parsed author set in configured order. That order is a
/// contract: it fixes scoring iteration and the arg-max tie-break.
pub fn validate_run_config(config: &RunConfig) -> ValidationResult<Vec<AuthorName>> {
    if config.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: config.schema_version.clone(),
        });
    }

    if config.authors.is_empty() {
        return Err(ValidationError::MissingField(
            "authors (configure at least one candidate author)".to_string(),
        ));
    }

    let mut authors = Vec::with_capacity(config.authors.len());
    for raw in &config.authors {
        let author = AuthorName::parse(raw).ok_or_else(|| ValidationError::InvalidValue {
            field: "authors".to_string(),
            message: format!(
                "{:?} is not a valid author name (must be non-empty, without whitespace or '_')",
                raw
            ),
        })?;
        if authors.contains(&author) {
            return Err(ValidationError::SemanticError(format!(
                "duplicate author {:?} in candidate set",
                raw
            )));
        }
        authors.push(author);
    }

    if config.corpus_dir.is_none() {
        return Err(ValidationError::MissingField(
            "corpus_dir (directory of <author>_<title>.txt reference works)".to_string(),
        ));
    }

    Ok(authors)
}
