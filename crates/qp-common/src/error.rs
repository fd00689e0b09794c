//! Error types for Quillprint.
//!
//! Structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Remediation suggestions for humans
//!
//! # Human-Facing Output
//!
//! Errors can be formatted for human consumption with headline, reason, and fix:
//! ```text
//! ✗ Malformed Corpus File Name
//!   Reason: malformed corpus file name: "austen.txt"
//!   Fix: Rename the file to <author>_<title>.txt or remove it from the corpus directory.
//! ```
//!
//! # Machine-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 22,
//!   "category": "corpus",
//!   "message": "author austen has no training documents",
//!   "context": { "author": "austen" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Quillprint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Configuration file errors (author set, corpus/query paths).
    Config,
    /// Corpus discovery and training-input errors.
    Corpus,
    /// Scoring and numerical errors.
    Inference,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Corpus => write!(f, "corpus"),
            ErrorCategory::Inference => write!(f, "inference"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Quillprint.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid configuration file: {0}")]
    InvalidConfig(String),

    // Corpus errors (20-29)
    #[error("malformed corpus file name: {name:?}")]
    MalformedFilename { name: String },

    #[error("unreadable file {}: {reason}", path.display())]
    UnreadableFile { path: PathBuf, reason: String },

    #[error("author {author} has no training documents")]
    EmptyCorpus { author: String },

    // Inference errors (30-39)
    #[error("degenerate vocabulary: {0}")]
    DegenerateVocabulary(String),

    #[error("numerical instability detected: {0}")]
    NumericalInstability(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Configuration errors
    /// - 20-29: Corpus errors
    /// - 30-39: Inference errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidConfig(_) => 11,
            Error::MalformedFilename { .. } => 20,
            Error::UnreadableFile { .. } => 21,
            Error::EmptyCorpus { .. } => 22,
            Error::DegenerateVocabulary(_) => 30,
            Error::NumericalInstability(_) => 31,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::InvalidConfig(_) => ErrorCategory::Config,

            Error::MalformedFilename { .. }
            | Error::UnreadableFile { .. }
            | Error::EmptyCorpus { .. } => ErrorCategory::Corpus,

            Error::DegenerateVocabulary(_) | Error::NumericalInstability(_) => {
                ErrorCategory::Inference
            }

            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Config(_) => "Configuration Error",
            Error::InvalidConfig(_) => "Invalid Configuration File",
            Error::MalformedFilename { .. } => "Malformed Corpus File Name",
            Error::UnreadableFile { .. } => "Unreadable File",
            Error::EmptyCorpus { .. } => "Empty Training Corpus",
            Error::DegenerateVocabulary(_) => "Degenerate Vocabulary",
            Error::NumericalInstability(_) => "Numerical Instability",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Error",
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Config(_) => {
                "Run 'qp check' to validate configuration, or check syntax in the config file."
            }
            Error::InvalidConfig(_) => {
                "Check the JSON syntax of the config file, or pass --corpus-dir/--author to override it."
            }
            Error::MalformedFilename { .. } => {
                "Rename the file to <author>_<title>.txt or remove it from the corpus directory."
            }
            Error::UnreadableFile { .. } => {
                "Check that the file exists, is readable, and is valid UTF-8 text."
            }
            Error::EmptyCorpus { .. } => {
                "Add at least one <author>_<title>.txt reference work for this author, or drop the author from the configured set."
            }
            Error::DegenerateVocabulary(_) => {
                "The training corpus contains no usable words. Check that reference works are non-empty text."
            }
            Error::NumericalInstability(_) => {
                "Internal numerical issue; please report it with the corpus layout that triggered it."
            }
            Error::Io(_) => {
                "Check disk space, permissions, and that configured directories exist. Retry the operation."
            }
            Error::Json(_) => {
                "Invalid JSON in file. Check syntax with 'cat <file> | jq .' or restore from backup."
            }
        }
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Additional structured context (e.g., author, file path).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        match err {
            Error::MalformedFilename { name } => {
                context.insert("file_name".to_string(), serde_json::json!(name));
            }
            Error::UnreadableFile { path, .. } => {
                context.insert("path".to_string(), serde_json::json!(path));
            }
            Error::EmptyCorpus { author } => {
                context.insert("author".to_string(), serde_json::json!(author));
            }
            _ => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            context,
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}

/// Result of a batch operation that may have partial success.
///
/// Query scoring uses this: one unreadable query document fails that
/// document only, not the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult<T> {
    /// Successfully completed items.
    pub succeeded: Vec<T>,

    /// Failed items with their errors.
    pub failed: Vec<BatchError>,

    /// Summary statistics.
    pub summary: BatchSummary,
}

/// A single error in a batch operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchError {
    /// Identifier of the failed item (query document name).
    pub item_id: String,

    /// The structured error.
    pub error: StructuredError,
}

/// Summary of batch operation results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Total items attempted.
    pub total: usize,

    /// Number of successful items.
    pub succeeded: usize,

    /// Number of failed items.
    pub failed: usize,

    /// Whether all items succeeded.
    pub all_succeeded: bool,
}

impl<T> BatchResult<T> {
    /// Create an empty batch result.
    pub fn new() -> Self {
        BatchResult {
            succeeded: Vec::new(),
            failed: Vec::new(),
            summary: BatchSummary {
                total: 0,
                succeeded: 0,
                failed: 0,
                all_succeeded: true,
            },
        }
    }

    /// Add a success to the batch result.
    pub fn add_success(&mut self, item: T) {
        self.succeeded.push(item);
        self.summary.succeeded += 1;
        self.summary.total += 1;
    }

    /// Add a failure to the batch result.
    pub fn add_failure(&mut self, item_id: impl Into<String>, error: &Error) {
        self.failed.push(BatchError {
            item_id: item_id.into(),
            error: StructuredError::from(error),
        });
        self.summary.failed += 1;
        self.summary.total += 1;
        self.summary.all_succeeded = false;
    }
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}
