//! Run configuration types.
//!
//! These types match the config.json layout: the candidate author set,
//! the corpus directory holding reference works, and the query documents
//! to score against the trained model.

use crate::validate::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete run configuration.
///
/// Every field except `schema_version` may be supplied or overridden on
/// the command line, so file-side fields are optional here; semantic
/// validation decides what is actually required for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Candidate author set, in scoring/tie-break order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Directory of `<author>_<title>.txt` reference works.
    #[serde(default)]
    pub corpus_dir: Option<PathBuf>,

    /// Anonymous documents to attribute, in report order.
    #[serde(default)]
    pub query_files: Vec<PathBuf>,
}

impl RunConfig {
    /// An empty configuration at the current schema version.
    ///
    /// Used when no config file is found; CLI overrides fill it in.
    pub fn empty() -> Self {
        RunConfig {
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            description: None,
            authors: Vec::new(),
            corpus_dir: None,
            query_files: Vec::new(),
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> ValidationResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ValidationError::IoError(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| ValidationError::ParseError(format!("{}: {}", path.display(), e)))
    }
}
