//! Quillprint common types, author identity, and errors.
//!
//! This crate provides foundational types shared across qp-core modules:
//! - Validated author identity
//! - Common error types with stable codes
//! - Output format specifications

pub mod author;
pub mod error;
pub mod output;

pub use author::{split_file_stem, AuthorName, AUTHOR_DELIMITER};
pub use error::{BatchResult, Error, Result, StructuredError};
pub use output::OutputFormat;

/// Schema version for machine-readable payloads (reports, config).
pub const SCHEMA_VERSION: &str = "1";
