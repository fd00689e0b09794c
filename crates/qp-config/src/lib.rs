//! Quillprint configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for config.json
//! - Config resolution (CLI → env → XDG → defaults)
//! - Semantic validation of the candidate author set

pub mod resolve;
pub mod run;
pub mod validate;

pub use resolve::{resolve_config, ConfigOptions, ConfigSource, ResolvedConfig};
pub use run::RunConfig;
pub use validate::{ValidationError, ValidationResult};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1";
