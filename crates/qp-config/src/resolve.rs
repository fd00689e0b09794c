//! Configuration resolution and path discovery.
//!
//! Resolution order: CLI arguments → environment variable → XDG path → defaults.
//! CLI field overrides (`--corpus-dir`, `--author`, query arguments) are
//! layered on top of whatever file was found, then the merged result is
//! validated.

use crate::run::RunConfig;
use crate::validate::{validate_run_config, ValidationError, ValidationResult};
use qp_common::AuthorName;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file directly.
const ENV_CONFIG_PATH: &str = "QUILLPRINT_CONFIG";

/// Standard config file name.
const CONFIG_FILENAME: &str = "config.json";

/// Application name for XDG directories.
const APP_NAME: &str = "quillprint";

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Using built-in defaults (no file found).
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// CLI-side inputs to configuration resolution.
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    /// Explicit config file path (`--config`).
    pub config_path: Option<PathBuf>,

    /// Corpus directory override (`--corpus-dir`).
    pub corpus_dir: Option<PathBuf>,

    /// Author set override (`--author`, repeatable; replaces the file's set).
    pub authors: Vec<String>,

    /// Query document override (positional arguments; replaces the file's list).
    pub query_files: Vec<PathBuf>,
}

/// Fully resolved and validated run configuration.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Candidate authors in configured (scoring/tie-break) order.
    pub authors: Vec<AuthorName>,

    /// Directory of reference works.
    pub corpus_dir: PathBuf,

    /// Anonymous documents to score, in report order.
    pub query_files: Vec<PathBuf>,

    /// Where the base config file came from.
    pub source: ConfigSource,

    /// The file that was loaded, if any.
    pub path: Option<PathBuf>,
}

/// Resolve and validate the run configuration.
///
/// An explicit `--config` path that does not exist is a hard error; the
/// env/XDG locations are fallbacks and fall through silently when absent.
pub fn resolve_config(opts: &ConfigOptions) -> ValidationResult<ResolvedConfig> {
    let (base, source, path) = load_base_config(opts.config_path.as_deref())?;

    let mut merged = base;
    if let Some(dir) = &opts.corpus_dir {
        merged.corpus_dir = Some(dir.clone());
    }
    if !opts.authors.is_empty() {
        merged.authors = opts.authors.clone();
    }
    if !opts.query_files.is_empty() {
        merged.query_files = opts.query_files.clone();
    }

    let authors = validate_run_config(&merged)?;
    let corpus_dir = merged
        .corpus_dir
        .expect("validated config has a corpus_dir");

    Ok(ResolvedConfig {
        authors,
        corpus_dir,
        query_files: merged.query_files,
        source,
        path,
    })
}

fn load_base_config(
    cli_path: Option<&Path>,
) -> ValidationResult<(RunConfig, ConfigSource, Option<PathBuf>)> {
    // 1. CLI argument (must exist when given)
    if let Some(path) = cli_path {
        if !path.exists() {
            return Err(ValidationError::IoError(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let config = RunConfig::from_file(path)?;
        return Ok((config, ConfigSource::CliArgument, Some(path.to_path_buf())));
    }

    // 2. Environment variable (direct path)
    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            let config = RunConfig::from_file(&path)?;
            return Ok((config, ConfigSource::Environment, Some(path)));
        }
    }

    // 3. XDG config directory
    if let Some(xdg_config) = dirs::config_dir() {
        let path = xdg_config.join(APP_NAME).join(CONFIG_FILENAME);
        if path.exists() {
            let config = RunConfig::from_file(&path)?;
            return Ok((config, ConfigSource::XdgConfig, Some(path)));
        }
    }

    // 4. Built-in defaults; CLI overrides must supply the rest
    Ok((RunConfig::empty(), ConfigSource::BuiltinDefault, None))
}

/// Get the XDG config directory for quillprint.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}
