//! Structured logging foundation for qp-core.
//!
//! Dual-mode logging:
//! - Human-readable console output for interactive use
//! - Machine-parseable JSONL for scripted workflows
//!
//! stdout is reserved for report payloads; all log output goes to
//! stderr. Respects the QP_LOG, RUST_LOG, and QP_LOG_FORMAT environment
//! variables, with CLI flags taking final precedence.

pub mod config;

pub use config::{LogConfig, LogFormat, LogLevel};

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Initialize the logging subsystem.
///
/// Call once at startup before any logging occurs. A second call (e.g.
/// from tests sharing a process) is a no-op.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_env("QP_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("qp_core={}", config.level)));

    match config.format {
        LogFormat::Human => {
            let use_ansi = config.color && std::io::stderr().is_terminal();
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(use_ansi)
                .with_target(false)
                .try_init();
        }
        LogFormat::Jsonl => {
            let _ = tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .try_init();
        }
    }
}
