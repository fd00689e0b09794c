//! Attribution report rendering.
//!
//! stdout carries the report payload (human lines or one JSON document);
//! logs and per-document failure details go to stderr. The human line
//! format is a stable contract:
//!
//! ```text
//! Log Score: <document> by <author> : <score>
//! Best estimate: <document> : <author>
//! ```

use crate::exit_codes::ExitCode;
use crate::inference::AuthorScore;
use chrono::{DateTime, Utc};
use qp_common::{AuthorName, BatchResult, Result, SCHEMA_VERSION};
use serde::Serialize;
use std::fmt::Write as _;

/// Prior probability of one candidate author.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorPrior {
    pub author: AuthorName,
    pub probability: f64,
}

/// Scores and best estimate for one query document.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    /// Document name as configured.
    pub document: String,

    /// One score per candidate author, in configured order.
    pub scores: Vec<AuthorScore>,

    /// Arg-max author (first-wins on ties).
    pub best_estimate: AuthorName,
}

/// Complete payload for one attribution run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub schema_version: &'static str,

    pub started_at: DateTime<Utc>,

    /// Document-share priors, in configured author order.
    pub priors: Vec<AuthorPrior>,

    /// Per-document results; failures keep their structured errors.
    pub results: BatchResult<QueryReport>,
}

impl RunReport {
    pub fn new(started_at: DateTime<Utc>, priors: Vec<(AuthorName, f64)>) -> Self {
        RunReport {
            schema_version: SCHEMA_VERSION,
            started_at,
            priors: priors
                .into_iter()
                .map(|(author, probability)| AuthorPrior {
                    author,
                    probability,
                })
                .collect(),
            results: BatchResult::new(),
        }
    }

    /// Render the contractual human report for scored documents.
    pub fn render_human(&self) -> String {
        let mut out = String::new();
        for query in &self.results.succeeded {
            for score in &query.scores {
                let _ = writeln!(
                    out,
                    "Log Score: {} by {} : {}",
                    query.document, score.author, score.log_score
                );
            }
            let _ = writeln!(
                out,
                "Best estimate: {} : {}",
                query.document, query.best_estimate
            );
        }
        out
    }

    /// Serialize the full report to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Exit code implied by the batch outcome.
    pub fn exit_code(&self) -> ExitCode {
        if self.results.summary.all_succeeded {
            ExitCode::Clean
        } else {
            ExitCode::PartialFail
        }
    }
}
