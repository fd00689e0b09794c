//! End-to-end run orchestration: discover → tokenize → train → score.
//!
//! Training must fully complete before any classification; a training
//! failure aborts the run. Query documents are scored independently
//! against the frozen model, so one unreadable query fails only its own
//! batch entry.

use crate::corpus::{count_words, discover_corpus, read_document, tokenize};
use crate::inference::{best_of, score};
use crate::model::{train, FrequencyModel, TrainingDocument};
use crate::report::{QueryReport, RunReport};
use chrono::Utc;
use qp_common::{Error, Result};
use qp_config::ResolvedConfig;
use std::path::Path;
use tracing::{debug, error, info};

/// Discover the corpus, read and tokenize every reference work, and
/// train the frequency model.
pub fn train_model(config: &ResolvedConfig) -> Result<FrequencyModel> {
    let corpus = discover_corpus(&config.corpus_dir, &config.authors)?;
    info!(
        works = corpus.len(),
        authors = config.authors.len(),
        corpus_dir = %config.corpus_dir.display(),
        "training on reference corpus"
    );

    let mut documents = Vec::with_capacity(corpus.len());
    for file in corpus {
        debug!(work = %file.path.display(), author = %file.author, "reading reference work");
        let text = read_document(&file.path)?;
        documents.push(TrainingDocument::new(file.author, tokenize(&text)));
    }

    let model = train(&config.authors, documents)?;
    info!(
        vocabulary = model.vocabulary().len(),
        documents = model.total_documents(),
        "model trained"
    );
    Ok(model)
}

/// Read, tokenize, and score a single query document.
pub fn score_document(path: &Path, model: &FrequencyModel) -> Result<QueryReport> {
    let text = read_document(path)?;
    let counts = count_words(tokenize(&text));
    let scores = score(&counts, model)?;
    let best = best_of(&scores)
        .ok_or_else(|| Error::Config("no authors configured for classification".to_string()))?
        .author
        .clone();

    Ok(QueryReport {
        document: path.display().to_string(),
        scores,
        best_estimate: best,
    })
}

/// Execute a full attribution run.
///
/// Returns `Err` only for training-phase failures; per-document query
/// failures are folded into the report's batch result.
pub fn execute_run(config: &ResolvedConfig) -> Result<RunReport> {
    let model = train_model(config)?;
    info!(priors = ?model.prior_probabilities(), "author priors");

    let mut report = RunReport::new(Utc::now(), model.prior_probabilities());
    for path in &config.query_files {
        match score_document(path, &model) {
            Ok(query) => {
                debug!(document = %path.display(), best = %query.best_estimate, "scored query document");
                report.results.add_success(query);
            }
            Err(err) => {
                error!(document = %path.display(), error = %err, "failed to score query document");
                report.results.add_failure(path.display().to_string(), &err);
            }
        }
    }

    Ok(report)
}
