//! Per-author word-frequency model.
//!
//! `train` folds tokenized reference documents into an immutable
//! [`FrequencyModel`]: global vocabulary counts, per-author word counts,
//! and document-count priors. Counts stay raw; probabilities are derived
//! lazily at scoring time so no normalized state can go stale.

use crate::corpus::{count_words, WordCounts};
use qp_common::{AuthorName, Error, Result};
use std::collections::BTreeMap;

/// A tokenized training document attributed to one author.
#[derive(Debug, Clone)]
pub struct TrainingDocument {
    pub author: AuthorName,
    pub tokens: Vec<String>,
}

impl TrainingDocument {
    pub fn new(author: AuthorName, tokens: Vec<String>) -> Self {
        TrainingDocument { author, tokens }
    }
}

/// Immutable word statistics built from one training pass.
///
/// Invariants (checked by the test suite, relied on by scoring):
/// - every word in any author table appears in the vocabulary, and the
///   vocabulary count equals the sum of the per-author counts;
/// - every configured author has at least one training document, so
///   prior probabilities are well defined and sum to 1.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    /// Configured author order; fixes scoring iteration and tie-break.
    authors: Vec<AuthorName>,

    /// Word → total occurrence count across all authors.
    vocabulary: WordCounts,

    /// Author → word → occurrence count within that author's works.
    author_word_counts: BTreeMap<AuthorName, WordCounts>,

    /// Author → number of training documents.
    priors: BTreeMap<AuthorName, f64>,
}

impl FrequencyModel {
    /// Candidate authors in configured order.
    pub fn authors(&self) -> &[AuthorName] {
        &self.authors
    }

    /// Global word → count table.
    pub fn vocabulary(&self) -> &WordCounts {
        &self.vocabulary
    }

    /// Word counts for one author's training documents.
    pub fn word_counts(&self, author: &AuthorName) -> Option<&WordCounts> {
        self.author_word_counts.get(author)
    }

    /// Number of training documents attributed to `author`.
    pub fn prior_documents(&self, author: &AuthorName) -> f64 {
        self.priors.get(author).copied().unwrap_or(0.0)
    }

    /// Total number of training documents.
    pub fn total_documents(&self) -> f64 {
        self.priors.values().sum()
    }

    /// Prior probability of `author`: document share of the corpus.
    pub fn prior_probability(&self, author: &AuthorName) -> f64 {
        self.prior_documents(author) / self.total_documents()
    }

    /// Prior probabilities for every author, in configured order.
    pub fn prior_probabilities(&self) -> Vec<(AuthorName, f64)> {
        self.authors
            .iter()
            .map(|a| (a.clone(), self.prior_probability(a)))
            .collect()
    }
}

/// Build a [`FrequencyModel`] from tokenized training documents.
///
/// Each document increments its author's prior by one; each token
/// increments both the global vocabulary and the author's word table by
/// one. Fails with [`Error::EmptyCorpus`] if any configured author ends
/// up with zero documents (its prior would be undefined).
pub fn train<I>(authors: &[AuthorName], documents: I) -> Result<FrequencyModel>
where
    I: IntoIterator<Item = TrainingDocument>,
{
    if authors.is_empty() {
        return Err(Error::Config(
            "no authors configured for training".to_string(),
        ));
    }

    let mut vocabulary = WordCounts::new();
    let mut author_word_counts: BTreeMap<AuthorName, WordCounts> = BTreeMap::new();
    let mut priors: BTreeMap<AuthorName, f64> = BTreeMap::new();
    for author in authors {
        author_word_counts.insert(author.clone(), WordCounts::new());
        priors.insert(author.clone(), 0.0);
    }

    for document in documents {
        let Some(prior) = priors.get_mut(&document.author) else {
            return Err(Error::Config(format!(
                "training document attributed to unconfigured author {}",
                document.author
            )));
        };
        *prior += 1.0;

        let by_author = author_word_counts
            .get_mut(&document.author)
            .expect("author table initialized above");
        for (word, count) in count_words(document.tokens) {
            *vocabulary.entry(word.clone()).or_insert(0.0) += count;
            *by_author.entry(word).or_insert(0.0) += count;
        }
    }

    for author in authors {
        if priors[author] == 0.0 {
            return Err(Error::EmptyCorpus {
                author: author.to_string(),
            });
        }
    }

    Ok(FrequencyModel {
        authors: authors.to_vec(),
        vocabulary,
        author_word_counts,
        priors,
    })
}
