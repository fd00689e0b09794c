//! Naive Bayes log-score computation.
//!
//! For each scorable query word the classifier accumulates, per author,
//! the log of the occurrence-weighted likelihood ratio
//! `cnt * P(w|author) / P(w)`, then folds in the log-prior. The count
//! multiplies the ratio inside the logarithm and a zero conditional
//! probability contributes nothing; both behaviors are a compatibility
//! contract with the reference results and are kept verbatim, as is the
//! per-word overwrite of the running score cell.
//!
//! Terms are evaluated in log domain (`ln cnt + ln P(w|a) - ln P(w)`), so
//! vanishingly small probabilities cannot underflow inside the ratio.

use crate::corpus::WordCounts;
use crate::model::FrequencyModel;
use qp_common::{AuthorName, Error, Result};
use serde::Serialize;

/// Words of this many characters or fewer are skipped entirely:
/// short function words are presumed to carry no authorial signal.
pub const SHORT_WORD_MAX_LEN: usize = 3;

/// Final log-score for one author on one query document.
///
/// Comparable only across authors for the same document; not a
/// calibrated probability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorScore {
    pub author: AuthorName,
    pub log_score: f64,
}

fn ln_checked(value: f64, what: &str) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::NumericalInstability(format!(
            "cannot take log of {what} = {value}"
        )));
    }
    Ok(value.ln())
}

/// Score a query document's word counts against every candidate author.
///
/// Returns one [`AuthorScore`] per author, in the model's configured
/// author order. Words are skipped when shorter than four characters or
/// absent from the training vocabulary; a skipped word never moves any
/// author's score, so a query with no scorable words comes back as
/// exactly `ln(prior)` per author.
pub fn score(query_counts: &WordCounts, model: &FrequencyModel) -> Result<Vec<AuthorScore>> {
    let authors = model.authors();

    let vocabulary_total: f64 = model.vocabulary().values().sum();
    let author_totals: Vec<f64> = authors
        .iter()
        .map(|a| {
            model
                .word_counts(a)
                .map(|counts| counts.values().sum())
                .unwrap_or(0.0)
        })
        .collect();

    let mut ln_priors = Vec::with_capacity(authors.len());
    for author in authors {
        let prior = model.prior_probability(author);
        ln_priors.push(ln_checked(prior, &format!("prior probability of {author}"))?);
    }

    let mut log_probs = vec![0.0; authors.len()];
    // A query whose every word is skipped must still report ln(prior).
    let mut scores = ln_priors.clone();

    for (word, &cnt) in query_counts {
        if word.chars().count() <= SHORT_WORD_MAX_LEN {
            continue;
        }
        let Some(&word_total) = model.vocabulary().get(word) else {
            continue;
        };

        if vocabulary_total <= 0.0 {
            return Err(Error::DegenerateVocabulary(
                "total vocabulary count is zero".to_string(),
            ));
        }
        let ln_p_word = word_total.ln() - vocabulary_total.ln();

        for (i, author) in authors.iter().enumerate() {
            let author_total = author_totals[i];
            if author_total <= 0.0 {
                return Err(Error::DegenerateVocabulary(format!(
                    "author {author} has zero training word volume"
                )));
            }

            let author_count = model
                .word_counts(author)
                .and_then(|counts| counts.get(word))
                .copied()
                .unwrap_or(0.0);
            if author_count > 0.0 {
                let ln_p_given_author = author_count.ln() - author_total.ln();
                log_probs[i] += cnt.ln() + ln_p_given_author - ln_p_word;
            }
            // Overwritten after every word; only the last write is meaningful.
            scores[i] = log_probs[i] + ln_priors[i];
        }
    }

    Ok(authors
        .iter()
        .zip(scores)
        .map(|(author, log_score)| AuthorScore {
            author: author.clone(),
            log_score,
        })
        .collect())
}

/// Pick the best-scoring author for a query document.
///
/// Ties break to the first author in configured order, so the result is
/// deterministic for a fixed author set.
pub fn classify(query_counts: &WordCounts, model: &FrequencyModel) -> Result<AuthorName> {
    let scores = score(query_counts, model)?;
    best_of(&scores)
        .map(|s| s.author.clone())
        .ok_or_else(|| Error::Config("no authors configured for classification".to_string()))
}

/// First-wins arg-max over author scores.
pub fn best_of(scores: &[AuthorScore]) -> Option<&AuthorScore> {
    let mut best: Option<&AuthorScore> = None;
    for candidate in scores {
        match best {
            Some(current) if candidate.log_score > current.log_score => best = Some(candidate),
            None => best = Some(candidate),
            _ => {}
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{count_words, tokenize};
    use crate::model::{train, TrainingDocument};
    use proptest::prelude::*;

    fn author(name: &str) -> AuthorName {
        AuthorName::parse(name).unwrap()
    }

    fn doc(name: &str, text: &str) -> TrainingDocument {
        TrainingDocument::new(author(name), tokenize(text))
    }

    fn query(text: &str) -> WordCounts {
        count_words(tokenize(text))
    }

    /// Two authors with distinctive vocabularies; the melville-flavored
    /// query must come back attributed to melville.
    #[test]
    fn test_distinctive_vocabulary_scenario() {
        let authors = vec![author("melville"), author("wilde")];
        let model = train(
            &authors,
            vec![
                doc("melville", "whale whale whale harpoon"),
                doc("wilde", "parlor parlor teacup saucer"),
            ],
        )
        .unwrap();

        let best = classify(&query("whale harpoon harpoon"), &model).unwrap();
        assert_eq!(best, author("melville"));
    }

    #[test]
    fn test_short_words_only_yields_ln_prior_exactly() {
        let authors = vec![author("melville"), author("wilde")];
        let model = train(
            &authors,
            vec![
                doc("melville", "whale whale harpoon"),
                doc("melville", "harpoon chowder"),
                doc("wilde", "parlor teacup"),
            ],
        )
        .unwrap();

        let scores = score(&query("a an the it"), &model).unwrap();
        assert_eq!(scores[0].log_score, (2.0f64 / 3.0).ln());
        assert_eq!(scores[1].log_score, (1.0f64 / 3.0).ln());
    }

    #[test]
    fn test_skip_policy_is_idempotent() {
        let authors = vec![author("melville"), author("wilde")];
        let model = train(
            &authors,
            vec![
                doc("melville", "whale whale whale harpoon"),
                doc("wilde", "parlor parlor teacup saucer"),
            ],
        )
        .unwrap();

        let base = score(&query("whale harpoon"), &model).unwrap();
        // Short words and words unseen in training must not move scores.
        let noisy = score(&query("whale harpoon a an the zeppelin"), &model).unwrap();

        for (b, n) in base.iter().zip(&noisy) {
            assert_eq!(b.author, n.author);
            assert_eq!(b.log_score, n.log_score);
        }
    }

    #[test]
    fn test_scores_match_reference_formula() {
        let authors = vec![author("melville"), author("wilde")];
        let model = train(
            &authors,
            vec![
                doc("melville", "whale whale whale harpoon"),
                doc("wilde", "parlor parlor teacup whale"),
            ],
        )
        .unwrap();

        // whale: vocab 4, melville 3/4, wilde 1/4; p_word = 4/8.
        // Query has whale twice: term = ln(2 * p_cond / p_word).
        let scores = score(&query("whale whale"), &model).unwrap();

        let p_word: f64 = 4.0 / 8.0;
        let expected_melville = (2.0 * (3.0 / 4.0) / p_word).ln() + 0.5f64.ln();
        let expected_wilde = (2.0 * (1.0 / 4.0) / p_word).ln() + 0.5f64.ln();

        assert!((scores[0].log_score - expected_melville).abs() < 1e-12);
        assert!((scores[1].log_score - expected_wilde).abs() < 1e-12);
    }

    #[test]
    fn test_zero_conditional_probability_contributes_nothing() {
        let authors = vec![author("melville"), author("wilde")];
        let model = train(
            &authors,
            vec![
                doc("melville", "whale whale whale whale"),
                doc("wilde", "parlor parlor parlor parlor"),
            ],
        )
        .unwrap();

        // "whale" is absent from wilde's table: wilde's score must stay at
        // ln(prior), not collapse to -inf.
        let scores = score(&query("whale"), &model).unwrap();
        assert_eq!(scores[1].log_score, 0.5f64.ln());
        assert!(scores[0].log_score > scores[1].log_score);
    }

    #[test]
    fn test_single_author_always_wins() {
        let authors = vec![author("melville")];
        let model = train(&authors, vec![doc("melville", "whale harpoon chowder")]).unwrap();

        assert_eq!(
            classify(&query("parlor teacup"), &model).unwrap(),
            author("melville")
        );
    }

    #[test]
    fn test_classify_is_deterministic() {
        let authors = vec![author("melville"), author("wilde")];
        let model = train(
            &authors,
            vec![
                doc("melville", "whale whale harpoon ocean ocean"),
                doc("wilde", "parlor teacup saucer ocean"),
            ],
        )
        .unwrap();

        let q = query("ocean ocean whale teacup");
        let first = classify(&q, &model).unwrap();
        for _ in 0..10 {
            assert_eq!(classify(&q, &model).unwrap(), first);
        }
    }

    #[test]
    fn test_tie_breaks_to_first_configured_author() {
        // Symmetric corpus: both authors end with identical scores.
        let authors = vec![author("wilde"), author("melville")];
        let model = train(
            &authors,
            vec![
                doc("wilde", "teacup teacup"),
                doc("melville", "harpoon harpoon"),
            ],
        )
        .unwrap();

        let scores = score(&query("a an the"), &model).unwrap();
        assert_eq!(scores[0].log_score, scores[1].log_score);
        assert_eq!(classify(&query("a an the"), &model).unwrap(), author("wilde"));
    }

    #[test]
    fn test_training_document_round_trip() {
        let authors = vec![author("melville"), author("wilde")];
        let melville_text = "whale whale whale harpoon ocean chowder chowder";
        let wilde_text = "parlor parlor teacup saucer epigram epigram wit";
        let model = train(
            &authors,
            vec![doc("melville", melville_text), doc("wilde", wilde_text)],
        )
        .unwrap();

        assert_eq!(
            classify(&query(melville_text), &model).unwrap(),
            author("melville")
        );
        assert_eq!(
            classify(&query(wilde_text), &model).unwrap(),
            author("wilde")
        );
    }

    #[test]
    fn test_author_with_zero_word_volume_fails_fast() {
        let authors = vec![author("melville"), author("wilde")];
        // wilde's only document tokenizes to nothing, so the author has a
        // prior but no word volume; scoring any real word must fail loudly
        // instead of dividing by zero.
        let model = train(
            &authors,
            vec![doc("melville", "whale whale harpoon"), doc("wilde", "...")],
        )
        .unwrap();

        let err = score(&query("whale"), &model).unwrap_err();
        assert!(matches!(err, Error::DegenerateVocabulary(_)));

        // With nothing scorable the degenerate volume is never touched.
        let scores = score(&query("a an the"), &model).unwrap();
        assert_eq!(scores.len(), 2);
    }

    proptest! {
        /// Adding arbitrary short or out-of-vocabulary words never moves
        /// any author's score.
        #[test]
        fn prop_skipped_words_never_move_scores(
            noise in prop::collection::vec("[a-z]{1,3}", 0..10),
            repeats in 1u32..4,
        ) {
            let authors = vec![author("melville"), author("wilde")];
            let model = train(
                &authors,
                vec![
                    doc("melville", "whale whale whale harpoon ocean"),
                    doc("wilde", "parlor parlor teacup saucer"),
                ],
            )
            .unwrap();

            let base = score(&query("whale parlor harpoon"), &model).unwrap();

            let mut noisy = query("whale parlor harpoon");
            for word in &noise {
                *noisy.entry(word.clone()).or_insert(0.0) += f64::from(repeats);
            }
            // An unseen long word is skipped just like a short one.
            noisy.insert("zeppelin".to_string(), f64::from(repeats));

            let shifted = score(&noisy, &model).unwrap();
            for (b, s) in base.iter().zip(&shifted) {
                prop_assert_eq!(b.log_score, s.log_score);
            }
        }

        /// classify never panics and always returns a configured author.
        #[test]
        fn prop_classify_returns_configured_author(
            words in prop::collection::vec("[a-z]{1,8}", 0..30),
        ) {
            let authors = vec![author("melville"), author("wilde")];
            let model = train(
                &authors,
                vec![
                    doc("melville", "whale whale whale harpoon ocean"),
                    doc("wilde", "parlor parlor teacup saucer"),
                ],
            )
            .unwrap();

            let q = count_words(words);
            let best = classify(&q, &model).unwrap();
            prop_assert!(authors.contains(&best));
        }
    }
}
