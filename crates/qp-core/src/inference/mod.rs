//! Log-probability scoring of query documents against a trained model.

pub mod score;

pub use score::{best_of, classify, score, AuthorScore, SHORT_WORD_MAX_LEN};
