//! Corpus discovery, reading, and tokenization.
//!
//! The training corpus is a flat directory of reference works named
//! `<author>_<title>.txt`. Query documents are configured explicitly and
//! read through the same decoding path; they never feed back into the
//! trained model.

pub mod discover;
pub mod tokenize;

pub use discover::{discover_corpus, read_document, CorpusFile, TEXT_EXTENSION};
pub use tokenize::{count_words, tokenize, WordCounts};
