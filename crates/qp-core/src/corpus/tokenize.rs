//! Text normalization into comparable word units.
//!
//! The tokenization contract: lower-case the raw text, then split on
//! non-word-character boundaries. Word characters are `[A-Za-z0-9_]`
//! plus their Unicode extensions, matching the `\w` character class.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Word token → occurrence count.
///
/// Counts are f64 accumulators so a weighted-count extension stays
/// representable; the default is a unit count per occurrence. BTreeMap
/// keeps word iteration order fixed, which keeps scoring deterministic.
pub type WordCounts = BTreeMap<String, f64>;

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("static word pattern is valid"))
}

/// Tokenize raw text into lower-cased word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count occurrences of each token.
pub fn count_words<I, S>(words: I) -> WordCounts
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts = WordCounts::new();
    for word in words {
        *counts.entry(word.into()).or_insert(0.0) += 1.0;
    }
    counts
}
