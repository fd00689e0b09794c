//! Author identity types.
//!
//! An author is a labeled writing style, i.e. a training class. Author
//! names double as filename prefixes in the corpus layout
//! (`<author>_<title>.txt`), so the delimiter character is forbidden
//! inside a name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter separating the author prefix from the title in corpus
/// file names.
pub const AUTHOR_DELIMITER: char = '_';

/// Validated author name.
///
/// Invariants: non-empty, no whitespace, no [`AUTHOR_DELIMITER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorName(String);

impl AuthorName {
    /// Parse and validate an author name.
    ///
    /// Returns `None` for names that would be ambiguous as a corpus
    /// filename prefix: empty strings, whitespace, or names containing
    /// the delimiter itself.
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        if s.contains(AUTHOR_DELIMITER) {
            return None;
        }
        if s.chars().any(char::is_whitespace) {
            return None;
        }
        Some(AuthorName(s.to_string()))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AuthorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Split a corpus file stem into `(author, title)` at the first delimiter.
///
/// `"austen_emma"` parses to `("austen", "emma")`. Returns `None` when the
/// stem has no delimiter or either side is empty; callers decide whether
/// that is a skip or a hard error.
pub fn split_file_stem(stem: &str) -> Option<(AuthorName, &str)> {
    let (prefix, title) = stem.split_once(AUTHOR_DELIMITER)?;
    if title.is_empty() {
        return None;
    }
    let author = AuthorName::parse(prefix)?;
    Some((author, title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_names() {
        assert_eq!(AuthorName::parse("austen").unwrap().as_str(), "austen");
        assert_eq!(AuthorName::parse("conan-doyle").unwrap().as_str(), "conan-doyle");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(AuthorName::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_delimiter() {
        assert!(AuthorName::parse("jane_austen").is_none());
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert!(AuthorName::parse("jane austen").is_none());
        assert!(AuthorName::parse("austen\t").is_none());
    }

    #[test]
    fn test_split_file_stem() {
        let (author, title) = split_file_stem("austen_emma").unwrap();
        assert_eq!(author.as_str(), "austen");
        assert_eq!(title, "emma");
    }

    #[test]
    fn test_split_file_stem_takes_first_delimiter() {
        let (author, title) = split_file_stem("conrad_heart_of_darkness").unwrap();
        assert_eq!(author.as_str(), "conrad");
        assert_eq!(title, "heart_of_darkness");
    }

    #[test]
    fn test_split_file_stem_malformed() {
        assert!(split_file_stem("ulysses").is_none());
        assert!(split_file_stem("_emma").is_none());
        assert!(split_file_stem("austen_").is_none());
    }
}
