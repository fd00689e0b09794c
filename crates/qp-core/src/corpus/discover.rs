//! Training-corpus discovery.
//!
//! Scans a single directory (non-recursive) for reference works. Foreign
//! extensions and unconfigured authors are a filtering policy, not an
//! error; a text file whose name cannot be parsed at all fails loudly so
//! a typo never silently miscategorizes a reference work.

use qp_common::author::split_file_stem;
use qp_common::{AuthorName, Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Recognized extension for corpus text files.
pub const TEXT_EXTENSION: &str = "txt";

/// A discovered reference work, attributed by filename prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFile {
    pub author: AuthorName,
    pub path: PathBuf,
}

/// Discover the training corpus under `dir` for the configured authors.
///
/// Results are sorted by file name, so training order (and therefore
/// floating-point accumulation order) is stable across runs.
pub fn discover_corpus(dir: &Path, authors: &[AuthorName]) -> Result<Vec<CorpusFile>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort();

    let mut corpus = Vec::new();
    for path in paths {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(Error::MalformedFilename {
                name: path.to_string_lossy().into_owned(),
            });
        };

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(TEXT_EXTENSION) => {}
            _ => {
                debug!(file = name, "skipping non-text file");
                continue;
            }
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name);
        let Some((author, _title)) = split_file_stem(stem) else {
            return Err(Error::MalformedFilename {
                name: name.to_string(),
            });
        };

        if !authors.contains(&author) {
            debug!(file = name, author = %author, "skipping work by unconfigured author");
            continue;
        }

        corpus.push(CorpusFile { author, path });
    }

    Ok(corpus)
}

/// Read a training or query document to a string.
///
/// Open and decode failures both surface as [`Error::UnreadableFile`];
/// a configured file that cannot be read is never silently skipped.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::UnreadableFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| Error::UnreadableFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
