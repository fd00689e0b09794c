//! End-to-end pipeline tests over a real on-disk corpus.
//!
//! Covers:
//! - Corpus discovery → tokenize → train → score → report
//! - Partial failure when a query document is unreadable
//! - Training aborts on empty-corpus and malformed-filename conditions

use qp_common::{AuthorName, Error};
use qp_config::{ConfigSource, ResolvedConfig};
use qp_core::exit_codes::ExitCode;
use qp_core::run::execute_run;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn author(name: &str) -> AuthorName {
    AuthorName::parse(name).unwrap()
}

fn write_corpus(dir: &Path) {
    let samples = dir.join("Samples");
    fs::create_dir(&samples).unwrap();
    fs::write(
        samples.join("melville_moby.txt"),
        "Whale, whale, whale! Harpoon the whale; chowder ocean whale harpoon.",
    )
    .unwrap();
    fs::write(
        samples.join("melville_typee.txt"),
        "Ocean ocean harpoon island island chowder.",
    )
    .unwrap();
    fs::write(
        samples.join("wilde_dorian.txt"),
        "Parlor epigram, parlor wit; teacup saucer epigram parlor.",
    )
    .unwrap();
}

fn config(dir: &Path, queries: Vec<PathBuf>) -> ResolvedConfig {
    ResolvedConfig {
        authors: vec![author("melville"), author("wilde")],
        corpus_dir: dir.join("Samples"),
        query_files: queries,
        source: ConfigSource::BuiltinDefault,
        path: None,
    }
}

#[test]
fn full_run_attributes_queries_to_the_right_author() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let whale_query = dir.path().join("anon_whale.txt");
    fs::write(&whale_query, "harpoon harpoon whale ocean").unwrap();
    let parlor_query = dir.path().join("anon_parlor.txt");
    fs::write(&parlor_query, "epigram teacup parlor parlor").unwrap();

    let report = execute_run(&config(dir.path(), vec![whale_query, parlor_query])).unwrap();

    assert!(report.results.summary.all_succeeded);
    assert_eq!(report.results.succeeded.len(), 2);
    assert_eq!(report.results.succeeded[0].best_estimate, author("melville"));
    assert_eq!(report.results.succeeded[1].best_estimate, author("wilde"));
    assert_eq!(report.exit_code(), ExitCode::Clean);

    // Two melville documents, one wilde: priors 2/3 and 1/3.
    let priors: f64 = report.priors.iter().map(|p| p.probability).sum();
    assert!((priors - 1.0).abs() < 1e-12);
    assert!((report.priors[0].probability - 2.0 / 3.0).abs() < 1e-12);

    // Scores come back in configured author order for every document.
    for query in &report.results.succeeded {
        assert_eq!(query.scores[0].author, author("melville"));
        assert_eq!(query.scores[1].author, author("wilde"));
    }
}

#[test]
fn unreadable_query_fails_only_its_own_entry() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let good = dir.path().join("anon_whale.txt");
    fs::write(&good, "whale harpoon").unwrap();
    let missing = dir.path().join("never_written.txt");

    let report = execute_run(&config(dir.path(), vec![good, missing])).unwrap();

    assert_eq!(report.results.summary.succeeded, 1);
    assert_eq!(report.results.summary.failed, 1);
    assert_eq!(report.exit_code(), ExitCode::PartialFail);
    assert_eq!(report.results.failed[0].error.code, 21);
}

#[test]
fn empty_query_list_trains_and_reports_nothing() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let report = execute_run(&config(dir.path(), Vec::new())).unwrap();
    assert_eq!(report.results.summary.total, 0);
    assert_eq!(report.exit_code(), ExitCode::Clean);
    assert!(report.render_human().is_empty());
}

#[test]
fn author_without_reference_works_aborts_training() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let mut cfg = config(dir.path(), Vec::new());
    cfg.authors.push(author("conrad"));

    let err = execute_run(&cfg).unwrap_err();
    assert!(matches!(err, Error::EmptyCorpus { ref author } if author == "conrad"));
}

#[test]
fn malformed_corpus_filename_aborts_training() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());
    fs::write(dir.path().join("Samples").join("orphaned.txt"), "stray text").unwrap();

    let err = execute_run(&config(dir.path(), Vec::new())).unwrap_err();
    assert!(matches!(err, Error::MalformedFilename { ref name } if name == "orphaned.txt"));
}

#[test]
fn report_human_rendering_matches_contract() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let query = dir.path().join("anon.txt");
    fs::write(&query, "whale harpoon harpoon").unwrap();

    let report = execute_run(&config(dir.path(), vec![query.clone()])).unwrap();
    let rendered = report.render_human();

    let doc = query.display().to_string();
    assert!(rendered.contains(&format!("Log Score: {doc} by melville : ")));
    assert!(rendered.contains(&format!("Log Score: {doc} by wilde : ")));
    assert!(rendered.contains(&format!("Best estimate: {doc} : melville")));
}
