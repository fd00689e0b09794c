//! Quillprint core - authorship attribution engine.
//!
//! Two-phase batch pipeline: a training pass folds the reference corpus
//! into an immutable [`model::FrequencyModel`], then each query document
//! is scored against every candidate author and the arg-max reported.

pub mod corpus;
pub mod exit_codes;
pub mod inference;
pub mod logging;
pub mod model;
pub mod report;
pub mod run;
