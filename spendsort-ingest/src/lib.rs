//! spendsort-ingest: per-institution statement classifiers and the label dispatcher.

pub mod classifiers;
pub mod dispatch;
pub mod outcome;

pub use dispatch::{classify, classify_as};
pub use outcome::{RowOutcome, SkipReason};
