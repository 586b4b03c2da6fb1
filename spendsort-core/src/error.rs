//! The one error the classification layer surfaces to callers.
//!
//! Classifiers never fail: malformed rows are skipped where they occur. Only
//! dispatching on an unrecognized statement label aborts an invocation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("Unknown statement type: {label}")]
    UnknownStatementType { label: String },
}
