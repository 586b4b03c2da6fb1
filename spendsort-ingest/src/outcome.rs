//! Per-row verdicts of the classification pipelines.
//!
//! Every condition that drops a row has a name here, so each pipeline stage
//! can be tested on its own and a dropped row is attributable to exactly one
//! filter.

use spendsort_core::Tagged;

/// Why a row was dropped instead of classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Too few cells to carry the format's columns.
    ShortRow,
    /// Blank or separator row.
    BlankRow,
    /// Account payment or statement credit, not spending.
    PaymentOrCredit,
    /// Required amount cell did not parse as a number.
    NonNumericAmount,
    /// Zero or positive amount in a format that keeps expenses only.
    NonExpense,
    /// Venmo row without a transaction id.
    MissingId,
    /// Venmo bank transfer, not spending.
    StandardTransfer,
    /// Venmo amount cell empty after `$` stripping.
    EmptyAmount,
    /// Category that routes to neither bucket.
    UnmappedCategory,
}

/// Outcome of running one raw row through a classifier pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Keep(Tagged),
    Skip(SkipReason),
}

impl RowOutcome {
    pub fn into_tagged(self) -> Option<Tagged> {
        match self {
            RowOutcome::Keep(tagged) => Some(tagged),
            RowOutcome::Skip(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            RowOutcome::Keep(_) => None,
            RowOutcome::Skip(reason) => Some(*reason),
        }
    }
}
