//! Chase card-export classifier.
//!
//! Export shape: `Transaction Date, Post Date, Description, Category, Type,
//! Amount, Memo`. This card is used for exactly two recurring merchants, so
//! the classifier is deliberately narrow: Costco rows become Groceries needs
//! and every other expense is recorded as Amazon shopping. Credits and
//! payments are excluded by sign (only negative amounts survive), not by
//! category label.

use csv::StringRecord;
use spendsort_core::{ClassificationResult, NormalizedRecord, Tagged};

use crate::classifiers::read_rows;
use crate::outcome::{RowOutcome, SkipReason};

/// One data row of a Chase CSV export, by column position.
/// `description`, `post_date` and `amount` are trimmed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaseRow {
    pub transaction_date: String,
    pub post_date: String,
    pub description: String,
    pub category: String,
    pub kind: String,
    pub amount: String,
    pub memo: String,
}

impl ChaseRow {
    pub const WIDTH: usize = 7;

    pub fn from_record(record: &StringRecord) -> Result<Self, SkipReason> {
        if record.len() < Self::WIDTH {
            return Err(SkipReason::ShortRow);
        }
        Ok(Self {
            transaction_date: record[0].to_string(),
            post_date: record[1].trim().to_string(),
            description: record[2].trim().to_string(),
            category: record[3].to_string(),
            kind: record[4].to_string(),
            amount: record[5].trim().to_string(),
            memo: record[6].to_string(),
        })
    }

    pub fn is_blank(&self) -> bool {
        self.description.is_empty() && self.amount.is_empty()
    }
}

/// Ordered per-row pipeline for the Chase card.
pub fn classify_row(row: &ChaseRow) -> RowOutcome {
    if row.is_blank() {
        return RowOutcome::Skip(SkipReason::BlankRow);
    }
    let Ok(amount) = row.amount.parse::<f64>() else {
        return RowOutcome::Skip(SkipReason::NonNumericAmount);
    };
    if amount >= 0.0 {
        return RowOutcome::Skip(SkipReason::NonExpense);
    }

    if row.description.to_lowercase().contains("costco") {
        RowOutcome::Keep(Tagged::need(NormalizedRecord::new(
            "Costco",
            amount,
            "Groceries",
            row.post_date.clone(),
        )))
    } else {
        RowOutcome::Keep(Tagged::want(NormalizedRecord::new(
            "Amazon",
            amount,
            "Shopping",
            row.post_date.clone(),
        )))
    }
}

/// Classify a Chase CSV export. The first row is the header.
pub fn classify(csv_text: &str) -> ClassificationResult {
    read_rows(csv_text)
        .iter()
        .skip(1) // header
        .map(|record| match ChaseRow::from_record(record) {
            Ok(row) => classify_row(&row),
            Err(reason) => RowOutcome::Skip(reason),
        })
        .filter_map(RowOutcome::into_tagged)
        .collect()
}
