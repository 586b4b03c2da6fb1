//! Capital One card-export classifiers (Venture X and Savor One).
//!
//! Both cards share the export shape
//! `Transaction Date, Posted Date, Card No., Description, Category, Debit, Credit`
//! but route transactions to the budget buckets differently.

use csv::StringRecord;
use spendsort_core::{ClassificationResult, NormalizedRecord, Tagged};

use crate::classifiers::read_rows;
use crate::outcome::{RowOutcome, SkipReason};

/// One data row of a Capital One CSV export, by column position.
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalOneRow {
    pub transaction_date: String,
    pub posted_date: String,
    pub card_number: String,
    pub description: String,
    pub category: String,
    pub debit: String,
    pub credit: String,
}

impl CapitalOneRow {
    pub const WIDTH: usize = 7;

    pub fn from_record(record: &StringRecord) -> Result<Self, SkipReason> {
        if record.len() < Self::WIDTH {
            return Err(SkipReason::ShortRow);
        }
        Ok(Self {
            transaction_date: record[0].to_string(),
            posted_date: record[1].to_string(),
            card_number: record[2].to_string(),
            description: record[3].to_string(),
            category: record[4].to_string(),
            debit: record[5].to_string(),
            credit: record[6].to_string(),
        })
    }

    /// Separator rows carry neither a description nor an amount.
    pub fn is_blank(&self) -> bool {
        self.description.is_empty() && self.debit.is_empty() && self.credit.is_empty()
    }

    /// Account payments and statement credits are not spending.
    pub fn is_payment_or_credit(&self) -> bool {
        self.category == "Payment/Credit"
    }

    /// Signed amount: debit as-is, otherwise the negated credit.
    /// Positive = expense, negative = refund. None if neither cell parses.
    pub fn amount(&self) -> Option<f64> {
        let debit = self.debit.trim();
        if !debit.is_empty() {
            return debit.parse().ok();
        }
        let credit = self.credit.trim();
        if !credit.is_empty() {
            return credit.parse::<f64>().ok().map(|c| -c);
        }
        None
    }
}

fn classify_rows(csv_text: &str, classify_row: fn(&CapitalOneRow) -> RowOutcome) -> ClassificationResult {
    read_rows(csv_text)
        .iter()
        .skip(1) // header
        .map(|record| match CapitalOneRow::from_record(record) {
            Ok(row) => classify_row(&row),
            Err(reason) => RowOutcome::Skip(reason),
        })
        .filter_map(RowOutcome::into_tagged)
        .collect()
}

pub mod venture_x {
    use super::*;

    const TRANSPORT_KEYWORDS: [&str; 3] = ["metro", "uber", "lyft"];

    /// Output category for each known Venture X category label; unknown
    /// labels pass through unchanged.
    pub fn map_category(raw: &str) -> &str {
        match raw {
            "Merchandise" => "Shopping",
            "Other Travel" => "Travel",
            "Internet" => "Entertainment",
            "Other Services" => "Entertainment",
            other => other,
        }
    }

    /// Ordered per-row pipeline for the Venture X card.
    pub fn classify_row(row: &CapitalOneRow) -> RowOutcome {
        if row.is_blank() {
            return RowOutcome::Skip(SkipReason::BlankRow);
        }
        if row.is_payment_or_credit() {
            return RowOutcome::Skip(SkipReason::PaymentOrCredit);
        }
        let Some(amount) = row.amount() else {
            return RowOutcome::Skip(SkipReason::NonNumericAmount);
        };

        let description = row.description.trim();
        let lowered = description.to_lowercase();
        if TRANSPORT_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            return RowOutcome::Keep(Tagged::want(NormalizedRecord::new(
                description,
                amount,
                "Transportation",
                row.posted_date.clone(),
            )));
        }
        if row.category == "Gas/Automotive" {
            return RowOutcome::Keep(Tagged::need(NormalizedRecord::new(
                description,
                amount,
                "Gas",
                row.posted_date.clone(),
            )));
        }
        RowOutcome::Keep(Tagged::want(NormalizedRecord::new(
            description,
            amount,
            map_category(&row.category),
            row.posted_date.clone(),
        )))
    }

    /// Classify a Venture X CSV export. The first row is the header.
    pub fn classify(csv_text: &str) -> ClassificationResult {
        classify_rows(csv_text, classify_row)
    }
}

pub mod savor_one {
    use super::*;

    /// Output category for each known Savor One category label; unknown
    /// labels pass through unchanged.
    pub fn map_category(raw: &str) -> &str {
        match raw {
            "Merchandise" => "Groceries",
            "Other Travel" => "Travel",
            "Internet" => "Entertainment",
            "Other Services" => "Entertainment",
            other => other,
        }
    }

    /// Ordered per-row pipeline for the Savor One card.
    ///
    /// Only Dining (wants) and Groceries (needs) are tracked for this card;
    /// every other mapped category is dropped on purpose. Rows whose amount
    /// does not parse are dropped like Venture X does.
    pub fn classify_row(row: &CapitalOneRow) -> RowOutcome {
        if row.is_blank() {
            return RowOutcome::Skip(SkipReason::BlankRow);
        }
        if row.is_payment_or_credit() {
            return RowOutcome::Skip(SkipReason::PaymentOrCredit);
        }
        let Some(amount) = row.amount() else {
            return RowOutcome::Skip(SkipReason::NonNumericAmount);
        };

        let category = map_category(&row.category);
        let record = NormalizedRecord::new(
            row.description.trim(),
            amount,
            category,
            row.posted_date.clone(),
        );
        match category {
            "Dining" => RowOutcome::Keep(Tagged::want(record)),
            "Groceries" => RowOutcome::Keep(Tagged::need(record)),
            _ => RowOutcome::Skip(SkipReason::UnmappedCategory),
        }
    }

    /// Classify a Savor One CSV export. The first row is the header.
    pub fn classify(csv_text: &str) -> ClassificationResult {
        classify_rows(csv_text, classify_row)
    }
}
