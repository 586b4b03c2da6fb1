//! Venmo statement classifier.
//!
//! Venmo exports prepend account-summary rows of varying width; transaction
//! data starts after the row whose second column is `"ID"`. The sign
//! convention is inverted relative to the card formats: incoming payments
//! come out negative, outgoing payments positive. Venmo carries no essential
//! spend, so the needs table is always empty and every record is tagged with
//! the placeholder category `"Missing"`.

use std::sync::LazyLock;

use csv::StringRecord;
use regex::Regex;
use spendsort_core::{ClassificationResult, NormalizedRecord, Tagged};

use crate::classifiers::read_rows;
use crate::outcome::{RowOutcome, SkipReason};

/// Money token after `$` stripping: optional sign, comma-grouped magnitude.
static MONEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>[+-])?\s*(?P<mag>[0-9][0-9,]*(?:\.[0-9]+)?)$")
        .expect("money token pattern")
});

/// The columns of a Venmo export row this classifier reads, trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct VenmoRow {
    pub id: String,
    pub date_time: String,
    pub kind: String,
    pub note: String,
    pub from: String,
    pub to: String,
    pub amount: String,
}

impl VenmoRow {
    pub const WIDTH: usize = 9;

    pub fn from_record(record: &StringRecord) -> Result<Self, SkipReason> {
        if record.len() < Self::WIDTH {
            return Err(SkipReason::ShortRow);
        }
        Ok(Self {
            id: record[1].trim().to_string(),
            date_time: record[2].trim().to_string(),
            kind: record[3].trim().to_string(),
            note: record[5].trim().to_string(),
            from: record[6].trim().to_string(),
            to: record[7].trim().to_string(),
            amount: record[8].trim().to_string(),
        })
    }

    /// Datetime with any `T...` time suffix cut off.
    pub fn date(&self) -> &str {
        match self.date_time.split_once('T') {
            Some((date, _)) => date,
            None => &self.date_time,
        }
    }
}

/// Index of the first data row: right after the `"ID"` header cell.
/// With no header present we start at the top and rely on the empty-id skip
/// to filter pre-header noise.
fn data_start(rows: &[StringRecord]) -> usize {
    rows.iter()
        .position(|r| r.get(1) == Some("ID"))
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Ordered per-row pipeline for Venmo.
pub fn classify_row(row: &VenmoRow) -> RowOutcome {
    if row.id.is_empty() {
        return RowOutcome::Skip(SkipReason::MissingId);
    }
    if row.kind == "Standard Transfer" {
        return RowOutcome::Skip(SkipReason::StandardTransfer);
    }

    let token = row.amount.replacen('$', "", 1);
    let token = token.trim();
    if token.is_empty() {
        return RowOutcome::Skip(SkipReason::EmptyAmount);
    }
    let Some(caps) = MONEY_RE.captures(token) else {
        return RowOutcome::Skip(SkipReason::NonNumericAmount);
    };
    let magnitude: f64 = caps["mag"].replace(',', "").parse().unwrap_or(0.0);

    // "+" is money received: flip to negative and credit the sender.
    // "-" is money sent: keep positive and name the recipient.
    let (amount, note) = match caps.name("sign").map(|m| m.as_str()) {
        Some("+") => (-magnitude, format!("{}, {}", row.note, row.from)),
        Some("-") => (magnitude, format!("{}, {}", row.note, row.to)),
        _ => (magnitude, row.note.clone()),
    };

    RowOutcome::Keep(Tagged::want(NormalizedRecord::new(
        note,
        amount,
        "Missing",
        row.date(),
    )))
}

/// Classify a Venmo CSV export.
pub fn classify(csv_text: &str) -> ClassificationResult {
    let rows = read_rows(csv_text);
    let start = data_start(&rows);
    rows[start..]
        .iter()
        .map(|record| match VenmoRow::from_record(record) {
            Ok(row) => classify_row(&row),
            Err(reason) => RowOutcome::Skip(reason),
        })
        .filter_map(RowOutcome::into_tagged)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = ",ID,Datetime,Type,Status,Note,From,To,Amount (total)";

    fn row(kind: &str, note: &str, from: &str, to: &str, amount: &str) -> VenmoRow {
        VenmoRow {
            id: "4021".to_string(),
            date_time: "2024-03-09T18:22:01".to_string(),
            kind: kind.to_string(),
            note: note.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_incoming_payment_flips_negative_and_credits_sender() {
        let tagged = classify_row(&row("Payment", "lunch", "Alice", "Bob", "+ $20.00"))
            .into_tagged()
            .unwrap();
        assert_eq!(tagged.record.as_row(), ("lunch, Alice", -20.0, "Missing", "2024-03-09"));
    }

    #[test]
    fn test_outgoing_payment_stays_positive_and_names_recipient() {
        let tagged = classify_row(&row("Payment", "lunch", "Alice", "Bob", "- $20.00"))
            .into_tagged()
            .unwrap();
        assert_eq!(tagged.record.as_row(), ("lunch, Bob", 20.0, "Missing", "2024-03-09"));
    }

    #[test]
    fn test_unsigned_amount_passes_through_untouched() {
        let tagged = classify_row(&row("Payment", "rent split", "Alice", "Bob", "$1,250.00"))
            .into_tagged()
            .unwrap();
        assert_eq!(tagged.record.amount, 1250.0);
        assert_eq!(tagged.record.description, "rent split");
    }

    #[test]
    fn test_skip_stages() {
        let mut no_id = row("Payment", "x", "A", "B", "+ $5.00");
        no_id.id = String::new();
        assert_eq!(classify_row(&no_id).skip_reason(), Some(SkipReason::MissingId));

        assert_eq!(
            classify_row(&row("Standard Transfer", "", "", "", "- $300.00")).skip_reason(),
            Some(SkipReason::StandardTransfer)
        );
        assert_eq!(
            classify_row(&row("Payment", "x", "A", "B", "$")).skip_reason(),
            Some(SkipReason::EmptyAmount)
        );
        assert_eq!(
            classify_row(&row("Payment", "x", "A", "B", "twenty")).skip_reason(),
            Some(SkipReason::NonNumericAmount)
        );
    }

    #[test]
    fn test_header_is_located_mid_file() {
        let csv = format!(
            "Account Statement - (@someone)\n\
             Account Activity\n\
             {HEADER}\n\
             ,4021,2024-03-09T18:22:01,Payment,Complete,lunch,Alice,Bob,+ $20.00\n"
        );
        let result = classify(&csv);
        assert_eq!(result.wants.len(), 1);
        assert!(result.needs.is_empty());
        assert_eq!(result.wants[0].description, "lunch, Alice");
    }

    #[test]
    fn test_missing_header_falls_back_to_row_zero() {
        // No "ID" header anywhere: data rows are still picked up from the top.
        let csv = ",4021,2024-03-09T18:22:01,Payment,Complete,lunch,Alice,Bob,- $12.00\n";
        let result = classify(csv);
        assert_eq!(result.wants.len(), 1);
        assert_eq!(result.wants[0].amount, 12.0);
    }

    #[test]
    fn test_date_only_strings_are_kept_as_is() {
        let r = row("Payment", "x", "A", "B", "+ $1.00");
        let mut r2 = r.clone();
        r2.date_time = "2024-03-09".to_string();
        assert_eq!(r2.date(), "2024-03-09");
        assert_eq!(r.date(), "2024-03-09");
    }

    #[test]
    fn test_header_only_is_empty() {
        let result = classify(&format!("{HEADER}\n"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_needs_is_always_empty() {
        let csv = format!(
            "{HEADER}\n\
             ,1,2024-03-01T10:00:00,Payment,Complete,groceries,Alice,Bob,- $80.00\n\
             ,2,2024-03-02T10:00:00,Payment,Complete,utilities,Carol,Bob,+ $45.00\n"
        );
        let result = classify(&csv);
        assert_eq!(result.wants.len(), 2);
        assert!(result.needs.is_empty());
    }
}
