//! Normalized record types shared by every statement classifier.

use serde::{Deserialize, Serialize};

/// Budgeting bucket a transaction lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bucket {
    /// Discretionary spend
    #[serde(rename = "wants")]
    Wants,
    /// Essential spend
    #[serde(rename = "needs")]
    Needs,
}

/// Canonical output unit of a classifier (institution-agnostic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Trimmed merchant text or note; some formats substitute a fixed label.
    pub description: String,
    /// Signed amount. Each classifier documents its own sign convention
    /// (card formats: positive = expense; Venmo is inverted).
    pub amount: f64,
    /// Short category tag. Vocabulary is owned per classifier, not shared.
    pub category: String,
    /// Posted date as exported by the institution, no time component.
    /// Passed through untouched; downstream consumers sort on it.
    pub date: String,
}

impl NormalizedRecord {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date: date.into(),
        }
    }

    /// Positional 4-field view `(description, amount, category, date)`,
    /// the shape downstream table writers consume without field names.
    pub fn as_row(&self) -> (&str, f64, &str, &str) {
        (&self.description, self.amount, &self.category, &self.date)
    }
}

/// A record plus the bucket its classifier assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tagged {
    pub bucket: Bucket,
    pub record: NormalizedRecord,
}

impl Tagged {
    pub fn want(record: NormalizedRecord) -> Self {
        Self { bucket: Bucket::Wants, record }
    }

    pub fn need(record: NormalizedRecord) -> Self {
        Self { bucket: Bucket::Needs, record }
    }
}

/// The two output tables of one classifier invocation.
///
/// Records keep the order they were accepted from the input; the partition
/// into buckets happens here, at the boundary, not inside classifier logic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub wants: Vec<NormalizedRecord>,
    pub needs: Vec<NormalizedRecord>,
}

impl ClassificationResult {
    pub fn is_empty(&self) -> bool {
        self.wants.is_empty() && self.needs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.wants.len() + self.needs.len()
    }

    /// Append another result's tables to this one (statement aggregation).
    pub fn absorb(&mut self, other: ClassificationResult) {
        self.wants.extend(other.wants);
        self.needs.extend(other.needs);
    }
}

impl FromIterator<Tagged> for ClassificationResult {
    fn from_iter<I: IntoIterator<Item = Tagged>>(iter: I) -> Self {
        let mut out = ClassificationResult::default();
        for tagged in iter {
            match tagged.bucket {
                Bucket::Wants => out.wants.push(tagged.record),
                Bucket::Needs => out.needs.push(tagged.record),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(desc: &str, amount: f64) -> NormalizedRecord {
        NormalizedRecord::new(desc, amount, "Shopping", "2024-01-05")
    }

    #[test]
    fn test_partition_preserves_input_order() {
        let tagged = vec![
            Tagged::want(rec("a", 1.0)),
            Tagged::need(rec("b", 2.0)),
            Tagged::want(rec("c", 3.0)),
        ];
        let result: ClassificationResult = tagged.into_iter().collect();
        assert_eq!(result.wants.len(), 2);
        assert_eq!(result.needs.len(), 1);
        assert_eq!(result.wants[0].description, "a");
        assert_eq!(result.wants[1].description, "c");
        assert_eq!(result.needs[0].description, "b");
    }

    #[test]
    fn test_absorb_concatenates_tables() {
        let mut first: ClassificationResult =
            vec![Tagged::want(rec("a", 1.0))].into_iter().collect();
        let second: ClassificationResult = vec![
            Tagged::want(rec("b", 2.0)),
            Tagged::need(rec("c", 3.0)),
        ]
        .into_iter()
        .collect();

        first.absorb(second);
        assert_eq!(first.len(), 3);
        assert_eq!(first.wants[1].description, "b");
        assert_eq!(first.needs[0].description, "c");
    }

    #[test]
    fn test_as_row_is_positional() {
        let r = rec("UBER TRIP", 15.0);
        assert_eq!(r.as_row(), ("UBER TRIP", 15.0, "Shopping", "2024-01-05"));
    }

    #[test]
    fn test_record_json_shape() {
        let r = rec("x", -87.32);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["amount"], -87.32);
        assert_eq!(json["date"], "2024-01-05");
    }
}
