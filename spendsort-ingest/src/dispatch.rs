//! Statement-type routing. No parsing logic of its own.

use spendsort_core::{ClassificationResult, ClassifyError, StatementType};

use crate::classifiers::{chase, savor_one, venmo, venture_x};

/// Run the classifier a typed statement kind selects.
pub fn classify_as(statement: StatementType, csv_text: &str) -> ClassificationResult {
    match statement {
        StatementType::CapitalOneVentureX => venture_x::classify(csv_text),
        StatementType::CapitalOneSavorOne => savor_one::classify(csv_text),
        StatementType::ChaseAmazon => chase::classify(csv_text),
        StatementType::Venmo => venmo::classify(csv_text),
    }
}

/// Route raw CSV text by the label the UI attached to the upload.
///
/// An unrecognized label aborts the whole invocation; there is no partial
/// result. This is the only failure the classification layer produces.
pub fn classify(csv_text: &str, label: &str) -> Result<ClassificationResult, ClassifyError> {
    Ok(classify_as(StatementType::from_label(label)?, csv_text))
}
