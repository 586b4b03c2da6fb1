//! Supported statement formats and their dispatch labels.

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// One supported statement export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementType {
    CapitalOneVentureX,
    CapitalOneSavorOne,
    ChaseAmazon,
    Venmo,
}

impl StatementType {
    pub const ALL: [StatementType; 4] = [
        StatementType::CapitalOneVentureX,
        StatementType::CapitalOneSavorOne,
        StatementType::ChaseAmazon,
        StatementType::Venmo,
    ];

    /// The label the UI layer attaches to an upload.
    pub fn label(&self) -> &'static str {
        match self {
            StatementType::CapitalOneVentureX => "Capital One Venture X",
            StatementType::CapitalOneSavorOne => "Capital One Savor One",
            StatementType::ChaseAmazon => "Chase Amazon",
            StatementType::Venmo => "Venmo",
        }
    }

    /// Exact-match lookup. No trimming, no case folding: the label set is
    /// closed and anything else is a caller error.
    pub fn from_label(label: &str) -> Result<Self, ClassifyError> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == label)
            .ok_or_else(|| ClassifyError::UnknownStatementType {
                label: label.to_string(),
            })
    }
}
