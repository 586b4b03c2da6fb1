//! spendsort-core: shared record model for statement classification.

pub mod error;
pub mod record;
pub mod statement;

pub use error::ClassifyError;
pub use record::{Bucket, ClassificationResult, NormalizedRecord, Tagged};
pub use statement::StatementType;
