//! Format-specific classifiers, one module per institution.

pub mod capital_one;
pub mod chase;
pub mod venmo;

pub use capital_one::{savor_one, venture_x};

use csv::StringRecord;

/// Tokenize raw statement text into rows of string cells.
///
/// Statement exports are ragged (summary lines, short trailing rows), so the
/// reader is flexible and a reader-level error drops only the offending row.
pub(crate) fn read_rows(csv_text: &str) -> Vec<StringRecord> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(csv_text.as_bytes());

    rdr.records().filter_map(Result::ok).collect()
}
