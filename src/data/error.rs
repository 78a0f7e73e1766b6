use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the data layer. The UI matches on these only to pick
/// a message; tests match on them to pin the taxonomy down.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open {}: {}", .path.display(), .source)]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{ext}")]
    UnsupportedFormat { ext: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("required column '{column}' is missing")]
    MissingColumn { column: String },

    #[error("column '{column}' has a non-numeric value in row {row}")]
    NonNumeric { column: String, row: usize },

    #[error("table has no rows")]
    EmptyTable,
}
