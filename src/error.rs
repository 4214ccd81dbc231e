//! Error types for product file parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Broad class of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Raised before any row is read: bad arguments, missing file, unknown extension.
    Configuration,
    /// Raised while normalizing a data row.
    RowValidation,
}

/// Failures that abort a parsing run.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Please provide a file to be parsed")]
    MissingInput,

    #[error("Please provide a valid file to be parsed ({path:?} does not exist)")]
    InputNotFound { path: PathBuf },

    #[error("Please provide a valid file (CSV or TSV) to be parsed ({path:?} is neither)")]
    UnsupportedExtension { path: PathBuf },

    #[error("Unknown encoding '{label}'")]
    UnknownEncoding { label: String },

    /// Row has fewer than two columns, or column 0 or 1 is empty.
    #[error(
        "One or more required fields are missing on row {row}. Please update your file and try again."
    )]
    MissingRequiredField { row: usize },
}

impl ParseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ParseError::MissingRequiredField { .. } => ErrorCategory::RowValidation,
            ParseError::MissingInput
            | ParseError::InputNotFound { .. }
            | ParseError::UnsupportedExtension { .. }
            | ParseError::UnknownEncoding { .. } => ErrorCategory::Configuration,
        }
    }
}
