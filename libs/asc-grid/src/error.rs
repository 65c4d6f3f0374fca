//! # Grid Errors
//!
//! Error types for loading ESRI ASCII rasters. All errors are fatal for the
//! load: no partial grid is ever returned.
//!
//! Malformed sample tokens are not errors. They are replaced by the no-data
//! fill elevation and counted by the reader.

use std::path::PathBuf;

use thiserror::Error;

use crate::header::HeaderField;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while loading a height grid.
///
/// ## Example
///
/// ```rust
/// use asc_grid::{load_str, GridError, HeaderField, LoadOptions};
///
/// match load_str("NROWS 2\n", &LoadOptions::default()) {
///     Err(GridError::HeaderFieldMissing { field }) => assert_eq!(field, HeaderField::Ncols),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum GridError {
    /// A header line was absent, empty, or named a different field.
    #[error("header field {field} not found")]
    HeaderFieldMissing {
        /// The field expected at this header position.
        field: HeaderField,
    },

    /// A header field was present but its value could not be used.
    #[error("header field {field} has invalid value '{value}'")]
    InvalidHeaderValue {
        /// The offending field.
        field: HeaderField,
        /// The raw value text.
        value: String,
    },

    /// A body row did not hold exactly `NCOLS` samples.
    #[error("row {row} has {found} samples, expected {expected}")]
    MalformedRow {
        /// Zero-based row number in file order.
        row: usize,
        /// Expected sample count (`NCOLS`).
        expected: usize,
        /// Sample count found on the line.
        found: usize,
    },

    /// The body did not hold exactly `NROWS` rows.
    #[error("grid has {found} rows, expected {expected}")]
    RowCountMismatch {
        /// Expected row count (`NROWS`).
        expected: usize,
        /// Rows found in the body.
        found: usize,
    },

    /// A sample buffer does not match the grid dimensions.
    #[error("grid holds {found} samples, expected {expected}")]
    SampleCountMismatch {
        /// `rows * columns`.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },

    /// The header's dimensions describe more samples than a grid may hold.
    #[error("{columns} x {rows} grid exceeds the limit of {max} samples")]
    TooManySamples {
        /// Header column count (`NCOLS`).
        columns: usize,
        /// Header row count (`NROWS`).
        rows: usize,
        /// Largest accepted `rows * columns`.
        max: usize,
    },

    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A load from a file failed; wraps the cause with the file path.
    #[error("failed to load {}: {source}", path.display())]
    Source {
        /// Path of the offending file.
        path: PathBuf,
        /// The failure while reading it.
        #[source]
        source: Box<GridError>,
    },
}

impl GridError {
    /// Creates a missing header field error.
    pub fn missing(field: HeaderField) -> Self {
        Self::HeaderFieldMissing { field }
    }

    /// Creates an invalid header value error.
    pub fn invalid_value(field: HeaderField, value: impl Into<String>) -> Self {
        Self::InvalidHeaderValue {
            field,
            value: value.into(),
        }
    }

    /// Attaches the source file path to an error.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::Source {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Returns the error without any file context.
    pub fn root_cause(&self) -> &GridError {
        match self {
            Self::Source { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for grid loading.
pub type GridResult<T> = Result<T, GridError>;

// =============================================================================
// TESTS
// =============================================================================
