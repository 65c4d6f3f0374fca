//! # Raster Header
//!
//! The six fixed-order header fields of an ESRI ASCII raster:
//!
//! ```text
//! NCOLS 20
//! NROWS 20
//! XLLCENTER 724980
//! YLLCENTER 4449560
//! CELLSIZE 10
//! NODATA_VALUE -9999.0
//! ```

use std::fmt;

use config::constants::{HEADER_FIELDS, MAX_GRID_SAMPLES};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

// =============================================================================
// HEADER FIELD
// =============================================================================

/// One of the six header fields, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderField {
    /// `NCOLS`: number of columns.
    Ncols,
    /// `NROWS`: number of rows.
    Nrows,
    /// `XLLCENTER`: x of the lower-left cell centre.
    XllCenter,
    /// `YLLCENTER`: y of the lower-left cell centre.
    YllCenter,
    /// `CELLSIZE`: spacing between grid points.
    CellSize,
    /// `NODATA_VALUE`: missing-sample sentinel.
    NodataValue,
}

impl HeaderField {
    /// All fields in the order they must appear.
    pub const ALL: [HeaderField; 6] = [
        HeaderField::Ncols,
        HeaderField::Nrows,
        HeaderField::XllCenter,
        HeaderField::YllCenter,
        HeaderField::CellSize,
        HeaderField::NodataValue,
    ];

    /// The exact, case-sensitive name used in the file.
    ///
    /// # Example
    ///
    /// ```rust
    /// use asc_grid::HeaderField;
    ///
    /// assert_eq!(HeaderField::NodataValue.name(), "NODATA_VALUE");
    /// ```
    pub fn name(self) -> &'static str {
        HEADER_FIELDS[self as usize]
    }

    /// Extracts this field's value from a header line.
    ///
    /// Fails with `HeaderFieldMissing` when the line is empty or its first
    /// token is not this field's name.
    pub fn value_in(self, line: &str) -> GridResult<&str> {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(name) if name == self.name() => tokens
                .next()
                .ok_or_else(|| GridError::invalid_value(self, "")),
            _ => Err(GridError::missing(self)),
        }
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// GRID HEADER
// =============================================================================

/// Parsed and validated header of a height grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridHeader {
    /// Number of columns (`NCOLS`), at least 1.
    pub columns: usize,
    /// Number of rows (`NROWS`), at least 1.
    pub rows: usize,
    /// x of the lower-left cell centre (`XLLCENTER`).
    pub origin_x: f64,
    /// y of the lower-left cell centre (`YLLCENTER`).
    pub origin_y: f64,
    /// Uniform grid spacing (`CELLSIZE`), strictly positive.
    pub cell_size: f64,
    /// Missing-sample sentinel (`NODATA_VALUE`).
    pub no_data_value: f64,
    /// The sentinel exactly as written in the file.
    ///
    /// Body tokens are compared against this text before numeric parsing.
    pub no_data_token: String,
}

impl GridHeader {
    /// Parses the six raw header values, given in `HeaderField::ALL` order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use asc_grid::GridHeader;
    ///
    /// let header = GridHeader::from_values(["3", "2", "0", "0", "10", "-9999"]).unwrap();
    /// assert_eq!(header.columns, 3);
    /// assert_eq!(header.rows, 2);
    /// assert_eq!(header.cell_size, 10.0);
    /// ```
    pub fn from_values(values: [&str; 6]) -> GridResult<Self> {
        let [ncols, nrows, xll, yll, cell, nodata] = values;
        let header = Self {
            columns: parse_count(HeaderField::Ncols, ncols)?,
            rows: parse_count(HeaderField::Nrows, nrows)?,
            origin_x: parse_real(HeaderField::XllCenter, xll)?,
            origin_y: parse_real(HeaderField::YllCenter, yll)?,
            cell_size: parse_real(HeaderField::CellSize, cell)?,
            no_data_value: parse_real(HeaderField::NodataValue, nodata)?,
            no_data_token: nodata.to_string(),
        };
        header.validate()?;
        Ok(header)
    }

    /// Checks the dimension and spacing invariants.
    pub fn validate(&self) -> GridResult<()> {
        if self.columns == 0 {
            return Err(GridError::invalid_value(HeaderField::Ncols, "0"));
        }
        if self.rows == 0 {
            return Err(GridError::invalid_value(HeaderField::Nrows, "0"));
        }
        match self.rows.checked_mul(self.columns) {
            Some(count) if count <= MAX_GRID_SAMPLES => {}
            _ => {
                return Err(GridError::TooManySamples {
                    columns: self.columns,
                    rows: self.rows,
                    max: MAX_GRID_SAMPLES,
                })
            }
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(GridError::invalid_value(
                HeaderField::CellSize,
                self.cell_size.to_string(),
            ));
        }
        Ok(())
    }

    /// Number of samples the body must hold.
    ///
    /// Saturates instead of overflowing; a validated header never reaches
    /// the saturation point.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }
}

fn parse_count(field: HeaderField, value: &str) -> GridResult<usize> {
    value
        .parse::<usize>()
        .map_err(|_| GridError::invalid_value(field, value))
}

fn parse_real(field: HeaderField, value: &str) -> GridResult<f64> {
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(GridError::invalid_value(field, value)),
    }
}
