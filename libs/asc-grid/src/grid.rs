//! # Height Grid
//!
//! Immutable, validated elevation matrix produced by the loader and consumed
//! once by the mesher.

use config::constants::{DEFAULT_NODATA_VALUE, NODATA_FILL_ELEVATION};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::header::GridHeader;

// =============================================================================
// ELEVATION RANGE
// =============================================================================

/// Lowest and highest valid elevation of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationRange {
    /// Lowest valid sample.
    pub min: f64,
    /// Highest valid sample.
    pub max: f64,
}

impl ElevationRange {
    /// Folds a sequence of elevations into its range.
    ///
    /// Returns `None` for an empty sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use asc_grid::ElevationRange;
    ///
    /// let range = ElevationRange::from_samples([3.0, -1.0, 7.5]).unwrap();
    /// assert_eq!(range.min, -1.0);
    /// assert_eq!(range.max, 7.5);
    /// assert!(ElevationRange::from_samples([]).is_none());
    /// ```
    pub fn from_samples(samples: impl IntoIterator<Item = f64>) -> Option<Self> {
        samples.into_iter().fold(None, |range, z| {
            Some(match range {
                None => Self { min: z, max: z },
                Some(Self { min, max }) => Self {
                    min: min.min(z),
                    max: max.max(z),
                },
            })
        })
    }

    /// Difference between the highest and lowest sample.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

// =============================================================================
// HEIGHT GRID
// =============================================================================

/// Regularly spaced elevation samples with their header.
///
/// `samples[r * columns + c]` is the elevation at row `r`, column `c`. Row 0
/// is the first row read from the file. Samples that were no-data or could
/// not be parsed hold the fill elevation and are flagged in the void mask.
///
/// # Example
///
/// ```rust
/// use asc_grid::HeightGrid;
///
/// let grid = HeightGrid::from_elevations(3, 2, 10.0, vec![
///     1.0, 2.0, 3.0,
///     4.0, 5.0, 6.0,
/// ]).unwrap();
/// assert_eq!(grid.elevation(2, 1), 6.0);
/// assert_eq!(grid.index(2, 1), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    header: GridHeader,
    samples: Vec<f64>,
    void_mask: Vec<bool>,
}

impl HeightGrid {
    /// Builds a grid from a header and row-major samples.
    ///
    /// Both buffers must hold exactly `rows * columns` entries.
    pub fn new(header: GridHeader, samples: Vec<f64>, void_mask: Vec<bool>) -> GridResult<Self> {
        header.validate()?;
        let expected = header.sample_count();
        for found in [samples.len(), void_mask.len()] {
            if found != expected {
                return Err(GridError::SampleCountMismatch { expected, found });
            }
        }
        Ok(Self {
            header,
            samples,
            void_mask,
        })
    }

    /// Builds a grid directly from elevation values.
    ///
    /// Origin is `(0, 0)`, the no-data sentinel is the default and no sample
    /// is void.
    pub fn from_elevations(
        columns: usize,
        rows: usize,
        cell_size: f64,
        elevations: Vec<f64>,
    ) -> GridResult<Self> {
        let header = GridHeader {
            columns,
            rows,
            origin_x: 0.0,
            origin_y: 0.0,
            cell_size,
            no_data_value: DEFAULT_NODATA_VALUE,
            no_data_token: DEFAULT_NODATA_VALUE.to_string(),
        };
        let void_mask = vec![false; elevations.len()];
        Self::new(header, elevations, void_mask)
    }

    /// Returns the parsed header.
    #[inline]
    pub fn header(&self) -> &GridHeader {
        &self.header
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.header.columns
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.header.rows
    }

    /// Grid spacing on both axes.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.header.cell_size
    }

    /// x of the lower-left cell centre.
    #[inline]
    pub fn origin_x(&self) -> f64 {
        self.header.origin_x
    }

    /// y of the lower-left cell centre.
    #[inline]
    pub fn origin_y(&self) -> f64 {
        self.header.origin_y
    }

    /// Missing-sample sentinel.
    #[inline]
    pub fn no_data_value(&self) -> f64 {
        self.header.no_data_value
    }

    /// Row-major elevations.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Row-major flags marking substituted samples.
    #[inline]
    pub fn void_mask(&self) -> &[bool] {
        &self.void_mask
    }

    /// Row-major index of a grid point.
    #[inline]
    pub fn index(&self, column: usize, row: usize) -> usize {
        row * self.header.columns + column
    }

    /// Elevation at a grid point.
    #[inline]
    pub fn elevation(&self, column: usize, row: usize) -> f64 {
        self.samples[self.index(column, row)]
    }

    /// True if the sample at a grid point was no-data or malformed.
    #[inline]
    pub fn is_void(&self, column: usize, row: usize) -> bool {
        self.void_mask[self.index(column, row)]
    }

    /// Number of substituted samples.
    pub fn void_count(&self) -> usize {
        self.void_mask.iter().filter(|&&void| void).count()
    }

    /// Elevations that were measured, skipping voids.
    pub fn valid_samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples
            .iter()
            .zip(&self.void_mask)
            .filter(|(_, &void)| !void)
            .map(|(&z, _)| z)
    }

    /// Range of the measured elevations.
    ///
    /// `None` when every sample is void. Substituted samples never widen the
    /// range, even though they appear in the mesh at the fill elevation.
    pub fn elevation_range(&self) -> Option<ElevationRange> {
        ElevationRange::from_samples(self.valid_samples())
    }
}

/// Classification of one body token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// A finite elevation.
    Measured(f64),
    /// The no-data sentinel.
    NoData,
    /// A token that is not a finite number.
    Malformed,
}

impl Sample {
    /// Classifies a token against the header's no-data sentinel.
    ///
    /// The literal sentinel text is checked first, then the parsed value, so
    /// `-9999` and `-9999.0` are both no-data under either spelling.
    ///
    /// # Example
    ///
    /// ```rust
    /// use asc_grid::{GridHeader, Sample};
    ///
    /// let header = GridHeader::from_values(["1", "1", "0", "0", "1", "-9999"]).unwrap();
    /// assert_eq!(Sample::classify("12.5", &header), Sample::Measured(12.5));
    /// assert_eq!(Sample::classify("-9999", &header), Sample::NoData);
    /// assert_eq!(Sample::classify("-9999.0", &header), Sample::NoData);
    /// assert_eq!(Sample::classify("n/a", &header), Sample::Malformed);
    /// ```
    pub fn classify(token: &str, header: &GridHeader) -> Self {
        if token == header.no_data_token {
            return Self::NoData;
        }
        match token.parse::<f64>() {
            Ok(z) if z == header.no_data_value => Self::NoData,
            Ok(z) if z.is_finite() => Self::Measured(z),
            _ => Self::Malformed,
        }
    }

    /// Elevation stored for this sample.
    #[inline]
    pub fn elevation(self) -> f64 {
        match self {
            Self::Measured(z) => z,
            Self::NoData | Self::Malformed => NODATA_FILL_ELEVATION,
        }
    }

    /// True if the sample was substituted.
    #[inline]
    pub fn is_void(self) -> bool {
        !matches!(self, Self::Measured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(columns: usize, rows: usize) -> GridHeader {
        GridHeader {
            columns,
            rows,
            origin_x: 0.0,
            origin_y: 0.0,
            cell_size: 1.0,
            no_data_value: -9999.0,
            no_data_token: "-9999".to_string(),
        }
    }

    #[test]
    fn test_new_rejects_short_samples() {
        let err = HeightGrid::new(header(2, 2), vec![0.0; 3], vec![false; 3]).unwrap_err();
        assert!(matches!(
            err,
            GridError::SampleCountMismatch {
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn test_new_rejects_mask_mismatch() {
        let err = HeightGrid::new(header(2, 2), vec![0.0; 4], vec![false; 5]).unwrap_err();
        assert!(matches!(err, GridError::SampleCountMismatch { found: 5, .. }));
    }

    #[test]
    fn test_from_elevations_rejects_zero_cell_size() {
        assert!(HeightGrid::from_elevations(2, 2, 0.0, vec![0.0; 4]).is_err());
    }

    #[test]
    fn test_elevation_range_skips_voids() {
        let grid = HeightGrid::new(
            header(3, 1),
            vec![100.0, 0.0, 105.0],
            vec![false, true, false],
        )
        .unwrap();
        let range = grid.elevation_range().unwrap();
        assert_eq!(range.min, 100.0);
        assert_eq!(range.max, 105.0);
        assert_eq!(range.span(), 5.0);
        assert_eq!(grid.void_count(), 1);
        assert!(grid.is_void(1, 0));
    }

    #[test]
    fn test_elevation_range_all_void() {
        let grid = HeightGrid::new(header(2, 1), vec![0.0, 0.0], vec![true, true]).unwrap();
        assert!(grid.elevation_range().is_none());
    }

    #[test]
    fn test_elevation_range_negative_terrain() {
        let grid = HeightGrid::from_elevations(2, 1, 1.0, vec![-40.0, -12.0]).unwrap();
        let range = grid.elevation_range().unwrap();
        assert_eq!(range.min, -40.0);
        assert_eq!(range.max, -12.0);
    }

    #[test]
    fn test_sample_fill_elevation() {
        assert_eq!(Sample::NoData.elevation(), 0.0);
        assert_eq!(Sample::Malformed.elevation(), 0.0);
        assert!(Sample::Malformed.is_void());
        assert!(!Sample::Measured(0.0).is_void());
    }

    #[test]
    fn test_sample_rejects_non_finite() {
        let h = header(1, 1);
        assert_eq!(Sample::classify("inf", &h), Sample::Malformed);
        assert_eq!(Sample::classify("NaN", &h), Sample::Malformed);
        assert_eq!(Sample::classify("", &h), Sample::Malformed);
    }
}
