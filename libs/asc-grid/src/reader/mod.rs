//! # Grid Reader
//!
//! Reads an ESRI ASCII raster from any buffered source: six header lines in
//! fixed order, then one line of whitespace-separated samples per row.
//!
//! No-data and unparsable tokens are replaced by the fill elevation and
//! counted; they never abort the load. Header problems always do.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use config::constants::{HEADER_LINE_COUNT, NODATA_FILL_ELEVATION};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{GridError, GridResult};
use crate::grid::{HeightGrid, Sample};
use crate::header::{GridHeader, HeaderField};


// =============================================================================
// OPTIONS
// =============================================================================

/// How body rows that disagree with the header dimensions are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPolicy {
    /// Every row must hold `NCOLS` samples and the body `NROWS` rows.
    #[default]
    Strict,
    /// Short rows and missing rows are padded with voids; surplus samples
    /// and rows are dropped.
    Lenient,
}

/// Options for loading a grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Handling of ragged rows and row count mismatches.
    pub rows: RowPolicy,
}

impl LoadOptions {
    /// Options that tolerate ragged bodies.
    pub fn lenient() -> Self {
        Self {
            rows: RowPolicy::Lenient,
        }
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Loads a height grid from a buffered reader.
///
/// # Example
///
/// ```rust
/// use asc_grid::{load, LoadOptions};
///
/// let text = "NCOLS 2\nNROWS 1\nXLLCENTER 0\nYLLCENTER 0\nCELLSIZE 1\nNODATA_VALUE -9999\n4 -9999\n";
/// let grid = load(text.as_bytes(), &LoadOptions::default()).unwrap();
/// assert_eq!(grid.samples(), &[4.0, 0.0]);
/// ```
pub fn load<R: BufRead>(reader: R, options: &LoadOptions) -> GridResult<HeightGrid> {
    let mut lines = reader.lines();
    let header = read_header(&mut lines)?;
    let body = read_body(lines, &header, options)?;
    info!(
        columns = header.columns,
        rows = header.rows,
        no_data = body.no_data,
        malformed = body.malformed,
        "grid loaded"
    );
    HeightGrid::new(header, body.samples, body.void_mask)
}

/// Loads a height grid from in-memory text.
pub fn load_str(text: &str, options: &LoadOptions) -> GridResult<HeightGrid> {
    load(text.as_bytes(), options)
}

/// Loads a height grid from a file.
///
/// The file is closed on every return path. Any failure is reported with
/// the file path attached.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_path(path: impl AsRef<Path>, options: &LoadOptions) -> GridResult<HeightGrid> {
    let path = path.as_ref();
    File::open(path)
        .map_err(GridError::from)
        .and_then(|file| load(BufReader::new(file), options))
        .map_err(|err| err.in_file(path))
}

// =============================================================================
// HEADER
// =============================================================================

fn read_header<I>(lines: &mut I) -> GridResult<GridHeader>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut raw: [String; HEADER_LINE_COUNT] = Default::default();
    for (slot, field) in raw.iter_mut().zip(HeaderField::ALL) {
        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(GridError::missing(field)),
        };
        let value = field.value_in(&line)?;
        debug!(%field, value, "header field found");
        *slot = value.to_string();
    }
    let [ncols, nrows, xll, yll, cell, nodata] = &raw;
    GridHeader::from_values([
        ncols.as_str(),
        nrows.as_str(),
        xll.as_str(),
        yll.as_str(),
        cell.as_str(),
        nodata.as_str(),
    ])
}

// =============================================================================
// BODY
// =============================================================================

/// Row-major samples read from the body.
#[derive(Debug, Default)]
struct Body {
    samples: Vec<f64>,
    void_mask: Vec<bool>,
    no_data: usize,
    malformed: usize,
}

impl Body {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            void_mask: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn push(&mut self, sample: Sample) {
        match sample {
            Sample::NoData => self.no_data += 1,
            Sample::Malformed => self.malformed += 1,
            Sample::Measured(_) => {}
        }
        self.samples.push(sample.elevation());
        self.void_mask.push(sample.is_void());
    }

    /// Pads with voids or truncates to `len` samples.
    fn resize(&mut self, len: usize) {
        self.samples.resize(len, NODATA_FILL_ELEVATION);
        self.void_mask.resize(len, true);
    }
}

fn read_body<I>(lines: I, header: &GridHeader, options: &LoadOptions) -> GridResult<Body>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let columns = header.columns;
    let mut body = Body::with_capacity(header.sample_count());
    let mut row = 0;

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let start = body.samples.len();
        for token in line.split_whitespace() {
            body.push(Sample::classify(token, header));
        }

        let found = body.samples.len() - start;
        if found != columns {
            if options.rows == RowPolicy::Strict {
                return Err(GridError::MalformedRow {
                    row,
                    expected: columns,
                    found,
                });
            }
            warn!(row, expected = columns, found, "ragged row resized");
            body.resize(start + columns);
        }
        row += 1;
    }

    if row != header.rows {
        if options.rows == RowPolicy::Strict {
            return Err(GridError::RowCountMismatch {
                expected: header.rows,
                found: row,
            });
        }
        warn!(expected = header.rows, found = row, "row count resized");
        body.resize(header.sample_count());
    }

    if body.no_data + body.malformed > 0 {
        warn!(
            no_data = body.no_data,
            malformed = body.malformed,
            fill = NODATA_FILL_ELEVATION,
            "substituted samples"
        );
    }

    Ok(body)
}
