//! # ASC Grid
//!
//! Loader for ESRI ASCII raster ("ASC") elevation grids.
//!
//! ## Architecture
//!
//! ```text
//! text source → header (6 fixed fields) → body (row-major samples) → HeightGrid
//! ```
//!
//! ## Leniency
//!
//! Sample tokens equal to the no-data sentinel, and tokens that are not
//! numbers, become elevation `0.0` and are flagged as voids. Header errors
//! are always fatal. Ragged rows are rejected unless `RowPolicy::Lenient`
//! is selected.
//!
//! ## Usage
//!
//! ```rust
//! use asc_grid::{load_str, LoadOptions};
//!
//! let text = "\
//! NCOLS 3
//! NROWS 2
//! XLLCENTER 724980
//! YLLCENTER 4449560
//! CELLSIZE 10
//! NODATA_VALUE -9999.0
//! 1 2 3
//! 4 -9999.0 6
//! ";
//! let grid = load_str(text, &LoadOptions::default()).unwrap();
//! assert_eq!(grid.samples().len(), 6);
//! assert_eq!(grid.elevation(1, 1), 0.0);
//! ```

pub mod error;
pub mod grid;
pub mod header;
pub mod reader;

pub use error::{GridError, GridResult};
pub use grid::{ElevationRange, HeightGrid, Sample};
pub use header::{GridHeader, HeaderField};
pub use reader::{load, load_path, load_str, LoadOptions, RowPolicy};
