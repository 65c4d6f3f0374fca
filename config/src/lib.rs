//! # Config Crate
//!
//! Centralized configuration constants for the ASC terrain pipeline.
//! Header layout, base plane derivation, weld tolerances and size limits
//! are defined here so the grid loader and the mesher agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{HEADER_FIELDS, NODATA_FILL_ELEVATION, VERTEX_MERGE_EPSILON};
//!
//! // The six header lines are always read in this order
//! assert_eq!(HEADER_FIELDS[0], "NCOLS");
//! assert_eq!(HEADER_FIELDS[5], "NODATA_VALUE");
//!
//! // Missing samples are flattened to this elevation
//! assert_eq!(NODATA_FILL_ELEVATION, 0.0);
//!
//! // Positions closer than this are merged by the mesh finisher
//! assert!(VERTEX_MERGE_EPSILON > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Compatible Defaults**: Fill values and base margin match established ASC readers
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
