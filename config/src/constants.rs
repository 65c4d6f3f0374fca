//! # Configuration Constants
//!
//! Centralized constants for the ASC terrain pipeline. Header layout,
//! elevation defaults, precision values and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Header**: Field names and order of the ESRI ASCII raster header
//! - **Elevation**: No-data fill value and base plane derivation
//! - **Precision**: Floating-point comparison and vertex merge tolerances
//! - **Limits**: Maximum values for safety bounds
//! - **Export**: Binary STL layout sizes

// =============================================================================
// HEADER CONSTANTS
// =============================================================================

/// Header field names of an ESRI ASCII raster, in the order they must appear.
///
/// Each header line is `<NAME> <value>`. Names are matched exactly and
/// case-sensitively.
///
/// # Example
///
/// ```rust
/// use config::constants::HEADER_FIELDS;
///
/// let line = "CELLSIZE 10";
/// let name = line.split_whitespace().next().unwrap();
/// assert_eq!(name, HEADER_FIELDS[4]);
/// ```
pub const HEADER_FIELDS: [&str; 6] = [
    "NCOLS",
    "NROWS",
    "XLLCENTER",
    "YLLCENTER",
    "CELLSIZE",
    "NODATA_VALUE",
];

/// Number of header lines preceding the sample matrix.
pub const HEADER_LINE_COUNT: usize = HEADER_FIELDS.len();

// =============================================================================
// ELEVATION CONSTANTS
// =============================================================================

/// No-data sentinel used when a grid is built directly from values.
///
/// Matches the value most ASC exporters write into `NODATA_VALUE`.
pub const DEFAULT_NODATA_VALUE: f64 = -9999.0;

/// Elevation assigned to no-data and unparsable samples.
///
/// # Example
///
/// ```rust
/// use config::constants::NODATA_FILL_ELEVATION;
///
/// let token = "abc";
/// let elevation = token.parse::<f64>().unwrap_or(NODATA_FILL_ELEVATION);
/// assert_eq!(elevation, 0.0);
/// ```
pub const NODATA_FILL_ELEVATION: f64 = 0.0;

/// Divisor applied to the elevation span when placing the base plane.
///
/// The floor sits `(max - min) / BASE_MARGIN_DIVISOR` below the lowest
/// sample, unless that margin reaches below zero, in which case the floor
/// is pinned at zero.
///
/// # Example
///
/// ```rust
/// use config::constants::BASE_MARGIN_DIVISOR;
///
/// let (min, max) = (100.0, 105.0);
/// let margin = (max - min) / BASE_MARGIN_DIVISOR;
/// assert_eq!(min - margin, 99.0);
/// ```
pub const BASE_MARGIN_DIVISOR: f64 = 5.0;

/// Base plane elevation used when the terrain span is large relative to its
/// minimum, or when the grid has no valid sample.
pub const BASE_PLANE_FLOOR: f64 = 0.0;

/// Minimum number of rows and columns a grid needs to enclose a solid.
///
/// A single row or column has no cells, so neither a top surface nor
/// walls with any area can be produced.
pub const MIN_MESH_DIMENSION: usize = 2;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Cell size of the vertex welding grid.
///
/// The mesh finisher rounds every coordinate to a multiple of this value and
/// welds vertices that round to the same cell. Points that straddle a cell
/// boundary stay apart even when closer than this, so welding is reliable
/// for positions that agree to well under it, such as skirt corners and
/// zero-height walls, whose coordinates are bit-identical.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn weld_cell(value: f64) -> f64 {
///     (value / VERTEX_MERGE_EPSILON).round()
/// }
///
/// assert_eq!(weld_cell(10.0), weld_cell(10.0 + 1e-12));
/// // Straddling the boundary at 0.5 * epsilon
/// assert_ne!(weld_cell(0.49e-8), weld_cell(0.51e-8));
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from very large grids. It also
/// keeps every index representable as `u32`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let (rows, columns) = (1000, 1000);
/// let vertex_count = rows * columns + 2 * rows + 2 * columns;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of samples (`NCOLS * NROWS`) a grid header may declare.
///
/// Checked before any sample buffer is allocated, so a header claiming an
/// enormous grid fails fast instead of reserving memory for it.
pub const MAX_GRID_SAMPLES: usize = MAX_VERTICES;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 20_000_000;

/// Minimum number of items handed to one rayon task.
///
/// Small grids are emitted on a single thread; work is only split once a
/// task would receive at least this many samples or rows.
pub const PARALLEL_MIN_LEN: usize = 4096;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Size of the free-form header at the start of a binary STL file.
pub const STL_HEADER_BYTES: usize = 80;

/// Size of one triangle record in a binary STL file.
///
/// Normal (3 × f32), three vertices (9 × f32) and a u16 attribute count.
pub const STL_TRIANGLE_BYTES: usize = 50;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the binary STL file size for a triangle count.
///
/// # Example
///
/// ```rust
/// use config::constants::stl_file_size;
///
/// assert_eq!(stl_file_size(12), 84 + 12 * 50);
/// ```
#[inline]
pub fn stl_file_size(triangle_count: usize) -> usize {
    STL_HEADER_BYTES + 4 + triangle_count * STL_TRIANGLE_BYTES
}
