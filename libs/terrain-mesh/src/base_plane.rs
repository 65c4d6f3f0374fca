//! # Base Plane
//!
//! Height of the flat floor the skirts drop to.

use asc_grid::ElevationRange;
use config::constants::{BASE_MARGIN_DIVISOR, BASE_PLANE_FLOOR};

/// Computes the floor elevation for a terrain's valid elevation range.
///
/// The floor sits one fifth of the relief below the lowest sample, unless
/// that margin is at least as large as the lowest sample itself, in which
/// case it sits at zero. A grid with no valid samples also gets zero.
///
/// # Example
///
/// ```rust
/// use asc_grid::ElevationRange;
/// use terrain_mesh::base_elevation;
///
/// let range = ElevationRange { min: 100.0, max: 105.0 };
/// assert_eq!(base_elevation(Some(range)), 99.0);
/// assert_eq!(base_elevation(None), 0.0);
/// ```
pub fn base_elevation(range: Option<ElevationRange>) -> f64 {
    let Some(range) = range else {
        return BASE_PLANE_FLOOR;
    };
    let margin = range.span() / BASE_MARGIN_DIVISOR;
    if range.min > margin {
        range.min - margin
    } else {
        BASE_PLANE_FLOOR
    }
}
