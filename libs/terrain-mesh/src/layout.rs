//! # Skirt Layout
//!
//! Closed-form vertex indexing shared by the surface, the four skirt walls
//! and the floor. No adjacency lookup is ever needed: every triangle is
//! arithmetic over `rows`, `columns` and the block offsets below.
//!
//! ```text
//! [0, rows*columns)                  surface, index y*columns + x
//! [top_skirt_offset, +columns)       top skirt row     (x, 0,      base)
//! [right_skirt_offset, +rows)        right skirt column (W, y,     base)
//! [bottom_skirt_offset, +columns)    bottom skirt row  (x, H,      base)
//! [left_skirt_offset, +rows)         left skirt column (0, y,      base)
//! ```

use asc_grid::HeightGrid;
use config::constants::{MAX_TRIANGLES, MAX_VERTICES, MIN_MESH_DIMENSION};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// How the floor of the solid is triangulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorStyle {
    /// Every skirt vertex on the perimeter is a floor vertex, so each wall's
    /// bottom edge is shared with exactly one floor triangle.
    #[default]
    Perimeter,
    /// Two triangles spanning the skirt corners. Leaves T-junctions along
    /// the walls on grids larger than 2 x 2.
    Quad,
}

/// Index arithmetic for a `rows` x `columns` grid solid.
///
/// # Example
///
/// ```rust
/// use terrain_mesh::SkirtLayout;
///
/// let layout = SkirtLayout::new(4, 3).unwrap();
/// assert_eq!(layout.surface_index(1, 2), 9);
/// assert_eq!(layout.top_skirt_index(0), 12);
/// assert_eq!(layout.right_skirt_index(0), 16);
/// assert_eq!(layout.bottom_skirt_index(0), 19);
/// assert_eq!(layout.left_skirt_index(0), 23);
/// assert_eq!(layout.vertex_count(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkirtLayout {
    columns: usize,
    rows: usize,
}

impl SkirtLayout {
    /// Creates the layout, rejecting grids that cannot enclose a solid or
    /// exceed the mesh size limits.
    pub fn new(columns: usize, rows: usize) -> MeshResult<Self> {
        if columns < MIN_MESH_DIMENSION || rows < MIN_MESH_DIMENSION {
            return Err(MeshError::empty(format!(
                "{rows} x {columns} grid has no cells to triangulate"
            )));
        }
        // Saturates on overflow
        let count = columns
            .saturating_mul(rows)
            .saturating_add(columns.saturating_mul(2))
            .saturating_add(rows.saturating_mul(2));
        if count > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count,
                max: MAX_VERTICES,
            });
        }
        let layout = Self { columns, rows };
        let count = layout.triangle_count(FloorStyle::Perimeter);
        if count > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count,
                max: MAX_TRIANGLES,
            });
        }
        Ok(layout)
    }

    /// Layout for a height grid.
    pub fn for_grid(grid: &HeightGrid) -> MeshResult<Self> {
        Self::new(grid.columns(), grid.rows())
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    // =========================================================================
    // BLOCK OFFSETS
    // =========================================================================

    /// First index of the top skirt row; equals the surface vertex count.
    #[inline]
    pub fn top_skirt_offset(&self) -> usize {
        self.rows * self.columns
    }

    /// First index of the grid's last row.
    #[inline]
    pub fn last_row_offset(&self) -> usize {
        self.top_skirt_offset() - self.columns
    }

    /// First index of the right skirt column.
    #[inline]
    pub fn right_skirt_offset(&self) -> usize {
        self.top_skirt_offset() + self.columns
    }

    /// First index of the bottom skirt row.
    #[inline]
    pub fn bottom_skirt_offset(&self) -> usize {
        self.right_skirt_offset() + self.rows
    }

    /// First index of the left skirt column.
    #[inline]
    pub fn left_skirt_offset(&self) -> usize {
        self.bottom_skirt_offset() + self.columns
    }

    /// Total vertex count: `rows*columns + 2*columns + 2*rows`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.left_skirt_offset() + self.rows
    }

    // =========================================================================
    // VERTEX INDICES
    // =========================================================================

    /// Surface vertex at column `x`, row `y`.
    #[inline]
    pub fn surface_index(&self, x: usize, y: usize) -> u32 {
        debug_assert!(x < self.columns && y < self.rows);
        (y * self.columns + x) as u32
    }

    /// Top skirt vertex below surface `(x, 0)`.
    #[inline]
    pub fn top_skirt_index(&self, x: usize) -> u32 {
        debug_assert!(x < self.columns);
        (self.top_skirt_offset() + x) as u32
    }

    /// Right skirt vertex below surface `(columns - 1, y)`.
    #[inline]
    pub fn right_skirt_index(&self, y: usize) -> u32 {
        debug_assert!(y < self.rows);
        (self.right_skirt_offset() + y) as u32
    }

    /// Bottom skirt vertex below surface `(x, rows - 1)`.
    #[inline]
    pub fn bottom_skirt_index(&self, x: usize) -> u32 {
        debug_assert!(x < self.columns);
        (self.bottom_skirt_offset() + x) as u32
    }

    /// Left skirt vertex below surface `(0, y)`.
    #[inline]
    pub fn left_skirt_index(&self, y: usize) -> u32 {
        debug_assert!(y < self.rows);
        (self.left_skirt_offset() + y) as u32
    }

    // =========================================================================
    // TRIANGLE COUNTS
    // =========================================================================

    /// Two triangles per grid cell.
    #[inline]
    pub fn surface_triangle_count(&self) -> usize {
        2 * (self.rows - 1) * (self.columns - 1)
    }

    /// Two triangles per border segment on each of the four walls.
    #[inline]
    pub fn wall_triangle_count(&self) -> usize {
        4 * (self.columns - 1) + 4 * (self.rows - 1)
    }

    /// Floor triangles for a floor style.
    #[inline]
    pub fn floor_triangle_count(&self, floor: FloorStyle) -> usize {
        match floor {
            FloorStyle::Perimeter => 2 * self.rows + 2 * self.columns - 6,
            FloorStyle::Quad => 2,
        }
    }

    /// Total triangle count for a floor style.
    #[inline]
    pub fn triangle_count(&self, floor: FloorStyle) -> usize {
        self.surface_triangle_count()
            + self.wall_triangle_count()
            + self.floor_triangle_count(floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_single_row() {
        assert!(matches!(
            SkirtLayout::new(5, 1),
            Err(MeshError::EmptyMesh { .. })
        ));
        assert!(matches!(
            SkirtLayout::new(1, 5),
            Err(MeshError::EmptyMesh { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        assert!(matches!(
            SkirtLayout::new(10_000, 10_000),
            Err(MeshError::TooManyVertices { .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        match SkirtLayout::new(usize::MAX, usize::MAX) {
            Err(MeshError::TooManyVertices { count, max }) => {
                assert_eq!(count, usize::MAX);
                assert_eq!(max, MAX_VERTICES);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_block_offsets() {
        let layout = SkirtLayout::new(4, 3).unwrap();
        assert_eq!(layout.top_skirt_offset(), 12);
        assert_eq!(layout.last_row_offset(), 8);
        assert_eq!(layout.right_skirt_offset(), 16);
        assert_eq!(layout.bottom_skirt_offset(), 19);
        assert_eq!(layout.left_skirt_offset(), 23);
        assert_eq!(layout.vertex_count(), 26);
    }

    #[test]
    fn test_vertex_count_formula() {
        for (columns, rows) in [(2, 2), (3, 3), (7, 2), (2, 9), (20, 20)] {
            let layout = SkirtLayout::new(columns, rows).unwrap();
            assert_eq!(
                layout.vertex_count(),
                rows * columns + 2 * rows + 2 * columns
            );
        }
    }

    #[test]
    fn test_blocks_are_contiguous() {
        let layout = SkirtLayout::new(5, 4).unwrap();
        assert_eq!(layout.surface_index(4, 3) + 1, layout.top_skirt_index(0));
        assert_eq!(layout.top_skirt_index(4) + 1, layout.right_skirt_index(0));
        assert_eq!(layout.right_skirt_index(3) + 1, layout.bottom_skirt_index(0));
        assert_eq!(layout.bottom_skirt_index(4) + 1, layout.left_skirt_index(0));
        assert_eq!(layout.left_skirt_index(3) as usize + 1, layout.vertex_count());
    }

    #[test]
    fn test_last_row_offset_is_first_vertex_of_last_row() {
        let layout = SkirtLayout::new(6, 4).unwrap();
        assert_eq!(
            layout.last_row_offset() as u32,
            layout.surface_index(0, layout.rows() - 1)
        );
    }

    #[test]
    fn test_triangle_counts_2x2() {
        let layout = SkirtLayout::new(2, 2).unwrap();
        assert_eq!(layout.surface_triangle_count(), 2);
        assert_eq!(layout.wall_triangle_count(), 8);
        assert_eq!(layout.floor_triangle_count(FloorStyle::Perimeter), 2);
        assert_eq!(layout.triangle_count(FloorStyle::Perimeter), 12);
        assert_eq!(layout.triangle_count(FloorStyle::Quad), 12);
    }

    #[test]
    fn test_perimeter_floor_count_is_polygon_triangulation() {
        // A polygon with n boundary vertices and no interior points has n - 2 triangles
        let layout = SkirtLayout::new(7, 4).unwrap();
        let perimeter = 2 * (layout.columns() - 1) + 2 * (layout.rows() - 1);
        assert_eq!(
            layout.floor_triangle_count(FloorStyle::Perimeter),
            perimeter - 2
        );
    }
}
