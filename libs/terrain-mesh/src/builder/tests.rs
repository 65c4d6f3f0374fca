//! # Mesher Tests
//!
//! Vertex layout, index bounds, wall winding and base plane placement.

use super::*;
use crate::topology::check_indices;
use approx::assert_relative_eq;

fn grid(columns: usize, rows: usize, cell_size: f64, elevations: Vec<f64>) -> HeightGrid {
    HeightGrid::from_elevations(columns, rows, cell_size, elevations).unwrap()
}

fn bump() -> HeightGrid {
    grid(3, 3, 10.0, vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0])
}

/// Deterministic relief with a clear minimum above sea level.
fn ramp(columns: usize, rows: usize) -> HeightGrid {
    let elevations = (0..rows * columns)
        .map(|i| 100.0 + ((i * 7) % 11) as f64)
        .collect();
    grid(columns, rows, 2.5, elevations)
}

/// Surface and wall triangles written with raw index offsets.
fn raw_offset_triangles(columns: u32, rows: u32) -> Vec<[u32; 3]> {
    let mut out = Vec::new();
    for j in 1..rows {
        for i in 0..columns - 1 {
            let base = (j - 1) * columns + i;
            out.push([base, base + 1, base + 1 + columns]);
            out.push([base, base + 1 + columns, base + columns]);
        }
    }
    let offset = rows * columns;
    let offset_last_row = offset - columns;
    let offset_bottom = offset + columns + rows;
    for i in 0..columns - 1 {
        out.push([i, i + offset, i + 1]);
        out.push([i + 1, i + offset, i + offset + 1]);
        out.push([i + offset_last_row + 1, i + offset_bottom, i + offset_last_row]);
        out.push([i + offset_bottom + 1, i + offset_bottom, i + offset_last_row + 1]);
    }
    let start_right = offset + columns;
    let start_left = offset + 2 * columns + rows;
    for j in 0..rows - 1 {
        out.push([columns * (j + 2) - 1, columns * (j + 1) - 1, start_right + j]);
        out.push([columns * (j + 2) - 1, start_right + j, start_right + j + 1]);
        out.push([start_left + j, columns * j, columns * (j + 1)]);
        out.push([start_left + j + 1, start_left + j, columns * (j + 1)]);
    }
    out
}

fn triangle_normal(mesh: &MeshBuffers, index: usize) -> DVec3 {
    let [a, b, c] = mesh.corners(index);
    (b - a).cross(c - a)
}

// =============================================================================
// LAYOUT
// =============================================================================

#[test]
fn test_vertex_count_formula() {
    for (columns, rows) in [(2, 2), (3, 3), (5, 2), (2, 6), (9, 7)] {
        let mesh = build_mesh(&ramp(columns, rows)).unwrap();
        assert_eq!(
            mesh.vertex_count(),
            rows * columns + 2 * rows + 2 * columns,
            "{columns} x {rows}"
        );
    }
}

#[test]
fn test_indices_in_bounds() {
    for floor in [FloorStyle::Perimeter, FloorStyle::Quad] {
        let options = MeshOptions {
            floor,
            ..Default::default()
        };
        for (columns, rows) in [(2, 2), (3, 3), (4, 2), (2, 5), (8, 6)] {
            let mesh = build_mesh_with(&ramp(columns, rows), &options).unwrap();
            assert!(check_indices(&mesh).is_ok(), "{columns} x {rows} {floor:?}");
        }
    }
}

#[test]
fn test_surface_vertices_row_major() {
    let mesh = build_mesh(&bump()).unwrap();
    assert_eq!(mesh.vertex(4), DVec3::new(10.0, 10.0, 1.0));
    assert_eq!(mesh.vertex(5), DVec3::new(20.0, 10.0, 0.0));
    assert_eq!(mesh.vertex(7), DVec3::new(10.0, 20.0, 0.0));
}

#[test]
fn test_skirt_vertices_on_base_plane() {
    let grid = ramp(4, 3);
    let layout = SkirtLayout::for_grid(&grid).unwrap();
    let mesh = build_mesh(&grid).unwrap();
    let base_z = base_elevation(grid.elevation_range());

    for v in &mesh.vertices()[layout.top_skirt_offset()..] {
        assert_eq!(v.z, base_z);
    }
    assert_eq!(mesh.vertex(layout.top_skirt_index(3)), DVec3::new(7.5, 0.0, base_z));
    assert_eq!(mesh.vertex(layout.right_skirt_index(2)), DVec3::new(7.5, 5.0, base_z));
    assert_eq!(mesh.vertex(layout.bottom_skirt_index(1)), DVec3::new(2.5, 5.0, base_z));
    assert_eq!(mesh.vertex(layout.left_skirt_index(1)), DVec3::new(0.0, 2.5, base_z));
}

#[test]
fn test_matches_raw_offset_triangulation() {
    for (columns, rows) in [(2, 2), (3, 3), (5, 4), (3, 7)] {
        let layout = SkirtLayout::new(columns, rows).unwrap();
        let mesh = build_mesh(&ramp(columns, rows)).unwrap();
        let upper = layout.surface_triangle_count() + layout.wall_triangle_count();

        let mut built = mesh.triangles()[..upper].to_vec();
        let mut raw = raw_offset_triangles(columns as u32, rows as u32);
        built.sort_unstable();
        raw.sort_unstable();
        assert_eq!(built, raw, "{columns} x {rows}");
    }
}

#[test]
fn test_quad_floor_uses_skirt_corners() {
    let options = MeshOptions {
        floor: FloorStyle::Quad,
        ..Default::default()
    };
    let mesh = build_mesh_with(&ramp(4, 3), &options).unwrap();
    // offset 12, p2 16, p3 19, p4 22
    let n = mesh.triangle_count();
    assert_eq!(mesh.triangle(n - 2), [19, 16, 12]);
    assert_eq!(mesh.triangle(n - 1), [19, 22, 16]);
}

// =============================================================================
// TRIANGLES
// =============================================================================

#[test]
fn test_flat_2x2_has_twelve_triangles() {
    let mesh = build_mesh(&grid(2, 2, 1.0, vec![5.0; 4])).unwrap();
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.vertices().iter().all(|v| v.z == 5.0));
}

#[test]
fn test_triangle_count_per_floor_style() {
    let grid = ramp(6, 4);
    let layout = SkirtLayout::for_grid(&grid).unwrap();
    for floor in [FloorStyle::Perimeter, FloorStyle::Quad] {
        let options = MeshOptions {
            floor,
            ..Default::default()
        };
        let mesh = build_mesh_with(&grid, &options).unwrap();
        assert_eq!(mesh.triangle_count(), layout.triangle_count(floor));
    }
}

#[test]
fn test_surface_faces_up() {
    let grid = ramp(5, 4);
    let layout = SkirtLayout::for_grid(&grid).unwrap();
    let mesh = build_mesh(&grid).unwrap();
    for i in 0..layout.surface_triangle_count() {
        assert!(triangle_normal(&mesh, i).z > 0.0);
    }
}

#[test]
fn test_walls_face_outward() {
    let grid = ramp(5, 4);
    let layout = SkirtLayout::for_grid(&grid).unwrap();
    let mesh = build_mesh(&grid).unwrap();
    let (min, max) = mesh.bounding_box();
    let centre = (min + max) * 0.5;

    let start = layout.surface_triangle_count();
    for i in start..start + layout.wall_triangle_count() {
        let [a, b, c] = mesh.corners(i);
        let outward = (a + b + c) / 3.0 - centre;
        assert!(
            triangle_normal(&mesh, i).truncate().dot(outward.truncate()) > 0.0,
            "wall triangle {i} faces inward"
        );
    }
}

#[test]
fn test_floor_faces_down() {
    let grid = ramp(5, 4);
    let layout = SkirtLayout::for_grid(&grid).unwrap();
    for floor in [FloorStyle::Perimeter, FloorStyle::Quad] {
        let options = MeshOptions {
            floor,
            ..Default::default()
        };
        let mesh = build_mesh_with(&grid, &options).unwrap();
        let start = layout.surface_triangle_count() + layout.wall_triangle_count();
        for i in start..mesh.triangle_count() {
            assert!(triangle_normal(&mesh, i).z < 0.0, "{floor:?} triangle {i}");
        }
    }
}

#[test]
fn test_perimeter_floor_covers_base_rectangle() {
    let grid = ramp(6, 5);
    let layout = SkirtLayout::for_grid(&grid).unwrap();
    let mesh = build_mesh(&grid).unwrap();
    let start = layout.surface_triangle_count() + layout.wall_triangle_count();
    let area: f64 = (start..mesh.triangle_count())
        .map(|i| triangle_normal(&mesh, i).length() / 2.0)
        .sum();
    // 5 x 4 cells of 2.5
    assert_relative_eq!(area, 12.5 * 10.0, epsilon = 1e-9);
}

// =============================================================================
// OPTIONS
// =============================================================================

#[test]
fn test_base_plane_below_plateau() {
    let grid = grid(2, 2, 1.0, vec![100.0, 101.0, 104.0, 105.0]);
    let mesh = build_mesh(&grid).unwrap();
    assert_relative_eq!(mesh.vertex(4).z, 99.0);
}

#[test]
fn test_base_plane_at_zero_for_low_terrain() {
    let mesh = build_mesh(&bump()).unwrap();
    assert_eq!(mesh.vertex(9).z, 0.0);
}

#[test]
fn test_base_elevation_override() {
    let options = MeshOptions {
        base_elevation: Some(-3.0),
        ..Default::default()
    };
    let mesh = build_mesh_with(&bump(), &options).unwrap();
    assert_eq!(mesh.vertex(9).z, -3.0);
}

#[test]
fn test_translate_to_origin() {
    let mut header = bump().header().clone();
    header.origin_x = 724980.0;
    header.origin_y = 4449560.0;
    let grid = HeightGrid::new(header, bump().samples().to_vec(), vec![false; 9]).unwrap();
    let options = MeshOptions {
        translate_to_origin: true,
        ..Default::default()
    };
    let mesh = build_mesh_with(&grid, &options).unwrap();
    assert_eq!(mesh.vertex(0), DVec3::new(724980.0, 4449560.0, 0.0));
    assert_eq!(mesh.vertex(8), DVec3::new(725000.0, 4449580.0, 0.0));
}

#[test]
fn test_single_row_is_empty_mesh() {
    let err = build_mesh(&grid(4, 1, 1.0, vec![1.0; 4])).unwrap_err();
    assert!(matches!(err, crate::MeshError::EmptyMesh { .. }));
}

#[test]
fn test_mesh_options_from_json() {
    let options: MeshOptions =
        serde_json::from_str(r#"{"floor":"quad","translate_to_origin":true}"#).unwrap();
    assert_eq!(options.floor, FloorStyle::Quad);
    assert!(options.translate_to_origin);
    assert_eq!(options.base_elevation, None);
    let defaults: MeshOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, MeshOptions::default());
}
