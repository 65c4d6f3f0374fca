//! Top surface: one vertex per sample, two triangles per cell.
//!
//! Both passes are independent per element and run on rayon; ordered
//! collection keeps the output identical to a sequential loop.

use asc_grid::HeightGrid;
use config::constants::PARALLEL_MIN_LEN;
use glam::DVec3;
use rayon::prelude::*;

use super::planar;
use crate::layout::SkirtLayout;

/// Surface vertices in row-major order, index `y * columns + x`.
pub(super) fn vertices(grid: &HeightGrid) -> Vec<DVec3> {
    let columns = grid.columns();
    let cell_size = grid.cell_size();
    grid.samples()
        .par_iter()
        .with_min_len(PARALLEL_MIN_LEN)
        .enumerate()
        .map(|(index, &z)| {
            let (x, y) = planar(index % columns, index / columns, cell_size);
            DVec3::new(x, y, z)
        })
        .collect()
}

/// Two counter-clockwise triangles per cell, facing +Z.
pub(super) fn triangles(layout: &SkirtLayout) -> Vec<[u32; 3]> {
    let columns = layout.columns() as u32;
    let layout = *layout;
    (1..layout.rows())
        .into_par_iter()
        .flat_map_iter(move |row| {
            (0..layout.columns() - 1).flat_map(move |x| {
                let base = layout.surface_index(x, row - 1);
                [
                    [base, base + 1, base + 1 + columns],
                    [base, base + 1 + columns, base + columns],
                ]
            })
        })
        .collect()
}
