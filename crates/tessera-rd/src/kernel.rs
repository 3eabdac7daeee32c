//! The 3x3 discrete Laplacian stencil.

use rayon::prelude::*;
use tessera_core::{EdgeBehavior, GridDims};

/// Laplacian weights indexed `[dy + 1][dx + 1]`: corners 0.05, edges 0.2,
/// centre -1.0. The weights sum to zero.
pub const LAPLACIAN_KERNEL: [[f64; 3]; 3] = [
    [0.05, 0.2, 0.05],
    [0.2, -1.0, 0.2],
    [0.05, 0.2, 0.05],
];

/// Laplacian of `field` at `(x, y)`.
///
/// Evaluated as `sum(w * (v_neighbour - v_centre))` over the eight
/// off-centre weights, which equals the full kernel sum because the
/// weights sum to zero, and is exactly 0.0 on a uniform field.
///
/// # Panics
///
/// Panics if `field` is shorter than `dims.cell_count()`.
pub fn laplacian_at(field: &[f32], dims: GridDims, x: u32, y: u32, edge: EdgeBehavior) -> f64 {
    let centre = f64::from(field[dims.index(x, y)]);
    let mut sum = 0.0;
    for (ky, row) in LAPLACIAN_KERNEL.iter().enumerate() {
        for (kx, &w) in row.iter().enumerate() {
            if kx == 1 && ky == 1 {
                continue;
            }
            let ni = dims.neighbour_index(x, y, kx as i32 - 1, ky as i32 - 1, edge);
            sum += w * (f64::from(field[ni]) - centre);
        }
    }
    sum
}

/// Write the Laplacian of `field` into `out`, row by row in parallel.
///
/// # Panics
///
/// Panics if `field` or `out` is not exactly `dims.cell_count()` long.
pub fn laplacian(field: &[f32], dims: GridDims, edge: EdgeBehavior, out: &mut [f32]) {
    assert_eq!(field.len(), dims.cell_count(), "field length");
    assert_eq!(out.len(), dims.cell_count(), "output length");
    out.par_chunks_mut(dims.width() as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, v) in row.iter_mut().enumerate() {
                *v = laplacian_at(field, dims, x as u32, y as u32, edge) as f32;
            }
        });
}
