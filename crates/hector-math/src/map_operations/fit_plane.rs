//! Plane estimation from a height grid with holes.
//!
//! Model
//! - Gradients are the mean of neighbour differences along each axis, so a perfect
//!   plane is recovered exactly whatever cells are missing.
//! - The plane height is anchored at the centroid of the finite cells and then
//!   carried to the grid centre `((rows-1)/2, (cols-1)/2)`.
//! - Qualities are the fraction of neighbour pairs that were usable per axis.

use nalgebra::{DMatrix, Scalar};

use crate::types::MeanAggregator;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneEstimationResult {
    /// Plane height at the centre of the grid.
    pub center_plane_z: f64,
    /// Height change per row step.
    pub gradient_x: f64,
    /// Height change per column step.
    pub gradient_y: f64,
    /// Usable fraction of row-adjacent pairs, in [0, 1].
    pub quality_x: f64,
    /// Usable fraction of column-adjacent pairs, in [0, 1].
    pub quality_y: f64,
}

/// Fit a plane `z = c + gx·(row - rc) + gy·(col - cc)` to `map`, skipping non-finite cells.
pub fn fit_plane<T>(map: &DMatrix<T>) -> PlaneEstimationResult
where
    T: Scalar + Copy + Into<f64>,
{
    let (rows, cols) = map.shape();
    let at = |r: usize, c: usize| -> f64 { map[(r, c)].into() };

    let mut mean_x = MeanAggregator::<f64>::new();
    let mut mean_y = MeanAggregator::<f64>::new();
    let mut mean_z = MeanAggregator::<f64>::new();
    let mut centroid_row = MeanAggregator::<f64>::new();
    let mut centroid_col = MeanAggregator::<f64>::new();

    for c in 0..cols {
        for r in 0..rows {
            let value = at(r, c);
            if !value.is_finite() {
                continue;
            }
            mean_z.add(value);
            centroid_row.add(r as f64);
            centroid_col.add(c as f64);
            if r > 0 {
                let dx = value - at(r - 1, c);
                if dx.is_finite() {
                    mean_x.add(dx);
                }
            }
            if c > 0 {
                let dy = value - at(r, c - 1);
                if dy.is_finite() {
                    mean_y.add(dy);
                }
            }
        }
    }

    let gradient_x = mean_x.mean();
    let gradient_y = mean_y.mean();
    let center_plane_z = mean_z.mean()
        - (centroid_row.mean() - (rows as f64 - 1.0) / 2.0) * gradient_x
        - (centroid_col.mean() - (cols as f64 - 1.0) / 2.0) * gradient_y;

    let quality = |pairs: usize, total: usize| {
        if total == 0 {
            0.0
        } else {
            pairs as f64 / total as f64
        }
    };
    PlaneEstimationResult {
        center_plane_z,
        gradient_x,
        gradient_y,
        quality_x: quality(mean_x.count(), rows.saturating_sub(1) * cols),
        quality_y: quality(mean_y.count(), rows * cols.saturating_sub(1)),
    }
}
