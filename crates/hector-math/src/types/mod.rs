//! Shared aliases and small value types.
//!
//! Conventions
//! - Grids are `nalgebra::DMatrix`; the row index is the map x index and the column
//!   index the map y index.
//! - Polygons live in index space: a cell `(x, y)` covers `[x, x+1) × [y, y+1)`.

mod aggregators;
mod block_indices;

pub use aggregators::{MeanAggregator, RobustMeanAggregator};
pub use block_indices::BlockIndices;

/// 2D point in index space.
pub type Point = nalgebra::Point2<f64>;

/// Closed polygon as an ordered list of vertices (last connects to first).
pub type Polygon = Vec<Point>;

/// Dense height/cost grid.
pub type GridMap<T = f64> = nalgebra::DMatrix<T>;
