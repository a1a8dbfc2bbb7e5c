//! Reductions over height grids (`GridMap`).
//!
//! - `fit_plane`: least-effort plane estimate from neighbour differences.
//! - `find_minimum` / `find_maximum`: extreme values inside a polygon footprint.

mod find_minmax;
mod fit_plane;

pub use find_minmax::{find_maximum, find_minimum};
pub use fit_plane::{fit_plane, PlaneEstimationResult};
