//! Geometric and numeric primitives for robotics map and shape processing.
//!
//! Contents
//! - `iterators`: scan-line polygon rasterization onto integer grids.
//! - `containers`: fixed-capacity `BoundedVec` and the `QuaternionCache`.
//! - `map_operations`: plane fitting and polygon-restricted min/max over height grids.
//! - `types`: shared aliases (`Point`, `Polygon`, `GridMap`), `BlockIndices`, aggregators.
//! - `shapes`: axis-aligned bounding boxes for primitive shapes.
//! - `helpers::coloring`: segment palette and value→colour gradients.
//! - `math`: small scalar helpers.
//!
//! Policy
//! - Everything is synchronous and allocation-light; nothing here performs I/O.
//! - Logging goes through `tracing`; the library never installs a subscriber.

pub mod containers;
pub mod error;
pub mod helpers;
pub mod iterators;
pub mod map_operations;
pub mod math;
pub mod shapes;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::CapacityError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::containers::{BinningMode, BoundedVec, CacheCfg, QuaternionCache};
    pub use crate::helpers::coloring::{gradient_color, segment_color, GradientMethod, Rgb};
    pub use crate::iterators::{
        iterate_polygon, iterate_polygon_in_grid, iterate_polygon_unbounded, IndexRange,
    };
    pub use crate::map_operations::{find_maximum, find_minimum, fit_plane, PlaneEstimationResult};
    pub use crate::shapes::Aabb3;
    pub use crate::types::{
        BlockIndices, GridMap, MeanAggregator, Point, Polygon, RobustMeanAggregator,
    };
    pub use nalgebra::{Isometry3, UnitQuaternion, Vector3};
}
