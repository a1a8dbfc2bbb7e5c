//! Grid iteration helpers.
//!
//! Purpose
//! - Enumerate the integer cells covered by a shape, for painting or reducing maps.
//!
//! Conventions
//! - Cell `(x, y)` covers `[x, x+1) × [y, y+1)`; `x` indexes map rows and `y` map
//!   columns, so a cell reads `map[(x, y)]`.
//! - All index ranges are half-open.

mod polygon;

pub use polygon::{iterate_polygon, iterate_polygon_in_grid, iterate_polygon_unbounded, IndexRange};

#[cfg(test)]
mod tests;
