//! Error types shared across the crate.

use thiserror::Error;

/// Growth of a fixed-capacity container past its maximum size.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("bounded vector can not hold {requested} elements (capacity {capacity})")]
pub struct CapacityError {
    /// Compile-time capacity of the container.
    pub capacity: usize,
    /// Length the operation would have produced.
    pub requested: usize,
}
