//! Scalar helpers and random sampling utilities.

mod operations;
mod random;

pub use operations::{
    clamp, ensure_finite, make_multiple_ceil, make_multiple_floor, make_multiple_round, square,
};
pub use random::random_unit_quaternion;
