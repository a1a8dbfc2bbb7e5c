//! Containers: fixed-capacity vectors and the quaternion nearest-neighbour cache.

mod binning;
mod bounded_vec;
mod quaternion_cache;

pub use binning::{canonical_coords, BinKey, BinningMode};
pub use bounded_vec::BoundedVec;
pub use quaternion_cache::{CacheCfg, QuaternionCache};
