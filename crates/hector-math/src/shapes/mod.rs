//! Bounds of primitive 3D shapes.

mod bounding_box;

pub use bounding_box::{
    bounding_box_for_box, bounding_box_for_cylinder, bounding_box_for_sphere,
    transform_bounding_box, Aabb3,
};
