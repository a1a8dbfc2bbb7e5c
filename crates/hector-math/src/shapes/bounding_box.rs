//! Axis-aligned bounding boxes of posed primitives.
//!
//! Model
//! - Shapes are centred at their local origin and placed by a rigid transform.
//! - Boxes and transformed AABBs take the extent of their 8 transformed corners;
//!   spheres and cylinders use closed forms, so all results are tight.

use nalgebra::{Isometry3, Point3, Vector3};

/// Axis-aligned box `[min, max]` in 3D.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb3 {
    #[inline]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Smallest box holding all `points`; `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3<f64>>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        Some(it.fold(Self::new(first, first), |b, p| Self {
            min: b.min.inf(&p),
            max: b.max.sup(&p),
        }))
    }

    #[inline]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Edge lengths along x, y, z.
    #[inline]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    /// The 8 corners, `min` first and `max` last.
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let (lo, hi) = (&self.min, &self.max);
        std::array::from_fn(|i| {
            Point3::new(
                if i & 4 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 1 == 0 { lo.z } else { hi.z },
            )
        })
    }
}

/// Bounds of a sphere of `radius` centred at the transform's origin.
pub fn bounding_box_for_sphere(radius: f64, transform: &Isometry3<f64>) -> Aabb3 {
    let c = Point3::from(transform.translation.vector);
    let r = Vector3::repeat(radius);
    Aabb3::new(c - r, c + r)
}

/// Bounds of a box with edge lengths `dims` centred at the local origin.
pub fn bounding_box_for_box(dims: &Vector3<f64>, transform: &Isometry3<f64>) -> Aabb3 {
    let half = Point3::from(dims / 2.0);
    transform_bounding_box(&Aabb3::new(-half, half), transform)
}

/// Bounds of a cylinder of `radius` whose axis of `length` is the local z axis.
pub fn bounding_box_for_cylinder(radius: f64, length: f64, transform: &Isometry3<f64>) -> Aabb3 {
    let axis = transform.rotation * Vector3::z();
    // Per world axis: projected half length plus the disc's extent along it.
    let half = axis.map(|t| t.abs() * length / 2.0 + (1.0 - t * t).max(0.0).sqrt() * radius);
    let c = Point3::from(transform.translation.vector);
    Aabb3::new(c - half, c + half)
}

/// Smallest AABB holding `aabb` after applying `transform`.
pub fn transform_bounding_box(aabb: &Aabb3, transform: &Isometry3<f64>) -> Aabb3 {
    let corners = aabb.corners().map(|p| transform * p);
    let mut out = Aabb3::new(corners[0], corners[0]);
    for p in &corners[1..] {
        out.min = out.min.inf(p);
        out.max = out.max.sup(p);
    }
    out
}
