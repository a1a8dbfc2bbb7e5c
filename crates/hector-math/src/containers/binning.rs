//! Partitions of the unit-quaternion sphere into buckets.
//!
//! All strategies receive canonical coordinates `(w, x, y, z)` with `w >= 0`
//! (see `canonical_coords`) and expose two pure functions:
//! - `bin`: the bucket a quaternion falls into,
//! - `neighbors`: the buckets worth searching for keys close to a query. The result
//!   always contains `bin` itself and is sorted without duplicates.
//!
//! `q` and `-q` describe the same rotation; buckets adjacent to the `w = 0` border
//! therefore also look across to the antipodal side.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::{RealField, UnitQuaternion, Vector3, Vector4};

/// Opaque bucket identifier.
pub type BinKey = u64;

/// Strategy used to split the quaternion sphere into buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BinningMode {
    /// Cube-face projection keyed by the component with the largest magnitude.
    /// Cheapest, but bucket sizes vary towards face corners.
    #[default]
    LargestDim,
    /// Hyperspherical latitude/longitude cells with counts scaled for
    /// near-uniform bucket volume.
    Spherical,
    /// Rings in the angle to the identity, each split by a spherical Fibonacci
    /// lattice on the remaining 2-sphere. Most uniform, most expensive.
    SphericalFibonacci,
}

/// `(w, x, y, z)` of `q` in `f64`, sign-flipped so that `w >= 0` (ties broken by the
/// first non-zero vector component).
pub fn canonical_coords<S>(q: &UnitQuaternion<S>) -> Vector4<f64>
where
    S: RealField + Copy + Into<f64>,
{
    // nalgebra stores quaternions as (i, j, k, w).
    let v = &q.coords;
    let c = Vector4::new(v[3].into(), v[0].into(), v[1].into(), v[2].into());
    let flip = if c[0] != 0.0 {
        c[0] < 0.0
    } else {
        c.iter().skip(1).find(|v| **v != 0.0).is_some_and(|v| *v < 0.0)
    };
    if flip {
        -c
    } else {
        c
    }
}

impl BinningMode {
    /// Bucket of canonical coordinates `c` at the given `resolution` (cells per axis).
    pub fn bin(&self, c: &Vector4<f64>, resolution: usize) -> BinKey {
        let n = resolution.max(1);
        match self {
            BinningMode::LargestDim => {
                let dim = largest_dim(c);
                face_key(dim, face_cells(c, dim, n))
            }
            BinningMode::Spherical => {
                let rings = Rings::new(n);
                let (ring, dir) = rings.locate(c);
                rings.lat_long_key(ring, &dir)
            }
            BinningMode::SphericalFibonacci => {
                let rings = Rings::new(n);
                let (ring, dir) = rings.locate(c);
                let lattice = Fibonacci::new(rings.lattice_size(ring));
                ring_key(ring, lattice.nearest(&dir) as u64)
            }
        }
    }

    /// Buckets to search for keys near canonical coordinates `c`.
    pub fn neighbors(&self, c: &Vector4<f64>, resolution: usize) -> Vec<BinKey> {
        let n = resolution.max(1);
        let mut keys = vec![self.bin(c, n)];
        match self {
            BinningMode::LargestDim => {
                let dim = largest_dim(c);
                push_face_block(&mut keys, dim, face_cells(c, dim, n), n);
                let border = 1.0 - 2.0 / n as f64;
                let denom = c[dim].abs();
                for other in (0..4).filter(|&e| e != dim) {
                    if c[other].abs() >= border * denom {
                        push_face_block(&mut keys, other, face_cells(c, other, n), n);
                    }
                }
            }
            BinningMode::Spherical => {
                let rings = Rings::new(n);
                let (ring, dir) = rings.locate(c);
                for r in rings.adjacent(ring) {
                    rings.push_lat_long_block(&mut keys, r, &dir);
                }
                if ring + 1 == rings.count {
                    rings.push_lat_long_block(&mut keys, ring, &-dir);
                }
            }
            BinningMode::SphericalFibonacci => {
                let rings = Rings::new(n);
                let (ring, dir) = rings.locate(c);
                for r in rings.adjacent(ring) {
                    let lattice = Fibonacci::new(rings.lattice_size(r));
                    let radius = 2.0 * lattice.spacing();
                    keys.extend(lattice.within(&dir, radius).map(|m| ring_key(r, m as u64)));
                }
                if ring + 1 == rings.count {
                    let lattice = Fibonacci::new(rings.lattice_size(ring));
                    let radius = 2.0 * lattice.spacing();
                    keys.extend(lattice.within(&-dir, radius).map(|m| ring_key(ring, m as u64)));
                }
            }
        }
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

// ---------------------------------------------------------------------------
// LargestDim

fn largest_dim(c: &Vector4<f64>) -> usize {
    let mut best = 0;
    for d in 1..4 {
        if c[d].abs() > c[best].abs() {
            best = d;
        }
    }
    best
}

/// Quantised ratios of the three other components to `c[dim]`, in `[0, n)`.
fn face_cells(c: &Vector4<f64>, dim: usize, n: usize) -> [i64; 3] {
    let pivot = c[dim];
    let sign = if pivot < 0.0 { -1.0 } else { 1.0 };
    let denom = pivot.abs().max(f64::MIN_POSITIVE);
    let mut cells = [0i64; 3];
    for (slot, e) in (0..4).filter(|&e| e != dim).enumerate() {
        let ratio = sign * c[e] / denom;
        cells[slot] = quantize((ratio + 1.0) * 0.5, n);
    }
    cells
}

fn face_key(dim: usize, cells: [i64; 3]) -> BinKey {
    ((dim as u64) << 48) | ((cells[0] as u64) << 32) | ((cells[1] as u64) << 16) | cells[2] as u64
}

fn push_face_block(keys: &mut Vec<BinKey>, dim: usize, cells: [i64; 3], n: usize) {
    let max = n as i64 - 1;
    for a in (cells[0] - 1).max(0)..=(cells[0] + 1).min(max) {
        for b in (cells[1] - 1).max(0)..=(cells[1] + 1).min(max) {
            for c in (cells[2] - 1).max(0)..=(cells[2] + 1).min(max) {
                keys.push(face_key(dim, [a, b, c]));
            }
        }
    }
}

/// `floor(t * n)` clamped to `[0, n)`; `t` is nominally in `[0, 1]`.
#[inline]
fn quantize(t: f64, n: usize) -> i64 {
    ((t * n as f64).floor() as i64).clamp(0, n as i64 - 1)
}

// ---------------------------------------------------------------------------
// Rings around the identity (shared by Spherical and SphericalFibonacci)

struct Rings {
    count: usize,
    /// Angular ring width in `psi = acos(w)`.
    delta: f64,
}

impl Rings {
    fn new(count: usize) -> Self {
        Self {
            count,
            delta: FRAC_PI_2 / count as f64,
        }
    }

    /// Ring index and unit inner direction of canonical coordinates.
    fn locate(&self, c: &Vector4<f64>) -> (usize, Vector3<f64>) {
        let psi = c[0].clamp(-1.0, 1.0).acos();
        let ring = ((psi / self.delta).floor() as usize).min(self.count - 1);
        let v = Vector3::new(c[1], c[2], c[3]);
        let norm = v.norm();
        let dir = if norm < 1e-12 { Vector3::z() } else { v / norm };
        (ring, dir)
    }

    fn adjacent(&self, ring: usize) -> impl Iterator<Item = usize> {
        ring.saturating_sub(1)..=(ring + 1).min(self.count - 1)
    }

    #[inline]
    fn sin_center(&self, ring: usize) -> f64 {
        ((ring as f64 + 0.5) * self.delta).sin()
    }

    fn theta_count(&self, ring: usize) -> usize {
        ((PI * self.sin_center(ring) / self.delta).round() as usize).max(1)
    }

    fn phi_count(&self, ring: usize, theta_cell: usize, theta_count: usize) -> usize {
        let theta_c = (theta_cell as f64 + 0.5) * PI / theta_count as f64;
        ((TAU * self.sin_center(ring) * theta_c.sin() / self.delta).round() as usize).max(1)
    }

    fn lattice_size(&self, ring: usize) -> usize {
        let s = self.sin_center(ring);
        ((2.0 * TAU * s * s / (self.delta * self.delta)).round() as usize).max(1)
    }

    fn lat_long_key(&self, ring: usize, dir: &Vector3<f64>) -> BinKey {
        let (theta, phi) = polar_angles(dir);
        let nt = self.theta_count(ring);
        let j = quantize(theta / PI, nt) as usize;
        let np = self.phi_count(ring, j, nt);
        let k = quantize(phi / TAU, np) as u64;
        ring_key(ring, ((j as u64) << 16) | k)
    }

    fn push_lat_long_block(&self, keys: &mut Vec<BinKey>, ring: usize, dir: &Vector3<f64>) {
        let (theta, phi) = polar_angles(dir);
        let nt = self.theta_count(ring);
        let j = quantize(theta / PI, nt);
        for jj in (j - 1).max(0)..=(j + 1).min(nt as i64 - 1) {
            let jj = jj as usize;
            let np = self.phi_count(ring, jj, nt);
            if np <= 3 {
                keys.extend((0..np as u64).map(|k| ring_key(ring, ((jj as u64) << 16) | k)));
                continue;
            }
            let k = quantize(phi / TAU, np);
            for dk in -1..=1 {
                let kk = (k + dk).rem_euclid(np as i64) as u64;
                keys.push(ring_key(ring, ((jj as u64) << 16) | kk));
            }
        }
    }
}

/// Polar angle in `[0, pi]` and azimuth in `[0, 2pi)` of a unit vector.
fn polar_angles(dir: &Vector3<f64>) -> (f64, f64) {
    let theta = dir.z.clamp(-1.0, 1.0).acos();
    let phi = dir.y.atan2(dir.x).rem_euclid(TAU);
    (theta, phi)
}

fn ring_key(ring: usize, cell: u64) -> BinKey {
    ((ring as u64) << 40) | cell
}

// ---------------------------------------------------------------------------
// Spherical Fibonacci lattice on S^2

struct Fibonacci {
    count: usize,
}

impl Fibonacci {
    /// 2π / golden ratio.
    const ANGLE_STEP: f64 = TAU * 0.618_033_988_749_894_9;

    fn new(count: usize) -> Self {
        Self {
            count: count.max(1),
        }
    }

    /// Typical distance between neighbouring lattice points.
    fn spacing(&self) -> f64 {
        (2.0 * TAU / self.count as f64).sqrt()
    }

    fn point(&self, m: usize) -> Vector3<f64> {
        let n = self.count as f64;
        let z = 1.0 - (2.0 * m as f64 + 1.0) / n;
        let r = (1.0 - z * z).max(0.0).sqrt();
        let phi = (m as f64 * Self::ANGLE_STEP).rem_euclid(TAU);
        Vector3::new(r * phi.cos(), r * phi.sin(), z)
    }

    /// Indices whose `z` lies within `radius` of `dir.z`.
    fn band(&self, dir: &Vector3<f64>, radius: f64) -> std::ops::RangeInclusive<usize> {
        let n = self.count as f64;
        let index_of = |z: f64| ((1.0 - z) * n - 1.0) * 0.5;
        let lo = index_of((dir.z + radius).min(1.0)).floor().max(0.0) as usize;
        let hi = (index_of((dir.z - radius).max(-1.0)).ceil().max(0.0) as usize).min(self.count - 1);
        lo.min(hi)..=hi
    }

    /// Index of the lattice point closest to `dir`.
    fn nearest(&self, dir: &Vector3<f64>) -> usize {
        let mut best = (0, f64::INFINITY);
        for m in self.band(dir, 2.0 * self.spacing()) {
            let d = (self.point(m) - dir).norm_squared();
            if d < best.1 {
                best = (m, d);
            }
        }
        best.0
    }

    fn within<'a>(
        &'a self,
        dir: &'a Vector3<f64>,
        radius: f64,
    ) -> impl Iterator<Item = usize> + 'a {
        let r2 = radius * radius;
        self.band(dir, radius)
            .filter(move |&m| (self.point(m) - dir).norm_squared() <= r2)
    }
}
