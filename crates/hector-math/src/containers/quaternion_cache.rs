//! Approximate nearest-neighbour cache keyed by unit quaternions.
//!
//! Purpose
//! - Map an orientation back to the closest of a discrete set of sampled
//!   orientations (e.g. precomputed footprints per robot attitude) in O(1).
//!
//! Model
//! - Keys are binned by a `BinningMode`; `find` only inspects the query's bucket and
//!   its geometric neighbours, so the answer is exact when the true nearest key lies
//!   in that neighbourhood and approximate otherwise.
//! - Distance is `1 - |<q, p>|`, so `q` and `-q` are the same key.
//! - Inserting a key whose canonical coordinates equal a stored key overwrites that
//!   entry; distinct keys coexist no matter how close they are.
//! - If the neighbourhood is empty but the cache is not, `find` scans everything, so
//!   `None` means the cache is empty.
//!
//! Keys are assumed to be unit quaternions; nothing is validated. The key scalar is
//! generic (`f64` by default); distances are always evaluated in `f64`.

use std::collections::HashMap;

use nalgebra::{RealField, UnitQuaternion, Vector4};

use super::binning::{canonical_coords, BinKey, BinningMode};

/// Cache construction parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheCfg {
    pub mode: BinningMode,
    /// Cells per axis of the binning; higher means smaller buckets.
    pub resolution: usize,
}

impl Default for CacheCfg {
    fn default() -> Self {
        Self {
            mode: BinningMode::LargestDim,
            resolution: 12,
        }
    }
}

#[derive(Clone, Debug)]
struct Entry<V, S> {
    key: UnitQuaternion<S>,
    coords: Vector4<f64>,
    value: V,
}

/// Spatial hash from unit quaternions to values.
#[derive(Clone, Debug)]
pub struct QuaternionCache<V, S = f64> {
    cfg: CacheCfg,
    bins: HashMap<BinKey, Vec<Entry<V, S>>>,
    len: usize,
}

impl<V, S> Default for QuaternionCache<V, S>
where
    S: RealField + Copy + Into<f64>,
{
    fn default() -> Self {
        Self::with_cfg(CacheCfg::default())
    }
}

impl<V, S> QuaternionCache<V, S>
where
    S: RealField + Copy + Into<f64>,
{
    /// Empty cache using `mode` and the default resolution.
    pub fn new(mode: BinningMode) -> Self {
        Self::with_cfg(CacheCfg {
            mode,
            ..CacheCfg::default()
        })
    }

    pub fn with_cfg(cfg: CacheCfg) -> Self {
        let cfg = CacheCfg {
            resolution: cfg.resolution.max(1),
            ..cfg
        };
        tracing::debug!(mode = ?cfg.mode, resolution = cfg.resolution, "quaternion cache");
        Self {
            cfg,
            bins: HashMap::new(),
            len: 0,
        }
    }

    #[inline]
    pub fn mode(&self) -> BinningMode {
        self.cfg.mode
    }

    #[inline]
    pub fn cfg(&self) -> CacheCfg {
        self.cfg
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of non-empty buckets.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    pub fn clear(&mut self) {
        tracing::debug!(entries = self.len, bins = self.bins.len(), "clearing quaternion cache");
        self.bins.clear();
        self.len = 0;
    }

    /// Store `value` under `key`. Returns the previous value if an identical key was
    /// already present.
    pub fn insert(&mut self, key: UnitQuaternion<S>, value: V) -> Option<V> {
        let coords = canonical_coords(&key);
        let bin = self.cfg.mode.bin(&coords, self.cfg.resolution);
        let bucket = self.bins.entry(bin).or_default();
        if let Some(entry) = bucket.iter_mut().find(|e| e.coords == coords) {
            entry.key = key;
            return Some(std::mem::replace(&mut entry.value, value));
        }
        bucket.push(Entry { key, coords, value });
        self.len += 1;
        None
    }

    /// Value stored under the key closest to `query`.
    pub fn find(&self, query: &UnitQuaternion<S>) -> Option<&V> {
        self.find_entry(query).map(|(_, v)| v)
    }

    /// Key and value closest to `query`.
    pub fn find_entry(&self, query: &UnitQuaternion<S>) -> Option<(&UnitQuaternion<S>, &V)> {
        if self.len == 0 {
            return None;
        }
        let coords = canonical_coords(query);
        let candidates = self
            .cfg
            .mode
            .neighbors(&coords, self.cfg.resolution)
            .into_iter()
            .filter_map(|k| self.bins.get(&k))
            .flatten();
        let best = closest(candidates, &coords).or_else(|| {
            tracing::trace!(entries = self.len, "neighbourhood empty; scanning all bins");
            closest(self.bins.values().flatten(), &coords)
        })?;
        Some((&best.key, &best.value))
    }

    /// All stored keys and values in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&UnitQuaternion<S>, &V)> {
        self.bins.values().flatten().map(|e| (&e.key, &e.value))
    }
}

fn closest<'a, V: 'a, S: 'a>(
    entries: impl Iterator<Item = &'a Entry<V, S>>,
    coords: &Vector4<f64>,
) -> Option<&'a Entry<V, S>> {
    let mut best: Option<(&Entry<V, S>, f64)> = None;
    for entry in entries {
        let similarity = entry.coords.dot(coords).abs();
        if best.as_ref().is_none_or(|(_, s)| similarity > *s) {
            best = Some((entry, similarity));
        }
    }
    best.map(|(e, _)| e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::random_unit_quaternion;
    use nalgebra::Quaternion;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const MODES: [BinningMode; 3] = [
        BinningMode::LargestDim,
        BinningMode::Spherical,
        BinningMode::SphericalFibonacci,
    ];

    /// Random unit quaternions, no two within ~3 mrad of each other.
    fn spread_quaternions(count: usize, seed: u64) -> Vec<UnitQuaternion<f64>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut out: Vec<UnitQuaternion<f64>> = Vec::with_capacity(count);
        while out.len() < count {
            let q = random_unit_quaternion(&mut rng);
            let too_close = out
                .iter()
                .any(|p| p.coords.dot(&q.coords).abs() > 1.0 - 1e-6);
            if !too_close {
                out.push(q);
            }
        }
        out
    }

    fn brute_force(keys: &[UnitQuaternion<f64>], q: &UnitQuaternion<f64>) -> usize {
        let mut best = (0, -1.0);
        for (i, p) in keys.iter().enumerate() {
            let s = p.coords.dot(&q.coords).abs();
            if s > best.1 {
                best = (i, s);
            }
        }
        best.0
    }

    #[test]
    fn empty_cache_finds_nothing() {
        for mode in MODES {
            let cache: QuaternionCache<i32> = QuaternionCache::new(mode);
            assert!(cache.find(&UnitQuaternion::identity()).is_none());
            assert!(cache.is_empty());
        }
    }

    #[test]
    fn round_trip_exact_keys() {
        let keys = spread_quaternions(2000, 1);
        for mode in MODES {
            let mut cache = QuaternionCache::new(mode);
            for (i, q) in keys.iter().enumerate() {
                assert!(cache.insert(*q, i).is_none());
            }
            assert_eq!(cache.len(), keys.len());
            for (i, q) in keys.iter().enumerate() {
                assert_eq!(cache.find(q), Some(&i), "{mode:?}");
            }
        }
    }

    #[test]
    fn negated_key_is_the_same_rotation() {
        let keys = spread_quaternions(300, 2);
        for mode in MODES {
            let mut cache = QuaternionCache::new(mode);
            for (i, q) in keys.iter().enumerate() {
                cache.insert(*q, i);
            }
            for (i, q) in keys.iter().enumerate() {
                let neg = UnitQuaternion::new_unchecked(-q.into_inner());
                assert_eq!(cache.find(&neg), Some(&i), "{mode:?}");
            }
        }
    }

    #[test]
    fn identical_key_overwrites() {
        let mut cache = QuaternionCache::new(BinningMode::Spherical);
        let q = UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3);
        assert_eq!(cache.insert(q, "a"), None);
        assert_eq!(cache.insert(q, "b"), Some("a"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.find(&q), Some(&"b"));

        // A nearby but distinct key coexists.
        let p = UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3001);
        assert_eq!(cache.insert(p, "c"), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn perturbed_queries_recall_nearest() {
        let keys = spread_quaternions(1500, 3);
        let mut rng = StdRng::seed_from_u64(4);
        for mode in MODES {
            let mut cache = QuaternionCache::new(mode);
            for (i, q) in keys.iter().enumerate() {
                cache.insert(*q, i);
            }
            let trials = 500;
            let mut hits = 0;
            for _ in 0..trials {
                let base = keys[rng.gen_range(0..keys.len())];
                let nudge = UnitQuaternion::from_euler_angles(
                    rng.gen_range(-0.02..0.02),
                    rng.gen_range(-0.02..0.02),
                    rng.gen_range(-0.02..0.02),
                );
                let query = nudge * base;
                if cache.find(&query) == Some(&brute_force(&keys, &query)) {
                    hits += 1;
                }
            }
            assert!(hits * 100 >= trials * 95, "{mode:?}: {hits}/{trials}");
        }
    }

    #[test]
    fn sparse_cache_falls_back_to_full_scan() {
        let mut cache = QuaternionCache::with_cfg(CacheCfg {
            mode: BinningMode::SphericalFibonacci,
            resolution: 24,
        });
        cache.insert(UnitQuaternion::identity(), 0);
        let far = UnitQuaternion::from_quaternion(Quaternion::new(0.0, 1.0, 0.0, 0.0));
        assert_eq!(cache.find(&far), Some(&0));
    }

    #[test]
    fn clear_and_iter() {
        let keys = spread_quaternions(50, 9);
        let mut cache = QuaternionCache::default();
        for (i, q) in keys.iter().enumerate() {
            cache.insert(*q, i);
        }
        let mut seen: Vec<usize> = cache.iter().map(|(_, v)| *v).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..50).collect::<Vec<_>>());
        assert!(cache.bin_count() > 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.bin_count(), 0);
        assert!(cache.find(&keys[0]).is_none());
    }

    #[test]
    fn single_precision_keys() {
        let keys: Vec<UnitQuaternion<f32>> = spread_quaternions(400, 10)
            .iter()
            .map(|q| q.cast::<f32>())
            .collect();
        for mode in MODES {
            let mut cache: QuaternionCache<usize, f32> = QuaternionCache::new(mode);
            for (i, q) in keys.iter().enumerate() {
                cache.insert(*q, i);
            }
            assert_eq!(cache.len(), keys.len());
            for (i, q) in keys.iter().enumerate() {
                let (key, value) = cache.find_entry(q).unwrap();
                assert_eq!(value, &i, "{mode:?}");
                assert_eq!(key, q);
            }
        }
    }
}
