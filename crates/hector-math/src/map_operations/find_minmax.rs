//! Extreme values of a grid inside a polygon footprint.

use nalgebra::{DMatrix, Scalar};

use crate::iterators::iterate_polygon_in_grid;
use crate::types::Point;

/// Smallest non-NaN value of `map` among the cells covered by `polygon`.
///
/// Infinities take part; `None` when no covered cell holds a number.
pub fn find_minimum<T>(map: &DMatrix<T>, polygon: &[Point]) -> Option<T>
where
    T: Scalar + Copy + PartialOrd,
{
    extreme(map, polygon, |candidate, best| candidate < best)
}

/// Largest non-NaN value of `map` among the cells covered by `polygon`.
pub fn find_maximum<T>(map: &DMatrix<T>, polygon: &[Point]) -> Option<T>
where
    T: Scalar + Copy + PartialOrd,
{
    extreme(map, polygon, |candidate, best| candidate > best)
}

fn extreme<T, F>(map: &DMatrix<T>, polygon: &[Point], better: F) -> Option<T>
where
    T: Scalar + Copy + PartialOrd,
    F: Fn(T, T) -> bool,
{
    let mut best: Option<T> = None;
    iterate_polygon_in_grid(polygon, map.nrows(), map.ncols(), |x, y| {
        let value = map[(x as usize, y as usize)];
        // NaN is the only value unordered with itself.
        if value.partial_cmp(&value).is_none() {
            return;
        }
        if best.is_none_or(|b| better(value, b)) {
            best = Some(value);
        }
    });
    best
}
