//! Scan-line rasterization of polygons onto integer grids.
//!
//! Purpose
//! - Visit every cell `(x, y)` whose centre `(x + 0.5, y + 0.5)` lies inside a
//!   polygon, e.g. to paint a footprint into a map. Output is purely via callback.
//!
//! Model
//! - Classic edge table / active edge table: edges are sorted by their lower `y`,
//!   admitted while the scan passes them and retired once it leaves them.
//! - For each scanned `y` the active edges' `x` at the row centre are rounded,
//!   sorted and paired (even-odd rule), and each pair `[x_a, x_b)` is emitted.
//! - `x` is clipped to `rows` and `y` to `cols` (both half-open).
//!
//! Notes
//! - Non-simple polygons get a deterministic parity fill; nothing is validated.
//! - Small polygons run on stack-only `BoundedVec` scratch buffers; the choice is
//!   invisible to callers.

use std::ops::DerefMut;

use crate::containers::BoundedVec;
use crate::error::CapacityError;
use crate::types::Point;

/// Edges with `|dy|` below this are treated as horizontal.
const HORIZONTAL_EPS: f64 = 1e-4;
/// Largest vertex count handled with the small inline buffers.
const SMALL_POLYGON: usize = 15;
/// Largest vertex count handled with the medium inline buffers.
const MEDIUM_POLYGON: usize = 63;

/// Half-open index interval `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexRange {
    pub min: i64,
    pub max: i64,
}

impl IndexRange {
    #[inline]
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// `[0, n)`.
    #[inline]
    pub fn upto(n: usize) -> Self {
        Self {
            min: 0,
            max: i64::try_from(n).unwrap_or(i64::MAX),
        }
    }

    /// The whole `i64` line.
    #[inline]
    pub fn unbounded() -> Self {
        Self {
            min: i64::MIN,
            max: i64::MAX,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min >= self.max
    }

    #[inline]
    pub fn contains(&self, i: i64) -> bool {
        i >= self.min && i < self.max
    }
}

/// One polygon side, oriented so that `start_y <= end_y`.
#[derive(Clone, Copy, Debug)]
struct Edge {
    start_y: f64,
    end_y: f64,
    /// `x` at the centre of the row last visited (initially the row holding `start_y`).
    x: f64,
    /// Change of `x` per unit step in `y`.
    x_increment: f64,
}

impl Edge {
    fn new(a: &Point, b: &Point) -> Self {
        let (start, end) = if a.y > b.y { (b, a) } else { (a, b) };
        let dy = b.y - a.y;
        let x_increment = if dy.abs() < HORIZONTAL_EPS {
            0.0
        } else {
            (b.x - a.x) / dy
        };
        Self {
            start_y: start.y,
            end_y: end.y,
            x: start.x + (0.5 - (start.y - start.y.floor())) * x_increment,
            x_increment,
        }
    }

    /// Row index holding the lower endpoint.
    #[inline]
    fn start_row(&self) -> f64 {
        self.start_y.floor()
    }
}

/// Scratch storage the scan can run on: `Vec` for large polygons, `BoundedVec` otherwise.
trait ScanBuffer<T>: Default + DerefMut<Target = [T]> {
    fn try_push(&mut self, value: T) -> Result<(), CapacityError>;
    fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, keep: F);
    fn clear(&mut self);
}

impl<T> ScanBuffer<T> for Vec<T> {
    #[inline]
    fn try_push(&mut self, value: T) -> Result<(), CapacityError> {
        self.push(value);
        Ok(())
    }
    #[inline]
    fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, keep: F) {
        Vec::retain_mut(self, keep);
    }
    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T, const N: usize> ScanBuffer<T> for BoundedVec<T, N> {
    #[inline]
    fn try_push(&mut self, value: T) -> Result<(), CapacityError> {
        BoundedVec::try_push(self, value)
    }
    #[inline]
    fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, keep: F) {
        BoundedVec::retain_mut(self, keep);
    }
    #[inline]
    fn clear(&mut self) {
        BoundedVec::clear(self);
    }
}

/// Call `f(x, y)` for every cell with centre inside `polygon`, `x ∈ rows`, `y ∈ cols`.
///
/// Rows are visited in increasing `y`; within a row `x` increases along each run.
/// Polygons with fewer than three vertices produce nothing.
pub fn iterate_polygon<F>(polygon: &[Point], rows: IndexRange, cols: IndexRange, mut f: F)
where
    F: FnMut(i64, i64),
{
    let n = polygon.len();
    if n < 3 || rows.is_empty() || cols.is_empty() {
        return;
    }
    let result = if n <= SMALL_POLYGON {
        scan::<BoundedVec<Edge, { SMALL_POLYGON + 1 }>, BoundedVec<i64, SMALL_POLYGON>, _>(
            polygon, rows, cols, &mut f,
        )
    } else if n <= MEDIUM_POLYGON {
        scan::<BoundedVec<Edge, { MEDIUM_POLYGON + 1 }>, BoundedVec<i64, MEDIUM_POLYGON>, _>(
            polygon, rows, cols, &mut f,
        )
    } else {
        scan::<Vec<Edge>, Vec<i64>, _>(polygon, rows, cols, &mut f)
    };
    if let Err(err) = result {
        tracing::error!(%err, vertices = n, "polygon scan aborted: scratch buffer overflow");
    }
}

/// `iterate_polygon` over a `rows × cols` grid starting at index 0.
pub fn iterate_polygon_in_grid<F>(polygon: &[Point], rows: usize, cols: usize, f: F)
where
    F: FnMut(i64, i64),
{
    iterate_polygon(polygon, IndexRange::upto(rows), IndexRange::upto(cols), f);
}

/// `iterate_polygon` without index bounds.
pub fn iterate_polygon_unbounded<F>(polygon: &[Point], f: F)
where
    F: FnMut(i64, i64),
{
    iterate_polygon(polygon, IndexRange::unbounded(), IndexRange::unbounded(), f);
}

fn scan<L, X, F>(
    polygon: &[Point],
    rows: IndexRange,
    cols: IndexRange,
    f: &mut F,
) -> Result<(), CapacityError>
where
    L: ScanBuffer<Edge>,
    X: ScanBuffer<i64>,
    F: FnMut(i64, i64),
{
    let n = polygon.len();
    let mut edges = L::default();
    let mut max_y = i64::MIN;
    for (i, a) in polygon.iter().enumerate() {
        let b = &polygon[(i + 1) % n];
        edges.try_push(Edge::new(a, b))?;
        max_y = max_y.max(a.y.round() as i64);
    }
    let max_y = max_y.min(cols.max);

    // Stable sort keeps coincident starts in polygon order.
    edges.sort_by(|a, b| a.start_y.total_cmp(&b.start_y));

    let mut active = L::default();
    let mut crossings = X::default();
    let pending: &[Edge] = &edges;
    let mut next = 0;

    let mut y = cols.min.max(pending[0].start_y.round() as i64);
    while y < max_y {
        let limit = y as f64 + 0.5;

        // Advance active edges to this row; retire those that ended below it.
        active.retain_mut(|edge| {
            edge.x += edge.x_increment;
            edge.end_y >= limit
        });

        // Admit edges that reach this row's centre.
        while next < pending.len() {
            let mut edge = pending[next];
            if edge.start_y >= limit {
                break;
            }
            next += 1;
            if edge.end_y < limit {
                continue;
            }
            let skipped = y as f64 - edge.start_row();
            if skipped > 0.0 {
                edge.x += skipped * edge.x_increment;
            }
            active.try_push(edge)?;
        }

        crossings.clear();
        for edge in active.iter() {
            crossings.try_push(edge.x.round() as i64)?;
        }
        crossings.sort_unstable();

        for pair in crossings.chunks_exact(2) {
            let start = pair[0].max(rows.min);
            let end = pair[1].min(rows.max);
            for x in start..end {
                f(x, y);
            }
        }
        y += 1;
    }
    Ok(())
}
