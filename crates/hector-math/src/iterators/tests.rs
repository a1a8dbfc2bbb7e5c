use super::*;
use crate::types::Point;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn collect(polygon: &[Point], rows: IndexRange, cols: IndexRange) -> Vec<(i64, i64)> {
    let mut out = Vec::new();
    iterate_polygon(polygon, rows, cols, |x, y| out.push((x, y)));
    out
}

/// Even-odd ray cast against the exact polygon.
fn inside(polygon: &[Point], px: f64, py: f64) -> bool {
    let n = polygon.len();
    let mut odd = false;
    for i in 0..n {
        let (a, b) = (polygon[i], polygon[(i + 1) % n]);
        if (a.y > py) != (b.y > py) {
            let x = a.x + (py - a.y) * (b.x - a.x) / (b.y - a.y);
            if px < x {
                odd = !odd;
            }
        }
    }
    odd
}

fn distance_to_boundary(polygon: &[Point], p: Point) -> f64 {
    let n = polygon.len();
    (0..n)
        .map(|i| {
            let (a, b) = (polygon[i], polygon[(i + 1) % n]);
            let ab = b - a;
            let len2 = ab.norm_squared();
            let t = if len2 > 0.0 {
                ((p - a).dot(&ab) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            (a + ab * t - p).norm()
        })
        .fold(f64::INFINITY, f64::min)
}

/// Cells the rasterizer and the ray cast disagree on, ignoring centres on the boundary.
fn disagreements(polygon: &[Point]) -> Vec<(i64, i64)> {
    let emitted: BTreeSet<(i64, i64)> =
        collect(polygon, IndexRange::unbounded(), IndexRange::unbounded())
            .into_iter()
            .collect();
    let (mut lo_x, mut lo_y, mut hi_x, mut hi_y) = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
    for p in polygon {
        lo_x = lo_x.min(p.x);
        lo_y = lo_y.min(p.y);
        hi_x = hi_x.max(p.x);
        hi_y = hi_y.max(p.y);
    }
    let mut bad = Vec::new();
    for x in (lo_x.floor() as i64 - 1)..=(hi_x.ceil() as i64 + 1) {
        for y in (lo_y.floor() as i64 - 1)..=(hi_y.ceil() as i64 + 1) {
            let centre = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let expected = inside(polygon, centre.x, centre.y);
            if expected != emitted.contains(&(x, y))
                && distance_to_boundary(polygon, centre) > 1e-6
            {
                bad.push((x, y));
            }
        }
    }
    for cell in &emitted {
        let out_of_box = (cell.0 as f64) < lo_x.floor() - 1.0
            || (cell.0 as f64) > hi_x.ceil() + 1.0
            || (cell.1 as f64) < lo_y.floor() - 1.0
            || (cell.1 as f64) > hi_y.ceil() + 1.0;
        if out_of_box {
            bad.push(*cell);
        }
    }
    bad
}

#[test]
fn axis_aligned_rectangle_is_exact() {
    let rect = pts(&[(1.0, 0.0), (1.0, 3.0), (4.0, 3.0), (4.0, 0.0)]);
    let cells = collect(&rect, IndexRange::unbounded(), IndexRange::unbounded());
    let mut expected = Vec::new();
    for y in 0..3 {
        for x in 1..4 {
            expected.push((x, y));
        }
    }
    assert_eq!(cells, expected);
}

#[test]
fn vertex_order_does_not_matter() {
    let cw = pts(&[(0.2, 0.3), (2.7, 5.1), (6.4, 1.9)]);
    let mut ccw = cw.clone();
    ccw.reverse();
    let a = collect(&cw, IndexRange::unbounded(), IndexRange::unbounded());
    let b = collect(&ccw, IndexRange::unbounded(), IndexRange::unbounded());
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn fewer_than_three_vertices_emit_nothing() {
    let range = IndexRange::unbounded();
    assert!(collect(&[], range, range).is_empty());
    assert!(collect(&pts(&[(1.0, 1.0)]), range, range).is_empty());
    assert!(collect(&pts(&[(0.0, 0.0), (5.0, 5.0)]), range, range).is_empty());
}

#[test]
fn empty_ranges_emit_nothing() {
    let rect = pts(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
    assert!(collect(&rect, IndexRange::new(2, 2), IndexRange::unbounded()).is_empty());
    assert!(collect(&rect, IndexRange::unbounded(), IndexRange::new(3, 1)).is_empty());
}

#[test]
fn ranges_clip_both_axes() {
    let rect = pts(&[(1.0, 0.0), (1.0, 3.0), (4.0, 3.0), (4.0, 0.0)]);
    let cells = collect(&rect, IndexRange::new(2, 3), IndexRange::new(1, 2));
    assert_eq!(cells, vec![(2, 1)]);
}

#[test]
fn clipping_matches_filtering() {
    // Slanted edges so that starting the scan late exercises the x catch-up.
    let poly = pts(&[(0.3, -7.2), (11.6, 2.4), (4.1, 13.7), (-6.5, 5.5)]);
    let full = collect(&poly, IndexRange::unbounded(), IndexRange::unbounded());
    for (rows, cols) in [
        (IndexRange::new(-2, 6), IndexRange::new(3, 9)),
        (IndexRange::new(0, 20), IndexRange::new(-20, 0)),
        (IndexRange::upto(5), IndexRange::upto(5)),
    ] {
        let clipped = collect(&poly, rows, cols);
        let filtered: Vec<_> = full
            .iter()
            .copied()
            .filter(|&(x, y)| rows.contains(x) && cols.contains(y))
            .collect();
        assert!(!filtered.is_empty());
        assert_eq!(clipped, filtered);
    }
}

#[test]
fn in_grid_stays_inside_grid() {
    let poly = pts(&[(-3.0, -3.0), (-3.0, 20.0), (20.0, 20.0), (20.0, -3.0)]);
    let mut count = 0;
    iterate_polygon_in_grid(&poly, 6, 4, |x, y| {
        assert!((0..6).contains(&x) && (0..4).contains(&y));
        count += 1;
    });
    assert_eq!(count, 24);
}

#[test]
fn concave_polygon_skips_the_notch() {
    // U shape: notch covers x in [2, 4), y in [2, 5).
    let u = pts(&[
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 5.0),
        (4.0, 5.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 5.0),
        (0.0, 5.0),
    ]);
    let cells: BTreeSet<_> = collect(&u, IndexRange::unbounded(), IndexRange::unbounded())
        .into_iter()
        .collect();
    assert_eq!(cells.len(), 6 * 5 - 2 * 3);
    assert!(!cells.contains(&(3, 3)));
    assert!(cells.contains(&(1, 3)) && cells.contains(&(5, 4)));
}

#[test]
fn rows_are_visited_in_order() {
    let poly = pts(&[(0.5, 0.5), (9.5, 2.5), (7.5, 9.5), (1.5, 6.5)]);
    let cells = collect(&poly, IndexRange::unbounded(), IndexRange::unbounded());
    for w in cells.windows(2) {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        assert!(y1 > y0 || (y1 == y0 && x1 > x0));
    }
}

#[test]
fn large_polygons_use_heap_scratch() {
    for n in [15, 16, 63, 64, 200] {
        let circle: Vec<Point> = (0..n)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / n as f64;
                Point::new(20.3 + 15.0 * a.cos(), -4.1 + 15.0 * a.sin())
            })
            .collect();
        assert!(disagreements(&circle).is_empty(), "n = {n}");
        let area = collect(&circle, IndexRange::unbounded(), IndexRange::unbounded()).len();
        let exact = 0.5 * n as f64 * 225.0 * (std::f64::consts::TAU / n as f64).sin();
        assert!((area as f64 - exact).abs() < 0.15 * exact, "n = {n}: {area} vs {exact}");
    }
}

fn polygon_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-30.0f64..30.0, -30.0f64..30.0), 3..90)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

fn star_strategy() -> impl Strategy<Value = Vec<Point>> {
    (
        -10.0f64..10.0,
        -10.0f64..10.0,
        prop::collection::vec((0.0f64..1.0, 1.0f64..12.0), 3..80),
    )
        .prop_map(|(cx, cy, spokes)| {
            let mut angles: Vec<(f64, f64)> = spokes;
            angles.sort_by(|a, b| a.0.total_cmp(&b.0));
            angles
                .into_iter()
                .map(|(t, r)| {
                    let a = std::f64::consts::TAU * t;
                    Point::new(cx + r * a.cos(), cy + r * a.sin())
                })
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn star_polygons_match_ray_cast(poly in star_strategy()) {
        prop_assert!(disagreements(&poly).is_empty());
    }

    #[test]
    fn self_intersecting_polygons_follow_parity(poly in polygon_strategy()) {
        prop_assert!(disagreements(&poly).is_empty());
    }

    #[test]
    fn clipped_scan_equals_filtered_full_scan(
        poly in polygon_strategy(),
        (r0, r1) in (-35i64..35, -35i64..35),
        (c0, c1) in (-35i64..35, -35i64..35),
    ) {
        let rows = IndexRange::new(r0.min(r1), r0.max(r1));
        let cols = IndexRange::new(c0.min(c1), c0.max(c1));
        let full = collect(&poly, IndexRange::unbounded(), IndexRange::unbounded());
        let clipped = collect(&poly, rows, cols);
        for &(x, y) in &clipped {
            prop_assert!(rows.contains(x) && cols.contains(y), "({x}, {y}) outside range");
        }
        let filtered: Vec<_> = full
            .into_iter()
            .filter(|&(x, y)| rows.contains(x) && cols.contains(y))
            .collect();
        prop_assert_eq!(clipped, filtered);
    }
}
