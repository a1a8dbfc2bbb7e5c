//! Rasterize a couple of polygons into a 20×20 grid and print them.
//!
//! Usage:
//!   cargo run -p hector-math --example show_polygon
//!
//! Cells are printed row by row (`x` down, `y` across); `#` marks covered cells.

use hector_math::iterators::iterate_polygon_in_grid;
use hector_math::map_operations::fit_plane;
use hector_math::types::{GridMap, Point};

fn render(name: &str, polygon: &[Point]) {
    let mut map: GridMap = GridMap::zeros(20, 20);
    iterate_polygon_in_grid(polygon, map.nrows(), map.ncols(), |x, y| {
        map[(x as usize, y as usize)] = 1.0;
    });
    println!("{name}: {} cells", map.sum());
    for x in 0..map.nrows() {
        let line: String = (0..map.ncols())
            .map(|y| if map[(x, y)] > 0.0 { '#' } else { '.' })
            .collect();
        println!("  {line}");
    }
}

fn main() {
    let scale = 1.0 / 0.05;
    let pentagon: Vec<Point> = [(0.1, 0.45), (0.45, 0.1), (0.85, 0.3), (0.8, 0.8), (0.3, 0.9)]
        .iter()
        .map(|&(x, y)| Point::new(x * scale, y * scale))
        .collect();
    render("pentagon", &pentagon);

    let skewed: Vec<Point> = [(0.05, 0.05), (0.9, 0.2), (0.6, 0.6), (0.2, 0.95)]
        .iter()
        .map(|&(x, y)| Point::new(x * scale, y * scale))
        .collect();
    render("skewed quadrangle", &skewed);

    let slope: GridMap = GridMap::from_fn(8, 8, |r, c| 0.5 * r as f64 - 0.25 * c as f64);
    let plane = fit_plane(&slope);
    println!(
        "plane: z={:.3} gx={:.3} gy={:.3}",
        plane.center_plane_z, plane.gradient_x, plane.gradient_y
    );
}
