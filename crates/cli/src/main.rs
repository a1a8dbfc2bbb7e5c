use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use hector_math::helpers::coloring::{
    gradient_color, segment_color, GradientMethod, NUM_SEGMENT_COLORS,
};
use hector_math::iterators::iterate_polygon_in_grid;
use hector_math::map_operations::{find_maximum, find_minimum, fit_plane};
use hector_math::types::{BlockIndices, GridMap, Point};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod grid_io;

#[derive(Parser)]
#[command(name = "hector")]
#[command(about = "Grid rasterization, plane fitting and colour palettes", version = hector_math::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Rasterize a polygon into a 0/1 grid printed as CSV
    Polygon {
        /// Vertices as `x,y;x,y;...`
        #[arg(long, allow_hyphen_values = true)]
        points: String,
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
        /// Factor applied to every coordinate (e.g. 1/resolution)
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fit a plane to a CSV height grid and print it as JSON
    FitPlane {
        #[arg(long)]
        input: PathBuf,
        /// The first CSV record is a header
        #[arg(long)]
        header: bool,
        /// Also report min/max inside this polygon (`x,y;x,y;...`)
        #[arg(long, allow_hyphen_values = true)]
        polygon: Option<String>,
    },
    /// Print `value,#rrggbb` samples of a gradient
    Gradient {
        /// One of grayscale, blue2red, red2blue, turbo, civides
        #[arg(long, value_parser = parse_method, default_value = "turbo")]
        method: GradientMethod,
        #[arg(long, default_value_t = 11)]
        steps: usize,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        min: f32,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        max: f32,
    },
    /// Print the segment palette
    Segments,
}

fn parse_method(s: &str) -> Result<GradientMethod, String> {
    GradientMethod::ALL
        .into_iter()
        .find(|m| m.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| {
            let names: Vec<_> = GradientMethod::ALL.iter().map(|m| m.name()).collect();
            format!("unknown gradient {s:?}, expected one of {}", names.join(", "))
        })
}

#[derive(Serialize)]
struct PlaneReport {
    rows: usize,
    cols: usize,
    center_plane_z: f64,
    gradient_x: f64,
    gradient_y: f64,
    quality_x: f64,
    quality_y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    polygon_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    polygon_max: Option<f64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Polygon {
            points,
            rows,
            cols,
            scale,
            out,
        } => polygon(&points, rows, cols, scale, out.as_deref()),
        Action::FitPlane {
            input,
            header,
            polygon,
        } => plane(&input, header, polygon.as_deref()),
        Action::Gradient {
            method,
            steps,
            min,
            max,
        } => gradient(method, steps, min, max),
        Action::Segments => segments(),
    }
}

/// 0/1 coverage grid and the block of covered cells.
fn rasterize(polygon: &[Point], rows: usize, cols: usize) -> (GridMap, BlockIndices) {
    let mut map = GridMap::zeros(rows, cols);
    let mut block = BlockIndices::EMPTY;
    iterate_polygon_in_grid(polygon, rows, cols, |x, y| {
        map[(x as usize, y as usize)] = 1.0;
        block.include_cell_in_place(x, y);
    });
    (map, block)
}

fn polygon(points: &str, rows: usize, cols: usize, scale: f64, out: Option<&Path>) -> Result<()> {
    let vertices = grid_io::parse_points(points, scale)?;
    tracing::info!(vertices = vertices.len(), rows, cols, scale, "polygon");
    ensure!(vertices.len() >= 3, "a polygon needs at least 3 vertices, got {}", vertices.len());
    let (map, block) = rasterize(&vertices, rows, cols);
    tracing::info!(
        cells = map.sum(),
        x0 = block.x0,
        y0 = block.y0,
        block_rows = block.rows,
        block_cols = block.cols,
        "rasterized"
    );
    grid_io::emit(out, &grid_io::grid_to_csv(&map)?)
}

fn plane_report(map: &GridMap, polygon: Option<&[Point]>) -> PlaneReport {
    let fit = fit_plane(map);
    PlaneReport {
        rows: map.nrows(),
        cols: map.ncols(),
        center_plane_z: fit.center_plane_z,
        gradient_x: fit.gradient_x,
        gradient_y: fit.gradient_y,
        quality_x: fit.quality_x,
        quality_y: fit.quality_y,
        polygon_min: polygon.and_then(|p| find_minimum(map, p)),
        polygon_max: polygon.and_then(|p| find_maximum(map, p)),
    }
}

fn plane(input: &Path, header: bool, polygon: Option<&str>) -> Result<()> {
    tracing::info!(input = %input.display(), header, "fit-plane");
    let map = grid_io::read_grid(input, header)?;
    let vertices = polygon.map(|p| grid_io::parse_points(p, 1.0)).transpose()?;
    let report = plane_report(&map, vertices.as_deref());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn gradient_lines(method: GradientMethod, steps: usize, min: f32, max: f32) -> Vec<String> {
    let last = steps.saturating_sub(1).max(1) as f32;
    (0..steps)
        .map(|i| {
            let value = min + (max - min) * i as f32 / last;
            format!("{value},{}", gradient_color(value, min, max, method).to_hex())
        })
        .collect()
}

fn gradient(method: GradientMethod, steps: usize, min: f32, max: f32) -> Result<()> {
    tracing::info!(method = ?method, steps, min, max, "gradient");
    for line in gradient_lines(method, steps, min, max) {
        println!("{line}");
    }
    Ok(())
}

fn segments() -> Result<()> {
    tracing::info!(count = NUM_SEGMENT_COLORS, "segments");
    for i in 0..NUM_SEGMENT_COLORS {
        println!("{i},{}", segment_color(i).to_hex());
    }
    Ok(())
}
