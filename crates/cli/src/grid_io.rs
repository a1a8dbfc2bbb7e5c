//! Grid and polygon formats used by the command line.
//!
//! - Grids are CSV read and written through polars: one record per row (`x`), one
//!   field per column (`y`). Empty fields and `nan` mean "no data"; quoted fields
//!   and an optional header row are accepted.
//! - Trailing columns without a single value (e.g. from a trailing comma) are dropped.
//! - Polygons are `x,y;x,y;...`.

use anyhow::{Context, Result};
use hector_math::types::{GridMap, Point};
use polars::prelude::{
    CsvWriter, DataFrame, LazyCsvReader, LazyFileListReader, NamedFrom, SerWriter, Series,
};
use std::fs;
use std::path::Path;

/// Read a CSV height grid. `has_header` skips the first record.
pub fn read_grid(path: &Path, has_header: bool) -> Result<GridMap> {
    let size = fs::metadata(path)
        .with_context(|| format!("reading {}", path.display()))?
        .len();
    if size == 0 {
        return Ok(GridMap::zeros(0, 0));
    }
    // Every column as text; numbers are parsed below so that holes become NaN.
    let df = LazyCsvReader::new(path)
        .with_has_header(has_header)
        .with_infer_schema_length(Some(0))
        .with_comment_prefix(Some("#".into()))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("parsing {}", path.display()))?;
    grid_from_frame(&df).with_context(|| format!("parsing {}", path.display()))
}

fn grid_from_frame(df: &DataFrame) -> Result<GridMap> {
    let columns = df.get_columns();
    let width = columns
        .iter()
        .rposition(|s| s.null_count() < s.len())
        .map_or(0, |last| last + 1);
    let rows = df.height();
    let mut values = Vec::with_capacity(rows * width);
    for (c, series) in columns[..width].iter().enumerate() {
        let text = series.str().with_context(|| format!("column {}", c + 1))?;
        for (r, cell) in text.into_iter().enumerate() {
            let value =
                parse_cell(cell).with_context(|| format!("row {}, column {}", r + 1, c + 1))?;
            values.push(value);
        }
    }
    // Columns are gathered in order, which is nalgebra's storage order.
    Ok(GridMap::from_vec(rows, width, values))
}

fn parse_cell(cell: Option<&str>) -> Result<f64> {
    match cell.map(str::trim) {
        None | Some("") => Ok(f64::NAN),
        Some(field) => field
            .parse::<f64>()
            .with_context(|| format!("bad value {field:?}")),
    }
}

/// Render a grid as header-less CSV, one record per row.
pub fn grid_to_csv(map: &GridMap) -> Result<String> {
    let columns = map
        .column_iter()
        .enumerate()
        .map(|(c, col)| {
            let values: Vec<f64> = col.iter().copied().collect();
            Series::new(format!("y{c}").into(), values)
        })
        .collect::<Vec<_>>();
    let mut df = DataFrame::new(columns).context("building grid frame")?;
    let mut buf = Vec::new();
    CsvWriter::new(&mut buf)
        .include_header(false)
        .finish(&mut df)
        .context("writing grid csv")?;
    String::from_utf8(buf).context("grid csv is not utf-8")
}

/// Parse `x,y;x,y;...`, multiplying every coordinate by `scale`.
pub fn parse_points(text: &str, scale: f64) -> Result<Vec<Point>> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (x, y) = pair
                .split_once(',')
                .with_context(|| format!("point {pair:?} is not `x,y`"))?;
            let x: f64 = x.trim().parse().with_context(|| format!("bad x in {pair:?}"))?;
            let y: f64 = y.trim().parse().with_context(|| format!("bad y in {pair:?}"))?;
            Ok(Point::new(x * scale, y * scale))
        })
        .collect()
}

/// Write `text` to `path`, creating parent directories, or to stdout without a path.
pub fn emit(path: Option<&Path>, text: &str) -> Result<()> {
    let Some(path) = path else {
        print!("{text}");
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn write_csv(text: &str) -> (TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.csv");
        fs::write(&path, text).unwrap();
        (dir, path)
    }

    #[test]
    fn grid_with_holes() {
        let (_dir, path) = write_csv("1,2,3\n4,nan,\n7,8,9\n");
        let map = read_grid(&path, false).unwrap();
        assert_eq!(map.shape(), (3, 3));
        assert_eq!(map[(0, 2)], 3.0);
        assert!(map[(1, 1)].is_nan());
        assert!(map[(1, 2)].is_nan());
        assert_eq!(map[(2, 0)], 7.0);
    }

    #[test]
    fn quoted_cells_under_a_header() {
        let (_dir, path) = write_csv("a,b\n\"1.5\",2\n3,\"-4\"\n");
        let map = read_grid(&path, true).unwrap();
        assert_eq!(map, GridMap::from_row_slice(2, 2, &[1.5, 2.0, 3.0, -4.0]));
    }

    #[test]
    fn trailing_comma_adds_no_column() {
        let (_dir, path) = write_csv("1,2,\n3,4,\n");
        let map = read_grid(&path, false).unwrap();
        assert_eq!(map, GridMap::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn bad_value_names_its_cell() {
        let (_dir, path) = write_csv("1,2\n3,x\n");
        let err = read_grid(&path, false).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("row 2, column 2"), "{msg}");
        assert!(msg.contains("grid.csv"), "{msg}");
    }

    #[test]
    fn empty_file_is_an_empty_grid() {
        let (_dir, path) = write_csv("");
        assert_eq!(read_grid(&path, false).unwrap().shape(), (0, 0));
    }

    #[test]
    fn csv_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/grid.csv");
        let map = GridMap::from_row_slice(2, 3, &[0.5, 1.0, -2.0, 3.0, f64::NAN, 5.0]);
        emit(Some(&path), &grid_to_csv(&map).unwrap()).unwrap();
        let back = read_grid(&path, false).unwrap();
        assert_eq!(back.shape(), (2, 3));
        for (a, b) in map.iter().zip(back.iter()) {
            assert!(a == b || (a.is_nan() && b.is_nan()), "{a} vs {b}");
        }
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = read_grid(&path, false).unwrap_err();
        assert!(format!("{err:#}").contains("absent.csv"));
    }

    #[test]
    fn points_are_scaled() {
        let pts = parse_points("0,0; 1.5,0 ;1,2;", 2.0).unwrap();
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(2.0, 4.0)]);
        assert!(parse_points("1;2", 1.0).is_err());
        assert!(parse_points("a,2", 1.0).is_err());
    }
}
