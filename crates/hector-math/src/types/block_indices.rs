//! Rectangular blocks of grid cells.

/// Block of `rows × cols` cells starting at `(x0, y0)`.
///
/// All empty blocks compare equal regardless of their origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockIndices {
    pub x0: i64,
    pub y0: i64,
    pub rows: i64,
    pub cols: i64,
}

impl BlockIndices {
    pub const EMPTY: BlockIndices = BlockIndices {
        x0: 0,
        y0: 0,
        rows: 0,
        cols: 0,
    };

    #[inline]
    pub fn new(x0: i64, y0: i64, rows: i64, cols: i64) -> Self {
        Self { x0, y0, rows, cols }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    #[inline]
    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= self.x0 && row < self.x0 + self.rows && col >= self.y0 && col < self.y0 + self.cols
    }

    /// Smallest block covering `self` and `other`.
    #[must_use]
    pub fn include(&self, other: &BlockIndices) -> BlockIndices {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x0 = self.x0.min(other.x0);
        let y0 = self.y0.min(other.y0);
        BlockIndices {
            x0,
            y0,
            rows: (self.x0 + self.rows).max(other.x0 + other.rows) - x0,
            cols: (self.y0 + self.cols).max(other.y0 + other.cols) - y0,
        }
    }

    /// Smallest block covering `self` and the cell `(row, col)`.
    #[must_use]
    pub fn include_cell(&self, row: i64, col: i64) -> BlockIndices {
        self.include(&BlockIndices::new(row, col, 1, 1))
    }

    pub fn include_in_place(&mut self, other: &BlockIndices) -> &mut Self {
        *self = self.include(other);
        self
    }

    pub fn include_cell_in_place(&mut self, row: i64, col: i64) -> &mut Self {
        *self = self.include_cell(row, col);
        self
    }

    /// Block covering the same area on a grid scaled by `scale` (e.g. a different
    /// resolution). Origins round down, far edges round up.
    #[must_use]
    pub fn scale(&self, scale: f64) -> BlockIndices {
        let x0 = (self.x0 as f64 * scale).floor() as i64;
        let y0 = (self.y0 as f64 * scale).floor() as i64;
        BlockIndices {
            x0,
            y0,
            rows: ((self.x0 + self.rows) as f64 * scale).ceil() as i64 - x0,
            cols: ((self.y0 + self.cols) as f64 * scale).ceil() as i64 - y0,
        }
    }
}

impl PartialEq for BlockIndices {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            return other.is_empty();
        }
        self.x0 == other.x0 && self.y0 == other.y0 && self.rows == other.rows && self.cols == other.cols
    }
}

impl Eq for BlockIndices {}
