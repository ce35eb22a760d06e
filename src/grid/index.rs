//! World-to-grid coordinate conversion.

use crate::core::Bounds3;
use crate::error::{BhumiError, Result};
use serde::{Deserialize, Serialize};

/// Grid cell identifier (column, row).
///
/// Invariant: keys handed out by [`GridIndexer::cell_for`] always satisfy
/// `col < cols` and `row < rows`; out-of-range world coordinates are
/// clamped at assignment time, never stored out of range.
///
/// `Ord` is (col, row) lexicographic, which fixes the iteration order of
/// every keyed collection in the crate and with it the export order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct CellKey {
    /// Column index (x axis)
    pub col: u32,
    /// Row index (z axis)
    pub row: u32,
}

impl CellKey {
    /// Create a new cell key
    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Maps world (x, z) coordinates onto grid cells.
///
/// The grid is anchored at the minimum corner of the input bounds:
/// column 0 starts at `min_x`, row 0 at `min_z`, and each cell covers
/// `cell_size` meters per edge. Dimensions are fixed at construction:
///
/// ```text
/// cols = ceil(width / cell_size)
/// rows = ceil(depth / cell_size)
/// ```
///
/// Conversion floors the scaled offset and clamps into the grid, so a
/// point exactly on the max bound (where floating-point division can land
/// on `cols` itself) maps to the last column instead of failing.
#[derive(Clone, Copy, Debug)]
pub struct GridIndexer {
    min_x: f32,
    min_z: f32,
    cell_size: f32,
    cols: u32,
    rows: u32,
}

impl GridIndexer {
    /// Create an indexer covering `bounds` with square cells of
    /// `cell_size` meters.
    ///
    /// Degenerate flat extents (a plane of points sharing one x or z)
    /// still get one column/row so every input point has a cell.
    pub fn new(bounds: &Bounds3, cell_size: f32) -> Result<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(BhumiError::Config(format!(
                "cell size must be positive, got {}",
                cell_size
            )));
        }

        let cols = (bounds.width() / cell_size).ceil().max(1.0) as u32;
        let rows = (bounds.depth() / cell_size).ceil().max(1.0) as u32;

        Ok(Self {
            min_x: bounds.min.x,
            min_z: bounds.min.z,
            cell_size,
            cols,
            rows,
        })
    }

    /// Number of columns (x axis).
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of rows (z axis).
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Cell edge length in meters.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World x of column 0.
    #[inline]
    pub fn min_x(&self) -> f32 {
        self.min_x
    }

    /// World z of row 0.
    #[inline]
    pub fn min_z(&self) -> f32 {
        self.min_z
    }

    /// Convert world (x, z) to the containing cell.
    ///
    /// Always returns an in-range key: indices are clamped into
    /// `[0, cols)` × `[0, rows)`.
    #[inline]
    pub fn cell_for(&self, x: f32, z: f32) -> CellKey {
        let col = ((x - self.min_x) / self.cell_size).floor() as i64;
        let row = ((z - self.min_z) / self.cell_size).floor() as i64;

        CellKey::new(
            col.clamp(0, self.cols as i64 - 1) as u32,
            row.clamp(0, self.rows as i64 - 1) as u32,
        )
    }
}
