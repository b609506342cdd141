//! Module grid extraction
//!
//! Turns a QR bitmap into a rows x cols grid of small integers, one cell
//! per QR module: 0 for background, the z-weight for dark modules.

mod layout;

pub use layout::ModuleLayout;

use tracing::debug;

use crate::source::Bitmap;
use crate::{Error, Result};

/// Rectangular grid of QR modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    cells: Vec<Vec<u8>>,
}

impl ModuleGrid {
    /// Build a grid from rows of cells. Rows must be non-empty and of equal length.
    pub fn new(cells: Vec<Vec<u8>>) -> Result<Self> {
        let cols = cells.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(Error::GridSample("grid is empty".to_string()));
        }
        if let Some(i) = cells.iter().position(|row| row.len() != cols) {
            return Err(Error::GridSample(format!(
                "row {} has {} cells, expected {}",
                i,
                cells[i].len(),
                cols
            )));
        }
        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// Cell value, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Whether the cell is ink. Outside the grid is background.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|v| v != 0)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Number of ink cells
    pub fn ink_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Largest cell value, 0 for an all-background grid
    pub fn max_value(&self) -> u8 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Sample every module of `layout` out of `bitmap`.
///
/// Each cell is `weight` when the module's centre pixel is ink, 0 otherwise.
pub fn extract(bitmap: &Bitmap, layout: &ModuleLayout, weight: u8) -> Result<ModuleGrid> {
    if weight == 0 {
        return Err(Error::InvalidParameter("z-weight must be at least 1".to_string()));
    }

    let (right, bottom) = layout.sample_point(
        layout.rows.saturating_sub(1),
        layout.cols.saturating_sub(1),
    );
    if right >= bitmap.width() || bottom >= bitmap.height() {
        return Err(Error::GridSample(format!(
            "{}x{} modules at {:.2} px do not fit a {}x{} bitmap",
            layout.cols,
            layout.rows,
            layout.module_px,
            bitmap.width(),
            bitmap.height()
        )));
    }

    let cells: Vec<Vec<u8>> = (0..layout.rows)
        .map(|row| {
            (0..layout.cols)
                .map(|col| {
                    let (x, y) = layout.sample_point(row, col);
                    if bitmap.is_ink(x, y) { weight } else { 0 }
                })
                .collect()
        })
        .collect();

    let grid = ModuleGrid::new(cells)?;
    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        ink = grid.ink_count(),
        "Extracted module grid"
    );
    Ok(grid)
}
