//! Pixel-to-module coordinate mapping

use crate::constants::FINDER_MODULES;
use crate::source::Bitmap;
use crate::{Error, Result};

/// Where the QR modules sit inside a bitmap.
///
/// Module (row, col) is sampled at pixel
/// `(origin_x + floor((col + 0.5) * module_px), origin_y + floor((row + 0.5) * module_px))`,
/// the centre of the module, clear of anti-aliased edges.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleLayout {
    /// Left pixel edge of module column 0
    pub origin_x: u32,
    /// Top pixel edge of module row 0
    pub origin_y: u32,
    /// Module edge length in pixels
    pub module_px: f64,
    pub cols: u32,
    pub rows: u32,
}

impl ModuleLayout {
    /// Layout of a bitmap made of whole modules surrounded by a quiet zone
    /// `quiet_zone` modules wide on every side.
    pub fn with_quiet_zone(width: u32, height: u32, module_px: u32, quiet_zone: u32) -> Result<Self> {
        if module_px == 0 {
            return Err(Error::InvalidParameter("module size must be at least 1 pixel".to_string()));
        }

        let strip = 2 * quiet_zone;
        let cols = (width / module_px).saturating_sub(strip);
        let rows = (height / module_px).saturating_sub(strip);
        if cols == 0 || rows == 0 {
            return Err(Error::GridSample(format!(
                "quiet zone of {} modules leaves nothing of a {}x{} bitmap at {} px per module",
                quiet_zone, width, height, module_px
            )));
        }

        Ok(Self {
            origin_x: quiet_zone * module_px,
            origin_y: quiet_zone * module_px,
            module_px: f64::from(module_px),
            cols,
            rows,
        })
    }

    /// Read the layout off the bitmap using the finder patterns.
    ///
    /// The first dark pixel in row-major order is the top-left corner of
    /// the top-left finder, whose solid top edge is seven modules long.
    /// The last dark pixel on that row closes the top-right finder and the
    /// last dark pixel in that column closes the bottom-left finder.
    pub fn detect(bitmap: &Bitmap) -> Result<Self> {
        let (width, height) = (bitmap.width(), bitmap.height());

        let (x0, y0) = (0..height)
            .find_map(|y| (0..width).find(|&x| bitmap.is_ink(x, y)).map(|x| (x, y)))
            .ok_or_else(|| Error::GridSample("bitmap has no dark pixels".to_string()))?;

        let run = (x0..width).take_while(|&x| bitmap.is_ink(x, y0)).count() as u32;
        if run < FINDER_MODULES {
            return Err(Error::GridSample(format!(
                "finder edge at ({}, {}) is only {} px long",
                x0, y0, run
            )));
        }
        let module_px = f64::from(run) / f64::from(FINDER_MODULES);

        let x1 = (x0..width).rev().find(|&x| bitmap.is_ink(x, y0)).unwrap_or(x0);
        let y1 = (y0..height).rev().find(|&y| bitmap.is_ink(x0, y)).unwrap_or(y0);

        let cols = (f64::from(x1 - x0 + 1) / module_px).round() as u32;
        let rows = (f64::from(y1 - y0 + 1) / module_px).round() as u32;
        if cols < FINDER_MODULES || rows < FINDER_MODULES {
            return Err(Error::GridSample(format!(
                "detected {}x{} modules, smaller than a finder pattern",
                cols, rows
            )));
        }

        Ok(Self {
            origin_x: x0,
            origin_y: y0,
            module_px,
            cols,
            rows,
        })
    }

    /// Pixel sampled for module (row, col)
    pub fn sample_point(&self, row: u32, col: u32) -> (u32, u32) {
        let x = self.origin_x + ((f64::from(col) + 0.5) * self.module_px) as u32;
        let y = self.origin_y + ((f64::from(row) + 0.5) * self.module_px) as u32;
        (x, y)
    }
}
