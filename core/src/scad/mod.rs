//! OpenSCAD script generation
//!
//! A script is three parts: scalar parameter declarations, the module
//! grid as a nested array literal, and a fixed template that places one
//! block per ink cell.

mod scale;
mod template;

pub use scale::Scale;

use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;

use crate::constants::{BASE_THICKNESS, BLOCK_SIZE, DEFAULT_MAX_DIM, DEFAULT_MAX_Z, FUDGE};
use crate::grid::ModuleGrid;
use crate::{Error, Result};

/// Kind of geometry emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Extruded blocks on a base plate, compiled to STL
    #[default]
    Solid3d,
    /// Flat squares for laser cutting, compiled to DXF
    Drawing2d,
}

impl OutputMode {
    /// Extension of the compiled model file
    pub fn extension(&self) -> &'static str {
        match self {
            OutputMode::Solid3d => "stl",
            OutputMode::Drawing2d => "dxf",
        }
    }

    pub fn is_2d(&self) -> bool {
        matches!(self, OutputMode::Drawing2d)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::Solid3d => "STL",
            OutputMode::Drawing2d => "DXF",
        })
    }
}

/// How blocks are enlarged so neighbours fuse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FudgeStyle {
    /// Grow right and up everywhere except the top row and right column
    Edge,
    /// Grow toward ink neighbours on the left, below and below-left
    #[default]
    Neighborhood,
}

impl FromStr for FudgeStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "edge" => Ok(FudgeStyle::Edge),
            "neighborhood" | "neighbourhood" => Ok(FudgeStyle::Neighborhood),
            other => Err(Error::InvalidParameter(format!(
                "unknown fudge style '{}' (expected edge or neighborhood)",
                other
            ))),
        }
    }
}

impl fmt::Display for FudgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FudgeStyle::Edge => "edge",
            FudgeStyle::Neighborhood => "neighborhood",
        })
    }
}

/// Parameters of the generated script
#[derive(Debug, Clone, PartialEq)]
pub struct ScadParams {
    pub mode: OutputMode,
    pub fudge_style: FudgeStyle,
    /// Longest horizontal side of the model
    pub max_dim: f64,
    /// Height of the tallest block (3D only)
    pub max_z: f64,
    pub block_size: f64,
    pub fudge: f64,
}

impl Default for ScadParams {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            fudge_style: FudgeStyle::default(),
            max_dim: DEFAULT_MAX_DIM,
            max_z: DEFAULT_MAX_Z,
            block_size: BLOCK_SIZE,
            fudge: FUDGE,
        }
    }
}

/// Render the full OpenSCAD script for `grid`.
///
/// Output depends only on the inputs, so the same grid and parameters
/// always produce byte-identical text.
pub fn render_script(grid: &ModuleGrid, params: &ScadParams) -> Result<String> {
    if !params.mode.is_2d() && !(params.max_z > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "max z-height must be positive, got {}",
            params.max_z
        )));
    }
    if !(params.fudge >= 0.0) {
        return Err(Error::InvalidParameter(format!("fudge must not be negative, got {}", params.fudge)));
    }

    let scale = Scale::fit(grid.rows(), grid.cols(), params.block_size, params.max_dim)?;
    let block_z = params.max_z / f64::from(grid.max_value().max(1));

    let mut out = String::new();
    write_declarations(&mut out, grid, params, &scale, block_z)
        .expect("writing to a String cannot fail");
    out.push_str(&match params.fudge_style {
        FudgeStyle::Edge => template::edge(),
        FudgeStyle::Neighborhood => template::neighborhood(),
    });

    Ok(out)
}

/// Parameter block followed by the grid literal
fn write_declarations(
    out: &mut String,
    grid: &ModuleGrid,
    params: &ScadParams,
    scale: &Scale,
    block_z: f64,
) -> fmt::Result {
    writeln!(out, "// Generated by qr2cad ({} output)", params.mode)?;
    writeln!(out, "is_2d = {};", params.mode.is_2d())?;
    writeln!(out, "fudge = {:.6};", params.fudge)?;
    writeln!(out, "block_z = {:.6};", block_z)?;
    writeln!(out, "block_size = {:.6};", params.block_size)?;
    writeln!(out, "base_z = {:.6};", BASE_THICKNESS)?;
    writeln!(out, "matrix_rows = {};", grid.rows())?;
    writeln!(out, "matrix_cols = {};", grid.cols())?;
    writeln!(out, "scale_factor = {:.6};", scale.factor)?;
    writeln!(out, "extent = [{:.6}, {:.6}];", scale.extent[0], scale.extent[1])?;

    writeln!(out)?;
    writeln!(out, "matrix = [")?;
    let rows: Vec<String> = grid
        .iter_rows()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            format!("[{}]", cells.join(", "))
        })
        .collect();
    writeln!(out, "{}", rows.join(",\n"))?;
    writeln!(out, "];")
}

/// Write `script` to `path`.
pub fn write_script(path: &Path, script: &str) -> Result<PathBuf> {
    std::fs::write(path, script)?;
    info!(path = %path.display(), bytes = script.len(), "Wrote SCAD script");
    Ok(path.to_path_buf())
}
