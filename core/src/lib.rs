//! qr2cad Core - QR code to CAD model conversion
//!
//! This library turns a QR code into an OpenSCAD script: it obtains a
//! bitmap (rendered remotely or encoded locally), samples the module
//! grid out of it, emits a parametric script that extrudes one block per
//! dark module, and optionally compiles the script to STL or DXF with
//! an external OpenSCAD binary.

pub mod constants;
pub mod convert;
pub mod export;
pub mod grid;
pub mod scad;
pub mod source;

mod error;

use std::path::PathBuf;

pub use error::{Error, Result};

/// Configuration for the converter
#[derive(Debug, Clone)]
pub struct Config {
    /// Chart-rendering endpoint for remote QR images
    pub chart_endpoint: String,
    /// Side length in pixels of the requested chart image
    pub chart_size: u32,
    /// Candidate OpenSCAD executables, checked in order before falling
    /// back to the search path
    pub openscad_paths: Vec<PathBuf>,
    /// Directory receiving the script and compiled model
    pub out_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chart_endpoint: constants::CHART_ENDPOINT.to_string(),
            chart_size: constants::CHART_SIZE,
            openscad_paths: export::default_search_paths(),
            out_dir: PathBuf::from("."),
        }
    }
}

// Re-export key types for convenience
pub use convert::{convert, Outcome, Request, SourceKind};
pub use export::Exporter;
pub use grid::{ModuleGrid, ModuleLayout};
pub use scad::{FudgeStyle, OutputMode, Scale, ScadParams};
pub use source::{Bitmap, EcLevel, EncodeOptions, QrImage};
