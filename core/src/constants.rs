//! Centralized defaults
//!
//! Every tunable used by the converter lives here so the CLI and the
//! library agree on the same values.

/// Remote chart-rendering endpoint used to render QR images
pub const CHART_ENDPOINT: &str = "http://chart.apis.google.com/chart";

/// Width and height of the requested chart image in pixels
pub const CHART_SIZE: u32 = 150;

/// Output charset requested from the chart endpoint
pub const CHART_CHARSET: &str = "ISO-8859-1";

/// Payload used when none is given on the command line
pub const DEFAULT_PAYLOAD: &str = "http://www.thingiverse.com/thing:10408";

/// Longest side of the model in millimetres
pub const DEFAULT_MAX_DIM: f64 = 150.0;

/// Tallest extrusion in millimetres (3D output only)
pub const DEFAULT_MAX_Z: f64 = 5.0;

/// Edge length of one unit block before scaling
pub const BLOCK_SIZE: f64 = 2.0;

/// Overlap added to blocks so neighbours fuse
pub const FUDGE: f64 = 0.01;

/// Thickness of the base plate under a 3D model
pub const BASE_THICKNESS: f64 = 1.0;

/// Name of the generated OpenSCAD script
pub const SCAD_FILENAME: &str = "qr2cad.scad";

/// Stem of the compiled model file; the extension follows the output mode
pub const MODEL_STEM: &str = "qr2cad";

/// OpenSCAD executable name looked up on the search path
pub const OPENSCAD_BIN: &str = "openscad";

/// Default install location on Windows
pub const WINDOWS_OPENSCAD: &str = r"C:\Program Files\OpenSCAD\openscad.exe";

/// Default install location on macOS
pub const MAC_OPENSCAD: &str = "/Applications/OpenSCAD.app/Contents/MacOS/OpenSCAD";

/// Pixels per module for locally encoded codes
pub const DEFAULT_MODULE_PX: u32 = 4;

/// Quiet zone width in modules for locally encoded codes
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// Largest side in pixels of a locally rendered image
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// Side length of a finder pattern in modules
pub const FINDER_MODULES: u32 = 7;
