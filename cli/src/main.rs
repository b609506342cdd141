//! qr2cad CLI - Convert QR codes to CAD objects.

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qr2cad_core::constants::{
    DEFAULT_MAX_DIM, DEFAULT_MAX_Z, DEFAULT_MODULE_PX, DEFAULT_PAYLOAD, DEFAULT_QUIET_ZONE,
};
use qr2cad_core::{
    Config, EcLevel, EncodeOptions, FudgeStyle, OutputMode, Request, ScadParams, SourceKind,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qr2cad")]
#[command(about = "Convert QR codes to CAD objects", long_about = None)]
struct Cli {
    /// Text or URL to encode (overrides -u)
    payload: Option<String>,

    /// The URL to create a QR code for
    #[arg(short = 'u', long = "url", default_value = DEFAULT_PAYLOAD)]
    url: String,

    /// Emit 2D geometry and export .dxf instead of .stl
    #[arg(short = 'x', long = "dxf")]
    dxf: bool,

    /// Also compile the .scad file into a .stl or .dxf
    #[arg(short = 'm', long = "make")]
    make: bool,

    /// Maximum size in mm of the x or y dimension
    #[arg(short = 'd', long = "maxdim", default_value_t = DEFAULT_MAX_DIM)]
    maxdim: f64,

    /// Maximum z-height in mm (ignored for .dxf)
    #[arg(short = 'z', long = "zheight", default_value_t = DEFAULT_MAX_Z)]
    zheight: f64,

    /// Encode the QR code locally instead of fetching it
    #[arg(short, long)]
    local: bool,

    /// Error-correction level for local encoding (L, M, Q, H)
    #[arg(long, default_value_t = EcLevel::M)]
    ec_level: EcLevel,

    /// Pixels per module for local encoding
    #[arg(long, default_value_t = DEFAULT_MODULE_PX)]
    module_px: u32,

    /// Quiet zone width in modules for local encoding
    #[arg(long, default_value_t = DEFAULT_QUIET_ZONE)]
    quiet_zone: u32,

    /// Value stored in dark cells; the tallest cell reaches the z-height
    #[arg(short, long, default_value_t = 1)]
    weight: u8,

    /// How blocks are enlarged to fuse (edge, neighborhood)
    #[arg(long, default_value_t = FudgeStyle::Neighborhood)]
    fudge: FudgeStyle,

    /// Print the extracted module grid
    #[arg(short, long)]
    preview: bool,

    /// OpenSCAD executable to try before the platform defaults
    #[arg(long = "openscad", env = "OPENSCAD", global = true)]
    openscad: Vec<PathBuf>,

    /// Directory for the generated files
    #[arg(short, long, default_value = ".", global = true)]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a payload into a SCAD script (default)
    Convert,
    /// Show resolved configuration and OpenSCAD location
    Info,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config {
            out_dir: self.out_dir.clone(),
            ..Default::default()
        };
        if !self.openscad.is_empty() {
            config.openscad_paths = self.openscad.clone();
        }
        config
    }

    fn request(&self) -> Request {
        let source = if self.local {
            SourceKind::Local(EncodeOptions {
                ec_level: self.ec_level,
                module_px: self.module_px,
                quiet_zone: self.quiet_zone,
            })
        } else {
            SourceKind::Chart
        };

        Request {
            payload: self.payload.clone().unwrap_or_else(|| self.url.clone()),
            source,
            weight: self.weight,
            scad: ScadParams {
                mode: if self.dxf { OutputMode::Drawing2d } else { OutputMode::Solid3d },
                fudge_style: self.fudge,
                max_dim: self.maxdim,
                max_z: self.zheight,
                ..Default::default()
            },
            make: self.make,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("qr2cad=info".parse()?)
                .add_directive("qr2cad_core=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    match cli.command.as_ref().unwrap_or(&Commands::Convert) {
        Commands::Convert => commands::convert(&config, &cli.request(), cli.preview).await?,
        Commands::Info => commands::show_info(&config),
    }

    Ok(())
}
