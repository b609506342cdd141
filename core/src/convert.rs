//! End-to-end conversion: image source, grid extraction, script
//! generation and optional export, run once in that order.

use std::path::PathBuf;

use tracing::info;

use crate::constants::SCAD_FILENAME;
use crate::export::Exporter;
use crate::grid::{self, ModuleGrid};
use crate::scad::{self, ScadParams};
use crate::source::{self, EncodeOptions, QrImage};
use crate::{Config, Result};

/// Where the QR bitmap comes from
#[derive(Debug, Clone, PartialEq)]
pub enum SourceKind {
    /// Rendered by the remote chart endpoint
    Chart,
    /// Encoded locally
    Local(EncodeOptions),
}

/// One conversion job
#[derive(Debug, Clone)]
pub struct Request {
    /// Text or URL to encode
    pub payload: String,
    pub source: SourceKind,
    /// Value stored in ink cells, scaling their extrusion
    pub weight: u8,
    pub scad: ScadParams,
    /// Also compile the script with OpenSCAD
    pub make: bool,
}

/// Artifacts of a conversion
#[derive(Debug, Clone)]
pub struct Outcome {
    pub grid: ModuleGrid,
    pub script_path: PathBuf,
    /// Compiled model, present when `make` was requested
    pub model_path: Option<PathBuf>,
}

/// Run a conversion job.
pub async fn convert(config: &Config, request: &Request) -> Result<Outcome> {
    let image: QrImage = match &request.source {
        SourceKind::Chart => source::fetch_chart(config, &request.payload).await?,
        SourceKind::Local(options) => source::encode_local(&request.payload, options)?,
    };

    let layout = image.layout()?;
    info!(
        cols = layout.cols,
        rows = layout.rows,
        module_px = layout.module_px,
        "Resolved module layout"
    );

    let grid = grid::extract(&image.bitmap, &layout, request.weight)?;
    let script = scad::render_script(&grid, &request.scad)?;
    let script_path = scad::write_script(&config.out_dir.join(SCAD_FILENAME), &script)?;

    let model_path = if request.make {
        let exporter = Exporter::new(config.openscad_paths.clone());
        Some(
            exporter
                .export(request.scad.mode, &script_path, &config.out_dir)
                .await?,
        )
    } else {
        None
    };

    Ok(Outcome {
        grid,
        script_path,
        model_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EcLevel;

    fn local_request(payload: &str, options: EncodeOptions, scad: ScadParams) -> Request {
        Request {
            payload: payload.to_string(),
            source: SourceKind::Local(options),
            weight: 1,
            scad,
            make: false,
        }
    }

    #[tokio::test]
    async fn test_version_1_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            out_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        // 21 modules plus a 2-module border: a 25x25 module bitmap
        let options = EncodeOptions { ec_level: EcLevel::L, module_px: 1, quiet_zone: 2 };
        let scad = ScadParams { max_dim: 74.0, ..Default::default() };
        let request = local_request("qr2cad", options, scad);

        let outcome = convert(&config, &request).await.unwrap();

        assert_eq!(outcome.grid.rows(), 21);
        assert_eq!(outcome.grid.cols(), 21);
        assert_eq!(outcome.script_path, dir.path().join("qr2cad.scad"));
        assert!(outcome.model_path.is_none());

        let script = std::fs::read_to_string(&outcome.script_path).unwrap();
        assert!(script.contains("is_2d = false;\n"));
        assert!(script.contains("matrix_rows = 21;\n"));
        assert!(script.contains("matrix_cols = 21;\n"));
        assert!(script.contains("extent = [74.000000, 74.000000];\n"));
    }

    #[tokio::test]
    async fn test_conversion_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            out_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let request = local_request("repeat me", EncodeOptions::default(), ScadParams::default());

        let first = convert(&config, &request).await.unwrap();
        let first_script = std::fs::read(&first.script_path).unwrap();
        let second = convert(&config, &request).await.unwrap();
        let second_script = std::fs::read(&second.script_path).unwrap();

        assert_eq!(first.grid, second.grid);
        assert_eq!(first_script, second_script);
    }

    #[tokio::test]
    async fn test_missing_out_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            out_dir: dir.path().join("does/not/exist"),
            ..Default::default()
        };
        let request = local_request("x", EncodeOptions::default(), ScadParams::default());

        assert!(matches!(
            convert(&config, &request).await,
            Err(crate::Error::Io(_))
        ));
    }
}
