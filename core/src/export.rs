//! OpenSCAD compiler invocation
//!
//! The compiler is looked up in a list of candidate paths (injectable via
//! [`Config::openscad_paths`](crate::Config)) before falling back to the
//! bare executable name on the search path.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, info};

use crate::constants::{MAC_OPENSCAD, MODEL_STEM, OPENSCAD_BIN, WINDOWS_OPENSCAD};
use crate::scad::OutputMode;
use crate::{Error, Result};

/// Platform install locations checked when no override is configured
pub fn default_search_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(WINDOWS_OPENSCAD), PathBuf::from(MAC_OPENSCAD)]
}

/// Compiles SCAD scripts into STL or DXF files
#[derive(Debug, Clone)]
pub struct Exporter {
    search_paths: Vec<PathBuf>,
}

impl Exporter {
    /// Create an exporter checking `search_paths` in order
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// First existing candidate, or the executable name for a PATH lookup
    pub fn locate(&self) -> PathBuf {
        self.search_paths
            .iter()
            .find(|p| p.is_file())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(OPENSCAD_BIN))
    }

    /// Path of the compiled model for `mode` inside `out_dir`
    pub fn model_path(out_dir: &Path, mode: OutputMode) -> PathBuf {
        out_dir.join(format!("{}.{}", MODEL_STEM, mode.extension()))
    }

    /// Build the compiler command. OpenSCAD picks STL or DXF from the
    /// output file's extension.
    pub fn command(&self, scad_path: &Path, model_path: &Path) -> Command {
        let mut cmd = Command::new(self.locate());
        cmd.arg("-o").arg(model_path).arg(scad_path);
        cmd
    }

    /// Compile `scad_path` into `out_dir`, returning the model path.
    pub async fn export(&self, mode: OutputMode, scad_path: &Path, out_dir: &Path) -> Result<PathBuf> {
        let model_path = Self::model_path(out_dir, mode);
        let mut cmd = self.command(scad_path, &model_path);
        info!(format = %mode, output = %model_path.display(), "Exporting model");
        debug!(?cmd, "Running OpenSCAD");

        let output = cmd
            .output()
            .await
            .map_err(|e| Error::Export(format!("failed to run {}: {}", self.locate().display(), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Export(format!(
                "OpenSCAD exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(model_path)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(default_search_paths())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_falls_back_to_path() {
        let exporter = Exporter::new(vec![PathBuf::from("/nonexistent/openscad")]);
        assert_eq!(exporter.locate(), PathBuf::from(OPENSCAD_BIN));
    }

    #[test]
    fn test_locate_prefers_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        std::fs::write(&second, b"").unwrap();
        std::fs::write(&first, b"").unwrap();

        let exporter = Exporter::new(vec![
            dir.path().join("missing"),
            first.clone(),
            second,
        ]);
        assert_eq!(exporter.locate(), first);
    }

    #[test]
    fn test_locate_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(vec![dir.path().to_path_buf()]);
        assert_eq!(exporter.locate(), PathBuf::from(OPENSCAD_BIN));
    }

    #[test]
    fn test_model_path_extension() {
        let dir = Path::new("/tmp/out");
        assert_eq!(Exporter::model_path(dir, OutputMode::Solid3d), dir.join("qr2cad.stl"));
        assert_eq!(Exporter::model_path(dir, OutputMode::Drawing2d), dir.join("qr2cad.dxf"));
    }

    #[test]
    fn test_command_arguments() {
        let exporter = Exporter::new(vec![]);
        let cmd = exporter.command(Path::new("qr2cad.scad"), Path::new("qr2cad.dxf"));
        let std_cmd = cmd.as_std();

        assert_eq!(std_cmd.get_program(), OPENSCAD_BIN);
        let args: Vec<_> = std_cmd.get_args().collect();
        assert_eq!(args, ["-o", "qr2cad.dxf", "qr2cad.scad"]);
    }

    #[cfg(unix)]
    fn fake_openscad(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-openscad");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_export_runs_compiler() {
        let dir = tempfile::tempdir().unwrap();
        // Arguments are: -o <model> <scad>
        let compiler = fake_openscad(dir.path(), r#"cp "$3" "$2""#);
        let scad = dir.path().join("qr2cad.scad");
        std::fs::write(&scad, "cube(1);").unwrap();

        let exporter = Exporter::new(vec![compiler]);
        let model = exporter.export(OutputMode::Solid3d, &scad, dir.path()).await.unwrap();

        assert_eq!(model, dir.path().join("qr2cad.stl"));
        assert_eq!(std::fs::read_to_string(&model).unwrap(), "cube(1);");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_export_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = fake_openscad(dir.path(), "echo 'Parser error' >&2; exit 1");
        let scad = dir.path().join("qr2cad.scad");
        std::fs::write(&scad, "cube(").unwrap();

        let exporter = Exporter::new(vec![compiler]);
        match exporter.export(OutputMode::Drawing2d, &scad, dir.path()).await {
            Err(Error::Export(msg)) => assert!(msg.contains("Parser error"), "{}", msg),
            other => panic!("expected export error, got {:?}", other),
        }
    }
}
