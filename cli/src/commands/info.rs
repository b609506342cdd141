//! Info command implementation.

use qr2cad_core::constants::{BLOCK_SIZE, FUDGE, SCAD_FILENAME};
use qr2cad_core::{Config, Exporter};

/// Display resolved configuration.
pub fn show_info(config: &Config) {
    let exporter = Exporter::new(config.openscad_paths.clone());

    println!("\n\x1b[1mqr2cad Configuration\x1b[0m");
    println!("═══════════════════════════════════════");
    println!("\x1b[1mChart:\x1b[0m      {} ({}px)", config.chart_endpoint, config.chart_size);
    println!("\x1b[1mScript:\x1b[0m     {}", config.out_dir.join(SCAD_FILENAME).display());
    println!("\x1b[1mBlock:\x1b[0m      {} (fudge {})", BLOCK_SIZE, FUDGE);
    println!("\x1b[1mOpenSCAD:\x1b[0m   {}", exporter.locate().display());

    println!("\n\x1b[1mSearch paths:\x1b[0m");
    for path in &config.openscad_paths {
        let mark = if path.is_file() { "\x1b[1;32m✓\x1b[0m" } else { "\x1b[2m✗\x1b[0m" };
        println!("  {} {}", mark, path.display());
    }
    println!();
}
