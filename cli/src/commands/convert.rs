//! Convert command implementation.

use qr2cad_core::{Config, Request, SourceKind};

use crate::ui::{print_banner, print_grid};

/// Convert the requested payload and report the generated files.
pub async fn convert(config: &Config, request: &Request, preview: bool) -> anyhow::Result<()> {
    print_banner();

    println!("\x1b[1mPayload:\x1b[0m {}", request.payload);
    match &request.source {
        SourceKind::Chart => println!("\x1b[1mSource:\x1b[0m  {}", config.chart_endpoint),
        SourceKind::Local(options) => println!(
            "\x1b[1mSource:\x1b[0m  local (EC {}, {} px/module)",
            options.ec_level, options.module_px
        ),
    }
    if request.make {
        println!("\x1b[1mExport:\x1b[0m  {}", request.scad.mode);
    }
    println!();

    let outcome = qr2cad_core::convert(config, request).await?;

    if preview {
        print_grid(&outcome.grid);
    }

    println!(
        "\x1b[1;32m✓\x1b[0m {}x{} modules, {} blocks",
        outcome.grid.cols(),
        outcome.grid.rows(),
        outcome.grid.ink_count()
    );
    println!("SCAD file is {}", outcome.script_path.display());
    if let Some(model) = &outcome.model_path {
        println!("{} file is {}", request.scad.mode, model.display());
    }

    Ok(())
}
