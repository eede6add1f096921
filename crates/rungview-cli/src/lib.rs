//! CLI logic for the rungview ladder-diagram tool.
//!
//! Reads a ladder-diagram JSON file, lays it out, and exports a single SVG
//! frame.

mod args;
mod config;
mod error;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::info;

use rungview::{LadderView, model::Diagram};

/// Run the rungview CLI application
///
/// This function decodes the input file, lays out the diagram, and writes the
/// rendered frame to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - JSON decoding errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and decode the input file
    let source = fs::read_to_string(&args.input)?;
    let diagram: Diagram = serde_json::from_str(&source)?;

    // Lay out and export through the LadderView API
    let mut view = LadderView::new(app_config)?;
    view.set_diagram(&diagram);

    if let Some(zoom) = args.zoom {
        view.viewport_mut().zoom_to(zoom);
    }

    view.export_svg(&args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
