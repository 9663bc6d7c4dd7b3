//! CLI logic for the Etymograph tool.
//!
//! Reads a notation document, assembles its derivation graph in the
//! background, and writes the rendered SVG or JSON to the output file.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::{fs, path::Path};

use log::{debug, info};

use etymograph::{Etymograph, EtymographError, deferred::Deferred};

/// Run the Etymograph CLI application
///
/// The transform runs on a [`Deferred`] worker; this function waits for it
/// and renders the result.
///
/// # Errors
///
/// Returns `EtymographError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Label hashing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), EtymographError> {
    let format = args.output_format();
    info!(
        input_path = args.input,
        output_path = args.output,
        format:? = format;
        "Processing document"
    );

    let explicit_config = args.config.as_deref().map(Path::new);
    let app_config = config::load_config(explicit_config, Path::new(&args.input))?;

    let source = fs::read_to_string(&args.input)?;

    let etymograph = Etymograph::new(app_config);
    let transform = Deferred::spawn(move || {
        let graph = etymograph.assemble(&source)?;
        etymograph.render(&graph, format)
    });
    debug!(settled = transform.is_settled(); "Transform started");

    let output = transform.into_outcome()?;

    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Graph exported successfully");

    Ok(())
}
