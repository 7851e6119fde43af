//! CLI logic for the Shotlist tool.
//!
//! This module contains the core CLI logic: load configuration, read the
//! input markup, lay it out, and write the requested export.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::{fs, io};

use log::info;

use shotlist::{ShotListBuilder, ShotListError};

/// Run the Shotlist CLI application
///
/// This function processes the input file through the Shotlist pipeline
/// and writes the export to the output file, or to standard output when no
/// output file is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ShotListError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Layout errors
pub fn run(args: &Args) -> Result<(), ShotListError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing document"
    );

    // Load configuration and apply command-line overrides
    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.href {
        app_config.render_mut().set_href(true);
    }
    if args.no_decorator {
        app_config.render_mut().set_link_decorator(false);
    }

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process document using ShotListBuilder API
    let builder = ShotListBuilder::new(app_config);
    let document = builder.build(&source)?;

    info!(
        scenes = document.scenes().len(),
        shots = document.shot_count();
        "Document laid out"
    );

    // Write output
    match &args.output {
        Some(path) => {
            let file = io::BufWriter::new(fs::File::create(path)?);
            builder.export(&document, args.format.into(), file)?;
            info!(output_file = path; "Export written");
        }
        None => builder.export(&document, args.format.into(), io::stdout().lock())?,
    }

    Ok(())
}
