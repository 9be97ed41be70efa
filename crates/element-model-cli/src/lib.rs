//! Element model CLI library
//!
//! This module contains the core CLI logic for the element model tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use element_model::{Element, ElementModel, ElementModelError};

/// Run the element model CLI application
///
/// Reads the input file, validates it unless disabled, renders it to markup
/// text and writes the result to the output file or standard output.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ElementModelError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed JSON input
/// - Validation errors
pub fn run(args: &Args) -> Result<(), ElementModelError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing element model"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(indent) = &args.indent {
        app_config.render_mut().set_indent(indent.clone());
    }
    if args.no_validate {
        app_config.render_mut().set_validate(false);
    }

    let source = fs::read_to_string(&args.input)?;

    let model = ElementModel::new(app_config);
    let element: Element = model.parse(&source)?;
    let markup = model.render_string(&element)?;

    match &args.output {
        Some(output) => {
            fs::write(output, markup)?;
            info!(output_file = output; "Markup written successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(markup.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
