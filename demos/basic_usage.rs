//! Basic usage example for the pptx-from-json crate
//!
//! This example builds a presentation from a JSON document and prints the generated slides as Markdown.
//!
//! Run with: cargo run --example basic_usage <path/to/slides.json> [path/to/template.pptx]

use pptx_from_json::{load_presentation, GeneratorConfig, PptxContainer, Result};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    // Get the JSON file path from command line arguments
    let args: Vec<String> = env::args().collect();
    let json_path = if args.len() > 1 {
        &args[1]
    } else {
        eprintln!("Usage: cargo run --example basic_usage <path/to/slides.json> [path/to/template.pptx]");
        return Ok(());
    };

    let spec = load_presentation(Path::new(json_path))?;
    println!("Building {} slides from {}", spec.slides.len() + 2, json_path);

    // Use the config builder to pick a template, the output name follows the settings
    let mut builder = GeneratorConfig::builder();
    if let Some(template) = args.get(2) {
        builder = builder.template(template);
    }
    let output = pptx_from_json::generate(&spec, &builder.build())?;

    // Read the written file back
    let container = PptxContainer::open(&output)?;
    for slide in container.parse_all()? {
        println!("{}", slide.convert_to_md());
    }

    println!("Presentation written to {}", output.display());

    Ok(())
}
