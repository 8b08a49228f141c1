//! Command-line front end: build a presentation from JSON, read one back, or list a template's layouts.
//!
//! ```sh
//! pptx-from-json build slides.json --template corporate.pptx -o deck.pptx
//! pptx-from-json inspect deck.pptx
//! pptx-from-json layouts --template corporate.pptx
//! ```
//!
//! Errors are reported through the logger, which prints them even without `RUST_LOG`. Set
//! `RUST_LOG=debug` to trace each slide as it is built.

use clap::{Parser, Subcommand};
use log::error;
use pptx_from_json::{load_presentation, GeneratorConfig, PptxContainer, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Generate PowerPoint presentations from JSON slide descriptions
#[derive(Parser, Debug)]
#[command(name = "pptx-from-json", version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a presentation from a JSON document
    Build {
        /// JSON document describing the slides
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Template whose layouts are used (built-in blank template if omitted)
        #[arg(short, long, value_name = "TEMPLATE")]
        template: Option<PathBuf>,

        /// Output file
        ///
        /// Defaults to comprehensive_presentation.pptx, or
        /// comprehensive_presentation_with_design.pptx when the input has settings.
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Print the text of every slide as Markdown
    Inspect {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List the slide layouts of a template by index
    Layouts {
        #[arg(short, long, value_name = "TEMPLATE")]
        template: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.command {
        Command::Build { input, template, output } => build(&input, template, output),
        Command::Inspect { file } => inspect(&file),
        Command::Layouts { template } => layouts(template.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn build(input: &Path, template: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let spec = load_presentation(input)?;

    let mut builder = GeneratorConfig::builder();
    if let Some(template) = template {
        builder = builder.template(template);
    }
    if let Some(output) = output {
        builder = builder.output(output);
    }

    let written = pptx_from_json::generate(&spec, &builder.build())?;
    println!("{}", written.display());
    Ok(())
}

fn inspect(file: &Path) -> Result<()> {
    let container = PptxContainer::open(file)?;
    for slide in container.parse_all()? {
        println!("{}", slide.convert_to_md());
    }
    Ok(())
}

fn layouts(template: Option<&Path>) -> Result<()> {
    let container = match template {
        Some(path) => PptxContainer::open(path)?,
        None => PptxContainer::blank()?,
    };

    for (index, layout) in container.layouts().iter().enumerate() {
        let placeholders: Vec<String> = layout
            .placeholders
            .iter()
            .map(|ph| format!("{}#{}", ph.ph_type.as_deref().unwrap_or("obj"), ph.idx))
            .collect();
        println!("{index}: {} [{}]", layout.name, placeholders.join(", "));
    }
    Ok(())
}
