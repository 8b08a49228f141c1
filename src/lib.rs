mod assembler;
mod constants;
mod container;
mod dispatch;
mod generator_config;
mod input;
mod parse_rels;
mod parse_xml;
mod slide;
mod style;
mod template;
mod types;

pub use assembler::{build, generate, CONCLUSION_TITLE};
pub use container::{Layout, PptxContainer};
pub use dispatch::{layout_for, FieldBinding, LayoutBinding, PlaceholderRole, Slot};
pub use generator_config::{GeneratorConfig, GeneratorConfigBuilder, DEFAULT_OUTPUT, STYLED_OUTPUT};
pub use input::{load_presentation, parse_presentation};
pub use parse_xml::ParsedSlide;
pub use slide::{Paragraph, PlaceholderShape, Run, Slide, TextFrame};
pub use style::{apply_text_settings, STYLED_FONT_SIZE};
pub use types::*;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("XML write error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Slide {slide}: layout index {layout} is out of range, the template has {available} layouts")]
    LayoutOutOfRange {
        slide: usize,
        layout: usize,
        available: usize,
    },

    #[error("Slide {slide}: no placeholder for {role} ({slot}) on the resolved layout")]
    PlaceholderNotFound {
        slide: usize,
        role: PlaceholderRole,
        slot: Slot,
    },

    #[error("Package part not found: {0}")]
    PartNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(&'static str),
}

/// Problems with the input document, detected before any slide is created.
///
/// `index` is the zero-based position of the offending entry in the `slides` array.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("slides[{index}]: missing \"type\"")]
    MissingType { index: usize },

    #[error("slides[{index}]: unknown slide type \"{kind}\"")]
    UnknownKind { index: usize, kind: String },

    #[error("slides[{index}] ({kind}): {message}")]
    InvalidSlide {
        index: usize,
        kind: SlideKind,
        message: String,
    },

    #[error("invalid hex color \"{value}\", expected six hex digits such as \"FFFFFF\"")]
    InvalidColor { value: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
