use std::path::{Path, PathBuf};

/// Output file name for unstyled runs.
pub const DEFAULT_OUTPUT: &str = "comprehensive_presentation.pptx";
/// Output file name when style settings are present.
pub const STYLED_OUTPUT: &str = "comprehensive_presentation_with_design.pptx";

/// Configuration options for a generation run.
///
/// Use [`GeneratorConfig::builder()`] to create a configuration instance.
/// This allows you to customize only the desired fields while falling back to sensible defaults for the rest.
///
/// # Configuration Options
///
/// | Parameter | Type | Default | Description |
/// |-----------|------|---------|-------------|
/// | `template` | `Option<PathBuf>` | `None` | `.pptx` whose layouts are used; the built-in blank template otherwise |
/// | `output` | `Option<PathBuf>` | `None` | Where the presentation is written; see [`GeneratorConfig::output_path`] |
///
/// # Example
///
/// ```
/// use pptx_from_json::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .template("template.pptx")
///     .output("deck.pptx")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// The configured output path, or the fixed default name picked by whether the run is styled.
    pub fn output_path(&self, styled: bool) -> &Path {
        match &self.output {
            Some(path) => path.as_path(),
            None if styled => Path::new(STYLED_OUTPUT),
            None => Path::new(DEFAULT_OUTPUT),
        }
    }
}

/// Builder for [`GeneratorConfig`].
///
/// Allows setting individual configuration fields while falling back to defaults for any unspecified values
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    template: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl GeneratorConfigBuilder {
    /// Sets the template presentation whose layouts are used.
    pub fn template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = Some(path.into());
        self
    }

    /// Sets where the generated presentation is written.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Builds the final [`GeneratorConfig`] instance, applying default values for any fields that were not set.
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig {
            template: self.template,
            output: self.output,
        }
    }
}
