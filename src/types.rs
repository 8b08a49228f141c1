use crate::{Paragraph, ValidationError};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// The nine slide shapes a presentation can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    TitleSlide,
    TitleAndContent,
    SectionHeader,
    TwoContent,
    Comparison,
    TitleOnly,
    Blank,
    ContentWithCaption,
    PictureWithCaption,
}

impl SlideKind {
    pub const ALL: [SlideKind; 9] = [
        SlideKind::TitleSlide,
        SlideKind::TitleAndContent,
        SlideKind::SectionHeader,
        SlideKind::TwoContent,
        SlideKind::Comparison,
        SlideKind::TitleOnly,
        SlideKind::Blank,
        SlideKind::ContentWithCaption,
        SlideKind::PictureWithCaption,
    ];

    /// The `type` tag used in the input document.
    pub fn tag(self) -> &'static str {
        match self {
            SlideKind::TitleSlide => "title_slide",
            SlideKind::TitleAndContent => "title_and_content",
            SlideKind::SectionHeader => "section_header",
            SlideKind::TwoContent => "two_content",
            SlideKind::Comparison => "comparison",
            SlideKind::TitleOnly => "title_only",
            SlideKind::Blank => "blank",
            SlideKind::ContentWithCaption => "content_with_caption",
            SlideKind::PictureWithCaption => "picture_with_caption",
        }
    }
}

impl FromStr for SlideKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlideKind::ALL.into_iter().find(|kind| kind.tag() == s).ok_or(())
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One entry of the `slides` array. Each variant carries exactly the fields its layout needs.
///
/// Line lists accept either a JSON array of strings or a single string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlideDescriptor {
    TitleSlide {
        title: String,
        subtitle: String,
    },
    TitleAndContent {
        title: String,
        #[serde(deserialize_with = "lines")]
        content: Vec<String>,
    },
    SectionHeader {
        title: String,
        subtitle: String,
    },
    TwoContent {
        title: String,
        #[serde(deserialize_with = "lines")]
        left_content: Vec<String>,
        #[serde(deserialize_with = "lines")]
        right_content: Vec<String>,
    },
    Comparison {
        title: String,
        left_title: String,
        #[serde(deserialize_with = "lines")]
        left_content: Vec<String>,
        right_title: String,
        #[serde(deserialize_with = "lines")]
        right_content: Vec<String>,
    },
    TitleOnly {
        title: String,
    },
    Blank,
    ContentWithCaption {
        title: String,
        #[serde(deserialize_with = "lines")]
        content: Vec<String>,
        caption: String,
    },
    PictureWithCaption {
        title: String,
        caption: String,
    },
}

impl SlideDescriptor {
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideDescriptor::TitleSlide { .. } => SlideKind::TitleSlide,
            SlideDescriptor::TitleAndContent { .. } => SlideKind::TitleAndContent,
            SlideDescriptor::SectionHeader { .. } => SlideKind::SectionHeader,
            SlideDescriptor::TwoContent { .. } => SlideKind::TwoContent,
            SlideDescriptor::Comparison { .. } => SlideKind::Comparison,
            SlideDescriptor::TitleOnly { .. } => SlideKind::TitleOnly,
            SlideDescriptor::Blank => SlideKind::Blank,
            SlideDescriptor::ContentWithCaption { .. } => SlideKind::ContentWithCaption,
            SlideDescriptor::PictureWithCaption { .. } => SlideKind::PictureWithCaption,
        }
    }
}

fn lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lines {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Lines::deserialize(deserializer)? {
        Lines::One(line) => vec![line],
        Lines::Many(lines) => lines,
    })
}

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);

    /// Uppercase six-digit hex as written to `a:srgbClr/@val`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidColor { value: s.to_string() };
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Uniform text styling for every region written during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSettings {
    pub font: String,
    pub color: Rgb,
    pub rtl: bool,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            font: "Arial".to_string(),
            color: Rgb::WHITE,
            rtl: false,
        }
    }
}

/// Validated input for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationSpec {
    pub title: String,
    pub subtitle: String,
    pub slides: Vec<SlideDescriptor>,
    pub endpage: String,
    pub style: Option<StyleSettings>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

impl Alignment {
    pub(crate) fn as_attr(self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Right => "r",
        }
    }

    pub(crate) fn from_attr(value: &str) -> Option<Self> {
        match value {
            "l" => Some(Alignment::Left),
            "r" => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// Run-level character formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Font {
    pub name: Option<String>,
    /// Hundredths of a point, as stored in `a:rPr/@sz`.
    pub size: Option<u32>,
    pub color: Option<Rgb>,
}

/// The `<p:ph>` of a shape: how a slide shape binds to its layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// `type` attribute; `None` is the schema default (`obj`).
    pub ph_type: Option<String>,
    /// `idx` attribute, 0 when absent.
    pub idx: u32,
    /// `name` of the shape's `<p:cNvPr>`.
    pub name: String,
    pub orient: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug)]
pub enum SlideElement {
    Text(TextElement),
    Unknown,
}

/// Text of one shape read back from a slide.
#[derive(Debug)]
pub struct TextElement {
    pub placeholder: Option<Placeholder>,
    pub paragraphs: Vec<Paragraph>,
}

impl TextElement {
    /// Paragraph texts joined by `\n`.
    pub fn text(&self) -> String {
        self.paragraphs.iter().map(Paragraph::text).collect::<Vec<_>>().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.runs.is_empty())
    }
}
