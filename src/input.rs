//! Reading and validating the JSON input document.
//!
//! Every slide entry is checked before anything is generated, so an invalid document never
//! produces output.

use crate::{Error, PresentationSpec, Result, Rgb, SlideDescriptor, SlideKind, StyleSettings, ValidationError};
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawPresentation {
    title: String,
    subtitle: String,
    settings: Option<RawSettings>,
    slides: Vec<Value>,
    endpage: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    font: Option<String>,
    #[serde(default)]
    colors: RawColors,
    rtl: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RawColors {
    text: Option<String>,
}

/// Parses and validates an input document.
///
/// # Errors
///
/// Returns [`Error::Validation`] for malformed JSON, a missing or unknown slide `type`, a slide
/// lacking a field its kind requires, or a malformed text color.
pub fn parse_presentation(json: &str) -> Result<PresentationSpec> {
    let raw: RawPresentation = serde_json::from_str(json).map_err(ValidationError::MalformedJson)?;

    let slides = raw
        .slides
        .into_iter()
        .enumerate()
        .map(|(index, value)| parse_slide(index, value))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let style = raw.settings.map(parse_settings).transpose()?;
    debug!("Validated {} slide descriptors (styled: {})", slides.len(), style.is_some());

    Ok(PresentationSpec {
        title: raw.title,
        subtitle: raw.subtitle,
        slides,
        endpage: raw.endpage,
        style,
    })
}

/// Reads an input document from disk and validates it.
pub fn load_presentation(path: &Path) -> Result<PresentationSpec> {
    let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_presentation(&json)
}

fn parse_slide(index: usize, value: Value) -> std::result::Result<SlideDescriptor, ValidationError> {
    let kind = match value.get("type") {
        Some(Value::String(tag)) => tag
            .parse::<SlideKind>()
            .map_err(|_| ValidationError::UnknownKind { index, kind: tag.clone() })?,
        Some(other) => {
            return Err(ValidationError::UnknownKind { index, kind: other.to_string() });
        }
        None => return Err(ValidationError::MissingType { index }),
    };

    serde_json::from_value(value).map_err(|e| ValidationError::InvalidSlide {
        index,
        kind,
        message: e.to_string(),
    })
}

fn parse_settings(raw: RawSettings) -> std::result::Result<StyleSettings, ValidationError> {
    let defaults = StyleSettings::default();
    let color = match raw.colors.text {
        Some(hex) => hex.parse::<Rgb>()?,
        None => defaults.color,
    };

    Ok(StyleSettings {
        font: raw.font.unwrap_or(defaults.font),
        color,
        rtl: raw.rtl.unwrap_or(defaults.rtl),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_error(json: &str) -> ValidationError {
        match parse_presentation(json) {
            Err(Error::Validation(e)) => e,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_document() {
        let spec = parse_presentation(
            r#"{"title":"T","subtitle":"S","slides":[{"type":"title_only","title":"X"}],"endpage":"E"}"#,
        )
        .unwrap();

        assert_eq!(spec.title, "T");
        assert_eq!(spec.subtitle, "S");
        assert_eq!(spec.endpage, "E");
        assert_eq!(spec.slides, vec![SlideDescriptor::TitleOnly { title: "X".into() }]);
        assert_eq!(spec.style, None);
    }

    #[test]
    fn test_unknown_kind_names_position() {
        let err = validation_error(
            r#"{"title":"T","subtitle":"S","endpage":"E","slides":[
                {"type":"blank"},
                {"type":"bullet_points","title":"X"}
            ]}"#,
        );
        match err {
            ValidationError::UnknownKind { index, kind } => {
                assert_eq!(index, 1);
                assert_eq!(kind, "bullet_points");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_names_position_and_kind() {
        let err = validation_error(
            r#"{"title":"T","subtitle":"S","endpage":"E","slides":[
                {"type":"two_content","title":"X","left_content":["A"]}
            ]}"#,
        );
        match err {
            ValidationError::InvalidSlide { index, kind, message } => {
                assert_eq!(index, 0);
                assert_eq!(kind, SlideKind::TwoContent);
                assert!(message.contains("right_content"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_type() {
        let err = validation_error(r#"{"title":"T","subtitle":"S","endpage":"E","slides":[{"title":"X"}]}"#);
        assert!(matches!(err, ValidationError::MissingType { index: 0 }));
    }

    #[test]
    fn test_malformed_json() {
        let err = validation_error(r#"{"title":"T","subtitle":"#);
        assert!(matches!(err, ValidationError::MalformedJson(_)));

        let err = validation_error(r#"{"title":"T","slides":[],"endpage":"E"}"#);
        assert!(matches!(err, ValidationError::MalformedJson(_)));
    }

    #[test]
    fn test_settings_defaults_and_color() {
        let spec = parse_presentation(
            r#"{"title":"T","subtitle":"S","slides":[],"endpage":"E",
                "settings":{"colors":{"background":"FFFFFF","text":"000000"},"rtl":true}}"#,
        )
        .unwrap();

        assert_eq!(
            spec.style,
            Some(StyleSettings { font: "Arial".into(), color: Rgb(0, 0, 0), rtl: true })
        );

        let spec = parse_presentation(r#"{"title":"T","subtitle":"S","slides":[],"endpage":"E","settings":{}}"#)
            .unwrap();
        assert_eq!(spec.style, Some(StyleSettings::default()));
    }

    #[test]
    fn test_malformed_color() {
        let err = validation_error(
            r#"{"title":"T","subtitle":"S","slides":[],"endpage":"E","settings":{"colors":{"text":"white"}}}"#,
        );
        assert!(matches!(err, ValidationError::InvalidColor { value } if value == "white"));
    }
}
