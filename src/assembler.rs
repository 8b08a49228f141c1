use crate::dispatch::{layout_for, FieldBinding, LayoutBinding, PlaceholderRole, Slot};
use crate::style::apply_text_settings;
use crate::{Error, GeneratorConfig, PptxContainer, PresentationSpec, Result, StyleSettings};
use log::{debug, info};
use std::path::PathBuf;

/// Title of the slide appended after all described slides.
pub const CONCLUSION_TITLE: &str = "Conclusion";

const LEAD: LayoutBinding = LayoutBinding {
    layout_index: 0,
    fields: &[
        FieldBinding { role: PlaceholderRole::Title, slot: Slot::Title },
        FieldBinding { role: PlaceholderRole::Subtitle, slot: Slot::Idx(1) },
    ],
};

const CONCLUSION: LayoutBinding = LayoutBinding {
    layout_index: 1,
    fields: &[
        FieldBinding { role: PlaceholderRole::Title, slot: Slot::Title },
        FieldBinding { role: PlaceholderRole::Body, slot: Slot::Idx(1) },
    ],
};

/// Appends the whole deck described by `spec` to `container`.
///
/// The deck is a title slide from `title`/`subtitle`, one slide per descriptor in order, and a
/// closing slide titled [`CONCLUSION_TITLE`] whose body is `endpage`. When `spec.style` is set,
/// every text region is styled right after it is written.
///
/// # Errors
///
/// Fails on the first slide whose layout or placeholder is missing from the template.
pub fn build(spec: &PresentationSpec, container: &mut PptxContainer) -> Result<()> {
    let style = spec.style.as_ref();

    add_slide(container, &LEAD, style, |role| match role {
        PlaceholderRole::Title => Some(spec.title.clone()),
        PlaceholderRole::Subtitle => Some(spec.subtitle.clone()),
        _ => None,
    })?;

    for descriptor in &spec.slides {
        let binding = layout_for(descriptor.kind());
        debug!("Building {} slide on layout {}", descriptor.kind(), binding.layout_index);
        add_slide(container, binding, style, |role| descriptor.text_for(role))?;
    }

    add_slide(container, &CONCLUSION, style, |role| match role {
        PlaceholderRole::Title => Some(CONCLUSION_TITLE.to_string()),
        PlaceholderRole::Body => Some(spec.endpage.clone()),
        _ => None,
    })?;

    Ok(())
}

/// Adds a slide on the binding's layout and writes each bound role's text into its slot.
fn add_slide<F>(
    container: &mut PptxContainer,
    binding: &LayoutBinding,
    style: Option<&StyleSettings>,
    text_for: F,
) -> Result<()>
where
    F: Fn(PlaceholderRole) -> Option<String>,
{
    let position = container.slide_count();
    let slide = container.add_slide(binding.layout_index)?;

    for field in binding.fields {
        let Some(text) = text_for(field.role) else {
            continue;
        };
        let shape = slide.slot_mut(field.slot).ok_or(Error::PlaceholderNotFound {
            slide: position,
            role: field.role,
            slot: field.slot,
        })?;

        shape.set_text(&text);
        if let Some(settings) = style {
            apply_text_settings(&mut shape.text_frame, settings);
        }
    }

    debug!("Slide {} populated {} placeholders", position, slide.populated_count());
    Ok(())
}

/// Builds the presentation described by `spec` and saves it.
///
/// The template is `config.template` or the built-in blank one. Returns the path written, see
/// [`GeneratorConfig::output_path`]. Nothing is written if any step fails.
pub fn generate(spec: &PresentationSpec, config: &GeneratorConfig) -> Result<PathBuf> {
    let mut container = match &config.template {
        Some(template) => {
            info!("Using template {}", template.display());
            PptxContainer::open(template)?
        }
        None => PptxContainer::blank()?,
    };

    build(spec, &mut container)?;

    let output = config.output_path(spec.style.is_some());
    container.save(output)?;
    Ok(output.to_path_buf())
}
