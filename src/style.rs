use crate::{Alignment, StyleSettings, TextFrame};

/// Font size applied by the styling pass, in hundredths of a point (18 pt).
pub const STYLED_FONT_SIZE: u32 = 1800;

/// Applies `settings` to every run and paragraph already present in `frame`.
///
/// Only existing runs are touched, so this must run after the frame's text is written.
pub fn apply_text_settings(frame: &mut TextFrame, settings: &StyleSettings) {
    let alignment = if settings.rtl { Alignment::Right } else { Alignment::Left };

    for paragraph in &mut frame.paragraphs {
        for run in &mut paragraph.runs {
            run.font.name = Some(settings.font.clone());
            run.font.size = Some(STYLED_FONT_SIZE);
            run.font.color = Some(settings.color);
        }
        paragraph.alignment = Some(alignment);
    }
}
