use crate::constants::{A_NAMESPACE, PKG_RELS_NAMESPACE, P_NAMESPACE, R_NAMESPACE, RT_SLIDE_LAYOUT};
use crate::container::Layout;
use crate::types::Placeholder;
use crate::parse_rels::relative_target;
use crate::{Alignment, Font, Result, Slot};
use std::fmt::Write as FmtWrite;

/// Placeholder types that a new slide does not inherit from its layout.
const SKIPPED_PLACEHOLDER_TYPES: [&str; 3] = ["dt", "ftr", "sldNum"];

/// Escape XML special characters.
///
/// Characters XML 1.0 does not allow (C0 controls other than tab, newline and carriage return)
/// are written as `_xHHHH_`, the OOXML escaped form.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if c < ' ' || c == '\u{FFFE}' || c == '\u{FFFF}' => {
                escaped.push_str(&format!("_x{:04X}_", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// A slide being built, not yet written to the package.
#[derive(Debug, Clone)]
pub struct Slide {
    pub(crate) number: u32,
    pub(crate) layout_index: usize,
    pub(crate) layout_part: String,
    pub shapes: Vec<PlaceholderShape>,
}

impl Slide {
    /// Creates a slide whose placeholders are cloned from `layout`.
    pub(crate) fn from_layout(number: u32, layout_index: usize, layout: &Layout) -> Self {
        let shapes = layout
            .placeholders
            .iter()
            .filter(|ph| {
                ph.ph_type
                    .as_deref()
                    .map_or(true, |t| !SKIPPED_PLACEHOLDER_TYPES.contains(&t))
            })
            .enumerate()
            .map(|(i, ph)| PlaceholderShape::from_layout(i as u32 + 2, ph))
            .collect();

        Slide {
            number,
            layout_index,
            layout_part: layout.part.clone(),
            shapes,
        }
    }

    /// Package part name, e.g. `ppt/slides/slide3.xml`.
    pub fn part_name(&self) -> String {
        format!("ppt/slides/slide{}.xml", self.number)
    }

    pub fn layout_index(&self) -> usize {
        self.layout_index
    }

    /// The title placeholder (`title` or `ctrTitle`).
    pub fn title(&self) -> Option<&PlaceholderShape> {
        self.shapes.iter().find(|s| s.is_title())
    }

    pub fn title_mut(&mut self) -> Option<&mut PlaceholderShape> {
        self.shapes.iter_mut().find(|s| s.is_title())
    }

    /// The placeholder with the given `idx`.
    pub fn placeholder(&self, idx: u32) -> Option<&PlaceholderShape> {
        self.shapes.iter().find(|s| s.idx == idx)
    }

    pub fn placeholder_mut(&mut self, idx: u32) -> Option<&mut PlaceholderShape> {
        self.shapes.iter_mut().find(|s| s.idx == idx)
    }

    pub fn slot_mut(&mut self, slot: Slot) -> Option<&mut PlaceholderShape> {
        match slot {
            Slot::Title => self.title_mut(),
            Slot::Idx(idx) => self.placeholder_mut(idx),
        }
    }

    /// Number of placeholders that received text.
    pub fn populated_count(&self) -> usize {
        self.shapes.iter().filter(|s| !s.text_frame.is_empty()).count()
    }

    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{A_NAMESPACE}" xmlns:r="{R_NAMESPACE}" xmlns:p="{P_NAMESPACE}">"#
        )?;
        xml.push_str("<p:cSld><p:spTree>");
        xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
        xml.push_str(concat!(
            "<p:grpSpPr><a:xfrm>",
            r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#,
            "</a:xfrm></p:grpSpPr>"
        ));

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    pub(crate) fn rels_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<Relationships xmlns="{PKG_RELS_NAMESPACE}">"#)?;
        write!(
            xml,
            r#"<Relationship Id="rId1" Type="{RT_SLIDE_LAYOUT}" Target="{}"/>"#,
            escape_xml(&relative_target(&self.part_name(), &self.layout_part))
        )?;
        xml.push_str("</Relationships>");
        Ok(xml)
    }
}

/// A placeholder shape on a slide, inheriting position and formatting from its layout.
#[derive(Debug, Clone)]
pub struct PlaceholderShape {
    pub id: u32,
    pub name: String,
    /// `p:ph/@type`; `None` is the schema default (`obj`).
    pub ph_type: Option<String>,
    pub idx: u32,
    orient: Option<String>,
    size: Option<String>,
    pub text_frame: TextFrame,
}

impl PlaceholderShape {
    fn from_layout(id: u32, ph: &Placeholder) -> Self {
        PlaceholderShape {
            id,
            name: ph.name.clone(),
            ph_type: ph.ph_type.clone(),
            idx: ph.idx,
            orient: ph.orient.clone(),
            size: ph.size.clone(),
            text_frame: TextFrame::default(),
        }
    }

    pub fn is_title(&self) -> bool {
        matches!(self.ph_type.as_deref(), Some("title" | "ctrTitle"))
    }

    /// Replaces the text of the shape. See [`TextFrame::set_text`].
    pub fn set_text(&mut self, text: &str) {
        self.text_frame.set_text(text);
    }

    pub fn text(&self) -> String {
        self.text_frame.text()
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp><p:nvSpPr>");
        write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, self.id, escape_xml(&self.name))?;
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str("<p:nvPr><p:ph");
        if let Some(ph_type) = &self.ph_type {
            write!(xml, r#" type="{}""#, escape_xml(ph_type))?;
        }
        if let Some(orient) = &self.orient {
            write!(xml, r#" orient="{}""#, escape_xml(orient))?;
        }
        if let Some(size) = &self.size {
            write!(xml, r#" sz="{}""#, escape_xml(size))?;
        }
        if self.idx != 0 {
            write!(xml, r#" idx="{}""#, self.idx)?;
        }
        xml.push_str("/></p:nvPr></p:nvSpPr>");
        xml.push_str("<p:spPr/>");
        self.text_frame.to_xml(xml)?;
        xml.push_str("</p:sp>");
        Ok(())
    }
}

/// The text body of a shape: an ordered list of paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Replaces all text. Each `\n`-separated line becomes its own paragraph holding a single
    /// run; an empty line becomes an empty paragraph.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs = text
            .split('\n')
            .map(|line| {
                let line = line.strip_suffix('\r').unwrap_or(line);
                Paragraph {
                    runs: if line.is_empty() {
                        Vec::new()
                    } else {
                        vec![Run { text: line.to_string(), font: Font::default() }]
                    },
                    alignment: None,
                }
            })
            .collect();
    }

    /// Paragraph texts joined by `\n`.
    pub fn text(&self) -> String {
        self.paragraphs.iter().map(Paragraph::text).collect::<Vec<_>>().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.runs.is_empty())
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
        if self.paragraphs.is_empty() {
            xml.push_str("<a:p/>");
        }
        for paragraph in &self.paragraphs {
            paragraph.to_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub alignment: Option<Alignment>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");
        if let Some(alignment) = self.alignment {
            write!(xml, r#"<a:pPr algn="{}"/>"#, alignment.as_attr())?;
        }
        for run in &self.runs {
            run.to_xml(xml)?;
        }
        xml.push_str("</a:p>");
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub font: Font,
}

impl Run {
    /// Writes the run. A vertical tab in the text becomes a line break (`<a:br>`) carrying the
    /// same character properties.
    fn to_xml(&self, xml: &mut String) -> Result<()> {
        for (i, segment) in self.text.split('\u{b}').enumerate() {
            if i > 0 {
                xml.push_str("<a:br>");
                self.rpr_xml(xml)?;
                xml.push_str("</a:br>");
            }
            if segment.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            self.rpr_xml(xml)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(segment))?;
            xml.push_str("</a:r>");
        }
        Ok(())
    }

    fn rpr_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str(r#"<a:rPr lang="en-US""#);
        if let Some(size) = self.font.size {
            write!(xml, r#" sz="{size}""#)?;
        }
        xml.push_str(r#" dirty="0">"#);
        // CT_TextCharacterProperties orders the fill before the typefaces.
        if let Some(color) = self.font.color {
            write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex())?;
        }
        if let Some(name) = &self.font.name {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(name))?;
        }
        xml.push_str("</a:rPr>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    fn layout() -> Layout {
        let ph = |ph_type: Option<&str>, idx: u32, name: &str| Placeholder {
            ph_type: ph_type.map(str::to_string),
            idx,
            name: name.to_string(),
            orient: None,
            size: None,
        };
        Layout {
            part: "ppt/slideLayouts/slideLayout2.xml".to_string(),
            name: "Title and Content".to_string(),
            placeholders: vec![
                ph(Some("title"), 0, "Title 1"),
                ph(None, 1, "Content Placeholder 2"),
                ph(Some("dt"), 10, "Date Placeholder 3"),
                ph(Some("ftr"), 11, "Footer Placeholder 4"),
                ph(Some("sldNum"), 12, "Slide Number Placeholder 5"),
            ],
        }
    }

    #[test]
    fn test_layout_placeholders_are_cloned_without_footers() {
        let slide = Slide::from_layout(4, 1, &layout());
        assert_eq!(slide.shapes.len(), 2);
        assert!(slide.title().is_some());
        assert_eq!(slide.placeholder(1).map(|s| s.id), Some(3));
        assert!(slide.placeholder(10).is_none());
        assert_eq!(slide.part_name(), "ppt/slides/slide4.xml");
    }

    #[test]
    fn test_set_text_splits_lines_into_paragraphs() {
        let mut frame = TextFrame::default();
        frame.set_text("A\nB");
        assert_eq!(frame.paragraphs.len(), 2);
        assert_eq!(frame.paragraphs[0].text(), "A");
        assert_eq!(frame.paragraphs[1].text(), "B");
        assert_eq!(frame.text(), "A\nB");

        frame.set_text("");
        assert!(frame.is_empty());
    }

    #[test]
    fn test_slide_xml() {
        let mut slide = Slide::from_layout(1, 1, &layout());
        slide.title_mut().unwrap().set_text("Q&A <today>");
        let body = slide.placeholder_mut(1).unwrap();
        body.set_text("one");
        body.text_frame.paragraphs[0].alignment = Some(Alignment::Right);
        body.text_frame.paragraphs[0].runs[0].font = Font {
            name: Some("Arial".into()),
            size: Some(1800),
            color: Some(Rgb(255, 0, 0)),
        };

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<p:ph idx="1"/>"#));
        assert!(xml.contains("<a:t>Q&amp;A &lt;today&gt;</a:t>"));
        assert!(xml.contains(r#"<a:pPr algn="r"/>"#));
        assert!(xml.contains(r#"sz="1800""#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="FF0000"/></a:solidFill><a:latin typeface="Arial"/>"#));
        roxmltree::Document::parse(&xml).unwrap();
    }

    #[test]
    fn test_control_characters_are_escaped() {
        assert_eq!(escape_xml("Bell\u{7}here"), "Bell_x0007_here");
        assert_eq!(escape_xml("tab\tok & <b>"), "tab\tok &amp; &lt;b&gt;");

        let mut slide = Slide::from_layout(1, 1, &layout());
        slide.title_mut().unwrap().set_text("one\u{b}two\u{1f}");
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<a:t>one</a:t></a:r><a:br><a:rPr lang="en-US" dirty="0"></a:rPr></a:br><a:r>"#));
        assert!(xml.contains("<a:t>two_x001F_</a:t>"));
        roxmltree::Document::parse(&xml).unwrap();
    }

    #[test]
    fn test_slide_rels_point_at_layout() {
        let slide = Slide::from_layout(1, 1, &layout());
        let rels = slide.rels_xml().unwrap();
        assert!(rels.contains(r#"Target="../slideLayouts/slideLayout2.xml""#));
    }
}
