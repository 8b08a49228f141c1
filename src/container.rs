use crate::constants::{
    CONTENT_TYPES_PART, CT_SLIDE, DEFAULT_PRESENTATION_PART, MIN_SLIDE_ID, PACKAGE_RELS_PART, RT_OFFICE_DOCUMENT,
    RT_SLIDE, RT_SLIDE_LAYOUT, R_NAMESPACE,
};
use crate::parse_rels::{self, max_rel_id, relative_target, rels_path_for, resolve_target, Relationship};
use crate::parse_xml::{self, decode, ParsedSlide};
use crate::slide::escape_xml;
use crate::types::Placeholder;
use crate::{template, Error, Result, Slide};
use log::{debug, info};
use roxmltree::Document;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;

/// A slide layout of the template, addressed by its position in the master's layout list.
#[derive(Debug, Clone)]
pub struct Layout {
    pub part: String,
    pub name: String,
    pub placeholders: Vec<Placeholder>,
}

/// Holds an in-memory PowerPoint (pptx) package and the slides added to it.
///
/// `PptxContainer` is the presentation backend: it enumerates the template's layouts by
/// position, creates slides from them and serializes the package. Parts of the template are
/// copied verbatim on save, except for the package index parts that list slides.
pub struct PptxContainer {
    parts: BTreeMap<String, Vec<u8>>,
    presentation_part: String,
    layouts: Vec<Layout>,
    /// Slides present when the package was loaded, in deck order.
    pub slide_paths: Vec<String>,
    slides: Vec<Slide>,
    next_slide_number: u32,
    next_slide_id: u32,
}

impl PptxContainer {
    /// Opens a pptx file to use as template.
    ///
    /// Every part of the archive is read into memory. Slides already present are kept and new
    /// slides are appended after them.
    ///
    /// # Arguments
    ///
    /// - `path`: Path to the PPTX file.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(PptxContainer)`: container holding every part of the package and its layouts.
    /// - `Err(Error)`: if the file cannot be read or the package is incomplete.
    ///
    /// # Errors
    ///
    /// Errors are returned on file access problems, failures during unzipping, or when the
    /// package lacks a presentation part, a slide master or its layouts.
    pub fn open(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut parts = BTreeMap::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().to_string();
            let mut content = Vec::new();
            file.read_to_end(&mut content).map_err(|e| Error::io(path.join(&name), e))?;
            parts.insert(name, content);
        }

        debug!("Read {} parts from {}", parts.len(), path.display());
        Self::from_parts(parts)
    }

    /// Creates a container from the built-in blank template.
    pub fn blank() -> Result<Self> {
        Self::from_parts(template::default_parts()?)
    }

    fn from_parts(parts: BTreeMap<String, Vec<u8>>) -> Result<Self> {
        let presentation_part = match parts.get(PACKAGE_RELS_PART) {
            Some(data) => parse_rels::parse_rels(data)?
                .into_iter()
                .find(|rel| rel.rel_type == RT_OFFICE_DOCUMENT)
                .map(|rel| resolve_target("", &rel.target))
                .unwrap_or_else(|| DEFAULT_PRESENTATION_PART.to_string()),
            None => DEFAULT_PRESENTATION_PART.to_string(),
        };

        let entries = parse_xml::parse_presentation_xml(part(&parts, &presentation_part)?)?;
        let presentation_rels = rels_of(&parts, &presentation_part)?;

        let master_rel_id = entries
            .master_rel_ids
            .first()
            .ok_or(Error::ParseError("presentation.xml lists no slide master"))?;
        let master_part = target_of(&presentation_part, &presentation_rels, master_rel_id)?;
        let master_rels = rels_of(&parts, &master_part)?;

        let mut layouts = Vec::new();
        for rel_id in parse_xml::parse_master_layouts(part(&parts, &master_part)?)? {
            let layout_part = target_of(&master_part, &master_rels, &rel_id)?;
            let (name, placeholders) = parse_xml::parse_layout_xml(part(&parts, &layout_part)?)?;
            layouts.push(Layout { part: layout_part, name, placeholders });
        }

        let slide_paths = entries
            .slides
            .iter()
            .map(|(_, rel_id)| target_of(&presentation_part, &presentation_rels, rel_id))
            .collect::<Result<Vec<_>>>()?;

        let next_slide_number = parts
            .keys()
            .filter_map(|name| name.strip_prefix("ppt/slides/slide")?.strip_suffix(".xml")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let next_slide_id = entries.slides.iter().map(|(id, _)| id + 1).max().unwrap_or(0).max(MIN_SLIDE_ID);

        debug!(
            "Template has {} layouts and {} existing slides (master {})",
            layouts.len(),
            slide_paths.len(),
            master_part
        );

        Ok(Self {
            parts,
            presentation_part,
            layouts,
            slide_paths,
            slides: Vec::new(),
            next_slide_number,
            next_slide_id,
        })
    }

    /// Layouts of the first slide master, in order.
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    /// Slides added since the container was loaded.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Total number of slides in the deck, existing and added.
    pub fn slide_count(&self) -> usize {
        self.slide_paths.len() + self.slides.len()
    }

    /// Appends a slide built from the layout at `layout_index`.
    ///
    /// The slide gets a copy of every layout placeholder except date, footer and slide number.
    ///
    /// # Arguments
    ///
    /// - `layout_index`: Zero-based position in the slide master's layout list.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(&mut Slide)`: the new, still empty slide, ready for its text.
    /// - `Err(Error)`: if the layout does not exist.
    ///
    /// # Errors
    ///
    /// [`Error::LayoutOutOfRange`] if the template has no layout at that position. The error's
    /// `slide` is the position the slide would have taken in the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use pptx_from_json::PptxContainer;
    ///
    /// let mut container = PptxContainer::blank()?;
    /// if let Some(title) = container.add_slide(5)?.title_mut() {
    ///     title.set_text("Agenda");
    /// }
    /// assert_eq!(container.slide_count(), 1);
    /// # Ok::<(), pptx_from_json::Error>(())
    /// ```
    pub fn add_slide(&mut self, layout_index: usize) -> Result<&mut Slide> {
        let layout = self.layouts.get(layout_index).ok_or(Error::LayoutOutOfRange {
            slide: self.slide_count(),
            layout: layout_index,
            available: self.layouts.len(),
        })?;

        let slide = Slide::from_layout(self.next_slide_number, layout_index, layout);
        debug!("Adding {} with layout {} ({})", slide.part_name(), layout_index, layout.name);
        self.next_slide_number += 1;
        self.slides.push(slide);

        let added = self.slides.len() - 1;
        Ok(&mut self.slides[added])
    }

    /// Parses the slides that were present when the package was loaded, in deck order.
    pub fn parse_all(&self) -> Result<Vec<ParsedSlide>> {
        self.slide_paths
            .iter()
            .enumerate()
            .map(|(i, slide_path)| {
                let elements = parse_xml::parse_slide_xml(part(&self.parts, slide_path)?)?;
                let layout_index = rels_of(&self.parts, slide_path)?
                    .iter()
                    .find(|rel| rel.rel_type == RT_SLIDE_LAYOUT)
                    .map(|rel| resolve_target(slide_path, &rel.target))
                    .and_then(|layout_part| self.layouts.iter().position(|l| l.part == layout_part));

                Ok(ParsedSlide {
                    part: slide_path.clone(),
                    slide_number: i as u32 + 1,
                    layout_index,
                    elements,
                })
            })
            .collect()
    }

    /// Serializes the package with all added slides into pptx bytes.
    ///
    /// `ppt/presentation.xml`, its relationships and `[Content_Types].xml` are updated to list
    /// the new slides; every other part is copied unchanged.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<u8>)`: the complete zip archive.
    /// - `Err(Error)`: if a package index part is missing or malformed.
    ///
    /// # Errors
    ///
    /// An error is returned if:
    /// - The presentation part, its `.rels` or `[Content_Types].xml` is missing.
    /// - One of them is not valid UTF-8 or not well-formed XML.
    /// - Writing the zip archive fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut parts = self.parts.clone();

        let mut new_slide_parts = Vec::with_capacity(self.slides.len());
        for slide in &self.slides {
            let name = slide.part_name();
            parts.insert(rels_path_for(&name), slide.rels_xml()?.into_bytes());
            parts.insert(name.clone(), slide.to_xml()?.into_bytes());
            new_slide_parts.push(name);
        }

        if !new_slide_parts.is_empty() {
            self.register_slides(&mut parts, &new_slide_parts)?;
        }

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        // [Content_Types].xml leads the archive.
        let ordered = parts
            .iter()
            .filter(|(name, _)| name.as_str() == CONTENT_TYPES_PART)
            .chain(parts.iter().filter(|(name, _)| name.as_str() != CONTENT_TYPES_PART));
        for (name, data) in ordered {
            writer.start_file(name.as_str(), options)?;
            writer.write_all(data).map_err(|e| Error::io(name, e))?;
        }

        Ok(writer.finish()?.into_inner())
    }

    /// Writes the package to `path`.
    ///
    /// The whole archive is built in memory first, so a failure leaves no partial file behind.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes).map_err(|e| Error::io(path, e))?;
        info!("Wrote {} slides ({} bytes) to {}", self.slide_count(), bytes.len(), path.display());
        Ok(())
    }

    /// Lists new slides in presentation.xml, its relationships and the content types.
    fn register_slides(&self, parts: &mut BTreeMap<String, Vec<u8>>, slide_parts: &[String]) -> Result<()> {
        let rels_part = rels_path_for(&self.presentation_part);
        let first_rel = max_rel_id(&rels_of(parts, &self.presentation_part)?) + 1;
        let rel_ids: Vec<String> = (0..slide_parts.len()).map(|i| format!("rId{}", first_rel + i as u32)).collect();

        let mut relationships = String::new();
        for (rel_id, slide_part) in rel_ids.iter().zip(slide_parts) {
            write!(
                relationships,
                r#"<Relationship Id="{rel_id}" Type="{RT_SLIDE}" Target="{}"/>"#,
                escape_xml(&relative_target(&self.presentation_part, slide_part))
            )?;
        }
        let rels_xml = decode(part(parts, &rels_part)?)?;
        let rels_xml = insert_before_root_close(rels_xml, &relationships)?;
        parts.insert(rels_part, rels_xml.into_bytes());

        let presentation_xml = decode(part(parts, &self.presentation_part)?)?;
        let edit = parse_xml::locate_slide_list(presentation_xml)?;
        let p = &edit.p_prefix;
        let mut entries = String::new();
        for (i, rel_id) in rel_ids.iter().enumerate() {
            let id = self.next_slide_id + i as u32;
            match &edit.r_prefix {
                Some(r) => write!(entries, r#"<{p}sldId id="{id}" {r}id="{rel_id}"/>"#)?,
                None => write!(entries, r#"<{p}sldId xmlns:r="{R_NAMESPACE}" id="{id}" r:id="{rel_id}"/>"#)?,
            }
        }
        if edit.wrap {
            entries = format!("<{p}sldIdLst>{entries}</{p}sldIdLst>");
        }
        let mut updated = String::with_capacity(presentation_xml.len() + entries.len());
        updated.push_str(&presentation_xml[..edit.range.start]);
        updated.push_str(&entries);
        updated.push_str(&presentation_xml[edit.range.end..]);
        parts.insert(self.presentation_part.clone(), updated.into_bytes());

        let mut overrides = String::new();
        for slide_part in slide_parts {
            write!(overrides, r#"<Override PartName="/{}" ContentType="{CT_SLIDE}"/>"#, escape_xml(slide_part))?;
        }
        let content_types = decode(part(parts, CONTENT_TYPES_PART)?)?;
        let content_types = insert_before_root_close(content_types, &overrides)?;
        parts.insert(CONTENT_TYPES_PART.to_string(), content_types.into_bytes());

        Ok(())
    }
}

fn part<'a>(parts: &'a BTreeMap<String, Vec<u8>>, name: &str) -> Result<&'a [u8]> {
    parts.get(name).map(Vec::as_slice).ok_or_else(|| Error::PartNotFound(name.to_string()))
}

/// Relationships of `source_part`; a part without a `.rels` has none.
fn rels_of(parts: &BTreeMap<String, Vec<u8>>, source_part: &str) -> Result<Vec<Relationship>> {
    match parts.get(&rels_path_for(source_part)) {
        Some(data) => parse_rels::parse_rels(data),
        None => Ok(Vec::new()),
    }
}

fn target_of(source_part: &str, rels: &[Relationship], rel_id: &str) -> Result<String> {
    rels.iter()
        .find(|rel| rel.id == rel_id)
        .map(|rel| resolve_target(source_part, &rel.target))
        .ok_or_else(|| Error::PartNotFound(format!("{source_part} relationship {rel_id}")))
}

/// Inserts `content` as the last children of the root element.
fn insert_before_root_close(xml: &str, content: &str) -> Result<String> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    let range = root.range();

    let mut updated = String::with_capacity(xml.len() + content.len() + 32);
    match parse_xml::closing_tag_offset(xml, &root) {
        Some(at) => {
            updated.push_str(&xml[..at]);
            updated.push_str(content);
            updated.push_str(&xml[at..]);
        }
        None => {
            // Self-closing root: `<Types .../>` becomes `<Types ...>content</Types>`.
            let qualified_name: String =
                xml[range.start + 1..].chars().take_while(|c| !c.is_whitespace() && *c != '/' && *c != '>').collect();
            let open_end = range.end - 2;
            updated.push_str(&xml[..open_end]);
            write!(updated, ">{content}</{qualified_name}>")?;
            updated.push_str(&xml[range.end..]);
        }
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_template_layouts() {
        let container = PptxContainer::blank().unwrap();
        let names: Vec<&str> = container.layouts().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Title Slide",
                "Title and Content",
                "Section Header",
                "Two Content",
                "Comparison",
                "Title Only",
                "Blank",
                "Content with Caption",
                "Picture with Caption",
            ]
        );
        assert_eq!(container.slide_count(), 0);
    }

    #[test]
    fn test_add_slide_out_of_range() {
        let mut container = PptxContainer::blank().unwrap();
        container.add_slide(0).unwrap();
        match container.add_slide(42) {
            Err(Error::LayoutOutOfRange { slide, layout, available }) => {
                assert_eq!((slide, layout, available), (1, 42, 9));
            }
            other => panic!("unexpected result {:?}", other.map(|s| s.part_name())),
        }
    }

    #[test]
    fn test_saved_package_lists_slides() {
        let mut container = PptxContainer::blank().unwrap();
        container.add_slide(5).unwrap().title_mut().unwrap().set_text("Only");
        container.add_slide(6).unwrap();

        let bytes = container.to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.by_index(0).unwrap().name(), CONTENT_TYPES_PART);

        let mut read = |name: &str| {
            let mut content = String::new();
            archive.by_name(name).unwrap().read_to_string(&mut content).unwrap();
            content
        };
        let presentation = read("ppt/presentation.xml");
        assert!(presentation.contains(r#"<p:sldIdLst><p:sldId id="256" r:id="rId6"/><p:sldId id="257" r:id="rId7"/></p:sldIdLst><p:sldSz"#));
        let rels = read("ppt/_rels/presentation.xml.rels");
        assert!(rels.contains(r#"Target="slides/slide2.xml""#));
        let content_types = read(CONTENT_TYPES_PART);
        assert!(content_types.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        let slide_rels = read("ppt/slides/_rels/slide2.xml.rels");
        assert!(slide_rels.contains(r#"Target="../slideLayouts/slideLayout7.xml""#));
    }

    #[test]
    fn test_insert_into_self_closing_root() {
        let xml = r#"<?xml version="1.0"?><Types xmlns="urn:x"/>"#;
        let updated = insert_before_root_close(xml, "<Default/>").unwrap();
        assert_eq!(updated, r#"<?xml version="1.0"?><Types xmlns="urn:x"><Default/></Types>"#);
    }
}
