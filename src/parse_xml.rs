use crate::constants::{A_NAMESPACE, P_NAMESPACE, R_NAMESPACE};
use crate::types::{Placeholder, SlideElement, TextElement};
use crate::{Alignment, Error, Font, Paragraph, Result, Rgb, Run};
use roxmltree::{Document, Node};
use std::ops::Range;

/// UTF-8 view of a part, without a leading byte order mark.
pub(crate) fn decode(xml_data: &[u8]) -> Result<&str> {
    let xml_str = std::str::from_utf8(xml_data)?;
    Ok(xml_str.strip_prefix('\u{feff}').unwrap_or(xml_str))
}

fn is(node: &Node, namespace: &str, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == Some(namespace)
}

fn child<'a, 'input>(node: &Node<'a, 'input>, namespace: &str, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is(n, namespace, name))
}

/// Finds `<p:cSld>/<p:spTree>`, the shape tree shared by slides, layouts and masters.
fn shape_tree<'a, 'input>(doc: &'a Document<'input>) -> Result<Node<'a, 'input>> {
    let c_sld = child(&doc.root_element(), P_NAMESPACE, "cSld").ok_or(Error::ParseError("No <p:cSld> tag was found"))?;
    child(&c_sld, P_NAMESPACE, "spTree").ok_or(Error::ParseError("No <p:spTree> tag was found"))
}

/// Relationship ids and slide ids read from `ppt/presentation.xml`.
#[derive(Debug, Default)]
pub(crate) struct PresentationEntries {
    pub master_rel_ids: Vec<String>,
    /// `(sldId/@id, sldId/@r:id)` in deck order.
    pub slides: Vec<(u32, String)>,
}

pub(crate) fn parse_presentation_xml(xml_data: &[u8]) -> Result<PresentationEntries> {
    let xml_str = decode(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let rel_id = |n: &Node| n.attribute((R_NAMESPACE, "id")).map(str::to_string);
    let mut entries = PresentationEntries::default();

    if let Some(list) = child(&root, P_NAMESPACE, "sldMasterIdLst") {
        entries.master_rel_ids =
            list.children().filter(|n| is(n, P_NAMESPACE, "sldMasterId")).filter_map(|n| rel_id(&n)).collect();
    }
    if let Some(list) = child(&root, P_NAMESPACE, "sldIdLst") {
        for sld_id in list.children().filter(|n| is(n, P_NAMESPACE, "sldId")) {
            let id = sld_id.attribute("id").and_then(|v| v.parse::<u32>().ok());
            if let (Some(id), Some(rid)) = (id, rel_id(&sld_id)) {
                entries.slides.push((id, rid));
            }
        }
    }

    Ok(entries)
}

/// Relationship ids of a slide master's `<p:sldLayoutIdLst>`, in layout order.
pub(crate) fn parse_master_layouts(xml_data: &[u8]) -> Result<Vec<String>> {
    let xml_str = decode(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let Some(list) = child(&root, P_NAMESPACE, "sldLayoutIdLst") else {
        return Ok(Vec::new());
    };

    Ok(list
        .children()
        .filter(|n| is(n, P_NAMESPACE, "sldLayoutId"))
        .filter_map(|n| n.attribute((R_NAMESPACE, "id")).map(str::to_string))
        .collect())
}

/// Parses a slide layout into its display name and placeholders, in document order.
pub(crate) fn parse_layout_xml(xml_data: &[u8]) -> Result<(String, Vec<Placeholder>)> {
    let xml_str = decode(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let name = child(&doc.root_element(), P_NAMESPACE, "cSld")
        .and_then(|c| c.attribute("name"))
        .unwrap_or_default()
        .to_string();

    let placeholders = shape_tree(&doc)?
        .children()
        .filter(|n| n.is_element())
        .filter_map(|shape| parse_placeholder(&shape))
        .collect();

    Ok((name, placeholders))
}

/// Reads `<p:nvXxPr>/<p:nvPr>/<p:ph>` of a shape, if the shape is a placeholder.
fn parse_placeholder(shape: &Node) -> Option<Placeholder> {
    let nv_props = shape
        .children()
        .find(|n| n.is_element() && n.tag_name().namespace() == Some(P_NAMESPACE) && n.tag_name().name().starts_with("nv"))?;
    let ph = child(&child(&nv_props, P_NAMESPACE, "nvPr")?, P_NAMESPACE, "ph")?;
    let name = child(&nv_props, P_NAMESPACE, "cNvPr").and_then(|n| n.attribute("name")).unwrap_or_default();

    Some(Placeholder {
        ph_type: ph.attribute("type").map(str::to_string),
        idx: ph.attribute("idx").and_then(|v| v.parse().ok()).unwrap_or(0),
        name: name.to_string(),
        orient: ph.attribute("orient").map(str::to_string),
        size: ph.attribute("sz").map(str::to_string),
    })
}

/// Where new `<p:sldId>` entries go in `ppt/presentation.xml`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct SlideListEdit {
    /// Byte range of the source replaced by the new entries.
    pub range: Range<usize>,
    /// Whether the entries must be wrapped in a new `<p:sldIdLst>`.
    pub wrap: bool,
    /// Prefix (with colon) bound to the presentationml namespace.
    pub p_prefix: String,
    /// Prefix (with colon) bound to the relationships namespace, if the root declares one.
    pub r_prefix: Option<String>,
}

pub(crate) fn locate_slide_list(xml_str: &str) -> Result<SlideListEdit> {
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let prefix_for = |uri: &str| {
        root.namespaces()
            .find(|ns| ns.uri() == uri)
            .map(|ns| ns.name().map(|p| format!("{p}:")).unwrap_or_default())
    };
    let p_prefix = prefix_for(P_NAMESPACE).ok_or(Error::ParseError("presentation.xml lacks the presentationml namespace"))?;
    let r_prefix = prefix_for(R_NAMESPACE);

    let (range, wrap) = if let Some(list) = child(&root, P_NAMESPACE, "sldIdLst") {
        match closing_tag_offset(xml_str, &list) {
            Some(at) => (at..at, false),
            None => (list.range(), true),
        }
    } else {
        let anchor = child(&root, P_NAMESPACE, "sldSz")
            .or_else(|| child(&root, P_NAMESPACE, "notesSz"))
            .ok_or(Error::ParseError("presentation.xml has neither <p:sldSz> nor <p:notesSz>"))?;
        let at = anchor.range().start;
        (at..at, true)
    };

    Ok(SlideListEdit { range, wrap, p_prefix, r_prefix })
}

/// Byte offset of the closing tag of `node`, `None` for a self-closing element.
pub(crate) fn closing_tag_offset(xml_str: &str, node: &Node) -> Option<usize> {
    let range = node.range();
    let source = &xml_str[range.clone()];
    if source.ends_with("/>") {
        return None;
    }
    source.rfind("</").map(|pos| range.start + pos)
}

/// Parses raw slide XML and extracts the text of every shape in the shape tree.
///
/// Shapes without a text body and non-shape elements become [`SlideElement::Unknown`].
///
/// # Errors
///
/// Fails if the data is not UTF-8, is malformed XML, or lacks `<p:cSld>`/`<p:spTree>`.
pub fn parse_slide_xml(xml_data: &[u8]) -> Result<Vec<SlideElement>> {
    let xml_str = decode(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let sp_tree = shape_tree(&doc)?;

    let mut elements = Vec::new();
    for child_node in sp_tree.children().filter(|n| n.is_element()) {
        if is(&child_node, P_NAMESPACE, "sp") {
            elements.push(parse_sp(&child_node));
        } else if !matches!(child_node.tag_name().name(), "nvGrpSpPr" | "grpSpPr") {
            elements.push(SlideElement::Unknown);
        }
    }

    Ok(elements)
}

fn parse_sp(sp_node: &Node) -> SlideElement {
    let Some(tx_body) = child(sp_node, P_NAMESPACE, "txBody") else {
        return SlideElement::Unknown;
    };

    let paragraphs = tx_body
        .children()
        .filter(|n| is(n, A_NAMESPACE, "p"))
        .map(|p| parse_paragraph(&p))
        .collect();

    SlideElement::Text(TextElement { placeholder: parse_placeholder(sp_node), paragraphs })
}

/// Parses a single paragraph node (`<a:p>`) with its alignment and text runs.
fn parse_paragraph(p_node: &Node) -> Paragraph {
    let alignment = child(p_node, A_NAMESPACE, "pPr")
        .and_then(|p_pr| p_pr.attribute("algn"))
        .and_then(Alignment::from_attr);

    // A line break (`<a:br>`) reads back as a vertical tab, the inverse of how it is written.
    let runs = p_node
        .children()
        .filter_map(|n| {
            if is(&n, A_NAMESPACE, "r") {
                Some(parse_run(&n))
            } else if is(&n, A_NAMESPACE, "br") {
                Some(Run { text: "\u{b}".to_string(), ..parse_run(&n) })
            } else {
                None
            }
        })
        .collect();

    Paragraph { runs, alignment }
}

/// Parses a run (`<a:r>`): the text node (`<a:t>`) plus size, color and typeface from `<a:rPr>`.
fn parse_run(r_node: &Node) -> Run {
    let mut font = Font::default();

    if let Some(r_pr) = child(r_node, A_NAMESPACE, "rPr") {
        font.size = r_pr.attribute("sz").and_then(|v| v.parse().ok());
        font.name = child(&r_pr, A_NAMESPACE, "latin").and_then(|n| n.attribute("typeface")).map(str::to_string);
        font.color = child(&r_pr, A_NAMESPACE, "solidFill")
            .and_then(|fill| child(&fill, A_NAMESPACE, "srgbClr"))
            .and_then(|c| c.attribute("val"))
            .and_then(|v| v.parse::<Rgb>().ok());
    }

    let text = child(r_node, A_NAMESPACE, "t").and_then(|t| t.text()).unwrap_or_default().to_string();

    Run { text, font }
}

/// A slide read back from a saved package.
#[derive(Debug)]
pub struct ParsedSlide {
    pub part: String,
    /// 1-based position in the deck.
    pub slide_number: u32,
    /// Index of the slide's layout in the template's layout list, if it resolves to one.
    pub layout_index: Option<usize>,
    pub elements: Vec<SlideElement>,
}

impl ParsedSlide {
    /// Text elements bound to a placeholder.
    pub fn placeholders(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter_map(|e| match e {
            SlideElement::Text(text) if text.placeholder.is_some() => Some(text),
            _ => None,
        })
    }

    /// The title placeholder's text element.
    pub fn title(&self) -> Option<&TextElement> {
        self.placeholders()
            .find(|t| matches!(t.placeholder.as_ref().and_then(|p| p.ph_type.as_deref()), Some("title" | "ctrTitle")))
    }

    /// The text element of the placeholder with the given `idx`.
    pub fn placeholder(&self, idx: u32) -> Option<&TextElement> {
        self.placeholders().find(|t| t.placeholder.as_ref().is_some_and(|p| p.idx == idx))
    }

    /// Renders the slide's text as Markdown: the title as a heading, other regions as
    /// paragraphs, multi-paragraph regions as bullet lists.
    pub fn convert_to_md(&self) -> String {
        let mut slide_txt = format!("<!-- Slide {} -->\n\n", self.slide_number);

        if let Some(title) = self.title() {
            slide_txt.push_str(&format!("# {}\n\n", title.text()));
        }

        for element in &self.elements {
            let SlideElement::Text(text) = element else {
                continue;
            };
            if self.title().is_some_and(|t| std::ptr::eq(t, text)) || text.is_empty() {
                continue;
            }
            let lines: Vec<String> = text.paragraphs.iter().map(Paragraph::text).collect();
            if lines.len() > 1 {
                for line in lines.iter().filter(|l| !l.is_empty()) {
                    slide_txt.push_str(&format!("- {line}\n"));
                }
            } else {
                slide_txt.push_str(&lines.concat());
                slide_txt.push('\n');
            }
            slide_txt.push('\n');
        }

        slide_txt
    }
}
