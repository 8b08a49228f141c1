use crate::constants::PKG_RELS_NAMESPACE;
use crate::parse_xml::decode;
use crate::Result;
use roxmltree::Document;

/// One `<Relationship>` entry of a `.rels` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
}

/// Parses relationship (`.rels`) XML data of any package part.
///
/// Relationships map the ids used inside a part (`r:id`) to their type and target part.
/// Entries missing one of `Id`, `Type` or `Target` are skipped.
///
/// # Arguments
///
/// - `xml_data`: Raw relationship XML data as a byte slice.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Relationship>)`: the relationships in document order, targets as written.
/// - `Err(Error)`: if provided XML data isn't valid UTF-8 or XML parsing fails.
///
/// # Errors
///
/// An error is returned if:
/// - The XML data is not valid UTF-8.
/// - Malformed or invalid XML structure is detected.
pub fn parse_rels(xml_data: &[u8]) -> Result<Vec<Relationship>> {
    let xml_str = decode(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let mut rels = Vec::new();
    for rel in root.children().filter(|n| {
        n.is_element()
            && n.tag_name().name() == "Relationship"
            && n.tag_name().namespace().map_or(true, |ns| ns == PKG_RELS_NAMESPACE)
    }) {
        if let (Some(id), Some(rel_type), Some(target)) =
            (rel.attribute("Id"), rel.attribute("Type"), rel.attribute("Target"))
        {
            rels.push(Relationship {
                id: id.to_string(),
                rel_type: rel_type.to_string(),
                target: target.to_string(),
            });
        }
    }

    Ok(rels)
}

/// Path of the `.rels` part belonging to `part`.
///
/// `ppt/slides/slide1.xml` becomes `ppt/slides/_rels/slide1.xml.rels`.
pub fn rels_path_for(part: &str) -> String {
    let mut rels_path = part.to_string();
    match rels_path.rfind('/') {
        Some(pos) => rels_path.insert_str(pos + 1, "_rels/"),
        None => rels_path.insert_str(0, "_rels/"),
    }
    rels_path.push_str(".rels");
    rels_path
}

/// Resolves a relationship target relative to the part that owns the `.rels`.
///
/// Absolute targets (leading `/`) are package-root relative; `..` segments are collapsed.
pub fn resolve_target(source_part: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = match source_part.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').collect(),
        None => Vec::new(),
    };
    for segment in target.split('/') {
        match segment {
            ".." => {
                segments.pop();
            }
            "." | "" => {}
            other => segments.push(other),
        }
    }
    segments.join("/")
}

/// Inverse of [`resolve_target`]: the relative target from `source_part` to `target_part`.
pub fn relative_target(source_part: &str, target_part: &str) -> String {
    let source_dir: Vec<&str> = match source_part.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').collect(),
        None => Vec::new(),
    };
    let target: Vec<&str> = target_part.split('/').collect();

    let common = source_dir
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count()
        .min(target.len().saturating_sub(1));

    let mut parts: Vec<&str> = vec![".."; source_dir.len() - common];
    parts.extend_from_slice(&target[common..]);
    parts.join("/")
}

/// Highest numeric suffix among `rIdN` ids, 0 if none.
pub fn max_rel_id(rels: &[Relationship]) -> u32 {
    rels.iter()
        .filter_map(|rel| rel.id.strip_prefix("rId"))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESENTATION_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>
  <Relationship Id="rId7" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="theme/theme1.xml"/>
</Relationships>"#;

    #[test]
    fn test_parse_rels() {
        let rels = parse_rels(PRESENTATION_RELS.as_bytes()).unwrap();
        assert_eq!(rels.len(), 3);
        assert_eq!(rels[1].id, "rId7");
        assert_eq!(rels[1].target, "slides/slide1.xml");
        assert!(rels[0].rel_type.ends_with("/slideMaster"));
        assert_eq!(max_rel_id(&rels), 7);
    }

    #[test]
    fn test_parse_rels_empty() {
        let xml = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"/>"#;
        let rels = parse_rels(xml.as_bytes()).unwrap();
        assert!(rels.is_empty());
        assert_eq!(max_rel_id(&rels), 0);
    }

    #[test]
    fn test_rels_path_for() {
        assert_eq!(rels_path_for("ppt/slides/slide1.xml"), "ppt/slides/_rels/slide1.xml.rels");
        assert_eq!(rels_path_for("ppt/presentation.xml"), "ppt/_rels/presentation.xml.rels");
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(
            resolve_target("ppt/slides/slide1.xml", "../slideLayouts/slideLayout2.xml"),
            "ppt/slideLayouts/slideLayout2.xml"
        );
        assert_eq!(resolve_target("ppt/presentation.xml", "slides/slide3.xml"), "ppt/slides/slide3.xml");
        assert_eq!(resolve_target("ppt/presentation.xml", "/ppt/slides/slide3.xml"), "ppt/slides/slide3.xml");
        assert_eq!(resolve_target("", "ppt/presentation.xml"), "ppt/presentation.xml");
    }

    #[test]
    fn test_relative_target() {
        assert_eq!(
            relative_target("ppt/slides/slide1.xml", "ppt/slideLayouts/slideLayout2.xml"),
            "../slideLayouts/slideLayout2.xml"
        );
        assert_eq!(relative_target("ppt/presentation.xml", "ppt/slides/slide4.xml"), "slides/slide4.xml");
        assert_eq!(
            resolve_target("ppt/slides/slide1.xml", &relative_target("ppt/slides/slide1.xml", "ppt/theme/theme1.xml")),
            "ppt/theme/theme1.xml"
        );
    }
}
