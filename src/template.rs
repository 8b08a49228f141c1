//! Built-in blank presentation template.
//!
//! A 4:3 package with one slide master and the nine stock layouts in their conventional
//! order (Title Slide, Title and Content, Section Header, Two Content, Comparison, Title Only,
//! Blank, Content with Caption, Picture with Caption), so the default slide mapping works
//! without a template file.

use crate::constants::{
    A_NAMESPACE, CONTENT_TYPES_NAMESPACE, CONTENT_TYPES_PART, PACKAGE_RELS_PART, PKG_RELS_NAMESPACE, P_NAMESPACE,
    R_NAMESPACE, RT_CORE_PROPS, RT_EXTENDED_PROPS, RT_OFFICE_DOCUMENT, RT_SLIDE_LAYOUT, RT_SLIDE_MASTER, RT_THEME,
};
use crate::slide::escape_xml;
use crate::Result;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const SLIDE_WIDTH: i64 = 9_144_000;
const SLIDE_HEIGHT: i64 = 6_858_000;

/// Offset and extent in EMU.
type Frame = (i64, i64, i64, i64);

struct PlaceholderDef {
    ph_type: Option<&'static str>,
    size: Option<&'static str>,
    idx: u32,
    name: &'static str,
    frame: Option<Frame>,
}

const fn ph(
    ph_type: Option<&'static str>,
    size: Option<&'static str>,
    idx: u32,
    name: &'static str,
    frame: Option<Frame>,
) -> PlaceholderDef {
    PlaceholderDef { ph_type, size, idx, name, frame }
}

struct LayoutDef {
    name: &'static str,
    layout_type: &'static str,
    placeholders: &'static [PlaceholderDef],
}

const TITLE: PlaceholderDef = ph(Some("title"), None, 0, "Title 1", None);

static LAYOUT_DEFS: [LayoutDef; 9] = [
    LayoutDef {
        name: "Title Slide",
        layout_type: "title",
        placeholders: &[
            ph(Some("ctrTitle"), None, 0, "Title 1", Some((685_800, 2_130_425, 7_772_400, 1_470_025))),
            ph(Some("subTitle"), None, 1, "Subtitle 2", Some((1_371_600, 3_886_200, 6_400_800, 1_752_600))),
        ],
    },
    LayoutDef {
        name: "Title and Content",
        layout_type: "obj",
        placeholders: &[TITLE, ph(None, None, 1, "Content Placeholder 2", None)],
    },
    LayoutDef {
        name: "Section Header",
        layout_type: "secHead",
        placeholders: &[
            ph(Some("title"), None, 0, "Title 1", Some((722_313, 4_406_900, 7_772_400, 1_362_075))),
            ph(Some("body"), None, 1, "Text Placeholder 2", Some((722_313, 2_906_713, 7_772_400, 1_500_187))),
        ],
    },
    LayoutDef {
        name: "Two Content",
        layout_type: "twoObj",
        placeholders: &[
            TITLE,
            ph(None, Some("half"), 1, "Content Placeholder 2", Some((457_200, 1_600_200, 4_038_600, 4_525_963))),
            ph(None, Some("half"), 2, "Content Placeholder 3", Some((4_648_200, 1_600_200, 4_038_600, 4_525_963))),
        ],
    },
    LayoutDef {
        name: "Comparison",
        layout_type: "twoTxTwoObj",
        placeholders: &[
            TITLE,
            ph(Some("body"), None, 1, "Text Placeholder 2", Some((457_200, 1_535_113, 4_040_188, 639_762))),
            ph(None, Some("half"), 2, "Content Placeholder 3", Some((457_200, 2_174_875, 4_040_188, 3_951_288))),
            ph(Some("body"), Some("quarter"), 3, "Text Placeholder 4", Some((4_645_025, 1_535_113, 4_041_775, 639_762))),
            ph(None, Some("quarter"), 4, "Content Placeholder 5", Some((4_645_025, 2_174_875, 4_041_775, 3_951_288))),
        ],
    },
    LayoutDef { name: "Title Only", layout_type: "titleOnly", placeholders: &[TITLE] },
    LayoutDef { name: "Blank", layout_type: "blank", placeholders: &[] },
    LayoutDef {
        name: "Content with Caption",
        layout_type: "objTx",
        placeholders: &[
            ph(Some("title"), None, 0, "Title 1", Some((457_200, 273_050, 3_008_313, 1_162_050))),
            ph(None, None, 1, "Content Placeholder 2", Some((3_575_050, 273_050, 5_111_750, 5_853_113))),
            ph(Some("body"), Some("half"), 2, "Text Placeholder 3", Some((457_200, 1_435_100, 3_008_313, 4_691_063))),
        ],
    },
    LayoutDef {
        name: "Picture with Caption",
        layout_type: "picTx",
        placeholders: &[
            ph(Some("title"), None, 0, "Title 1", Some((1_792_288, 4_800_600, 5_486_400, 566_738))),
            ph(Some("pic"), None, 1, "Picture Placeholder 2", Some((1_792_288, 612_775, 5_486_400, 4_114_800))),
            ph(Some("body"), Some("quarter"), 2, "Text Placeholder 3", Some((1_792_288, 5_367_338, 5_486_400, 804_862))),
        ],
    },
];

/// Date, footer and slide number placeholders every layout carries.
static LAYOUT_FOOTERS: [PlaceholderDef; 3] = [
    ph(Some("dt"), Some("half"), 10, "Date Placeholder", None),
    ph(Some("ftr"), Some("quarter"), 11, "Footer Placeholder", None),
    ph(Some("sldNum"), Some("quarter"), 12, "Slide Number Placeholder", None),
];

static MASTER_PLACEHOLDERS: [PlaceholderDef; 5] = [
    ph(Some("title"), None, 0, "Title Placeholder 1", Some((457_200, 274_638, 8_229_600, 1_143_000))),
    ph(Some("body"), None, 1, "Text Placeholder 2", Some((457_200, 1_600_200, 8_229_600, 4_525_963))),
    ph(Some("dt"), Some("half"), 2, "Date Placeholder 3", Some((457_200, 6_356_350, 2_133_600, 365_125))),
    ph(Some("ftr"), Some("quarter"), 3, "Footer Placeholder 4", Some((3_124_200, 6_356_350, 2_895_600, 365_125))),
    ph(Some("sldNum"), Some("quarter"), 4, "Slide Number Placeholder 5", Some((6_553_200, 6_356_350, 2_133_600, 365_125))),
];

/// All parts of the blank template, keyed by part name.
pub(crate) fn default_parts() -> Result<BTreeMap<String, Vec<u8>>> {
    let mut parts = BTreeMap::new();
    let mut put = |name: String, xml: String| {
        parts.insert(name, xml.into_bytes());
    };

    put(CONTENT_TYPES_PART.to_string(), content_types_xml()?);
    put(PACKAGE_RELS_PART.to_string(), package_rels_xml()?);
    put("docProps/core.xml".to_string(), CORE_PROPS_XML.to_string());
    put("docProps/app.xml".to_string(), APP_PROPS_XML.to_string());
    put("ppt/presentation.xml".to_string(), presentation_xml()?);
    put("ppt/_rels/presentation.xml.rels".to_string(), presentation_rels_xml()?);
    put("ppt/presProps.xml".to_string(), PRES_PROPS_XML.to_string());
    put("ppt/viewProps.xml".to_string(), VIEW_PROPS_XML.to_string());
    put("ppt/tableStyles.xml".to_string(), TABLE_STYLES_XML.to_string());
    put("ppt/theme/theme1.xml".to_string(), THEME_XML.to_string());
    put("ppt/slideMasters/slideMaster1.xml".to_string(), slide_master_xml()?);
    put("ppt/slideMasters/_rels/slideMaster1.xml.rels".to_string(), slide_master_rels_xml()?);

    for (i, layout) in LAYOUT_DEFS.iter().enumerate() {
        let n = i + 1;
        put(format!("ppt/slideLayouts/slideLayout{n}.xml"), slide_layout_xml(layout)?);
        put(
            format!("ppt/slideLayouts/_rels/slideLayout{n}.xml.rels"),
            rels_xml(&[("rId1", RT_SLIDE_MASTER, "../slideMasters/slideMaster1.xml")])?,
        );
    }

    Ok(parts)
}

fn rels_xml(rels: &[(&str, &str, &str)]) -> Result<String> {
    let mut xml = String::from(XML_DECLARATION);
    write!(xml, r#"<Relationships xmlns="{PKG_RELS_NAMESPACE}">"#)?;
    for (id, rel_type, target) in rels {
        write!(xml, r#"<Relationship Id="{id}" Type="{rel_type}" Target="{target}"/>"#)?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn content_types_xml() -> Result<String> {
    let mut xml = String::from(XML_DECLARATION);
    write!(xml, r#"<Types xmlns="{CONTENT_TYPES_NAMESPACE}">"#)?;
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

    let overrides = [
        ("/ppt/presentation.xml", "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"),
        ("/ppt/presProps.xml", "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"),
        ("/ppt/viewProps.xml", "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"),
        ("/ppt/tableStyles.xml", "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"),
        ("/ppt/theme/theme1.xml", "application/vnd.openxmlformats-officedocument.theme+xml"),
        ("/ppt/slideMasters/slideMaster1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"),
        ("/docProps/core.xml", "application/vnd.openxmlformats-package.core-properties+xml"),
        ("/docProps/app.xml", "application/vnd.openxmlformats-officedocument.extended-properties+xml"),
    ];
    for (part, content_type) in overrides {
        write!(xml, r#"<Override PartName="{part}" ContentType="{content_type}"/>"#)?;
    }
    for n in 1..=LAYOUT_DEFS.len() {
        write!(
            xml,
            r#"<Override PartName="/ppt/slideLayouts/slideLayout{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#
        )?;
    }
    xml.push_str("</Types>");
    Ok(xml)
}

fn package_rels_xml() -> Result<String> {
    rels_xml(&[
        ("rId1", RT_OFFICE_DOCUMENT, "ppt/presentation.xml"),
        ("rId2", RT_CORE_PROPS, "docProps/core.xml"),
        ("rId3", RT_EXTENDED_PROPS, "docProps/app.xml"),
    ])
}

fn presentation_xml() -> Result<String> {
    let mut xml = String::from(XML_DECLARATION);
    write!(
        xml,
        r#"<p:presentation xmlns:a="{A_NAMESPACE}" xmlns:r="{R_NAMESPACE}" xmlns:p="{P_NAMESPACE}" saveSubsetFonts="1">"#
    )?;
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    write!(xml, r#"<p:sldSz cx="{SLIDE_WIDTH}" cy="{SLIDE_HEIGHT}" type="screen4x3"/>"#)?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("<p:defaultTextStyle>");
    for level in 1..=3 {
        write!(
            xml,
            r#"<a:lvl{level}pPr marL="{}" algn="l" rtl="0"><a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl{level}pPr>"#,
            (level - 1) * 457_200
        )?;
    }
    xml.push_str("</p:defaultTextStyle>");
    xml.push_str("</p:presentation>");
    Ok(xml)
}

fn presentation_rels_xml() -> Result<String> {
    rels_xml(&[
        ("rId1", RT_SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
        ("rId2", "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps", "presProps.xml"),
        ("rId3", "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps", "viewProps.xml"),
        ("rId4", RT_THEME, "theme/theme1.xml"),
        ("rId5", "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles", "tableStyles.xml"),
    ])
}

fn shape_tree_open(xml: &mut String) {
    xml.push_str("<p:spTree>");
    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str(concat!(
        "<p:grpSpPr><a:xfrm>",
        r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#,
        "</a:xfrm></p:grpSpPr>"
    ));
}

fn placeholder_sp(xml: &mut String, id: usize, def: &PlaceholderDef) -> Result<()> {
    xml.push_str("<p:sp><p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{id}" name="{}"/>"#, escape_xml(def.name))?;
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph"#);
    if let Some(ph_type) = def.ph_type {
        write!(xml, r#" type="{ph_type}""#)?;
    }
    if let Some(size) = def.size {
        write!(xml, r#" sz="{size}""#)?;
    }
    if def.idx != 0 {
        write!(xml, r#" idx="{}""#, def.idx)?;
    }
    xml.push_str("/></p:nvPr></p:nvSpPr>");

    match def.frame {
        Some((x, y, cx, cy)) => write!(
            xml,
            r#"<p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm></p:spPr>"#
        )?,
        None => xml.push_str("<p:spPr/>"),
    }

    xml.push_str(r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody>"#);
    xml.push_str("</p:sp>");
    Ok(())
}

fn slide_layout_xml(layout: &LayoutDef) -> Result<String> {
    let mut xml = String::from(XML_DECLARATION);
    write!(
        xml,
        r#"<p:sldLayout xmlns:a="{A_NAMESPACE}" xmlns:r="{R_NAMESPACE}" xmlns:p="{P_NAMESPACE}" type="{}" preserve="1">"#,
        layout.layout_type
    )?;
    write!(xml, r#"<p:cSld name="{}">"#, escape_xml(layout.name))?;
    shape_tree_open(&mut xml);
    for (i, def) in layout.placeholders.iter().chain(LAYOUT_FOOTERS.iter()).enumerate() {
        placeholder_sp(&mut xml, i + 2, def)?;
    }
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

fn slide_master_xml() -> Result<String> {
    let mut xml = String::from(XML_DECLARATION);
    write!(xml, r#"<p:sldMaster xmlns:a="{A_NAMESPACE}" xmlns:r="{R_NAMESPACE}" xmlns:p="{P_NAMESPACE}">"#)?;
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    shape_tree_open(&mut xml);
    for (i, def) in MASTER_PLACEHOLDERS.iter().enumerate() {
        placeholder_sp(&mut xml, i + 2, def)?;
    }
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#
    ));

    xml.push_str("<p:sldLayoutIdLst>");
    for i in 0..LAYOUT_DEFS.len() {
        write!(xml, r#"<p:sldLayoutId id="{}" r:id="rId{}"/>"#, 2_147_483_649u32 + i as u32, i + 1)?;
    }
    xml.push_str("</p:sldLayoutIdLst>");

    xml.push_str("<p:txStyles>");
    xml.push_str(concat!(
        "<p:titleStyle>",
        r#"<a:lvl1pPr algn="ctr" rtl="0"><a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/>"#,
        r#"<a:defRPr sz="4400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr></a:lvl1pPr>"#,
        "</p:titleStyle>"
    ));
    xml.push_str("<p:bodyStyle>");
    for (level, size) in [(1u32, 3200u32), (2, 2800), (3, 2400)] {
        write!(
            xml,
            r#"<a:lvl{level}pPr marL="{}" indent="-342900" algn="l" rtl="0"><a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/><a:defRPr sz="{size}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl{level}pPr>"#,
            342_900 + (level - 1) * 400_050
        )?;
    }
    xml.push_str("</p:bodyStyle>");
    xml.push_str(concat!(
        "<p:otherStyle>",
        r#"<a:lvl1pPr marL="0" algn="l" rtl="0"><a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr>"#,
        "</p:otherStyle>"
    ));
    xml.push_str("</p:txStyles>");
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

fn slide_master_rels_xml() -> Result<String> {
    let targets: Vec<(String, String)> = (1..=LAYOUT_DEFS.len())
        .map(|n| (format!("rId{n}"), format!("../slideLayouts/slideLayout{n}.xml")))
        .collect();
    let theme_id = format!("rId{}", LAYOUT_DEFS.len() + 1);

    let mut rels: Vec<(&str, &str, &str)> =
        targets.iter().map(|(id, target)| (id.as_str(), RT_SLIDE_LAYOUT, target.as_str())).collect();
    rels.push((theme_id.as_str(), RT_THEME, "../theme/theme1.xml"));
    rels_xml(&rels)
}

const CORE_PROPS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
    r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
    r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    "<dc:title>Presentation</dc:title><cp:revision>1</cp:revision>",
    r#"<dcterms:created xsi:type="dcterms:W3CDTF">2013-01-27T09:14:16Z</dcterms:created>"#,
    r#"<dcterms:modified xsi:type="dcterms:W3CDTF">2013-01-27T09:15:58Z</dcterms:modified>"#,
    "</cp:coreProperties>"
);

const APP_PROPS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#,
    "<Application>pptx-from-json</Application><PresentationFormat>On-screen Show (4:3)</PresentationFormat>",
    "</Properties>"
);

const PRES_PROPS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:presentationPr xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"/>"#
);

const VIEW_PROPS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:viewPr xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
    r#"<p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#
);

const TABLE_STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}"/>"#
);

const THEME_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
    "<a:themeElements>",
    r#"<a:clrScheme name="Office">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
    r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    r#"<a:dk2><a:srgbClr val="1F497D"/></a:dk2><a:lt2><a:srgbClr val="EEECE1"/></a:lt2>"#,
    r#"<a:accent1><a:srgbClr val="4F81BD"/></a:accent1><a:accent2><a:srgbClr val="C0504D"/></a:accent2>"#,
    r#"<a:accent3><a:srgbClr val="9BBB59"/></a:accent3><a:accent4><a:srgbClr val="8064A2"/></a:accent4>"#,
    r#"<a:accent5><a:srgbClr val="4BACC6"/></a:accent5><a:accent6><a:srgbClr val="F79646"/></a:accent6>"#,
    r#"<a:hlink><a:srgbClr val="0000FF"/></a:hlink><a:folHlink><a:srgbClr val="800080"/></a:folHlink>"#,
    "</a:clrScheme>",
    r#"<a:fontScheme name="Office">"#,
    r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    "</a:fontScheme>",
    r#"<a:fmtScheme name="Office">"#,
    "<a:fillStyleLst>",
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="50000"/></a:schemeClr></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="80000"/></a:schemeClr></a:solidFill>"#,
    "</a:fillStyleLst>",
    "<a:lnStyleLst>",
    r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#,
    r#"<a:ln w="25400"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#,
    r#"<a:ln w="38100"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#,
    "</a:lnStyleLst>",
    "<a:effectStyleLst>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "</a:effectStyleLst>",
    "<a:bgFillStyleLst>",
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/></a:schemeClr></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="90000"/></a:schemeClr></a:solidFill>"#,
    "</a:bgFillStyleLst>",
    "</a:fmtScheme>",
    "</a:themeElements>",
    "<a:objectDefaults/><a:extraClrSchemeLst/>",
    "</a:theme>"
);
