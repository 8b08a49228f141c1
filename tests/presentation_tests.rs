use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use pptx_from_json::{
    generate, load_presentation, parse_presentation, Alignment, Error, GeneratorConfig, ParsedSlide, PlaceholderRole,
    PptxContainer, Rgb, ValidationError, CONCLUSION_TITLE, STYLED_FONT_SIZE,
};

fn test_data_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("test_data");
    path.push(filename);
    path
}

fn load_test_data(filename: &str) -> String {
    fs::read_to_string(test_data_path(filename)).expect("Unable to read test data file")
}

fn normalize_test_string(input: &str) -> String {
    input
        .trim_start_matches('\u{feff}') // remove BOM
        .replace("\r\n", "\n") // normalize line breaks
        .trim() // trim leading and trailing whitespace
        .to_string()
}

/// Generates `fixture` into a temporary directory and reads the result back.
fn generate_and_reopen(fixture: &str) -> (tempfile::TempDir, PathBuf, Vec<ParsedSlide>) {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("deck.pptx");
    let spec = load_presentation(&test_data_path(fixture)).unwrap();

    let written = generate(&spec, &GeneratorConfig::builder().output(&output).build()).unwrap();
    assert_eq!(written, output);

    let slides = PptxContainer::open(&output).unwrap().parse_all().unwrap();
    (dir, output, slides)
}

/// Writes the built-in template to `path` with `part` rewritten by `edit`.
fn write_edited_template(path: &Path, part: &str, edit: impl Fn(String) -> String) {
    let blank = PptxContainer::blank().unwrap().to_bytes().unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(blank)).unwrap();
    let mut writer = zip::ZipWriter::new(fs::File::create(path).unwrap());

    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let name = file.name().to_string();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        if name == part {
            content = edit(content);
        }
        writer.start_file(name, zip::write::SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

fn text_of(slide: &ParsedSlide, idx: u32) -> String {
    slide.placeholder(idx).map(|t| t.text()).unwrap_or_default()
}

#[test]
fn test_comprehensive_deck_layouts() {
    let (_dir, _, slides) = generate_and_reopen("comprehensive.json");

    let layouts: Vec<Option<usize>> = slides.iter().map(|s| s.layout_index).collect();
    let expected = [0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 1].map(Some);
    assert_eq!(layouts, expected);

    assert_eq!(slides[0].title().unwrap().text(), "Comprehensive Presentation");
    assert_eq!(text_of(&slides[0], 1), "Exploring All Slide Types");
    assert_eq!(text_of(&slides[3], 1), "Detailed Exploration");
    assert_eq!(text_of(&slides[4], 2), "Point B1\nPoint B2");
    assert_eq!(text_of(&slides[8], 1), "This is a content area with a caption.");
    assert_eq!(text_of(&slides[8], 2), "Caption text here.");
    assert_eq!(text_of(&slides[9], 1), "This is a caption for the picture.");
}

#[test]
fn test_content_lines_are_paragraphs() {
    let (_dir, _, slides) = generate_and_reopen("comprehensive.json");

    let agenda = slides[2].placeholder(1).unwrap();
    let lines: Vec<String> = agenda.paragraphs.iter().map(|p| p.text()).collect();
    assert_eq!(lines, vec!["Introduction to Slide Types", "Detailed Examples", "Summary"]);
    assert!(agenda.paragraphs.iter().all(|p| p.runs.len() == 1));
}

#[test]
fn test_conclusion_slide_is_last() {
    let (_dir, _, slides) = generate_and_reopen("comprehensive.json");

    let last = slides.last().unwrap();
    assert_eq!(last.layout_index, Some(1));
    assert_eq!(last.title().unwrap().text(), CONCLUSION_TITLE);
    assert_eq!(text_of(last, 1), "Thank you for your attention!");
}

#[test]
fn test_blank_slide_has_no_text() {
    let (_dir, _, slides) = generate_and_reopen("comprehensive.json");

    let blank = &slides[7];
    assert_eq!(blank.layout_index, Some(6));
    assert_eq!(blank.placeholders().filter(|t| !t.is_empty()).count(), 0);
}

#[test]
fn test_markdown_read_back() {
    let (_dir, _, slides) = generate_and_reopen("comprehensive.json");

    let expected_md = load_test_data("comprehensive.md");
    assert_eq!(
        normalize_test_string(&slides[5].convert_to_md()),
        normalize_test_string(&expected_md)
    );
}

#[test]
fn test_styled_deck_is_right_aligned() {
    let (_dir, _, slides) = generate_and_reopen("styled.json");
    assert_eq!(slides.len(), 4);

    let written: Vec<_> = slides.iter().flat_map(|s| s.placeholders()).filter(|t| !t.is_empty()).collect();
    assert_eq!(written.len(), 6);
    for text in written {
        for paragraph in &text.paragraphs {
            assert_eq!(paragraph.alignment, Some(Alignment::Right));
            for run in &paragraph.runs {
                assert_eq!(run.font.name.as_deref(), Some("Tahoma"));
                assert_eq!(run.font.size, Some(STYLED_FONT_SIZE));
                assert_eq!(run.font.color, Some(Rgb(0x1F, 0x38, 0x64)));
            }
        }
    }
}

#[test]
fn test_unstyled_deck_has_no_alignment() {
    let (_dir, _, slides) = generate_and_reopen("comprehensive.json");

    for text in slides.iter().flat_map(|s| s.placeholders()) {
        assert!(text.paragraphs.iter().all(|p| p.alignment.is_none()));
    }
}

#[test]
fn test_ltr_settings_align_left() {
    let spec = parse_presentation(
        r#"{"title":"T","subtitle":"S","settings":{"colors":{"text":"000000"}},"slides":[],"endpage":"E"}"#,
    )
    .unwrap();
    let mut container = PptxContainer::blank().unwrap();
    pptx_from_json::build(&spec, &mut container).unwrap();

    for shape in container.slides().iter().flat_map(|s| &s.shapes) {
        for paragraph in &shape.text_frame.paragraphs {
            assert_eq!(paragraph.alignment, Some(Alignment::Left));
            assert!(paragraph.runs.iter().all(|r| r.font.color == Some(Rgb(0, 0, 0))));
            assert!(paragraph.runs.iter().all(|r| r.font.name.as_deref() == Some("Arial")));
        }
    }
}

#[test]
fn test_unknown_type_is_rejected() {
    let err = load_presentation(&test_data_path("unknown_type.json")).unwrap_err();
    match err {
        Error::Validation(ValidationError::UnknownKind { index, kind }) => {
            assert_eq!(index, 1);
            assert_eq!(kind, "bullet_points");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_input_reports_path() {
    let missing = test_data_path("does_not_exist.json");
    match load_presentation(&missing) {
        Err(Error::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_default_output_names() {
    let config = GeneratorConfig::default();
    assert_eq!(config.output_path(false), PathBuf::from("comprehensive_presentation.pptx"));
    assert_eq!(config.output_path(true), PathBuf::from("comprehensive_presentation_with_design.pptx"));
}

#[test]
fn test_template_keeps_existing_slides() {
    let (dir, first_deck, _) = generate_and_reopen("styled.json");

    let spec = parse_presentation(
        r#"{"title":"Appendix","subtitle":"More","slides":[{"type":"title_only","title":"X"}],"endpage":"Bye"}"#,
    )
    .unwrap();
    let output = dir.path().join("extended.pptx");
    let config = GeneratorConfig::builder().template(&first_deck).output(&output).build();
    generate(&spec, &config).unwrap();

    let container = PptxContainer::open(&output).unwrap();
    assert_eq!(container.layouts().len(), 9);
    let slides = container.parse_all().unwrap();
    assert_eq!(slides.len(), 7);
    assert_eq!(slides[0].title().unwrap().text(), "Quarterly Review");
    assert_eq!(slides[3].title().unwrap().text(), CONCLUSION_TITLE);
    assert_eq!(slides[4].title().unwrap().text(), "Appendix");
    assert_eq!(slides[5].title().unwrap().text(), "X");
    assert_eq!(text_of(&slides[6], 1), "Bye");
    assert_eq!(slides[6].part, "ppt/slides/slide7.xml");
}

#[test]
fn test_missing_template_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("never.pptx");
    let spec = load_presentation(&test_data_path("comprehensive.json")).unwrap();
    let config = GeneratorConfig::builder()
        .template(dir.path().join("missing_template.pptx"))
        .output(&output)
        .build();

    assert!(matches!(generate(&spec, &config), Err(Error::Io { .. })));
    assert!(!output.exists());
}

#[test]
fn test_control_characters_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("controls.pptx");
    let spec = parse_presentation(
        r#"{"title":"Bell\u0007here","subtitle":"S","slides":[
            {"type":"title_and_content","title":"X","content":["one\u000btwo","three"]}
        ],"endpage":"E"}"#,
    )
    .unwrap();

    generate(&spec, &GeneratorConfig::builder().output(&output).build()).unwrap();
    let slides = PptxContainer::open(&output).unwrap().parse_all().unwrap();

    assert_eq!(slides[0].title().unwrap().text(), "Bell_x0007_here");
    let body = slides[1].placeholder(1).unwrap();
    assert_eq!(body.paragraphs.len(), 2);
    assert_eq!(body.paragraphs[0].text(), "one\u{b}two");
    assert_eq!(body.paragraphs[1].text(), "three");
}

#[test]
fn test_layout_without_title_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("untitled_title_only.pptx");
    let output = dir.path().join("never.pptx");
    // Title Only is the sixth layout; its title becomes a body placeholder.
    write_edited_template(&template, "ppt/slideLayouts/slideLayout6.xml", |xml| {
        xml.replace(r#"<p:ph type="title""#, r#"<p:ph type="body""#)
    });

    let spec = parse_presentation(
        r#"{"title":"T","subtitle":"S","slides":[{"type":"blank"},{"type":"title_only","title":"X"}],"endpage":"E"}"#,
    )
    .unwrap();
    let config = GeneratorConfig::builder().template(&template).output(&output).build();

    match generate(&spec, &config) {
        Err(Error::PlaceholderNotFound { slide, role, .. }) => {
            assert_eq!(slide, 2);
            assert_eq!(role, PlaceholderRole::Title);
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_template_with_too_few_layouts_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("two_layouts.pptx");
    let output = dir.path().join("never.pptx");
    // Keep only the first two entries of the master's layout list.
    write_edited_template(&template, "ppt/slideMasters/slideMaster1.xml", |xml| {
        let start = xml.find("<p:sldLayoutIdLst>").unwrap() + "<p:sldLayoutIdLst>".len();
        let end = xml.find("</p:sldLayoutIdLst>").unwrap();
        let kept: String = xml[start..end].split_inclusive("/>").take(2).collect();
        format!("{}{}{}", &xml[..start], kept, &xml[end..])
    });

    let spec = parse_presentation(
        r#"{"title":"T","subtitle":"S","slides":[{"type":"section_header","title":"X","subtitle":"Y"}],"endpage":"E"}"#,
    )
    .unwrap();
    let config = GeneratorConfig::builder().template(&template).output(&output).build();

    match generate(&spec, &config) {
        Err(Error::LayoutOutOfRange { slide, layout, available }) => {
            assert_eq!((slide, layout, available), (1, 2, 2));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!output.exists());
}
