use fountain_rust::{parse_fountain_file, parse_fountain_text, Conf, ElementKind, FountainError};
use std::io::Write;

#[test]
fn test_parse_text_to_json() {
    let json = parse_fountain_text("Title: Brick\n\nINT. ROOM - DAY #4#", None);
    let value: serde_json::Value = serde_json::from_str(&json).expect("应该返回合法的JSON");

    assert_eq!(value["metadata"]["title"][0], "Brick");
    let first = &value["elements"][0];
    assert_eq!(first["kind"], "scene_heading");
    assert_eq!(first["text"], "INT. ROOM - DAY");
    assert_eq!(first["scene_number"], "4");
    assert_eq!(first["line"], 2);
}

#[test]
fn test_parse_text_error_returns_empty_object() {
    let json = parse_fountain_text("Title: Brick\nbroken line\n\nRain.", None);
    assert_eq!(json, "{}");

    let lenient = Conf { lenient_header: true, ..Conf::default() };
    let json = parse_fountain_text("Title: Brick\nbroken line\n\nRain.", Some(lenient));
    assert_ne!(json, "{}");
}

#[test]
fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().expect("无法创建临时文件");
    write!(file, "Title: Temp\r\n\r\nEXT. PARK - NIGHT\r\n\r\nFADE OUT.\r\n").unwrap();

    let doc = parse_fountain_file(file.path(), None).expect("解析文件失败");
    assert_eq!(doc.title().as_deref(), Some("Temp"));
    let kinds: Vec<ElementKind> = doc.elements.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![ElementKind::SceneHeading, ElementKind::Transition]);
}

#[test]
fn test_parse_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.fountain");

    match parse_fountain_file(&missing, None) {
        Err(FountainError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("应该返回IO错误: {other:?}"),
    }
}

#[test]
fn test_document_json_roundtrips_through_serde() {
    let doc = parse_fountain_file(
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/test_data/brick_and_steel.fountain"),
        None,
    )
    .unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    let back: fountain_rust::Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}
