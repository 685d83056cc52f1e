// File-level round trip: source file in, .mei file out

use std::fs;

use ly2mei::diagnostics::check_document;
use ly2mei::{convert_score, emit_mei, Dialect, RandomIdAllocator};

#[test]
fn test_source_file_to_mei_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("tune.ly");
    fs::write(&input, "c4 d4 e4 f4 | g1 |\n").expect("write source");

    let source = fs::read_to_string(&input).expect("read source");
    let mut ids = RandomIdAllocator;
    let doc = convert_score(&source, Dialect::Enhanced, &mut ids).expect("convert");
    assert!(check_document(&doc).is_empty());

    let xml = emit_mei(&doc);
    let output = input.with_extension("mei");
    fs::write(&output, &xml).expect("write MEI");

    let written = fs::read_to_string(&output).expect("read MEI back");
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));

    let parsed = roxmltree::Document::parse(&written).expect("well-formed MEI");
    let measures = parsed
        .descendants()
        .filter(|n| n.tag_name().name() == "measure")
        .count();
    assert_eq!(measures, 2);
}
