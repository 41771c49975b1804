//! Tokenizer behavior on realistic inputs.

use mdindexer::build::{identifiers, read_document, word_frequency, StopWordPreset, StopWords};

use super::common::write_file;

#[test]
fn test_source_code_tokens() {
    let text = r#"
        pub fn parse_header(buf: &[u8]) -> Result<Header> {
            let magic = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
            if magic != 0x4D444958 { return Err(Error::BadMagic); }
        }
    "#;
    let counts = word_frequency(text, &StopWords::new());
    assert_eq!(counts.get("buf"), Some(&5));
    assert_eq!(counts.get("magic"), Some(&2));
    assert_eq!(counts.get("u8"), Some(&1));
    assert_eq!(counts.get("header"), Some(&1));
    assert_eq!(counts.get("parse_header"), Some(&1));
    assert!(!counts.keys().any(|k| k.starts_with('0') || k == "x4d444958"));
}

#[test]
fn test_markdown_tokens() {
    let tokens = identifiers("# Title\n\n- [link](https://example.com/page-2)\n`code_span`");
    assert_eq!(tokens, vec!["Title", "link", "https", "example", "com", "page", "code_span"]);
}

#[test]
fn test_presets_filter() {
    let text = "the class is public and static";
    let english = word_frequency(text, &StopWords::preset(StopWordPreset::English));
    assert!(!english.contains_key("the"));
    assert!(!english.contains_key("and"));
    assert!(english.contains_key("class"));

    let both = StopWords::presets(&[StopWordPreset::English, StopWordPreset::Java]);
    let counts = word_frequency(text, &both);
    assert!(counts.is_empty(), "{counts:?}");
}

#[test]
fn test_read_document_names_by_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "notes.md", "Alpha beta ALPHA");
    let doc = read_document(&path, &StopWords::new()).unwrap();

    assert_eq!(doc.name, path.to_string_lossy());
    assert_eq!(doc.word_count.get("alpha"), Some(&2));
    assert_eq!(doc.word_count.get("beta"), Some(&1));
}

#[test]
fn test_read_document_rejects_invalid_utf8() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("binary.md");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    assert!(read_document(&path, &StopWords::new()).is_err());
}
