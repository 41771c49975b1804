//! File discovery.

use mdindexer::build::document_list;
use regex::Regex;

use super::common::sample_tree;

#[test]
fn test_pattern_matches_file_names() {
    let dir = sample_tree();
    let found = document_list(dir.path(), &Regex::new(r"\.md$").unwrap()).unwrap();
    let rel: Vec<String> = found
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(rel, vec!["README.md", "docs/guide.md"]);
}

#[test]
fn test_pattern_is_not_anchored() {
    let dir = sample_tree();
    let found = document_list(dir.path(), &Regex::new("li").unwrap()).unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("lib.rs"));
}

#[test]
fn test_pattern_sees_only_the_file_name() {
    let dir = sample_tree();
    // "docs" is a directory name, never part of what the pattern sees.
    let found = document_list(dir.path(), &Regex::new("^docs").unwrap()).unwrap();
    assert!(found.is_empty());
}
