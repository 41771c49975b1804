//! Tests for AND matching.

use std::collections::HashSet;

use mdindexer::{exact_match, InvertedIndex};

use super::common::{bar_md, baz_md, foo_md, index_of};

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_and_semantics() {
    let index = index_of(&[foo_md(), bar_md(), baz_md(&["hello", "world", "ciao"])]);

    assert_eq!(exact_match("world", &index), set(&["foo.md", "bar.md", "baz.md"]));
    assert_eq!(exact_match("hello world", &index), set(&["foo.md", "baz.md"]));
    assert_eq!(exact_match("ciao hello", &index), set(&["baz.md"]));
}

#[test]
fn test_case_insensitive() {
    let index = index_of(&[foo_md(), bar_md()]);
    assert_eq!(exact_match("CIAO", &index), set(&["bar.md"]));
}

#[test]
fn test_unknown_term_matches_nearest_word() {
    let index = index_of(&[foo_md(), bar_md()]);
    assert_eq!(exact_match("ciaoo", &index), set(&["bar.md"]));
}

#[test]
fn test_extra_spaces_are_ignored() {
    let index = index_of(&[foo_md(), bar_md()]);
    assert_eq!(exact_match("  hello   world ", &index), set(&["foo.md"]));
}

#[test]
fn test_nothing_indexed() {
    let index = InvertedIndex::new(0);
    assert!(exact_match("hello", &index).is_empty());
}
