//! Tests for single-term lookup.

use mdindexer::{DocRelevance, IndexError, InvertedIndex};

use super::common::{bar_md, doc_with_counts, foo_md, index_of};

#[test]
fn test_exact_hit() {
    let index = index_of(&[foo_md()]);
    assert_eq!(
        index.search("hello").unwrap(),
        vec![DocRelevance {
            document: "foo.md".into(),
            count: 1,
            distance: 0,
            rank: 0,
        }]
    );
}

#[test]
fn test_shared_word_lists_both_documents_with_own_counts() {
    let index = index_of(&[
        doc_with_counts("a.md", &[("shared", 3)]),
        doc_with_counts("b.md", &[("shared", 1)]),
    ]);

    let docs = index.search("shared").unwrap();
    let got: Vec<_> = docs.iter().map(|d| (d.document.as_str(), d.count, d.rank)).collect();
    assert_eq!(got, vec![("b.md", 1, 0), ("a.md", 3, 1)]);
}

#[test]
fn test_equal_counts_keep_insertion_order() {
    let index = index_of(&[foo_md(), bar_md()]);
    let docs = index.search("world").unwrap();
    let names: Vec<_> = docs.iter().map(|d| d.document.as_str()).collect();
    assert_eq!(names, vec!["foo.md", "bar.md"]);
}

#[test]
fn test_fuzzy_fallback_reports_distance() {
    let index = index_of(&[foo_md(), bar_md()]);

    let docs = index.search("wrold").unwrap();
    assert!(docs.iter().all(|d| d.distance == 2));
    assert_eq!(docs.len(), 2);

    let docs = index.search("cia").unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].document, "bar.md");
    assert_eq!(docs[0].distance, 1);
}

#[test]
fn test_terms_are_case_sensitive_at_index_level() {
    let index = index_of(&[foo_md()]);
    // "Hello" is not indexed as-is; it falls back to "hello" at distance 2.
    let docs = index.search("Hello").unwrap();
    assert_eq!(docs[0].distance, 2);
}

#[test]
fn test_empty_term_on_populated_index_falls_back() {
    let index = index_of(&[doc_with_counts("a.md", &[("ab", 1), ("abcd", 1)])]);
    let docs = index.search("").unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].distance, 2);
}

#[test]
fn test_empty_index_errors() {
    let index = InvertedIndex::new(4);
    assert!(matches!(index.search(""), Err(IndexError::WordNotIndexed)));
    assert!(matches!(index.search("anything"), Err(IndexError::WordNotIndexed)));
}
