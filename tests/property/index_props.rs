//! Invariants of the inverted index under random update sequences.

use std::collections::{HashMap, HashSet};

use mdindexer::{Document, InvertedIndex};
use proptest::prelude::*;

use super::common::assert_index_well_formed;

fn doc_strategy() -> impl Strategy<Value = Document> {
    let name = prop::sample::select(vec!["a.md", "b.md", "c.md", "d.md"]);
    let words = prop::collection::hash_map("[a-e]{1,3}", 1u32..5, 0..6);
    (name, words).prop_map(|(name, word_count)| Document::new(name, word_count))
}

proptest! {
    #[test]
    fn prop_last_update_wins(docs in prop::collection::vec(doc_strategy(), 1..30)) {
        let index = InvertedIndex::new(4);
        let mut latest: HashMap<String, HashMap<String, u32>> = HashMap::new();
        for doc in &docs {
            index.update(doc);
            latest.insert(doc.name.clone(), doc.word_count.clone());
        }

        assert_index_well_formed(&index);
        prop_assert_eq!(index.document_count(), latest.len());

        let live: HashSet<&String> = latest.values().flat_map(|counts| counts.keys()).collect();
        prop_assert_eq!(index.word_count(), live.len());

        for word in live {
            let mut got: Vec<(String, u32)> = index
                .search(word)
                .unwrap()
                .into_iter()
                .map(|d| (d.document, d.count))
                .collect();
            got.sort();
            let mut want: Vec<(String, u32)> = latest
                .iter()
                .filter_map(|(name, counts)| counts.get(word).map(|&c| (name.clone(), c)))
                .collect();
            want.sort();
            prop_assert_eq!(got, want);
        }
    }

    #[test]
    fn prop_results_sorted_by_count(docs in prop::collection::vec(doc_strategy(), 1..20), term in "[a-e]{1,3}") {
        let index = InvertedIndex::new(4);
        for doc in &docs {
            index.update(doc);
        }
        if let Ok(results) = index.search(&term) {
            for (rank, pair) in results.windows(2).enumerate() {
                prop_assert!(pair[0].count <= pair[1].count);
                prop_assert_eq!(pair[0].rank, rank);
            }
            if let Some(first) = results.first() {
                prop_assert!(results.iter().all(|d| d.distance == first.distance));
            }
        }
    }

    #[test]
    fn prop_snapshot_roundtrip(docs in prop::collection::vec(doc_strategy(), 0..20), term in "[a-e]{0,3}") {
        let index = InvertedIndex::new(4);
        for doc in &docs {
            index.update(doc);
        }
        let restored = InvertedIndex::from_snapshot(index.snapshot()).unwrap();
        prop_assert_eq!(restored.search(&term).ok(), index.search(&term).ok());
    }
}
