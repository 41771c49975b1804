//! Properties of the query engine.

use mdindexer::{exact_match, search, Document, InvertedIndex};
use proptest::prelude::*;

fn corpus_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(
        prop::collection::vec("[a-d]{1,3}", 1..5),
        1..6,
    )
    .prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, words)| Document::from_words(format!("doc{i}.md"), words))
            .collect()
    })
}

fn build(docs: &[Document]) -> InvertedIndex {
    let index = InvertedIndex::new(docs.len());
    for doc in docs {
        index.update(doc);
    }
    index
}

proptest! {
    #[test]
    fn prop_ranked_results_unique_and_sorted(docs in corpus_strategy(), query in "[a-d]{1,3}( [a-d]{1,3}){0,2}") {
        let index = build(&docs);
        let results = search(&query, &index);

        let mut seen = std::collections::HashSet::new();
        for score in &results {
            prop_assert!(seen.insert(score.document.clone()), "duplicate {}", score.document);
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].rank <= pair[1].rank);
            if pair[0].rank == pair[1].rank {
                prop_assert!(pair[0].name_distance <= pair[1].name_distance);
            }
        }
    }

    #[test]
    fn prop_ranked_subset_of_last_term(docs in corpus_strategy(), query in "[a-d]{1,3}( [a-d]{1,3}){0,2}") {
        let index = build(&docs);
        let last = query.split(' ').next_back().unwrap_or_default();
        let last_matches: Vec<String> = index
            .search(last)
            .map(|docs| docs.into_iter().map(|d| d.document).collect())
            .unwrap_or_default();

        for score in search(&query, &index) {
            prop_assert!(last_matches.contains(&score.document));
        }
    }

    #[test]
    fn prop_exact_match_shrinks_with_terms(docs in corpus_strategy(), a in "[a-d]{1,3}", b in "[a-d]{1,3}") {
        let index = build(&docs);
        let one = exact_match(&a, &index);
        let two = exact_match(&format!("{a} {b}"), &index);
        prop_assert!(two.is_subset(&one));
    }
}
