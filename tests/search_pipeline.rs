use std::collections::HashMap;
use fuzzdex::analysis::expander::QueryExpander;
use fuzzdex::analysis::tokenizer::{StandardTokenizer, Tokenizer};
use fuzzdex::core::config::SearchConfig;
use fuzzdex::core::engine::SearchEngine;
use fuzzdex::core::types::{DocId, DropList, ForwardIndex};
use fuzzdex::index::inverted::InvertedIndex;
use fuzzdex::search::executor::search;
use fuzzdex::search::select::select_search_tokens;
use fuzzdex::search::similarity::similarity;

fn forward(entries: &[(u64, &[&str])]) -> ForwardIndex {
    entries
        .iter()
        .map(|(id, tokens)| {
            let tokens = tokens.iter().map(|t| t.to_string()).collect();
            (DocId(*id), tokens)
        })
        .collect()
}

fn catalog() -> ForwardIndex {
    forward(&[
        (1, &["red", "car", "fast"]),
        (2, &["blue", "car"]),
        (3, &["red", "boat"]),
        (4, &["green", "bicycle", "fast"]),
    ])
}

#[test]
fn add_then_remove_leaves_no_keys() {
    let f = catalog();
    let mut index = InvertedIndex::build(&f);
    index.add(&f);
    index.remove(&f);

    assert!(index.is_empty());
    assert_eq!(index.tokens().count(), 0);
}

#[test]
fn removal_never_leaves_an_empty_key_behind() {
    let mut index = InvertedIndex::build(&forward(&[(1, &["rare"]), (2, &["rare", "red"])]));

    index.remove(&forward(&[(1, &["rare"])]));
    assert!(index.contains_token("rare"));

    index.remove(&forward(&[(2, &["rare"])]));
    assert!(!index.contains_token("rare"));
    assert!(index.contains_token("red"));
}

#[test]
fn similarity_contract_holds_for_token_pairs() {
    assert_eq!(similarity("car", "car"), 100.0);
    assert_eq!(similarity("", ""), 0.0);

    for (a, b) in [("kat", "cat"), ("bicycle", "bicycles"), ("red", "blue")] {
        let forward_score = similarity(a, b);
        let backward_score = similarity(b, a);
        assert!((forward_score - backward_score).abs() < 1e-9);
        assert!((0.0..=100.0).contains(&forward_score));
    }
}

#[test]
fn all_keys_search_gives_full_score_to_a_document_matching_everything() {
    let index = InvertedIndex::build(&forward(&[
        (1, &["red", "car"]),
        (2, &["red"]),
        (3, &["car"]),
    ]));

    let results = search(&index, &[], &[]);

    let top = &results.hits[0];
    assert_eq!(top.doc_id, DocId(1));
    assert_eq!(top.score, 100.0);
    assert_eq!(top.matches.len(), 2);
    assert!(top.matches.contains(&"red".to_string()));
    assert!(top.matches.contains(&"car".to_string()));
}

#[test]
fn domain_filtering_does_not_change_the_score_denominator() {
    let index = InvertedIndex::build(&catalog());
    let tokens: Vec<String> = ["red", "car"].iter().map(|t| t.to_string()).collect();

    let unrestricted = search(&index, &tokens, &[]);
    let restricted = search(&index, &tokens, &[DocId(2)]);

    assert_eq!(restricted.total_hits, 1);
    assert_eq!(restricted.hits[0].doc_id, DocId(2));

    // doc 2 scores the same with or without the other candidates
    let unrestricted_doc2 = unrestricted
        .hits
        .iter()
        .find(|hit| hit.doc_id == DocId(2))
        .unwrap();
    assert_eq!(restricted.hits[0].score, unrestricted_doc2.score);
    assert_eq!(restricted.hits[0].score, 50.0);
}

#[test]
fn fuzzy_selection_is_deterministic() {
    let index = InvertedIndex::build(&forward(&[(1, &["cat"]), (2, &["dog"])]));
    let query = vec!["kat".to_string()];

    let first = select_search_tokens(&query, &index, 50.0).unwrap();
    let second = select_search_tokens(&query, &index, 50.0).unwrap();

    assert_eq!(first, vec!["cat"]);
    assert_eq!(first, second);
}

#[test]
fn raw_query_flows_through_the_whole_pipeline() {
    let thesaurus = vec![vec!["fast".to_string(), "quick".to_string()]];
    let drop_list: DropList = ["the".to_string()].into_iter().collect();

    let config = SearchConfig::default();
    let mut engine =
        SearchEngine::with_tables(config, thesaurus, HashMap::new(), drop_list).unwrap();
    engine.index_documents(&catalog());

    // "Quick" folds to "quick", the thesaurus adds "fast", "the" drops out
    let results = engine.query("The QUICK one!").unwrap();

    let matched: Vec<DocId> = results.hits.iter().map(|hit| hit.doc_id).collect();
    assert!(matched.contains(&DocId(1)));
    assert!(matched.contains(&DocId(4)));
}

#[test]
fn stage_subsets_can_be_skipped_entirely() {
    // A caller composing its own pipeline only gets the stages it asked for
    let expander = QueryExpander::new();
    let tokenizer = StandardTokenizer::default();

    let tokens = tokenizer.tokenize("Red, red CARS!");
    assert_eq!(tokens, vec!["red", "cars"]);
    assert_eq!(expander.expand(tokens.clone()), tokens);
}

#[test]
fn results_serialize_for_downstream_consumers() {
    let index = InvertedIndex::build(&forward(&[(1, &["red"])]));
    let results = search(&index, &["red".to_string()], &[]);

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json["total_hits"], 1);
    assert_eq!(json["hits"][0]["score"], 100.0);
    assert_eq!(json["hits"][0]["matches"][0], "red");
}
