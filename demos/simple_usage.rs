/// Complete fuzzdex API demo
///
/// Demonstrates the full search pipeline:
/// - Building and maintaining an inverted index
/// - Strict and fuzzy queries
/// - Query expansion (root words, synonyms, supplements, drop words)
/// - Domain-restricted search
/// - Statistics

use fuzzdex::core::config::SearchConfig;
use fuzzdex::core::engine::SearchEngine;
use fuzzdex::core::types::{DocId, DropList, ForwardIndex, SupplementTable, Thesaurus};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== fuzzdex - Fuzzy Inverted-Index Search Demo ===\n");

    // Step 1: Caller-supplied expansion tables
    let thesaurus: Thesaurus = vec![
        vec!["car".to_string(), "auto".to_string(), "vehicle".to_string()],
        vec!["fast".to_string(), "quick".to_string(), "speedy".to_string()],
    ];

    let mut supplements = SupplementTable::new();
    supplements.insert("bicycle".to_string(), vec!["wheel".to_string()]);

    let drop_list: DropList = ["the", "a", "an"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    // Step 2: Create the engine (fuzzy, 60% confidence)
    println!("Creating engine...");
    let config = SearchConfig {
        confidence: 60.0,
        ..SearchConfig::default()
    };
    let mut engine = SearchEngine::with_tables(config, thesaurus, supplements, drop_list)?;
    println!("Done!\n");

    // Step 3: Index some documents
    println!("Indexing documents...");
    let forward: ForwardIndex = [
        (DocId(1), tags(&["red", "car", "fast"])),
        (DocId(2), tags(&["blue", "car"])),
        (DocId(3), tags(&["red", "boat"])),
        (DocId(4), tags(&["green", "bicycle", "wheel"])),
    ]
    .into_iter()
    .collect();
    engine.index_documents(&forward);

    let stats = engine.stats();
    println!(
        "Indexed {} documents, {} tokens, {} postings\n",
        stats.document_count, stats.token_count, stats.posting_count
    );

    // Step 4: Query with a typo - fuzzy matching catches "car" and "fast"
    println!("Query: \"the quick kar\"");
    let results = engine.query("the quick kar")?;
    println!("{}", serde_json::to_string_pretty(&results)?);

    // Step 5: Same query restricted to a domain
    println!("\nSame query, restricted to documents 2 and 3:");
    let results = engine.query_in("the quick kar", &[DocId(2), DocId(3)])?;
    for hit in &results.hits {
        println!(
            "  doc {} scored {:.2}% (matched: {})",
            hit.doc_id.value(),
            hit.score,
            hit.matches.join(", ")
        );
    }

    // Step 6: Remove a document and query again
    println!("\nRemoving document 1 and re-running...");
    engine.remove_documents(&[(DocId(1), tags(&["red", "car", "fast"]))].into_iter().collect());
    let results = engine.query("the quick kar")?;
    println!(
        "{} hits, best score {:.2}%",
        results.total_hits, results.max_score
    );

    Ok(())
}

fn tags(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
