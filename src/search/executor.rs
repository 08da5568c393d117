use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;
use crate::search::results::{ScoredDocument, SearchResults};

/// Run a search over the inverted index and rank the matches.
///
/// An empty `search_tokens` falls back to every key in the index, which
/// degenerates to "every document matches 100% of an all-keys query" —
/// intentional, not an error. A non-empty `domain` restricts results to
/// those documents, but the restriction happens before normalization:
/// scores are always a percentage of the effective search-token count,
/// never of the surviving candidate count.
pub fn search(
    index: &InvertedIndex,
    search_tokens: &[String],
    domain: &[DocId],
) -> SearchResults {
    // Effective search set: the given tokens deduplicated, or the whole
    // wordlist when none were given
    let effective: Vec<String> = if search_tokens.is_empty() {
        index.wordlist()
    } else {
        let mut seen = HashSet::new();
        search_tokens
            .iter()
            .filter(|token| seen.insert(token.as_str()))
            .cloned()
            .collect()
    };

    // Aggregate matches, remembering the order documents first appeared
    let mut first_seen: Vec<DocId> = Vec::new();
    let mut matches: HashMap<DocId, Vec<String>> = HashMap::new();

    for token in &effective {
        if let Some(docs) = index.documents(token) {
            for doc_id in docs {
                let matched = matches.entry(*doc_id).or_insert_with(|| {
                    first_seen.push(*doc_id);
                    Vec::new()
                });
                matched.push(token.clone());
            }
        }
    }

    let total = effective.len();
    let mut hits: Vec<ScoredDocument> = Vec::new();

    for doc_id in first_seen {
        if !domain.is_empty() && !domain.contains(&doc_id) {
            continue;
        }

        let matched = matches.remove(&doc_id).unwrap_or_default();
        let score = round2(matched.len() as f64 / total as f64 * 100.0);

        hits.push(ScoredDocument {
            doc_id,
            score,
            matches: matched,
        });
    }

    // Stable sort: ties keep first-encountered order
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    SearchResults {
        total_hits: hits.len(),
        max_score: hits.first().map(|hit| hit.score).unwrap_or(0.0),
        hits,
    }
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
