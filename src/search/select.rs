use crate::core::error::{Error, ErrorKind, Result};
use crate::index::inverted::InvertedIndex;
use crate::search::similarity::similarity;

/// Select the index tokens a search should consult.
///
/// At full confidence the query tokens are used as-is (strict search).
/// Below 100, every index token similar enough to *any* query token is
/// selected instead; an index token is included as soon as one query token
/// clears the threshold. Negative confidence clamps to 0, which selects
/// the whole wordlist. Fuzzy cost is O(wordlist × query tokens), so
/// callers bound latency by bounding index and query size.
///
/// A non-finite confidence is a contract violation and fails fast.
pub fn select_search_tokens(
    query_tokens: &[String],
    index: &InvertedIndex,
    confidence: f64,
) -> Result<Vec<String>> {
    if !confidence.is_finite() {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            format!("confidence must be finite, got {}", confidence),
        ));
    }

    let confidence = confidence.max(0.0);
    let mut selected: Vec<String> = Vec::new();

    if confidence >= 100.0 {
        // Strict search: the query tokens themselves
        for token in query_tokens {
            if !selected.contains(token) {
                selected.push(token.clone());
            }
        }
    } else {
        // Fuzzy search: every similar-enough index token
        for list_word in index.tokens() {
            let admitted = query_tokens
                .iter()
                .any(|query_word| similarity(query_word, list_word) >= confidence);

            if admitted && !selected.iter().any(|t| t == list_word) {
                selected.push(list_word.to_string());
            }
        }
    }

    Ok(selected)
}
