use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

/// Search results container, ranked best-first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub hits: Vec<ScoredDocument>,
    pub total_hits: usize,
    pub max_score: f64,
}

impl SearchResults {
    pub fn empty() -> Self {
        SearchResults {
            hits: Vec::new(),
            total_hits: 0,
            max_score: 0.0,
        }
    }
}

/// Document with relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub doc_id: DocId,

    /// Percentage of the effective search tokens this document matched,
    /// rounded to two decimal places
    pub score: f64,

    /// The search tokens that matched, in the order they were encountered
    pub matches: Vec<String>,
}
