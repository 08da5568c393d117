use serde::{Serialize, Deserialize};

/// Index statistics for monitoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Distinct documents reachable from the index
    pub document_count: usize,

    /// Distinct tokens (inverted index keys)
    pub token_count: usize,

    /// Total token -> document postings
    pub posting_count: usize,
}
