use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fuzziness threshold. 100 = exact token match only; lower values
    /// admit index tokens whose character similarity clears the threshold.
    pub confidence: f64,

    // Query expansion stages
    pub root_words: bool,
    pub synonyms: bool,
    pub supplements: bool,
    pub drop_words: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            confidence: 100.0, // strict search
            root_words: true,
            synonyms: true,
            supplements: true,
            drop_words: true,
        }
    }
}
