use crate::analysis::expander::QueryExpander;
use crate::analysis::stages::dropwords::DropWords;
use crate::analysis::stages::roots::RootWords;
use crate::analysis::stages::supplements::Supplements;
use crate::analysis::stages::synonyms::Synonyms;
use crate::analysis::tokenizer::{StandardTokenizer, Tokenizer};
use crate::core::config::SearchConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::IndexStats;
use crate::core::types::{DocId, DropList, ForwardIndex, SupplementTable, Thesaurus};
use crate::index::inverted::InvertedIndex;
use crate::search::executor;
use crate::search::results::SearchResults;
use crate::search::select::select_search_tokens;

/// Ties the whole pipeline together: one index, one tokenizer, one
/// expansion pipeline, one config. A raw query runs tokenize -> expand ->
/// select -> search and comes back as ranked results.
///
/// The engine is a plain value with no interior locking; callers that
/// mutate it from several threads must serialize access themselves.
pub struct SearchEngine {
    pub config: SearchConfig,
    index: InvertedIndex,
    tokenizer: StandardTokenizer,
    expander: QueryExpander,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Result<Self> {
        SearchEngine::with_tables(
            config,
            Thesaurus::new(),
            SupplementTable::new(),
            DropList::new(),
        )
    }

    /// Build an engine whose expansion pipeline uses the given tables.
    /// Stages disabled in the config are left out; the drop stage always
    /// comes last.
    pub fn with_tables(
        config: SearchConfig,
        thesaurus: Thesaurus,
        supplements: SupplementTable,
        drop_list: DropList,
    ) -> Result<Self> {
        if !config.confidence.is_finite() {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("confidence must be finite, got {}", config.confidence),
            ));
        }

        let mut expander = QueryExpander::new();
        if config.root_words {
            expander = expander.add_stage(Box::new(RootWords));
        }
        if config.synonyms {
            expander = expander.add_stage(Box::new(Synonyms::new(thesaurus)));
        }
        if config.supplements {
            expander = expander.add_stage(Box::new(Supplements::new(supplements)));
        }
        if config.drop_words {
            expander = expander.add_stage(Box::new(DropWords::new(drop_list)));
        }

        Ok(SearchEngine {
            config,
            index: InvertedIndex::new(),
            tokenizer: StandardTokenizer::default(),
            expander,
        })
    }

    /// Index documents from a forward index (document -> tokens)
    pub fn index_documents(&mut self, forward: &ForwardIndex) {
        self.index.add(forward);
    }

    /// Remove document/token pairs previously indexed
    pub fn remove_documents(&mut self, forward: &ForwardIndex) {
        self.index.remove(forward);
    }

    /// Run a raw query through the full pipeline
    pub fn query(&self, raw: &str) -> Result<SearchResults> {
        self.query_in(raw, &[])
    }

    /// Run a raw query, restricting results to the given documents.
    /// An empty domain means no restriction.
    pub fn query_in(&self, raw: &str, domain: &[DocId]) -> Result<SearchResults> {
        let tokens = self.tokenizer.tokenize(raw);
        let expanded = self.expander.expand(tokens);
        let search_tokens =
            select_search_tokens(&expanded, &self.index, self.config.confidence)?;

        Ok(executor::search(&self.index, &search_tokens, domain))
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}
