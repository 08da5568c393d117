use serde::{Serialize, Deserialize};
use std::collections::{BTreeMap, HashSet};
use crate::core::stats::IndexStats;
use crate::core::types::{DocId, ForwardIndex};

/// Inverted index structure: token -> documents tagged with that token.
///
/// Document lists keep insertion order and never contain duplicates, and a
/// token is a key iff its document list is non-empty. Keys iterate in a
/// deterministic (sorted) order, which downstream ranking relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvertedIndex {
    postings: BTreeMap<String, Vec<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: BTreeMap::new(),
        }
    }

    /// Convert a forward index into an inverted index
    pub fn build(forward: &ForwardIndex) -> Self {
        let mut index = InvertedIndex::new();
        index.add(forward);
        index
    }

    /// Add every document/token pair from the forward index.
    /// A document already listed under a token is not duplicated.
    pub fn add(&mut self, forward: &ForwardIndex) {
        for (doc_id, tokens) in forward {
            for token in unique_tokens(tokens) {
                let docs = self.postings.entry(token.clone()).or_default();
                if !docs.contains(doc_id) {
                    docs.push(*doc_id);
                }
            }
        }
    }

    /// Remove every document/token pair from the forward index.
    /// A token whose document list empties is deleted immediately, so an
    /// empty-list key is never observable.
    pub fn remove(&mut self, forward: &ForwardIndex) {
        for (doc_id, tokens) in forward {
            for token in unique_tokens(tokens) {
                if let Some(docs) = self.postings.get_mut(token) {
                    docs.retain(|d| d != doc_id);
                    if docs.is_empty() {
                        self.postings.remove(token);
                    }
                }
            }
        }
    }

    /// Documents listed under a token, in insertion order
    pub fn documents(&self, token: &str) -> Option<&[DocId]> {
        self.postings.get(token).map(|docs| docs.as_slice())
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.postings.contains_key(token)
    }

    /// Iterate over all tokens in the index, in deterministic order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(|token| token.as_str())
    }

    /// All index tokens as an owned list (the search wordlist)
    pub fn wordlist(&self) -> Vec<String> {
        self.postings.keys().cloned().collect()
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        let documents: HashSet<DocId> = self
            .postings
            .values()
            .flatten()
            .copied()
            .collect();

        IndexStats {
            document_count: documents.len(),
            token_count: self.postings.len(),
            posting_count: self.postings.values().map(|docs| docs.len()).sum(),
        }
    }
}

/// First-occurrence dedup of a document's token list
fn unique_tokens(tokens: &[String]) -> Vec<&String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|token| seen.insert(token.as_str()))
        .collect()
}
