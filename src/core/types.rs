use serde::{Serialize, Deserialize};
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u64);

impl DocId {
    pub fn new(id: u64) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id)
    }
}

/// Forward index: document -> the tokens that describe it.
/// Supplied by the caller; the crate never owns it beyond a call.
pub type ForwardIndex = BTreeMap<DocId, Vec<String>>;

/// Ordered synonym groups. The words in a group are mutually interchangeable,
/// and group order matters: a query token is expanded from the first group
/// that contains it.
pub type Thesaurus = Vec<Vec<String>>;

/// Token -> extra tokens to inject into a query whenever that token is present.
pub type SupplementTable = HashMap<String, Vec<String>>;

/// Tokens removed from every query, after all expansion stages.
pub type DropList = HashSet<String>;
