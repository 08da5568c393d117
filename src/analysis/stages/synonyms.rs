use crate::analysis::stage::{push_unique, QueryStage};
use crate::core::types::Thesaurus;

/// Thesaurus-driven expansion.
///
/// Groups are scanned in their given order and a token is expanded from
/// the first group that contains it only; later groups are skipped for
/// that token even if they also list it.
#[derive(Clone)]
pub struct Synonyms {
    pub thesaurus: Thesaurus,
}

impl Synonyms {
    pub fn new(thesaurus: Thesaurus) -> Self {
        Synonyms { thesaurus }
    }
}

impl QueryStage for Synonyms {
    fn expand(&self, tokens: Vec<String>) -> Vec<String> {
        let mut expanded = tokens.clone();

        for word in &tokens {
            for group in &self.thesaurus {
                if group.iter().any(|entry| entry == word) {
                    for entry in group {
                        push_unique(&mut expanded, entry.clone());
                    }
                    break;
                }
            }
        }

        expanded
    }

    fn name(&self) -> &str {
        "synonyms"
    }

    fn clone_box(&self) -> Box<dyn QueryStage> {
        Box::new(self.clone())
    }
}
