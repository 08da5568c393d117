use crate::analysis::stage::{push_unique, QueryStage};
use crate::core::types::SupplementTable;

/// Keyed injection expansion: when a query token is a key in the table,
/// its associated tokens join the query.
#[derive(Clone)]
pub struct Supplements {
    pub table: SupplementTable,
}

impl Supplements {
    pub fn new(table: SupplementTable) -> Self {
        Supplements { table }
    }
}

impl QueryStage for Supplements {
    fn expand(&self, tokens: Vec<String>) -> Vec<String> {
        let mut expanded = tokens.clone();

        for word in &tokens {
            if let Some(extra) = self.table.get(word) {
                for token in extra {
                    push_unique(&mut expanded, token.clone());
                }
            }
        }

        expanded
    }

    fn name(&self) -> &str {
        "supplements"
    }

    fn clone_box(&self) -> Box<dyn QueryStage> {
        Box::new(self.clone())
    }
}
