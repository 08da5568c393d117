use crate::analysis::stage::QueryStage;
use crate::analysis::stages::dropwords::DropWords;
use crate::analysis::stages::roots::RootWords;
use crate::analysis::stages::supplements::Supplements;
use crate::analysis::stages::synonyms::Synonyms;
use crate::core::types::{DropList, SupplementTable, Thesaurus};

/// Query expansion pipeline
///
/// Stages run in the order they were added. The conventional order is
/// root words, synonyms, supplements, then drop words last, so that no
/// expansion can resurrect a dropped token.
pub struct QueryExpander {
    pub stages: Vec<Box<dyn QueryStage>>,
}

impl QueryExpander {
    pub fn new() -> Self {
        QueryExpander { stages: Vec::new() }
    }

    pub fn add_stage(mut self, stage: Box<dyn QueryStage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn expand(&self, tokens: Vec<String>) -> Vec<String> {
        let mut tokens = tokens;

        for stage in &self.stages {
            tokens = stage.expand(tokens);
        }

        tokens
    }

    /// The full conventional pipeline
    pub fn standard(
        thesaurus: Thesaurus,
        supplements: SupplementTable,
        drop_list: DropList,
    ) -> Self {
        QueryExpander::new()
            .add_stage(Box::new(RootWords))
            .add_stage(Box::new(Synonyms::new(thesaurus)))
            .add_stage(Box::new(Supplements::new(supplements)))
            .add_stage(Box::new(DropWords::new(drop_list)))
    }
}

impl Default for QueryExpander {
    fn default() -> Self {
        QueryExpander::new()
    }
}

impl Clone for QueryExpander {
    fn clone(&self) -> Self {
        QueryExpander {
            stages: self.stages.iter().map(|stage| stage.clone_box()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_pipeline_passes_tokens_through() {
        let expander = QueryExpander::new();
        let tokens = vec!["red".to_string(), "cars".to_string()];
        assert_eq!(expander.expand(tokens.clone()), tokens);
    }

    #[test]
    fn standard_pipeline_runs_stages_in_order() {
        let thesaurus = vec![vec!["city".to_string(), "town".to_string()]];
        let mut supplements = HashMap::new();
        supplements.insert("town".to_string(), vec!["village".to_string()]);
        let drop_list: DropList = ["cities".to_string()].into_iter().collect();

        let expander = QueryExpander::standard(thesaurus, supplements, drop_list);

        // "cities" stems to "city", which pulls in "town", which pulls in
        // "village"; the drop list then removes the original token.
        let out = expander.expand(vec!["cities".to_string()]);
        assert_eq!(out, vec!["city", "town", "village"]);
    }

    #[test]
    fn drop_filtering_is_final_even_for_expanded_tokens() {
        let thesaurus = vec![vec!["red".to_string(), "crimson".to_string()]];
        let drop_list: DropList = ["crimson".to_string()].into_iter().collect();

        let expander = QueryExpander::standard(thesaurus, HashMap::new(), drop_list);
        let out = expander.expand(vec!["red".to_string()]);
        assert_eq!(out, vec!["red"]);
    }
}
