use crate::analysis::stage::QueryStage;
use crate::core::types::DropList;

/// Final filtering stage: tokens on the drop list are removed outright.
/// Runs after every expansion stage, so an expansion can never reintroduce
/// a dropped token.
#[derive(Clone)]
pub struct DropWords {
    pub drop_list: DropList,
}

impl DropWords {
    pub fn new(drop_list: DropList) -> Self {
        DropWords { drop_list }
    }
}

impl QueryStage for DropWords {
    fn expand(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.drop_list.contains(token))
            .collect()
    }

    fn name(&self) -> &str {
        "drop_words"
    }

    fn clone_box(&self) -> Box<dyn QueryStage> {
        Box::new(self.clone())
    }
}
