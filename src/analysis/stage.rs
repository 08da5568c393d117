/// A single query-expansion stage.
///
/// Every stage returns a superset of its input (except the final drop
/// stage), deduplicated and in first-occurrence order, so stages can be
/// applied independently or composed in any order the caller wants.
pub trait QueryStage: Send + Sync {
    fn expand(&self, tokens: Vec<String>) -> Vec<String>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn QueryStage>;
}

/// Append a token unless it is already present
pub(crate) fn push_unique(tokens: &mut Vec<String>, token: String) {
    if !tokens.contains(&token) {
        tokens.push(token);
    }
}
