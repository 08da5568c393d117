use regex::Regex;
use std::collections::HashSet;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Standard query tokenizer
///
/// Lowercases, strips apostrophes outright (so "driver's" folds to
/// "drivers"), replaces every other punctuation character with a space,
/// collapses whitespace runs, then splits and dedups preserving
/// first-occurrence order.
#[derive(Clone)]
pub struct StandardTokenizer {
    apostrophes: Regex,
    punctuation: Regex,
    whitespace: Regex,
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        StandardTokenizer {
            apostrophes: Regex::new("'+").unwrap(),
            punctuation: Regex::new(r"[[:punct:]]").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        // Apostrophes vanish entirely; they must go before the punctuation
        // pass, which would otherwise split on them.
        let stripped = self.apostrophes.replace_all(&lowered, "");
        let spaced = self.punctuation.replace_all(&stripped, " ");
        let folded = self.whitespace.replace_all(&spaced, " ");

        tokenize_sequence(folded.split(' '))
    }

    fn name(&self) -> &str {
        "standard"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Pass an already-tokenized sequence through: drop empties, dedup
/// preserving first-occurrence order.
pub fn tokenize_sequence<'a, I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(token.to_string()))
        .map(|token| token.to_string())
        .collect()
}
