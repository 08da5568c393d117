use crate::analysis::stage::{push_unique, QueryStage};

/// Heuristic root-form expansion ("cities" also searches as "city").
///
/// Best-effort suffix rewriting, not a linguistic stemmer: each rule fires
/// on a suffix pattern and the first matching rule wins. Generated roots
/// are appended; the original token is always kept. Tokens of four
/// characters or fewer are left alone, which keeps short words like "his"
/// or "goes" from degenerating into noise.
#[derive(Clone)]
pub struct RootWords;

impl QueryStage for RootWords {
    fn expand(&self, tokens: Vec<String>) -> Vec<String> {
        let mut expanded = tokens.clone();

        for word in &tokens {
            if word.chars().count() <= 4 {
                continue;
            }

            // cities -> city
            if word.ends_with("ies") {
                push_unique(&mut expanded, format!("{}y", drop_last(word, 3)));
            }
            // wives -> wife, wolves -> wolf
            else if word.ends_with("ves") {
                push_unique(&mut expanded, format!("{}f", drop_last(word, 3)));
                push_unique(&mut expanded, format!("{}fe", drop_last(word, 3)));
            }
            // potatoes -> potato
            else if word.ends_with("oes") {
                push_unique(&mut expanded, drop_last(word, 2));
            }
            // gasses -> gas, passes -> pass
            else if word.ends_with("sses") {
                push_unique(&mut expanded, drop_last(word, 3));
                push_unique(&mut expanded, drop_last(word, 2));
            }
            // matches -> match, braces -> brace
            else if word.ends_with("es") {
                push_unique(&mut expanded, drop_last(word, 1));
                push_unique(&mut expanded, drop_last(word, 2));
            }
            // colors -> color
            else if word.ends_with('s') {
                push_unique(&mut expanded, drop_last(word, 1));
            }
            // playing -> play
            else if word.ends_with("ing") {
                push_unique(&mut expanded, drop_last(word, 3));
            }
            // played -> play, hated -> hate
            else if word.ends_with("ed") {
                push_unique(&mut expanded, drop_last(word, 2));
                push_unique(&mut expanded, drop_last(word, 1));
            }
            // beautiful -> beauty
            else if word.ends_with("iful") {
                push_unique(&mut expanded, format!("{}y", drop_last(word, 4)));
            }
            // cheerful -> cheery
            else if word.ends_with("ful") {
                push_unique(&mut expanded, format!("{}y", drop_last(word, 3)));
            }
        }

        expanded
    }

    fn name(&self) -> &str {
        "root_words"
    }

    fn clone_box(&self) -> Box<dyn QueryStage> {
        Box::new(RootWords)
    }
}

/// Drop the last `n` characters (chars, not bytes)
fn drop_last(word: &str, n: usize) -> String {
    let count = word.chars().count();
    word.chars().take(count.saturating_sub(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots_of(words: &[&str]) -> Vec<String> {
        RootWords.expand(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn ies_suffix_yields_y_root() {
        assert_eq!(roots_of(&["cities"]), vec!["cities", "city"]);
    }

    #[test]
    fn ves_suffix_yields_both_f_and_fe_roots() {
        assert_eq!(roots_of(&["wolves"]), vec!["wolves", "wolf", "wolfe"]);
        assert_eq!(roots_of(&["wives"]), vec!["wives", "wif", "wife"]);
    }

    #[test]
    fn sses_is_checked_before_the_general_es_rule() {
        assert_eq!(roots_of(&["passes"]), vec!["passes", "pas", "pass"]);
    }

    #[test]
    fn es_suffix_yields_both_one_and_two_char_drops() {
        assert_eq!(roots_of(&["matches"]), vec!["matches", "matche", "match"]);
    }

    #[test]
    fn plain_s_ed_and_ing_suffixes() {
        assert_eq!(roots_of(&["colors"]), vec!["colors", "color"]);
        assert_eq!(roots_of(&["playing"]), vec!["playing", "play"]);
        assert_eq!(roots_of(&["played"]), vec!["played", "play", "playe"]);
    }

    #[test]
    fn ful_suffixes_map_to_y() {
        assert_eq!(roots_of(&["beautiful"]), vec!["beautiful", "beauty"]);
        assert_eq!(roots_of(&["cheerful"]), vec!["cheerful", "cheery"]);
    }

    #[test]
    fn short_tokens_are_left_unmodified() {
        // four characters and under get no roots at all
        assert_eq!(roots_of(&["cars", "goes", "is"]), vec!["cars", "goes", "is"]);
    }

    #[test]
    fn originals_are_retained_and_duplicates_collapsed() {
        assert_eq!(
            roots_of(&["city", "cities"]),
            vec!["city", "cities"]
        );
    }
}
