//! Vocabulary richness: type-token ratio and MTLD.
//!
//! MTLD walks the token stream keeping a running type-token ratio. Each
//! time the ratio falls to the threshold a factor is counted and the window
//! restarts; the leftover window adds a partial factor. The measure is the
//! token count divided by the factor count, averaged over a forward and a
//! reversed pass.

use crate::round_to;
use serde::Serialize;
use std::collections::HashSet;

pub const MTLD_THRESHOLD: f64 = 0.72;

/// MTLD is only reported for texts with more tokens than this.
pub const MTLD_MIN_WORDS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyRichness {
    pub ttr: f64,
    pub mtld: Option<f64>,
    pub unique_words: usize,
    pub total_words: usize,
}

/// Lower-cases, drops ASCII digits and punctuation, then splits on
/// whitespace.
pub fn vocabulary_tokens(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_digit() && !c.is_ascii_punctuation())
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

pub fn vocabulary_richness(text: &str) -> VocabularyRichness {
    let tokens = vocabulary_tokens(text);
    let unique_words = tokens.iter().collect::<HashSet<_>>().len();
    let total_words = tokens.len();

    let ttr = if total_words == 0 {
        0.0
    } else {
        round_to(unique_words as f64 / total_words as f64, 4)
    };
    let mtld = (total_words > MTLD_MIN_WORDS).then(|| round_to(mtld(&tokens, MTLD_THRESHOLD), 2));

    VocabularyRichness {
        ttr,
        mtld,
        unique_words,
        total_words,
    }
}

/// Mean of the forward and reversed MTLD passes. Zero for empty input.
pub fn mtld(tokens: &[String], threshold: f64) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let forward = mtld_pass(tokens.iter(), tokens, threshold);
    let reverse = mtld_pass(tokens.iter().rev(), tokens, threshold);
    (forward + reverse) / 2.0
}

fn mtld_pass<'a>(
    stream: impl Iterator<Item = &'a String>,
    tokens: &[String],
    threshold: f64,
) -> f64 {
    let mut terms: HashSet<&str> = HashSet::new();
    let mut window = 0usize;
    let mut factors = 0.0f64;
    let mut ttr = 1.0f64;

    for token in stream {
        window += 1;
        terms.insert(token.as_str());
        ttr = terms.len() as f64 / window as f64;
        if ttr <= threshold {
            window = 0;
            terms.clear();
            factors += 1.0;
        }
    }

    if window > 0 {
        factors += (1.0 - ttr) / (1.0 - threshold);
    }

    // The ratio never fell to the threshold and the tail added nothing.
    if factors == 0.0 {
        let unique = tokens.iter().collect::<HashSet<_>>().len();
        let overall = unique as f64 / tokens.len() as f64;
        factors = if overall == 1.0 {
            1.0
        } else {
            (1.0 - overall) / (1.0 - threshold)
        };
    }

    tokens.len() as f64 / factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        vocabulary_tokens(text)
    }

    #[test]
    fn tokens_drop_digits_and_punctuation() {
        assert_eq!(
            tokens("In 1965, GDP grew 8% -- a record!"),
            vec!["in", "gdp", "grew", "a", "record"]
        );
    }

    #[test]
    fn empty_text_has_zero_ttr_and_no_mtld() {
        let richness = vocabulary_richness("  123 ... ");
        assert_eq!(richness.ttr, 0.0);
        assert_eq!(richness.mtld, None);
        assert_eq!(richness.total_words, 0);
    }

    #[test]
    fn mtld_needs_more_than_fifty_words() {
        let fifty = vec!["word"; 50].join(" ");
        assert_eq!(vocabulary_richness(&fifty).mtld, None);

        let fifty_one = vec!["word"; 51].join(" ");
        assert!(vocabulary_richness(&fifty_one).mtld.is_some());
    }

    #[test]
    fn ttr_is_rounded() {
        let richness = vocabulary_richness("a b c a b c a");
        assert_eq!(richness.unique_words, 3);
        assert_eq!(richness.total_words, 7);
        assert_eq!(richness.ttr, 0.4286);
    }

    #[test]
    fn all_distinct_tokens_count_as_one_factor() {
        let words = tokens("alpha beta gamma delta");
        // A window that never drops gets a zero partial factor.
        assert_eq!(mtld(&words, MTLD_THRESHOLD), 4.0);
    }

    #[test]
    fn repeated_token_resets_every_few_words() {
        // "x x": ttr 0.5 at the second token, one factor per pair.
        let words = tokens("x x x x x x");
        assert_eq!(mtld(&words, MTLD_THRESHOLD), 2.0);
    }
}
