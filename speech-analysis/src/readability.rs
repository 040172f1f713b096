//! Sentence length and Flesch reading ease.
//!
//! ```text
//! 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
//! ```
//!
//! Higher scores read more easily. Words and syllables come from the
//! alphabetic tokens of the text; syllables are estimated from vowel
//! groups.

use crate::lexical::vocabulary_tokens;
use crate::round_to;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readability {
    pub avg_words_per_sentence: f64,
    pub flesch_reading_ease: f64,
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimated syllables in an English word: one per vowel group, less a
/// silent final `e` (but not `-le`). At least one for any word with
/// letters.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut groups = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    let n = letters.len();
    if groups > 1 && letters[n - 1] == 'e' && letters[n - 2] != 'l' {
        groups -= 1;
    }
    groups.max(1)
}

/// Zero when there are no sentences or no words.
pub fn flesch_reading_ease(sentences: usize, words: usize, syllables: usize) -> f64 {
    if sentences == 0 || words == 0 {
        return 0.0;
    }
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

/// Readability of `text` made of `sentences` sentences holding
/// `total_words` counted words. Both values are rounded to 2 places.
pub fn readability(sentences: usize, total_words: u64, text: &str) -> Readability {
    let words: Vec<String> = vocabulary_tokens(text)
        .into_iter()
        .filter(|w| w.chars().any(|c| c.is_ascii_alphabetic()))
        .collect();
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let avg_words_per_sentence = if sentences == 0 {
        0.0
    } else {
        round_to(total_words as f64 / sentences as f64, 2)
    };

    Readability {
        avg_words_per_sentence,
        flesch_reading_ease: round_to(flesch_reading_ease(sentences, words.len(), syllables), 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_estimates() {
        let counted: Vec<_> = ["cat", "the", "year", "budget", "reserve", "table", "economy", "rhythm", "1965"]
            .iter()
            .map(|w| (*w, count_syllables(w)))
            .collect();
        assert_eq!(
            counted,
            vec![
                ("cat", 1),
                ("the", 1),
                ("year", 1),
                ("budget", 2),
                ("reserve", 2),
                ("table", 2),
                ("economy", 4),
                ("rhythm", 1),
                ("1965", 0),
            ]
        );
    }

    #[test]
    fn short_monosyllabic_sentences_read_easily() {
        let score = readability(2, 6, "The cat sat. The dog ran.");
        assert_eq!(score.avg_words_per_sentence, 3.0);
        assert_eq!(score.flesch_reading_ease, 119.19);
    }

    #[test]
    fn dense_vocabulary_can_go_negative() {
        let score = readability(1, 3, "Economy reserve table.");
        assert_eq!(score.avg_words_per_sentence, 3.0);
        assert_eq!(score.flesch_reading_ease, -21.81);
    }

    #[test]
    fn empty_text_scores_zero() {
        let score = readability(0, 0, "");
        assert_eq!(score.avg_words_per_sentence, 0.0);
        assert_eq!(score.flesch_reading_ease, 0.0);
    }
}
