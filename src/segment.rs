//! Sentence segmentation.
//!
//! The default segmenter uses Unicode sentence boundaries (UAX #29) and then
//! re-joins segments that were split after a known abbreviation such as
//! "Mr." or "Dr.", which the Unicode rules treat as sentence ends when the
//! next word is capitalised.

use crate::CollaboratorResult;
use std::collections::HashSet;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Splits a block of text into sentence spans.
///
/// Spans are byte ranges into the input and are returned in text order.
pub trait SentenceSegmenter: Send + Sync {
    fn segment(&self, text: &str) -> CollaboratorResult<Vec<Range<usize>>>;
}

/// Segmenter built on Unicode sentence boundaries with abbreviation repair.
#[derive(Debug, Clone)]
pub struct UnicodeSentenceSegmenter {
    abbreviations: HashSet<String>,
}

impl UnicodeSentenceSegmenter {
    pub fn new() -> Self {
        // Common abbreviations that should NOT end a sentence
        let common_abbrevs = [
            "dr", "mr", "mrs", "ms", "prof", "sr", "jr",
            "inc", "ltd", "corp", "co", "llc",
            "e.g", "i.e", "vs", "etc", "approx",
            "u.s", "u.k", "p.m", "a.m",
            "st", "ave", "blvd", "dept", "fig",
            "govt", "hon",
        ];

        UnicodeSentenceSegmenter {
            abbreviations: common_abbrevs.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn with_custom_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        for abbrev in abbreviations {
            self.abbreviations.insert(abbrev.to_lowercase());
        }
        self
    }

    /// True when the segment's final word is an abbreviation followed by a period.
    fn ends_with_abbreviation(&self, segment: &str) -> bool {
        let trimmed = segment.trim_end();
        if !trimmed.ends_with('.') {
            return false;
        }
        let last_word = trimmed
            .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"')
            .next()
            .unwrap_or("");
        let normalized = last_word.trim_end_matches('.').to_lowercase();
        !normalized.is_empty() && self.abbreviations.contains(&normalized)
    }
}

impl Default for UnicodeSentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment(&self, text: &str) -> CollaboratorResult<Vec<Range<usize>>> {
        let mut spans: Vec<Range<usize>> = Vec::new();
        let mut pending: Option<Range<usize>> = None;

        for (start, piece) in text.split_sentence_bound_indices() {
            let end = start + piece.len();
            let current = match pending.take() {
                Some(open) => open.start..end,
                None => start..end,
            };

            if self.ends_with_abbreviation(&text[current.clone()]) {
                pending = Some(current);
            } else {
                spans.push(current);
            }
        }

        if let Some(open) = pending {
            spans.push(open);
        }

        Ok(spans
            .into_iter()
            .filter(|span| !text[span.clone()].trim().is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(text: &str) -> Vec<&str> {
        UnicodeSentenceSegmenter::new()
            .segment(text)
            .unwrap()
            .into_iter()
            .map(|span| text[span].trim())
            .collect()
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        assert_eq!(
            sentences("Revenue grew strongly. Will it last? We think so!"),
            vec!["Revenue grew strongly.", "Will it last?", "We think so!"]
        );
    }

    #[test]
    fn keeps_titles_attached() {
        assert_eq!(
            sentences("I thank Mr. Lim for his work. Dr. Goh agreed."),
            vec!["I thank Mr. Lim for his work.", "Dr. Goh agreed."]
        );
    }

    #[test]
    fn custom_abbreviation() {
        let text = "See Cmd. Paper 3 for details. Then vote.";
        let spans = UnicodeSentenceSegmenter::new()
            .with_custom_abbreviations(&["Cmd"])
            .segment(text)
            .unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(text[spans[0].clone()].trim(), "See Cmd. Paper 3 for details.");
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(sentences("   ").is_empty());
    }
}
