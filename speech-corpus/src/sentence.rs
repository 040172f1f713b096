//! Sentence records.

use serde::{Deserialize, Serialize};

/// One sentence of the final corpus.
///
/// `sentence_id` is dense over the whole corpus and `sentence_order` is dense
/// within a year, both assigned after every document has been parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub sentence_id: u64,
    pub year: i32,
    pub section_title: Option<String>,
    pub sentence_order: u64,
    pub sentence_text: String,
    pub word_count: u64,
    pub char_count: u64,
}

/// A sentence as produced by the parser, numbered within its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSentence {
    pub year: i32,
    pub section_title: Option<String>,
    pub sentence_order: u64,
    pub sentence_text: String,
    pub word_count: u64,
    pub char_count: u64,
}

/// Corpus-level statistics, logged after a build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusSummary {
    pub rows: usize,
    pub total_words: u64,
    pub avg_words_per_sentence: f64,
    pub year_range: Option<(i32, i32)>,
}

impl CorpusSummary {
    pub fn of(records: &[SentenceRecord]) -> Self {
        let total_words: u64 = records.iter().map(|r| r.word_count).sum();
        let avg_words_per_sentence = if records.is_empty() {
            0.0
        } else {
            total_words as f64 / records.len() as f64
        };
        let year_range = records
            .iter()
            .map(|r| r.year)
            .min()
            .zip(records.iter().map(|r| r.year).max());

        CorpusSummary {
            rows: records.len(),
            total_words,
            avg_words_per_sentence,
            year_range,
        }
    }
}
