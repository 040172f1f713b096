//! Distinctive phrases per speaker.
//!
//! Speech documents are cleaned, grouped by speaker period and split into
//! word n-grams. Each phrase a speaker uses at least `min_count` times is
//! scored as
//!
//! ```text
//! count / total * (1 + (speakers - speakers_using) / speakers) * count
//! ```
//!
//! so frequent phrases that few other speakers use rank highest.

use crate::round_to;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use speech_corpus::{NgramConfig, SourceDocument, SpeakerPeriods};
use speech_patterns::stopwords::{BORING_PHRASES, PHRASE_STOPWORDS};
use std::collections::HashSet;
use tracing::debug;

static HEADING_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#.*$").expect("Invalid heading line regex"));
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*|__").expect("Invalid emphasis regex"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("Invalid link regex"));
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("Invalid non-word regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));
static FISCAL_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4} \d{2}$").expect("Invalid fiscal year regex"));
static SPELLED_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]( [a-z])+$").expect("Invalid spelled letters regex"));

/// Substrings that mark a phrase as document plumbing or a speaker's name.
const NOISE_FRAGMENTS: &[&str] = &[
    "hansard",
    "annex",
    "document",
    "please refer",
    "toannex",
    "keng yam",
    "richard hu",
    "hu tsu",
    "tsu tau",
];

/// Strips markdown and punctuation from a speech document and lower-cases
/// it. Link labels are kept, heading lines are dropped.
pub fn clean_document(text: &str) -> String {
    let text = HEADING_LINE.replace_all(text, "");
    let text = EMPHASIS.replace_all(&text, "");
    let text = LINK.replace_all(&text, "$1");
    let lowered = text.to_lowercase();
    let text = NON_WORD.replace_all(&lowered, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Exclusion rules for candidate phrases.
#[derive(Debug, Clone)]
pub struct PhraseFilter {
    stopwords: HashSet<&'static str>,
    boring: HashSet<&'static str>,
}

impl Default for PhraseFilter {
    fn default() -> Self {
        PhraseFilter {
            stopwords: PHRASE_STOPWORDS.iter().copied().collect(),
            boring: BORING_PHRASES.iter().copied().collect(),
        }
    }
}

impl PhraseFilter {
    /// True when the phrase formed by `words` must not be ranked.
    pub fn is_excluded(&self, words: &[&str]) -> bool {
        let (Some(first), Some(last)) = (words.first(), words.last()) else {
            return true;
        };
        if self.stopwords.contains(first) || self.stopwords.contains(last) {
            return true;
        }
        if words.iter().all(|w| self.stopwords.contains(w)) {
            return true;
        }
        self.is_boring(&words.join(" "))
    }

    pub fn is_boring(&self, phrase: &str) -> bool {
        self.boring.contains(phrase)
            || NOISE_FRAGMENTS.iter().any(|noise| phrase.contains(noise))
            || FISCAL_YEAR.is_match(phrase)
            || SPELLED_LETTERS.is_match(phrase)
    }

    /// Eligible `n`-grams of `words`, in text order.
    pub fn ngrams(&self, words: &[&str], n: usize) -> Vec<String> {
        if n == 0 || words.len() < n {
            return Vec::new();
        }
        words
            .windows(n)
            .filter(|w| !self.is_excluded(w))
            .map(|w| w.join(" "))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPhrase {
    pub phrase: String,
    pub count: u64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakerPhrases {
    /// `first-last` year span.
    pub years: String,
    pub num_speeches: usize,
    pub phrases: Vec<ScoredPhrase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NgramMetadata {
    pub n_values: Vec<usize>,
    pub top_k: usize,
}

/// Ranked phrases per speaker, in order of each speaker's first year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NgramReport {
    pub speakers: IndexMap<String, SpeakerPhrases>,
    pub metadata: NgramMetadata,
}

struct SpeakerText {
    text: String,
    years: Vec<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct NgramRanker {
    config: NgramConfig,
    filter: PhraseFilter,
}

impl NgramRanker {
    pub fn new(config: NgramConfig) -> Self {
        NgramRanker {
            config,
            filter: PhraseFilter::default(),
        }
    }

    pub fn filter(&self) -> &PhraseFilter {
        &self.filter
    }

    /// Phrase counts for one cleaned text: every size in turn, first
    /// occurrence order.
    pub fn count_phrases(&self, cleaned: &str) -> IndexMap<String, u64> {
        let words: Vec<&str> = cleaned.split_whitespace().collect();
        let mut counts: IndexMap<String, u64> = IndexMap::new();
        for &n in &self.config.sizes {
            for phrase in self.filter.ngrams(&words, n) {
                *counts.entry(phrase).or_default() += 1;
            }
        }
        counts
    }

    /// Ranks phrases for every speaker that has at least one non-empty
    /// document. Documents in years without a speaker are ignored.
    pub fn rank(&self, documents: &[SourceDocument], speakers: &SpeakerPeriods) -> NgramReport {
        let mut ordered: Vec<&SourceDocument> = documents.iter().collect();
        ordered.sort_by_key(|d| d.year);

        let mut grouped: IndexMap<String, SpeakerText> = IndexMap::new();
        for document in ordered {
            let Some(speaker) = speakers.speaker_for(document.year) else {
                debug!(document = %document.id, year = document.year, "no speaker for year, skipping");
                continue;
            };
            let cleaned = clean_document(&document.text);
            if cleaned.is_empty() {
                continue;
            }
            let entry = grouped.entry(speaker.to_string()).or_insert_with(|| SpeakerText {
                text: String::new(),
                years: Vec::new(),
            });
            entry.text.push(' ');
            entry.text.push_str(&cleaned);
            entry.years.push(document.year);
        }

        let counts: Vec<IndexMap<String, u64>> =
            grouped.values().map(|s| self.count_phrases(&s.text)).collect();
        let speaker_total = counts.len();

        let mut report = NgramReport {
            speakers: IndexMap::new(),
            metadata: NgramMetadata {
                n_values: self.config.sizes.clone(),
                top_k: self.config.top_k,
            },
        };

        for ((speaker, text), phrase_counts) in grouped.iter().zip(&counts) {
            let total: u64 = phrase_counts.values().sum();

            let mut scored: Vec<ScoredPhrase> = phrase_counts
                .iter()
                .filter(|(_, count)| **count >= self.config.min_count)
                .map(|(phrase, &count)| {
                    let users = counts.iter().filter(|c| c.get(phrase).map_or(false, |&n| n > 0)).count();
                    ScoredPhrase {
                        phrase: phrase.clone(),
                        count,
                        score: round_to(distinctiveness(count, total, users, speaker_total), 4),
                    }
                })
                .collect();

            scored.sort_by(|a, b| b.score.total_cmp(&a.score));
            scored.truncate(self.config.top_k);

            let first = text.years.iter().min().copied().unwrap_or_default();
            let last = text.years.iter().max().copied().unwrap_or_default();
            report.speakers.insert(
                speaker.clone(),
                SpeakerPhrases {
                    years: format!("{}-{}", first, last),
                    num_speeches: text.years.len(),
                    phrases: scored,
                },
            );
        }

        report
    }
}

/// Term frequency within the speaker, boosted by how few speakers use the
/// phrase, scaled by the raw count.
pub fn distinctiveness(count: u64, total: u64, users: usize, speakers: usize) -> f64 {
    let tf = count as f64 / total.max(1) as f64;
    let boost = if speakers == 0 {
        1.0
    } else {
        1.0 + (speakers - users.min(speakers)) as f64 / speakers as f64
    };
    tf * boost * count as f64
}
