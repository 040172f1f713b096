//! Keyword discovery: proposes new keywords for each topic from the
//! sentences it already wins.
//!
//! This is a diagnostic. Suggestions are never fed back into live
//! classification.

use crate::topic::TopicAssignment;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use speech_corpus::{DiscoveryConfig, SentenceRecord};
use speech_patterns::stopwords::DISCOVERY_STOP_WORDS;
use speech_patterns::PatternRegistry;
use std::collections::{BTreeSet, HashSet};
use tracing::warn;

static CANDIDATE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("Invalid candidate word regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DISCOVERY_STOP_WORDS.iter().copied().collect());

/// Lower-cased words of three or more letters, minus stop words.
pub fn candidate_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    CANDIDATE_WORD
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Contiguous `n`-word runs of `words`, joined with spaces.
pub fn word_ngrams(words: &[String], n: usize) -> Vec<String> {
    if n == 0 || words.len() < n {
        return Vec::new();
    }
    words.windows(n).map(|w| w.join(" ")).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordCandidate {
    pub term: String,
    pub count: usize,
    pub specificity: f64,
}

/// Discovery output for one topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicSuggestions {
    pub topic: &'static str,
    pub label: &'static str,
    pub classified_sentences: usize,
    pub original_keywords: Vec<String>,
    pub suggested_additions: Vec<KeywordCandidate>,
    /// Original keywords plus suggestions, sorted and deduplicated.
    pub combined_keywords: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct KeywordDiscovery {
    config: DiscoveryConfig,
}

impl Default for KeywordDiscovery {
    fn default() -> Self {
        Self::new(DiscoveryConfig::default())
    }
}

impl KeywordDiscovery {
    pub fn new(config: DiscoveryConfig) -> Self {
        KeywordDiscovery { config }
    }

    /// Runs discovery for every topic with at least one classified
    /// sentence, in topic key order. `assignments` line up with `records`
    /// by position; entries past the shorter of the two are ignored.
    pub fn discover(
        &self,
        registry: &PatternRegistry,
        records: &[SentenceRecord],
        assignments: &[TopicAssignment],
    ) -> Vec<TopicSuggestions> {
        if assignments.len() != records.len() {
            warn!(
                records = records.len(),
                assignments = assignments.len(),
                "assignment count differs from record count, unmatched entries ignored"
            );
        }
        let lowered: Vec<String> = records.iter().map(|r| r.sentence_text.to_lowercase()).collect();

        let mut topics: Vec<_> = registry.topics().iter().collect();
        topics.sort_by_key(|t| t.key());

        let mut suggestions = Vec::new();
        for topic in topics {
            let members: Vec<usize> = records
                .iter()
                .zip(assignments)
                .enumerate()
                .filter(|(_, (_, a))| a.topic == topic.key())
                .map(|(i, _)| i)
                .collect();
            if members.is_empty() {
                continue;
            }

            let existing: HashSet<&str> = topic.keywords().collect();
            let mut candidates: Vec<KeywordCandidate> = self
                .frequent_terms(members.iter().map(|&i| records[i].sentence_text.as_str()), &existing)
                .into_iter()
                .map(|(term, count)| {
                    let specificity = specificity(&lowered, &members, &term);
                    KeywordCandidate {
                        term,
                        count,
                        specificity,
                    }
                })
                .filter(|c| c.specificity >= self.config.min_specificity && c.count >= self.config.min_count)
                .collect();

            candidates.sort_by(|a, b| b.specificity.total_cmp(&a.specificity));
            candidates.truncate(self.config.keep);

            let original_keywords: Vec<String> = topic.keywords().map(str::to_string).collect();
            let combined_keywords: Vec<String> = original_keywords
                .iter()
                .cloned()
                .chain(candidates.iter().map(|c| c.term.clone()))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();

            suggestions.push(TopicSuggestions {
                topic: topic.key(),
                label: topic.label(),
                classified_sentences: members.len(),
                original_keywords,
                suggested_additions: candidates,
                combined_keywords,
            });
        }
        suggestions
    }

    /// The most frequent 1-, 2- and 3-word terms across `texts`, excluding
    /// existing keywords. Ties keep first-seen order.
    fn frequent_terms<'t>(
        &self,
        texts: impl Iterator<Item = &'t str>,
        existing: &HashSet<&str>,
    ) -> Vec<(String, usize)> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for text in texts {
            let words = candidate_words(text);
            for n in 1..=3 {
                for term in word_ngrams(&words, n) {
                    *counts.entry(term).or_default() += 1;
                }
            }
        }

        let mut terms: Vec<(String, usize)> = counts
            .into_iter()
            .filter(|(term, _)| !existing.contains(term.as_str()))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1));
        terms.truncate(self.config.candidates);
        terms
    }
}

/// Share of corpus sentences containing `term` that belong to `members`.
/// Zero when no sentence contains it.
pub fn specificity(lowered: &[String], members: &[usize], term: &str) -> f64 {
    let total = lowered.iter().filter(|t| t.contains(term)).count();
    if total == 0 {
        return 0.0;
    }
    let inside = members.iter().filter(|&&i| lowered[i].contains(term)).count();
    inside as f64 / total as f64
}
