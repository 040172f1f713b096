//! Entity mention extraction and the running mention index.
//!
//! Every entity is matched independently, so one sentence can mention
//! several countries. The index keeps two symmetric views of the same
//! records (year first and entity first) plus running totals.

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;
use speech_corpus::SentenceRecord;
use speech_patterns::{CountrySpec, PatternRegistry};
use std::collections::BTreeMap;

/// One entity found in one text, with the distinct alias forms that hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMention {
    pub entity: &'static CountrySpec,
    pub terms: Vec<String>,
}

impl EntityMention {
    pub fn name(&self) -> &'static str {
        self.entity.name
    }
}

/// Entities mentioned in `text`, in registry order.
pub fn extract_mentions(registry: &PatternRegistry, text: &str) -> Vec<EntityMention> {
    registry
        .entities()
        .iter()
        .filter_map(|matcher| {
            let terms = matcher.matched_terms(text);
            if terms.is_empty() {
                None
            } else {
                Some(EntityMention {
                    entity: matcher.spec(),
                    terms,
                })
            }
        })
        .collect()
}

/// A sentence that mentions a given entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentionRecord {
    pub sentence_id: u64,
    #[serde(skip)]
    pub year: i32,
    pub text: String,
    pub section: Option<String>,
    pub matched_terms: Vec<String>,
}

/// Mention records and counts, keyed by year and by entity name.
///
/// Entity maps keep first-mention order. Counts only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MentionIndex {
    pub by_year: BTreeMap<i32, IndexMap<&'static str, Vec<MentionRecord>>>,
    pub by_entity: IndexMap<&'static str, BTreeMap<i32, Vec<MentionRecord>>>,
    pub totals: IndexMap<&'static str, usize>,
    pub year_totals: BTreeMap<i32, IndexMap<&'static str, usize>>,
    #[serde(skip)]
    entities: IndexMap<&'static str, &'static CountrySpec>,
}

impl MentionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the mentions found in one sentence.
    pub fn record(&mut self, sentence: &SentenceRecord, mentions: Vec<EntityMention>) {
        for mention in mentions {
            let name = mention.name();
            let record = MentionRecord {
                sentence_id: sentence.sentence_id,
                year: sentence.year,
                text: sentence.sentence_text.clone(),
                section: sentence.section_title.clone(),
                matched_terms: mention.terms,
            };

            self.entities.entry(name).or_insert(mention.entity);
            self.by_year
                .entry(sentence.year)
                .or_default()
                .entry(name)
                .or_default()
                .push(record.clone());
            self.by_entity
                .entry(name)
                .or_default()
                .entry(sentence.year)
                .or_default()
                .push(record);
            *self.totals.entry(name).or_default() += 1;
            *self
                .year_totals
                .entry(sentence.year)
                .or_default()
                .entry(name)
                .or_default() += 1;
        }
    }

    /// Scans one sentence against the registry and records the result.
    pub fn scan(&mut self, registry: &PatternRegistry, sentence: &SentenceRecord) {
        let mentions = extract_mentions(registry, &sentence.sentence_text);
        self.record(sentence, mentions);
    }

    /// Folds a later partial index into this one. Counts add, record lists
    /// concatenate, and entities first seen in `other` are appended.
    pub fn merge(&mut self, other: MentionIndex) {
        for (name, spec) in other.entities {
            self.entities.entry(name).or_insert(spec);
        }
        for (year, entities) in other.by_year {
            let target = self.by_year.entry(year).or_default();
            for (name, records) in entities {
                target.entry(name).or_default().extend(records);
            }
        }
        for (name, years) in other.by_entity {
            let target = self.by_entity.entry(name).or_default();
            for (year, records) in years {
                target.entry(year).or_default().extend(records);
            }
        }
        for (name, count) in other.totals {
            *self.totals.entry(name).or_default() += count;
        }
        for (year, entities) in other.year_totals {
            let target = self.year_totals.entry(year).or_default();
            for (name, count) in entities {
                *target.entry(name).or_default() += count;
            }
        }
    }

    pub fn total_mentions(&self) -> usize {
        self.totals.values().sum()
    }

    /// Years that had at least one mention, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.by_year.keys().copied().collect()
    }

    pub fn entity(&self, name: &str) -> Option<&'static CountrySpec> {
        self.entities.get(name).copied()
    }

    pub fn total_for(&self, name: &str) -> usize {
        self.totals.get(name).copied().unwrap_or(0)
    }

    pub fn count_in_year(&self, name: &str, year: i32) -> usize {
        self.year_totals
            .get(&year)
            .and_then(|entities| entities.get(name))
            .copied()
            .unwrap_or(0)
    }
}

/// Builds the index over `records` in parallel.
///
/// Workers fold contiguous runs of sentences into partial indices that are
/// merged left to right, so the result matches a sequential scan.
pub fn index_corpus(registry: &PatternRegistry, records: &[SentenceRecord]) -> MentionIndex {
    records
        .par_iter()
        .fold(MentionIndex::new, |mut index, sentence| {
            index.scan(registry, sentence);
            index
        })
        .reduce(MentionIndex::new, |mut left, right| {
            left.merge(right);
            left
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(sentence_id: u64, year: i32, text: &str) -> SentenceRecord {
        SentenceRecord {
            sentence_id,
            year,
            section_title: Some("Economy".to_string()),
            sentence_order: sentence_id,
            sentence_text: text.to_string(),
            word_count: text.split_whitespace().count() as u64,
            char_count: text.chars().count() as u64,
        }
    }

    #[test]
    fn mentions_are_independent_per_entity() {
        let registry = PatternRegistry::shared().unwrap();
        let mentions = extract_mentions(registry, "Trade with Malaysia and Indonesia grew.");
        let names: Vec<_> = mentions.iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Malaysia"));
        assert!(names.contains(&"Indonesia"));
    }

    #[test]
    fn terms_are_distinct_in_order() {
        let registry = PatternRegistry::shared().unwrap();
        let mentions = extract_mentions(registry, "China and Chinese firms, and China again.");
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].terms, vec!["China", "Chinese"]);
    }

    #[test]
    fn counts_accumulate_across_views() {
        let registry = PatternRegistry::shared().unwrap();
        let mut index = MentionIndex::new();
        index.scan(registry, &sentence(0, 1970, "Malaysia is our neighbour."));
        index.scan(registry, &sentence(1, 1970, "Nothing foreign here."));
        index.scan(registry, &sentence(2, 1971, "Malaysia and Indonesia again."));

        assert_eq!(index.total_for("Malaysia"), 2);
        assert_eq!(index.total_for("Indonesia"), 1);
        assert_eq!(index.count_in_year("Malaysia", 1971), 1);
        assert_eq!(index.total_mentions(), 3);
        assert_eq!(index.years(), vec![1970, 1971]);
        assert_eq!(index.by_entity["Malaysia"][&1970][0].sentence_id, 0);
        assert_eq!(index.by_year[&1971]["Indonesia"][0].matched_terms, vec!["Indonesia"]);
    }

    #[test]
    fn parallel_index_matches_sequential_scan() {
        let registry = PatternRegistry::shared().unwrap();
        let texts = [
            "Japan and China are large markets.",
            "The US economy slowed.",
            "Our ties with Malaysia remain close.",
            "China clay exports are not a country mention.",
            "Indonesia and Malaysia cooperate on haze.",
            "Japan invested heavily in our factories.",
        ];
        let records: Vec<_> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| sentence(i as u64, 1980 + (i as i32 % 2), t))
            .collect();

        let mut sequential = MentionIndex::new();
        for record in &records {
            sequential.scan(registry, record);
        }

        assert_eq!(index_corpus(registry, &records), sequential);
    }
}
