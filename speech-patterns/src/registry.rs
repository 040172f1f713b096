//! The compiled pattern registry.
//!
//! All matchers are built once. [`PatternRegistry::shared`] holds the
//! process-wide instance built from the static tables. Tests and callers
//! with custom tables use [`PatternRegistry::from_tables`].

use crate::alias::EntityMatcher;
use crate::countries::{CountrySpec, COUNTRIES};
use crate::markers::{BACKWARD_MARKERS, CERTAINTY_MARKERS, FORWARD_MARKERS, HEDGE_MARKERS};
use crate::topics::{TopicSpec, MINISTRY_TOPICS};
use crate::{PatternError, PatternResult};
use once_cell::sync::OnceCell;
use regex::Regex;

/// A topic with lower-cased keywords and their weights.
#[derive(Debug, Clone)]
pub struct CompiledTopic {
    spec: &'static TopicSpec,
    keywords: Vec<(String, u32)>,
}

impl CompiledTopic {
    fn new(spec: &'static TopicSpec) -> Self {
        let keywords = spec
            .keywords
            .iter()
            .map(|k| {
                let weight = k.split_whitespace().count().max(1) as u32;
                (k.to_lowercase(), weight)
            })
            .collect();
        CompiledTopic { spec, keywords }
    }

    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|(k, _)| k.as_str())
    }

    /// Sum of weights of keywords occurring as substrings of `lowered`.
    pub fn score(&self, lowered: &str) -> u32 {
        self.keywords
            .iter()
            .filter(|(keyword, _)| lowered.contains(keyword.as_str()))
            .map(|(_, weight)| weight)
            .sum()
    }
}

/// Whole-word counters for one marker family.
#[derive(Debug, Clone)]
pub struct MarkerFamily {
    patterns: Vec<Regex>,
}

impl MarkerFamily {
    fn compile(family: &str, markers: &[&str]) -> PatternResult<Self> {
        let patterns = markers
            .iter()
            .map(|marker| {
                Regex::new(&format!(r"\b{}\b", regex::escape(marker))).map_err(|source| {
                    PatternError::Compile {
                        owner: format!("{} marker {:?}", family, marker),
                        source,
                    }
                })
            })
            .collect::<PatternResult<Vec<_>>>()?;
        Ok(MarkerFamily { patterns })
    }

    /// Total occurrences of every marker in `text`, lower-cased first.
    pub fn count(&self, text: &str) -> usize {
        let lowered = text.to_lowercase();
        self.count_lowered(&lowered)
    }

    /// Same as [`count`](Self::count) for text that is already lower-case.
    pub fn count_lowered(&self, lowered: &str) -> usize {
        self.patterns
            .iter()
            .map(|pattern| pattern.find_iter(lowered).count())
            .sum()
    }
}

#[derive(Debug, Clone)]
pub struct MarkerSets {
    pub forward: MarkerFamily,
    pub backward: MarkerFamily,
    pub hedge: MarkerFamily,
    pub certainty: MarkerFamily,
}

impl MarkerSets {
    fn compile() -> PatternResult<Self> {
        Ok(MarkerSets {
            forward: MarkerFamily::compile("forward", FORWARD_MARKERS)?,
            backward: MarkerFamily::compile("backward", BACKWARD_MARKERS)?,
            hedge: MarkerFamily::compile("hedge", HEDGE_MARKERS)?,
            certainty: MarkerFamily::compile("certainty", CERTAINTY_MARKERS)?,
        })
    }
}

/// Immutable, thread-safe set of compiled matchers.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    entities: Vec<EntityMatcher>,
    topics: Vec<CompiledTopic>,
    markers: MarkerSets,
}

static SHARED: OnceCell<PatternRegistry> = OnceCell::new();

impl PatternRegistry {
    /// Compiles the built-in country, topic and marker tables.
    pub fn compile() -> PatternResult<Self> {
        Self::from_tables(COUNTRIES, MINISTRY_TOPICS)
    }

    pub fn from_tables(
        countries: &'static [CountrySpec],
        topics: &'static [TopicSpec],
    ) -> PatternResult<Self> {
        let entities = countries
            .iter()
            .map(EntityMatcher::compile)
            .collect::<PatternResult<Vec<_>>>()?;

        Ok(PatternRegistry {
            entities,
            topics: topics.iter().map(CompiledTopic::new).collect(),
            markers: MarkerSets::compile()?,
        })
    }

    /// The process-wide registry over the built-in tables, compiled on
    /// first use.
    pub fn shared() -> PatternResult<&'static PatternRegistry> {
        SHARED.get_or_try_init(Self::compile)
    }

    /// Entity matchers in table order.
    pub fn entities(&self) -> &[EntityMatcher] {
        &self.entities
    }

    pub fn entity(&self, name: &str) -> Option<&EntityMatcher> {
        self.entities.iter().find(|e| e.name() == name)
    }

    /// Topics in registry order. Earlier topics win ties.
    pub fn topics(&self) -> &[CompiledTopic] {
        &self.topics
    }

    pub fn topic(&self, key: &str) -> Option<&CompiledTopic> {
        self.topics.iter().find(|t| t.key() == key)
    }

    pub fn markers(&self) -> &MarkerSets {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_registry_is_built_once() {
        let a = PatternRegistry::shared().unwrap();
        let b = PatternRegistry::shared().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.entities().len(), COUNTRIES.len());
        assert_eq!(a.topics().len(), MINISTRY_TOPICS.len());
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternRegistry>();
    }

    #[test]
    fn phrase_weight_is_word_count() {
        const TOPICS: &[TopicSpec] = &[TopicSpec {
            key: "tax",
            label: "Tax",
            keywords: &["income tax", "tax"],
        }];
        let registry = PatternRegistry::from_tables(&[], TOPICS).unwrap();
        let topic = &registry.topics()[0];
        assert_eq!(topic.score("the income tax rate"), 3);
        assert_eq!(topic.score("a tax on goods"), 1);
        assert_eq!(topic.score("nothing relevant"), 0);
    }

    #[test]
    fn markers_count_whole_words() {
        let registry = PatternRegistry::shared().unwrap();
        let forward = &registry.markers().forward;
        assert_eq!(forward.count("We WILL do this. Willing hands."), 1);
        assert_eq!(forward.count("We are going to build the future"), 2);
    }
}
