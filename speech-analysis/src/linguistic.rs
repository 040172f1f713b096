//! Linguistic metrics over a document's full text.
//!
//! Four independent families are computed from the same text snapshot:
//! vocabulary richness, temporal orientation (forward vs backward
//! markers), certainty (certainty vs hedge markers) and passive voice.
//! Yearly profiles add sentence length and reading ease from the shard's
//! sentence counts.

use crate::lexical::{vocabulary_richness, VocabularyRichness};
use crate::readability::{readability, Readability};
use crate::{round_to, AnalysisError, AnalysisResult};
use serde::Serialize;
use speech_corpus::persist::read_shard;
use speech_nlp::{DependencyParser, HeuristicDependencyParser};
use speech_patterns::MarkerSets;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// `numerator / (numerator + other)` rounded to 4 places, or `default`
/// when both counts are zero.
pub fn marker_ratio(numerator: usize, other: usize, default: f64) -> f64 {
    let total = numerator + other;
    if total == 0 {
        default
    } else {
        round_to(numerator as f64 / total as f64, 4)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalOrientation {
    pub forward_count: usize,
    pub backward_count: usize,
    pub temporal_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertaintyIndex {
    pub hedge_count: usize,
    pub certainty_count: usize,
    pub certainty_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassiveVoice {
    pub passive_count: usize,
    pub active_count: usize,
    pub passive_ratio: f64,
}

/// All metric families for one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMetrics {
    pub vocabulary: VocabularyRichness,
    pub temporal: TemporalOrientation,
    pub certainty: CertaintyIndex,
    pub passive: PassiveVoice,
}

/// One row of the yearly linguistic table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinguisticProfile {
    pub year: i32,
    pub total_sentences: usize,
    pub total_words: u64,
    pub avg_words_per_sentence: f64,
    pub readability: f64,
    pub ttr: f64,
    pub mtld: Option<f64>,
    pub unique_words: usize,
    pub forward_count: usize,
    pub backward_count: usize,
    pub temporal_ratio: f64,
    pub hedge_count: usize,
    pub certainty_count: usize,
    pub certainty_ratio: f64,
    pub passive_count: usize,
    pub active_count: usize,
    pub passive_ratio: f64,
}

impl LinguisticProfile {
    pub fn new(
        year: i32,
        total_sentences: usize,
        total_words: u64,
        readability: Readability,
        metrics: TextMetrics,
    ) -> Self {
        LinguisticProfile {
            year,
            total_sentences,
            total_words,
            avg_words_per_sentence: readability.avg_words_per_sentence,
            readability: readability.flesch_reading_ease,
            ttr: metrics.vocabulary.ttr,
            mtld: metrics.vocabulary.mtld,
            unique_words: metrics.vocabulary.unique_words,
            forward_count: metrics.temporal.forward_count,
            backward_count: metrics.temporal.backward_count,
            temporal_ratio: metrics.temporal.temporal_ratio,
            hedge_count: metrics.certainty.hedge_count,
            certainty_count: metrics.certainty.certainty_count,
            certainty_ratio: metrics.certainty.certainty_ratio,
            passive_count: metrics.passive.passive_count,
            active_count: metrics.passive.active_count,
            passive_ratio: metrics.passive.passive_ratio,
        }
    }
}

/// Computes [`TextMetrics`] with compiled marker sets and a dependency
/// parser collaborator.
#[derive(Clone)]
pub struct LinguisticEngine<'r> {
    markers: &'r MarkerSets,
    parser: Arc<dyn DependencyParser>,
}

impl std::fmt::Debug for LinguisticEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinguisticEngine").finish_non_exhaustive()
    }
}

impl<'r> LinguisticEngine<'r> {
    pub fn new(markers: &'r MarkerSets) -> Self {
        LinguisticEngine {
            markers,
            parser: Arc::new(HeuristicDependencyParser::new()),
        }
    }

    pub fn with_parser(mut self, parser: Arc<dyn DependencyParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn temporal_orientation(&self, lowered: &str) -> TemporalOrientation {
        let forward = self.markers.forward.count_lowered(lowered);
        let backward = self.markers.backward.count_lowered(lowered);
        TemporalOrientation {
            forward_count: forward,
            backward_count: backward,
            temporal_ratio: marker_ratio(forward, backward, 0.5),
        }
    }

    pub fn certainty_index(&self, lowered: &str) -> CertaintyIndex {
        let hedge = self.markers.hedge.count_lowered(lowered);
        let certainty = self.markers.certainty.count_lowered(lowered);
        CertaintyIndex {
            hedge_count: hedge,
            certainty_count: certainty,
            certainty_ratio: marker_ratio(certainty, hedge, 0.5),
        }
    }

    pub fn passive_voice(&self, text: &str) -> AnalysisResult<PassiveVoice> {
        let arcs = self
            .parser
            .subject_arcs(text)
            .map_err(|source| AnalysisError::Collaborator {
                context: "passive voice".to_string(),
                source,
            })?;
        let passive = arcs.iter().filter(|a| a.is_passive()).count();
        let active = arcs.iter().filter(|a| a.is_active()).count();
        Ok(PassiveVoice {
            passive_count: passive,
            active_count: active,
            passive_ratio: marker_ratio(passive, active, 0.0),
        })
    }

    pub fn analyze_text(&self, text: &str) -> AnalysisResult<TextMetrics> {
        let lowered = text.to_lowercase();
        Ok(TextMetrics {
            vocabulary: vocabulary_richness(text),
            temporal: self.temporal_orientation(&lowered),
            certainty: self.certainty_index(&lowered),
            passive: self.passive_voice(text)?,
        })
    }

    /// Profiles the shard for `year`. Sentence texts are joined with single
    /// spaces. A missing shard yields `None`.
    pub fn analyze_year(&self, shard_dir: &Path, year: i32) -> AnalysisResult<Option<LinguisticProfile>> {
        let Some(records) = read_shard(shard_dir, year)? else {
            return Ok(None);
        };

        let text = records
            .iter()
            .map(|r| r.sentence_text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let total_words: u64 = records.iter().map(|r| r.word_count).sum();
        let metrics = self.analyze_text(&text)?;
        let ease = readability(records.len(), total_words, &text);
        let profile = LinguisticProfile::new(year, records.len(), total_words, ease, metrics);

        debug!(
            year,
            ttr = profile.ttr,
            readability = profile.readability,
            temporal = profile.temporal_ratio,
            certainty = profile.certainty_ratio,
            passive = profile.passive_ratio,
            "analyzed year"
        );
        Ok(Some(profile))
    }

    /// Profiles every year in `years` that has a shard, in the given order.
    pub fn analyze_years(
        &self,
        shard_dir: &Path,
        years: impl IntoIterator<Item = i32>,
    ) -> AnalysisResult<Vec<LinguisticProfile>> {
        let mut profiles = Vec::new();
        for year in years {
            if let Some(profile) = self.analyze_year(shard_dir, year)? {
                profiles.push(profile);
            }
        }
        info!(years = profiles.len(), "linguistic analysis complete");
        Ok(profiles)
    }
}
