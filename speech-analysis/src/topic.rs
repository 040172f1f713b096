//! Sentence topic classification and per-year / per-speaker tallies.

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;
use speech_corpus::{SentenceRecord, SpeakerPeriods};
use speech_patterns::{PatternRegistry, GENERAL_TOPIC};
use std::collections::BTreeMap;

/// The winning topic for one sentence and its aggregate keyword weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicAssignment {
    pub topic: &'static str,
    pub score: u32,
}

impl TopicAssignment {
    pub fn is_general(&self) -> bool {
        self.topic == GENERAL_TOPIC
    }
}

/// Picks the topic with the strictly highest score. Earlier topics win
/// ties and a zero score is [`GENERAL_TOPIC`].
pub fn classify(registry: &PatternRegistry, text: &str) -> TopicAssignment {
    let lowered = text.to_lowercase();
    let mut best = TopicAssignment {
        topic: GENERAL_TOPIC,
        score: 0,
    };
    for topic in registry.topics() {
        let score = topic.score(&lowered);
        if score > best.score {
            best = TopicAssignment {
                topic: topic.key(),
                score,
            };
        }
    }
    best
}

/// One assignment per record, in record order.
pub fn classify_corpus(registry: &PatternRegistry, records: &[SentenceRecord]) -> Vec<TopicAssignment> {
    records
        .par_iter()
        .map(|r| classify(registry, &r.sentence_text))
        .collect()
}

/// Topic counts by year, by speaker and overall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopicTally {
    pub total_sentences: usize,
    pub classified_sentences: usize,
    pub totals: IndexMap<&'static str, usize>,
    pub by_year: BTreeMap<i32, IndexMap<&'static str, usize>>,
    pub by_speaker: IndexMap<String, IndexMap<&'static str, usize>>,
}

impl TopicTally {
    pub fn add(&mut self, year: i32, speaker: Option<&str>, assignment: TopicAssignment) {
        self.total_sentences += 1;
        if !assignment.is_general() {
            self.classified_sentences += 1;
        }
        *self.totals.entry(assignment.topic).or_default() += 1;
        *self
            .by_year
            .entry(year)
            .or_default()
            .entry(assignment.topic)
            .or_default() += 1;
        if let Some(speaker) = speaker {
            *self
                .by_speaker
                .entry(speaker.to_string())
                .or_default()
                .entry(assignment.topic)
                .or_default() += 1;
        }
    }

    /// Share of sentences assigned to a real topic.
    pub fn coverage(&self) -> f64 {
        if self.total_sentences == 0 {
            0.0
        } else {
            self.classified_sentences as f64 / self.total_sentences as f64
        }
    }
}

/// Classifies every record and tallies the results. Years without a
/// speaker period only contribute to the year and overall counts.
pub fn tally_corpus(
    registry: &PatternRegistry,
    records: &[SentenceRecord],
    speakers: &SpeakerPeriods,
) -> (Vec<TopicAssignment>, TopicTally) {
    let assignments = classify_corpus(registry, records);
    let mut tally = TopicTally::default();
    for (record, assignment) in records.iter().zip(&assignments) {
        tally.add(record.year, speakers.speaker_for(record.year), *assignment);
    }
    (assignments, tally)
}
