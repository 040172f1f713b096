//! Analysis passes over a built speech corpus.
//!
//! All passes share one compiled [`PatternRegistry`](speech_patterns::PatternRegistry)
//! and only read the corpus, so they can run in any order.
//!
//! ## Modules
//!
//! - [`mention`] - Country mentions and the [`MentionIndex`]
//! - [`rollup`] - Overview, time series, details and map views of the index,
//!   and yearly style statistics per speaker
//! - [`topic`] - Topic classification and tallies
//! - [`discovery`] - Candidate keyword mining per topic
//! - [`lexical`] - Type-token ratio and MTLD
//! - [`readability`] - Sentence length and Flesch reading ease
//! - [`linguistic`] - Temporal, certainty and passive voice metrics
//! - [`ngram`] - Distinctive phrases per speaker

mod errors;

pub mod discovery;
pub mod lexical;
pub mod linguistic;
pub mod mention;
pub mod ngram;
pub mod readability;
pub mod rollup;
pub mod topic;

pub use discovery::{KeywordCandidate, KeywordDiscovery, TopicSuggestions};
pub use errors::{AnalysisError, AnalysisResult};
pub use lexical::VocabularyRichness;
pub use linguistic::{LinguisticEngine, LinguisticProfile, TextMetrics};
pub use mention::{extract_mentions, index_corpus, EntityMention, MentionIndex, MentionRecord};
pub use ngram::{clean_document, NgramRanker, NgramReport, PhraseFilter, ScoredPhrase, SpeakerPhrases};
pub use readability::Readability;
pub use rollup::{entity_details, global_overview, map_data, time_series, yearly_overview, YearlyOverview};
pub use topic::{classify, classify_corpus, tally_corpus, TopicAssignment, TopicTally};

/// Rounds half away from zero to `places` decimals.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    mod country_mentions;
    mod linguistic_metrics;
    mod phrase_ranking;
    mod topic_classification;
}
