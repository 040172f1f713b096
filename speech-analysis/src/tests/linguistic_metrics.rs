use std::sync::Arc;

use speech_corpus::persist::write_shards;
use speech_corpus::{Corpus, SentenceRecord, SpeakerPeriods};
use speech_nlp::{
    CollaboratorError, CollaboratorResult, DependencyParser, HeadPos, SubjectArc, SubjectRelation,
};
use speech_patterns::PatternRegistry;

use crate::linguistic::marker_ratio;
use crate::{yearly_overview, AnalysisError, LinguisticEngine, LinguisticProfile};

/// Returns the same arcs for any text.
struct ScriptedParser(Vec<SubjectArc>);

impl DependencyParser for ScriptedParser {
    fn subject_arcs(&self, _text: &str) -> CollaboratorResult<Vec<SubjectArc>> {
        Ok(self.0.clone())
    }
}

struct UnavailableParser;

impl DependencyParser for UnavailableParser {
    fn subject_arcs(&self, _text: &str) -> CollaboratorResult<Vec<SubjectArc>> {
        Err(CollaboratorError::Unavailable {
            collaborator: "dependency parser",
            message: "model not installed".to_string(),
        })
    }
}

fn arc(relation: SubjectRelation, head: HeadPos) -> SubjectArc {
    SubjectArc { relation, head }
}

fn engine(arcs: Vec<SubjectArc>) -> LinguisticEngine<'static> {
    let registry = PatternRegistry::shared().unwrap();
    LinguisticEngine::new(registry.markers()).with_parser(Arc::new(ScriptedParser(arcs)))
}

#[test]
fn ratios_default_when_nothing_is_counted() {
    let metrics = engine(Vec::new())
        .analyze_text("Singapore trade figures for the quarter")
        .unwrap();

    assert_eq!(metrics.temporal.forward_count, 0);
    assert_eq!(metrics.temporal.backward_count, 0);
    assert_eq!(metrics.temporal.temporal_ratio, 0.5);
    assert_eq!(metrics.certainty.certainty_ratio, 0.5);
    assert_eq!(metrics.passive.passive_ratio, 0.0);
    assert_eq!(metrics.vocabulary.mtld, None);
}

#[test]
fn marker_families_are_counted_independently() {
    let metrics = engine(Vec::new())
        .analyze_text("We will build. Growth was strong last year.")
        .unwrap();

    assert_eq!(metrics.temporal.forward_count, 1);
    assert_eq!(metrics.temporal.backward_count, 2);
    assert_eq!(metrics.temporal.temporal_ratio, 0.3333);
    assert_eq!(metrics.certainty.certainty_count, 1);
    assert_eq!(metrics.certainty.hedge_count, 0);
    assert_eq!(metrics.certainty.certainty_ratio, 1.0);
}

#[test]
fn passive_ratio_ignores_copular_subjects() {
    let arcs = vec![
        arc(SubjectRelation::Passive, HeadPos::Verb),
        arc(SubjectRelation::Nominal, HeadPos::Verb),
        arc(SubjectRelation::Nominal, HeadPos::Verb),
        arc(SubjectRelation::Nominal, HeadPos::Verb),
        arc(SubjectRelation::Nominal, HeadPos::Auxiliary),
    ];
    let passive = engine(arcs).passive_voice("any text").unwrap();

    assert_eq!(passive.passive_count, 1);
    assert_eq!(passive.active_count, 3);
    assert_eq!(passive.passive_ratio, 0.25);
}

#[test]
fn parser_failure_is_reported() {
    let registry = PatternRegistry::shared().unwrap();
    let engine = LinguisticEngine::new(registry.markers()).with_parser(Arc::new(UnavailableParser));
    assert!(matches!(
        engine.analyze_text("The bill was passed."),
        Err(AnalysisError::Collaborator { .. })
    ));
}

#[test]
fn ratio_rounding() {
    assert_eq!(marker_ratio(2, 1, 0.5), 0.6667);
    assert_eq!(marker_ratio(0, 0, 0.0), 0.0);
}

fn record(sentence_id: u64, year: i32, order: u64, text: &str) -> SentenceRecord {
    SentenceRecord {
        sentence_id,
        year,
        section_title: None,
        sentence_order: order,
        sentence_text: text.to_string(),
        word_count: text.split_whitespace().count() as u64,
        char_count: text.chars().count() as u64,
    }
}

#[test]
fn year_profile_reads_its_shard() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = Corpus::from_records(vec![
        record(0, 1985, 0, "The recession was severe."),
        record(1, 1985, 1, "We will recover."),
        record(2, 1986, 0, "Growth returned."),
    ]);
    write_shards(dir.path(), &corpus).unwrap();

    let engine = engine(vec![arc(SubjectRelation::Nominal, HeadPos::Verb)]);
    let profile = engine.analyze_year(dir.path(), 1985).unwrap().unwrap();

    assert_eq!(profile.year, 1985);
    assert_eq!(profile.total_sentences, 2);
    assert_eq!(profile.total_words, 7);
    assert_eq!(profile.avg_words_per_sentence, 3.5);
    assert_eq!(profile.readability, 58.25);
    assert_eq!(profile.forward_count, 1);
    assert_eq!(profile.backward_count, 1);
    assert_eq!(profile.temporal_ratio, 0.5);
    assert_eq!(profile.active_count, 1);

    assert_eq!(engine.analyze_year(dir.path(), 1999).unwrap(), None);

    let profiles = engine.analyze_years(dir.path(), 1984..=1986).unwrap();
    let years: Vec<_> = profiles.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![1985, 1986]);
}

fn styled_profile(year: i32, total_sentences: usize, avg_words_per_sentence: f64, readability: f64) -> LinguisticProfile {
    LinguisticProfile {
        year,
        total_sentences,
        total_words: (avg_words_per_sentence * total_sentences as f64) as u64,
        avg_words_per_sentence,
        readability,
        ttr: 0.5,
        mtld: None,
        unique_words: 0,
        forward_count: 0,
        backward_count: 0,
        temporal_ratio: 0.5,
        hedge_count: 0,
        certainty_count: 0,
        certainty_ratio: 0.5,
        passive_count: 0,
        active_count: 0,
        passive_ratio: 0.0,
    }
}

#[test]
fn yearly_style_groups_by_speaker() {
    let profiles = vec![
        styled_profile(1968, 20, 15.0, 45.2),
        styled_profile(1965, 10, 20.0, 40.0),
        styled_profile(1966, 5, 25.0, 30.0),
        styled_profile(1950, 3, 10.0, 60.0),
    ];
    let overview = yearly_overview(&profiles, &SpeakerPeriods::default());

    let years: Vec<_> = overview.by_year.keys().copied().collect();
    assert_eq!(years, vec![1950, 1965, 1966, 1968]);
    assert_eq!(overview.by_year[&1950].speaker, None);
    assert_eq!(overview.by_year[&1968].speaker.as_deref(), Some("Goh Keng Swee"));
    assert_eq!(overview.by_year[&1968].readability, 45.2);

    let speakers: Vec<_> = overview.by_speaker.keys().map(String::as_str).collect();
    assert_eq!(speakers, vec!["Goh Keng Swee", "Lim Kim San"]);

    let goh = &overview.by_speaker["Goh Keng Swee"];
    assert_eq!(goh.num_speeches, 2);
    assert_eq!(goh.total_sentences, 30);
    assert_eq!(goh.avg_sentence_length, 17.5);
    assert_eq!(goh.avg_readability, 42.6);

    let lim = &overview.by_speaker["Lim Kim San"];
    assert_eq!(lim.num_speeches, 1);
    assert_eq!(lim.avg_readability, 30.0);
}
