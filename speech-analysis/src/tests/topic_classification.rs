use speech_corpus::{SentenceRecord, SpeakerPeriod, SpeakerPeriods};
use speech_patterns::{PatternRegistry, TopicSpec, GENERAL_TOPIC};

use crate::discovery::{candidate_words, specificity, word_ngrams};
use crate::{classify, tally_corpus, KeywordDiscovery};

const TOPICS: &[TopicSpec] = &[
    TopicSpec {
        key: "transport",
        label: "Transport",
        keywords: &["rail", "road"],
    },
    TopicSpec {
        key: "housing",
        label: "Housing",
        keywords: &["flat", "home"],
    },
    TopicSpec {
        key: "tax",
        label: "Tax",
        keywords: &["income tax", "tax"],
    },
];

fn registry() -> PatternRegistry {
    PatternRegistry::from_tables(&[], TOPICS).unwrap()
}

fn sentence(sentence_id: u64, year: i32, text: &str) -> SentenceRecord {
    SentenceRecord {
        sentence_id,
        year,
        section_title: None,
        sentence_order: sentence_id,
        sentence_text: text.to_string(),
        word_count: text.split_whitespace().count() as u64,
        char_count: text.chars().count() as u64,
    }
}

#[test]
fn ties_go_to_the_earlier_topic() {
    let registry = registry();
    for _ in 0..5 {
        let assignment = classify(&registry, "A new rail line near every flat.");
        assert_eq!(assignment.topic, "transport");
        assert_eq!(assignment.score, 1);
    }

    let assignment = classify(&registry, "A home near the road and a flat.");
    assert_eq!(assignment.topic, "housing");
    assert_eq!(assignment.score, 2);
}

#[test]
fn phrases_outweigh_single_words() {
    let assignment = classify(&registry(), "Income tax on rail and road users.");
    assert_eq!(assignment.topic, "tax");
    assert_eq!(assignment.score, 3);
}

#[test]
fn zero_score_is_general() {
    let assignment = classify(&registry(), "Nothing to see here.");
    assert_eq!(assignment.topic, GENERAL_TOPIC);
    assert_eq!(assignment.score, 0);
    assert!(assignment.is_general());
}

#[test]
fn matching_is_case_insensitive_substring() {
    assert_eq!(classify(&registry(), "RAILWAYS were built.").topic, "transport");
}

#[test]
fn tally_counts_by_year_and_speaker() {
    let registry = registry();
    let speakers = SpeakerPeriods::new(vec![SpeakerPeriod::new("First Minister", 1960, 1969)]).unwrap();
    let records = vec![
        sentence(0, 1965, "The rail network grows."),
        sentence(1, 1965, "Nothing relevant here."),
        sentence(2, 1972, "Every flat is a home."),
    ];

    let (assignments, tally) = tally_corpus(&registry, &records, &speakers);

    let topics: Vec<_> = assignments.iter().map(|a| a.topic).collect();
    assert_eq!(topics, vec!["transport", GENERAL_TOPIC, "housing"]);
    assert_eq!(tally.total_sentences, 3);
    assert_eq!(tally.classified_sentences, 2);
    assert_eq!(tally.by_year[&1965]["transport"], 1);
    assert_eq!(tally.by_year[&1972]["housing"], 1);
    assert_eq!(tally.by_speaker["First Minister"][GENERAL_TOPIC], 1);
    assert!(!tally.by_speaker["First Minister"].contains_key("housing"));
    assert!((tally.coverage() - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn candidate_words_skip_short_and_stop_words() {
    assert_eq!(
        candidate_words("The MRT and the bus fares will rise in 2024."),
        vec!["mrt", "bus", "fares", "rise"]
    );
    let words = candidate_words("Bus fares rise");
    assert_eq!(word_ngrams(&words, 2), vec!["bus fares", "fares rise"]);
    assert!(word_ngrams(&words, 4).is_empty());
}

#[test]
fn specificity_is_share_of_containing_sentences() {
    let lowered = vec![
        "bus fares rise".to_string(),
        "bus lanes open".to_string(),
        "no match".to_string(),
    ];
    assert_eq!(specificity(&lowered, &[0], "bus"), 0.5);
    assert_eq!(specificity(&lowered, &[0], "train"), 0.0);
}

#[test]
fn discovery_suggests_specific_frequent_terms() {
    let registry = registry();
    let mut records = Vec::new();
    for i in 0..8 {
        records.push(sentence(i, 1990, "The rail network carries commuters daily."));
    }
    records.push(sentence(8, 1990, "Commuters also like flat rents."));

    let assignments = crate::classify_corpus(&registry, &records);
    let suggestions = KeywordDiscovery::default().discover(&registry, &records, &assignments);

    let topics: Vec<_> = suggestions.iter().map(|s| s.topic).collect();
    assert_eq!(topics, vec!["housing", "transport"]);

    let transport = &suggestions[1];
    assert_eq!(transport.classified_sentences, 8);
    let terms: Vec<_> = transport.suggested_additions.iter().map(|c| c.term.as_str()).collect();
    assert!(terms.contains(&"network"));
    assert!(terms.contains(&"rail network carries"));
    assert!(!terms.contains(&"rail"));

    let commuters = transport
        .suggested_additions
        .iter()
        .find(|c| c.term == "commuters")
        .unwrap();
    assert_eq!(commuters.count, 8);
    assert!((commuters.specificity - 8.0 / 9.0).abs() < 1e-9);
    assert!(transport.combined_keywords.contains(&"commuters".to_string()));
    assert!(transport.combined_keywords.contains(&"road".to_string()));
}

#[test]
fn discovery_ignores_assignments_without_a_record() {
    let registry = registry();
    let records: Vec<_> = (0..8)
        .map(|i| sentence(i, 1990, "The rail network carries commuters daily."))
        .collect();

    let assignments = crate::classify_corpus(&registry, &records).repeat(2);
    let suggestions = KeywordDiscovery::default().discover(&registry, &records, &assignments);

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].topic, "transport");
    assert_eq!(suggestions[0].classified_sentences, 8);

    let fewer = KeywordDiscovery::default().discover(&registry, &records, &assignments[..3]);
    assert_eq!(fewer[0].classified_sentences, 3);
}
