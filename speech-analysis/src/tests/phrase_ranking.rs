use speech_corpus::{NgramConfig, SourceDocument, SpeakerPeriods};

use crate::ngram::distinctiveness;
use crate::{clean_document, NgramRanker, PhraseFilter};

fn documents() -> Vec<SourceDocument> {
    vec![
        SourceDocument::new("1967.md", 1967, "Housing estates grow. Housing estates shrink. Housing estates stay. Income tax once."),
        SourceDocument::new(
            "1965.md",
            1965,
            "# Budget 1965\nIncome tax rises. Income tax falls. Income tax stays.\n\
             Per cent, per cent, per cent. 1971-72, 1971-72, 1971-72.",
        ),
        SourceDocument::new("1968.md", 1968, "Income tax again."),
        SourceDocument::new("1950.md", 1950, "Income tax before independence."),
    ]
}

#[test]
fn cleaning_strips_markdown_and_punctuation() {
    let text = "# Budget Speech 1965\n**Date:** 1965\n---\n\
                See [the annex](http://x.y/z) for **income tax** rates, 8.5 per cent.";
    assert_eq!(
        clean_document(text),
        "date 1965 see the annex for income tax rates 8 5 per cent"
    );
}

#[test]
fn filter_rules() {
    let filter = PhraseFilter::default();
    assert!(filter.is_excluded(&["per", "cent"]));
    assert!(filter.is_excluded(&["tax", "the"]));
    assert!(filter.is_excluded(&["refer", "hansard"]));
    assert!(filter.is_excluded(&["1971", "72"]));
    assert!(filter.is_excluded(&["p", "a", "p"]));
    assert!(filter.is_excluded(&["budget", "speech"]));
    assert!(!filter.is_excluded(&["income", "tax"]));
    assert!(!filter.is_excluded(&["72", "1971"]));
}

#[test]
fn boilerplate_never_counts() {
    let ranker = NgramRanker::new(NgramConfig {
        min_count: 1,
        ..NgramConfig::default()
    });
    let counts = ranker.count_phrases(&clean_document(&documents()[1].text));

    assert_eq!(counts.get("income tax"), Some(&3));
    assert!(!counts.contains_key("per cent"));
    assert!(!counts.contains_key("1971 72"));
    assert!(counts.keys().all(|p| !p.starts_with("per ") && !p.ends_with(" cent")));
}

#[test]
fn speakers_are_ranked_independently() {
    let report = NgramRanker::default().rank(&documents(), &SpeakerPeriods::default());

    let speakers: Vec<_> = report.speakers.keys().map(String::as_str).collect();
    assert_eq!(speakers, vec!["Goh Keng Swee", "Lim Kim San"]);

    let goh = &report.speakers["Goh Keng Swee"];
    assert_eq!(goh.years, "1965-1968");
    assert_eq!(goh.num_speeches, 2);
    assert_eq!(goh.phrases.len(), 1);
    assert_eq!(goh.phrases[0].phrase, "income tax");
    assert_eq!(goh.phrases[0].count, 4);
    assert_eq!(goh.phrases[0].score, 0.64);

    let lim = &report.speakers["Lim Kim San"];
    assert_eq!(lim.years, "1967-1967");
    assert_eq!(lim.phrases.len(), 1);
    assert_eq!(lim.phrases[0].phrase, "housing estates");
    assert_eq!(lim.phrases[0].score, 0.7105);

    assert_eq!(report.metadata.n_values, vec![2, 3]);
    assert_eq!(report.metadata.top_k, 15);
}

#[test]
fn top_k_truncates() {
    let ranker = NgramRanker::new(NgramConfig {
        top_k: 1,
        min_count: 1,
        ..NgramConfig::default()
    });
    let report = ranker.rank(&documents(), &SpeakerPeriods::default());
    assert!(report.speakers.values().all(|s| s.phrases.len() == 1));
}

#[test]
fn rarer_phrases_get_a_boost() {
    let shared = distinctiveness(3, 10, 2, 2);
    let unique = distinctiveness(3, 10, 1, 2);
    assert!((shared - 0.9).abs() < 1e-9);
    assert!((unique - 1.35).abs() < 1e-9);
}
