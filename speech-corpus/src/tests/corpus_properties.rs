use std::ops::Range;
use std::sync::Arc;

use speech_nlp::{CollaboratorError, CollaboratorResult, SentenceSegmenter, UnicodeSentenceSegmenter};

use crate::{CorpusBuilder, DocumentParser, DocumentStatus, SourceDocument};

/// Segments like the default but refuses any paragraph containing `UNPARSEABLE`.
struct RefusingSegmenter;

impl SentenceSegmenter for RefusingSegmenter {
    fn segment(&self, text: &str) -> CollaboratorResult<Vec<Range<usize>>> {
        if text.contains("UNPARSEABLE") {
            return Err(CollaboratorError::Failed {
                collaborator: "segmenter",
                message: "refused paragraph".to_string(),
            });
        }
        UnicodeSentenceSegmenter::new().segment(text)
    }
}

fn document(id: &str, year: i32, sentences: &[&str]) -> SourceDocument {
    let body = sentences.join("\n\n");
    SourceDocument::new(id, year, format!("**Date:** {}-02-01\n---\n## Budget\n{}\n", year, body))
}

fn multi_year_documents() -> Vec<SourceDocument> {
    vec![
        document(
            "1972.md",
            1972,
            &[
                "Revenue rose sharply in the last quarter.",
                "We will continue to invest in housing.",
                "Revenue rose sharply in the last quarter.",
            ],
        ),
        document(
            "1965.md",
            1965,
            &[
                "Separation has brought new challenges for us.",
                "Trade with Malaysia remains important to our economy.",
            ],
        ),
        document(
            "1972-supplementary.md",
            1972,
            &[
                "We will continue to invest in housing.",
                "Defence spending is set to increase next year.",
            ],
        ),
    ]
}

#[test]
fn rebuilding_gives_identical_corpus() {
    let docs = multi_year_documents();
    let builder = CorpusBuilder::new();

    let first = builder.build(&docs).corpus;
    let second = builder.build(&docs).corpus;

    assert_eq!(first, second);
    assert_eq!(first.year(1965).len(), 2);
    assert_eq!(first.year(1972).len(), 3);
}

#[test]
fn sentence_ids_follow_year_and_order() {
    let corpus = CorpusBuilder::new().build(&multi_year_documents()).corpus;
    let records = corpus.records();

    let ids: Vec<u64> = records.iter().map(|r| r.sentence_id).collect();
    assert_eq!(ids, (0..records.len() as u64).collect::<Vec<_>>());

    for pair in records.windows(2) {
        let a = (pair[0].year, pair[0].sentence_order);
        let b = (pair[1].year, pair[1].sentence_order);
        assert!(a < b, "{:?} should sort before {:?}", a, b);
    }
}

#[test]
fn sentence_order_is_dense_per_year() {
    let corpus = CorpusBuilder::new().build(&multi_year_documents()).corpus;

    for year in corpus.years() {
        let orders: Vec<u64> = corpus.year(year).iter().map(|r| r.sentence_order).collect();
        assert_eq!(orders, (0..orders.len() as u64).collect::<Vec<_>>(), "year {}", year);
    }
}

#[test]
fn duplicates_keep_first_occurrence_within_year_only() {
    let docs = vec![
        document("1980.md", 1980, &["Fiscal prudence remains our guiding principle."]),
        document("1981.md", 1981, &["Fiscal prudence remains our guiding principle."]),
    ];
    let report = CorpusBuilder::new().build(&docs);

    assert_eq!(report.corpus.len(), 2);
    assert_eq!(report.duplicates_removed(), 0);
}

#[test]
fn two_documents_with_repeats_and_one_failure() {
    let a = document(
        "1990-a.md",
        1990,
        &[
            "Our reserves grew steadily over the year.",
            "The manufacturing sector performed well.",
            "Our reserves grew steadily over the year.",
            "The manufacturing sector performed well.",
            "Our reserves grew steadily over the year.",
        ],
    );
    let broken = document(
        "1990-broken.md",
        1990,
        &["This paragraph is UNPARSEABLE by the segmenter.", "A sentence that would otherwise be kept."],
    );
    let b = document(
        "1990-b.md",
        1990,
        &[
            "Land transport costs will be reviewed.",
            "Healthcare subsidies will be extended.",
            "Land transport costs will be reviewed.",
            "Healthcare subsidies will be extended.",
            "Healthcare subsidies will be extended.",
        ],
    );

    let parser = DocumentParser::new().with_segmenter(Arc::new(RefusingSegmenter));
    let report = CorpusBuilder::new().with_parser(parser).build(&[a, broken, b]);

    let texts: Vec<&str> = report
        .corpus
        .year(1990)
        .iter()
        .map(|r| r.sentence_text.as_str())
        .collect();
    assert_eq!(
        texts,
        vec![
            "Our reserves grew steadily over the year.",
            "The manufacturing sector performed well.",
            "Land transport costs will be reviewed.",
            "Healthcare subsidies will be extended.",
        ]
    );

    let orders: Vec<u64> = report.corpus.year(1990).iter().map(|r| r.sentence_order).collect();
    assert_eq!(orders, vec![0, 1, 2, 3]);

    assert_eq!(report.duplicates_removed(), 6);
    assert_eq!(report.duplicates_by_year.get(&1990), Some(&6));

    let failed: Vec<&str> = report.failures().map(|o| o.id.as_str()).collect();
    assert_eq!(failed, vec!["1990-broken.md"]);
    assert_eq!(
        report.outcomes[0].status,
        DocumentStatus::Parsed {
            kept: 2,
            duplicates: 3
        }
    );
}

#[test]
fn builds_from_directory_and_reports_bad_names() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("1965.md"),
        "**Date:** 1965-12-13\n---\n## Economy\nThe economy grew by eight per cent.\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("draft.md"), "---\nThis draft has no year in its name.\n").unwrap();

    let report = CorpusBuilder::new().build_from_dir(dir.path()).unwrap();

    assert_eq!(report.corpus.len(), 1);
    assert_eq!(report.corpus.records()[0].section_title.as_deref(), Some("Economy"));
    assert_eq!(report.failures().count(), 1);
}
