use crate::persist::{
    load_shards, read_csv, read_parquet, read_shard, shard_path, shard_years, write_corpus, write_shards,
};
use crate::{Corpus, CorpusBuilder, SentenceRecord, SourceDocument};

fn record(sentence_id: u64, year: i32, section: Option<&str>, order: u64, text: &str) -> SentenceRecord {
    SentenceRecord {
        sentence_id,
        year,
        section_title: section.map(str::to_string),
        sentence_order: order,
        sentence_text: text.to_string(),
        word_count: text.split_whitespace().count() as u64,
        char_count: text.chars().count() as u64,
    }
}

fn sample_corpus() -> Corpus {
    Corpus::from_records(vec![
        record(0, 1965, None, 0, "Opening remarks before any heading, with a comma."),
        record(1, 1965, Some("A. The Economy"), 1, "The economy grew by \"eight\" per cent."),
        record(2, 1966, Some("B. Taxes"), 0, "Income tax rates will remain unchanged."),
    ])
}

#[test]
fn csv_and_parquet_reload_identically() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = sample_corpus();

    let (csv_path, parquet_path) =
        write_corpus(dir.path(), &corpus, "sentences.csv", "sentences.parquet").unwrap();

    let from_csv = read_csv(&csv_path).unwrap();
    let from_parquet = read_parquet(&parquet_path).unwrap();

    assert_eq!(from_csv, corpus.records());
    assert_eq!(from_parquet, corpus.records());
    assert_eq!(from_parquet[0].section_title, None);
}

#[test]
fn empty_corpus_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let (_, parquet_path) =
        write_corpus(dir.path(), &Corpus::default(), "empty.csv", "empty.parquet").unwrap();
    assert!(read_parquet(&parquet_path).unwrap().is_empty());
}

#[test]
fn shards_hold_one_year_each() {
    let dir = tempfile::tempdir().unwrap();
    let shard_dir = dir.path().join("by_year");
    let corpus = sample_corpus();

    let written = write_shards(&shard_dir, &corpus).unwrap();
    assert_eq!(written, vec![shard_path(&shard_dir, 1965), shard_path(&shard_dir, 1966)]);

    let shard = read_shard(&shard_dir, 1966).unwrap().unwrap();
    assert_eq!(shard, corpus.year(1966));

    assert_eq!(shard_years(&shard_dir).unwrap(), vec![1965, 1966]);
    assert_eq!(load_shards(&shard_dir).unwrap(), corpus);
}

#[test]
fn missing_shard_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(read_shard(dir.path(), 1999).unwrap(), None);
}

#[test]
fn rewriting_shards_drops_years_no_longer_built() {
    let dir = tempfile::tempdir().unwrap();
    let shard_dir = dir.path().join("by_year");
    let builder = CorpusBuilder::new();

    let first = builder.build(&[
        SourceDocument::new("1965.md", 1965, "---\nThe first budget sentence is long enough."),
        SourceDocument::new("1966.md", 1966, "---\nThe second budget sentence is long enough."),
    ]);
    write_shards(&shard_dir, &first.corpus).unwrap();
    std::fs::write(shard_dir.join("notes.parquet"), "not a shard").unwrap();

    let second = builder.build(&[SourceDocument::new(
        "1965.md",
        1965,
        "---\nThe first budget sentence is long enough.",
    )]);
    write_shards(&shard_dir, &second.corpus).unwrap();

    assert!(!shard_path(&shard_dir, 1966).exists());
    assert!(shard_dir.join("notes.parquet").exists());
    assert_eq!(shard_years(&shard_dir).unwrap(), vec![1965]);
    assert_eq!(load_shards(&shard_dir).unwrap(), second.corpus);
}
