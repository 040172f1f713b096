//! `speech` - command line entry point for the speech analysis pipeline.
//!
//! # Usage
//!
//! ```text
//! speech --config speech.toml process
//! speech countries
//! speech ngrams --top-k 10
//! speech explain "Trade with China and Malaysia grew."
//! ```

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use speech_analysis::{
    classify, entity_details, global_overview, index_corpus, map_data, tally_corpus, time_series,
    yearly_overview, KeywordDiscovery, LinguisticEngine, NgramRanker,
};
use speech_corpus::builder::log_summary;
use speech_corpus::document::discover_documents;
use speech_corpus::persist::{load_shards, shard_years, write_corpus, write_shards};
use speech_corpus::{
    Corpus, CorpusBuilder, DocumentParser, DocumentStatus, PipelineConfig, SourceDocument,
};
use speech_nlp::SpanDisplay;
use speech_patterns::PatternRegistry;
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "speech", version, about = "Budget speech corpus analysis")]
struct Cli {
    /// Path to the TOML pipeline configuration.
    #[arg(short, long, value_name = "FILE", default_value = "speech.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse every speech into the sentence corpus and per-year shards.
    Process,
    /// Country mention rollups.
    Countries,
    /// Ministry topic tallies.
    Topics,
    /// Suggest additional topic keywords.
    Discover,
    /// Per-year readability, vocabulary, temporal, certainty and passive voice metrics.
    Linguistic,
    /// Distinctive phrases per speaker.
    Ngrams {
        #[arg(long)]
        top_k: Option<usize>,
        #[arg(long)]
        min_count: Option<u64>,
    },
    /// Show the entity and topic matches for a piece of text.
    Explain { text: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;

    match cli.command {
        Command::Process => process(&config),
        Command::Countries => countries(&config),
        Command::Topics => topics(&config),
        Command::Discover => discover(&config),
        Command::Linguistic => linguistic(&config),
        Command::Ngrams { top_k, min_count } => {
            let mut config = config;
            if let Some(top_k) = top_k {
                config.ngrams.top_k = top_k;
            }
            if let Some(min_count) = min_count {
                config.ngrams.min_count = min_count;
            }
            ngrams(&config)
        }
        Command::Explain { text } => explain(&text),
    }
}

fn registry() -> Result<&'static PatternRegistry> {
    PatternRegistry::shared().context("compiling pattern registry")
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "saved");
    Ok(())
}

fn load_corpus(config: &PipelineConfig) -> Result<Corpus> {
    let corpus = load_shards(&config.paths.shard_dir)
        .with_context(|| format!("loading shards from {}", config.paths.shard_dir.display()))?;
    log_summary(&corpus.summary());
    Ok(corpus)
}

fn process(config: &PipelineConfig) -> Result<()> {
    let parser = DocumentParser::new().with_min_sentence_chars(config.corpus.min_sentence_chars);
    let report = CorpusBuilder::new()
        .with_parser(parser)
        .build_from_dir(&config.paths.speeches_dir)
        .with_context(|| format!("reading speeches from {}", config.paths.speeches_dir.display()))?;

    for outcome in report.failures() {
        if let DocumentStatus::Failed { message } = &outcome.status {
            error!(document = %outcome.id, %message, "document skipped");
        }
    }
    info!(
        documents = report.outcomes.len(),
        duplicates_removed = report.duplicates_removed(),
        "corpus built"
    );

    write_corpus(
        &config.paths.output_dir,
        &report.corpus,
        &config.paths.csv_name,
        &config.paths.parquet_name,
    )?;
    write_shards(&config.paths.shard_dir, &report.corpus)?;
    Ok(())
}

fn countries(config: &PipelineConfig) -> Result<()> {
    let corpus = load_corpus(config)?;
    let index = index_corpus(registry()?, corpus.records());
    info!(
        mentions = index.total_mentions(),
        countries = index.totals.len(),
        "indexed country mentions"
    );

    let out = &config.paths.output_dir;
    write_json(&out.join("global_overview.json"), &global_overview(&index))?;
    write_json(&out.join("time_series.json"), &time_series(&index))?;
    write_json(&out.join("country_details.json"), &entity_details(&index))?;
    write_json(&out.join("map_data.json"), &map_data(&index))?;
    Ok(())
}

fn topics(config: &PipelineConfig) -> Result<()> {
    let corpus = load_corpus(config)?;
    let speakers = config.speaker_periods()?;
    let (_, tally) = tally_corpus(registry()?, corpus.records(), &speakers);
    info!(
        classified = tally.classified_sentences,
        coverage = format_args!("{:.1}%", tally.coverage() * 100.0),
        "classified sentences"
    );
    write_json(&config.paths.output_dir.join("topic_tally.json"), &tally)
}

fn discover(config: &PipelineConfig) -> Result<()> {
    let corpus = load_corpus(config)?;
    let registry = registry()?;
    let speakers = config.speaker_periods()?;
    let (assignments, _) = tally_corpus(registry, corpus.records(), &speakers);
    let suggestions = KeywordDiscovery::new(config.discovery.clone()).discover(
        registry,
        corpus.records(),
        &assignments,
    );
    for topic in &suggestions {
        info!(
            topic = topic.topic,
            suggested = topic.suggested_additions.len(),
            "keyword suggestions"
        );
    }
    write_json(&config.paths.output_dir.join("keyword_suggestions.json"), &suggestions)
}

fn linguistic(config: &PipelineConfig) -> Result<()> {
    let shard_dir = &config.paths.shard_dir;
    let years = shard_years(shard_dir).with_context(|| format!("listing shards in {}", shard_dir.display()))?;
    let engine = LinguisticEngine::new(registry()?.markers());
    let profiles = engine.analyze_years(shard_dir, years)?;

    let path = config.paths.output_dir.join("linguistic_features.csv");
    fs::create_dir_all(&config.paths.output_dir)
        .with_context(|| format!("creating {}", config.paths.output_dir.display()))?;
    let mut writer = csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    for profile in &profiles {
        writer.serialize(profile)?;
    }
    writer.flush()?;
    info!(path = %path.display(), years = profiles.len(), "saved");

    let speakers = config.speaker_periods()?;
    write_json(
        &config.paths.output_dir.join("yearly_overview.json"),
        &yearly_overview(&profiles, &speakers),
    )
}

fn ngrams(config: &PipelineConfig) -> Result<()> {
    let speakers = config.speaker_periods()?;
    let mut documents = Vec::new();
    for path in discover_documents(&config.paths.speeches_dir)? {
        match SourceDocument::from_path(&path) {
            Ok(document) => documents.push(document),
            Err(err) => warn!(path = %path.display(), error = %err, "skipping document"),
        }
    }

    let report = NgramRanker::new(config.ngrams.clone()).rank(&documents, &speakers);
    for (speaker, phrases) in &report.speakers {
        let top: Vec<&str> = phrases.phrases.iter().take(5).map(|p| p.phrase.as_str()).collect();
        info!(%speaker, years = %phrases.years, top = ?top, "distinctive phrases");
    }
    write_json(&config.paths.output_dir.join("distinctive_phrases.json"), &report)
}

fn explain(text: &str) -> Result<()> {
    let registry = registry()?;
    let mut display = SpanDisplay::new(text);
    for matcher in registry.entities() {
        for span in matcher.find_spans(text) {
            display.include(span.range, matcher.name());
        }
    }
    println!("{}", display);

    let assignment = classify(registry, text);
    println!("topic: {} (score {})", assignment.topic, assignment.score);
    Ok(())
}
