//! Sentence corpus construction for yearly policy speeches.
//!
//! Documents are parsed in parallel, then gathered into one table that is
//! deduplicated per year, ordered by `(year, document, sentence)` and
//! renumbered. The table is persisted as CSV and Parquet, plus one Parquet
//! shard per year for downstream analysis.
//!
//! ## Modules
//!
//! - [`document`] - Source documents and directory discovery
//! - [`parser`] - Header stripping, paragraphs and sentences ([`DocumentParser`])
//! - [`builder`] - Scatter-gather corpus assembly ([`CorpusBuilder`])
//! - [`persist`] - CSV, Parquet and per-year shards
//! - [`speakers`] - Year to speaker periods
//! - [`config`] - TOML pipeline configuration

mod errors;

pub mod builder;
pub mod config;
pub mod document;
pub mod parser;
pub mod persist;
pub mod sentence;
pub mod speakers;

pub use builder::{BuildReport, Corpus, CorpusBuilder, DocumentOutcome, DocumentStatus};
pub use config::{CorpusConfig, DiscoveryConfig, NgramConfig, PathsConfig, PipelineConfig};
pub use document::SourceDocument;
pub use errors::{CorpusError, CorpusResult, ParseError};
pub use parser::{DocumentParser, Paragraph, SpeechMetadata};
pub use sentence::{CorpusSummary, ParsedSentence, SentenceRecord};
pub use speakers::{SpeakerPeriod, SpeakerPeriods};
