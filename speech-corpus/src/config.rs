//! Pipeline configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock pipeline:
//!
//! ```toml
//! [paths]
//! speeches_dir = "data/speeches"
//!
//! [ngrams]
//! top_k = 20
//!
//! [[speakers]]
//! speaker = "Someone Else"
//! start = 1960
//! end = 1965
//! ```

use crate::parser::DEFAULT_MIN_SENTENCE_CHARS;
use crate::speakers::{SpeakerPeriod, SpeakerPeriods};
use crate::{CorpusError, CorpusResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory of `<year>.md` speech documents.
    pub speeches_dir: PathBuf,
    /// Directory receiving the combined corpus files and analysis output.
    pub output_dir: PathBuf,
    /// Directory receiving `<year>.parquet` shards.
    pub shard_dir: PathBuf,
    pub csv_name: String,
    pub parquet_name: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            speeches_dir: PathBuf::from("data/speeches"),
            output_dir: PathBuf::from("output"),
            shard_dir: PathBuf::from("output/by_year"),
            csv_name: "sentences.csv".to_string(),
            parquet_name: "sentences.parquet".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub min_sentence_chars: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        CorpusConfig {
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NgramConfig {
    pub sizes: Vec<usize>,
    pub top_k: usize,
    pub min_count: u64,
}

impl Default for NgramConfig {
    fn default() -> Self {
        NgramConfig {
            sizes: vec![2, 3],
            top_k: 15,
            min_count: 3,
        }
    }
}

/// Thresholds for topic keyword discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub min_specificity: f64,
    pub min_count: usize,
    /// Most frequent candidate terms examined per topic.
    pub candidates: usize,
    /// Suggestions kept per topic.
    pub keep: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            min_specificity: 0.4,
            min_count: 8,
            candidates: 50,
            keep: 20,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub paths: PathsConfig,
    pub corpus: CorpusConfig,
    pub ngrams: NgramConfig,
    pub discovery: DiscoveryConfig,
    /// Replaces the built-in speaker table when non-empty.
    pub speakers: Vec<SpeakerPeriod>,
}

impl PipelineConfig {
    /// Loads from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> CorpusResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        let config: PipelineConfig = toml::from_str(&content).map_err(|e| CorpusError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> CorpusResult<()> {
        let invalid = |message: String| CorpusError::Config {
            path: path.display().to_string(),
            message,
        };

        if self.ngrams.sizes.is_empty() || self.ngrams.sizes.contains(&0) {
            return Err(invalid("ngrams.sizes must be non-empty positive lengths".to_string()));
        }
        if !(0.0..=1.0).contains(&self.discovery.min_specificity) {
            return Err(invalid(format!(
                "discovery.min_specificity {} is outside [0, 1]",
                self.discovery.min_specificity
            )));
        }
        if !self.speakers.is_empty() {
            SpeakerPeriods::new(self.speakers.clone()).map_err(invalid)?;
        }
        Ok(())
    }

    /// The configured speaker table, or the built-in one.
    pub fn speaker_periods(&self) -> CorpusResult<SpeakerPeriods> {
        if self.speakers.is_empty() {
            return Ok(SpeakerPeriods::default());
        }
        SpeakerPeriods::new(self.speakers.clone()).map_err(|message| CorpusError::Config {
            path: "speakers".to_string(),
            message,
        })
    }

    pub fn csv_path(&self) -> PathBuf {
        self.paths.output_dir.join(&self.paths.csv_name)
    }

    pub fn parquet_path(&self) -> PathBuf {
        self.paths.output_dir.join(&self.paths.parquet_name)
    }
}
