//! Corpus building: parse documents in parallel, then gather, deduplicate,
//! sort and renumber in one sequential pass.
//!
//! Identifiers are only assigned once every document has been parsed, so
//! the numbering never depends on worker scheduling.

use crate::document::{discover_documents, SourceDocument};
use crate::parser::DocumentParser;
use crate::sentence::{CorpusSummary, ParsedSentence, SentenceRecord};
use crate::{CorpusResult, ParseError};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use tracing::{error, info};

/// The final, ordered sentence table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    records: Vec<SentenceRecord>,
}

impl Corpus {
    /// Wraps records that are already ordered by `(year, sentence_order)`,
    /// such as a reloaded corpus file.
    pub fn from_records(records: Vec<SentenceRecord>) -> Self {
        Corpus { records }
    }

    pub fn records(&self) -> &[SentenceRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SentenceRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.dedup();
        years
    }

    /// The contiguous block of records for `year`.
    pub fn year(&self, year: i32) -> &[SentenceRecord] {
        let start = self.records.partition_point(|r| r.year < year);
        let end = self.records.partition_point(|r| r.year <= year);
        &self.records[start..end]
    }

    pub fn summary(&self) -> CorpusSummary {
        CorpusSummary::of(&self.records)
    }
}

/// What happened to one input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    Parsed { kept: usize, duplicates: usize },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutcome {
    pub id: String,
    pub year: Option<i32>,
    pub status: DocumentStatus,
}

/// Result of a build: the corpus plus per-document bookkeeping.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub corpus: Corpus,
    pub outcomes: Vec<DocumentOutcome>,
    pub duplicates_by_year: BTreeMap<i32, usize>,
}

impl BuildReport {
    pub fn duplicates_removed(&self) -> usize {
        self.duplicates_by_year.values().sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DocumentOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, DocumentStatus::Failed { .. }))
    }
}

type ParsedDocument = (String, Option<i32>, Result<Vec<ParsedSentence>, ParseError>);

#[derive(Debug, Clone, Default)]
pub struct CorpusBuilder {
    parser: DocumentParser,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser(mut self, parser: DocumentParser) -> Self {
        self.parser = parser;
        self
    }

    /// Builds a corpus from in-memory documents. Input order is the
    /// document sequence used to order sentences within a year.
    pub fn build(&self, documents: &[SourceDocument]) -> BuildReport {
        let parsed: Vec<ParsedDocument> = documents
            .par_iter()
            .map(|doc| (doc.id.clone(), Some(doc.year), self.parser.parse_document(doc)))
            .collect();
        self.assemble(parsed)
    }

    /// Builds a corpus from every `<year>.md` file in `dir`, in file name
    /// order. Unreadable or misnamed files are reported as failed documents.
    pub fn build_from_dir(&self, dir: &Path) -> CorpusResult<BuildReport> {
        let paths = discover_documents(dir)?;
        info!(directory = %dir.display(), files = paths.len(), "discovered speech documents");

        let parsed: Vec<ParsedDocument> = paths
            .par_iter()
            .map(|path| {
                let id = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                match SourceDocument::from_path(path) {
                    Ok(doc) => (id, Some(doc.year), self.parser.parse_document(&doc)),
                    Err(err) => (id, None, Err(err)),
                }
            })
            .collect();

        Ok(self.assemble(parsed))
    }

    fn assemble(&self, parsed: Vec<ParsedDocument>) -> BuildReport {
        let mut seen: HashMap<i32, HashSet<String>> = HashMap::new();
        let mut duplicates_by_year: BTreeMap<i32, usize> = BTreeMap::new();
        let mut kept: Vec<(usize, ParsedSentence)> = Vec::new();
        let mut outcomes = Vec::with_capacity(parsed.len());

        for (sequence, (id, year, result)) in parsed.into_iter().enumerate() {
            let sentences = match result {
                Ok(sentences) => sentences,
                Err(err) => {
                    error!(document = %id, error = %err, "failed to parse document, skipping");
                    outcomes.push(DocumentOutcome {
                        id,
                        year,
                        status: DocumentStatus::Failed {
                            message: err.to_string(),
                        },
                    });
                    continue;
                }
            };

            let mut kept_here = 0;
            let mut duplicates = 0;
            for sentence in sentences {
                let texts = seen.entry(sentence.year).or_default();
                if texts.insert(sentence.sentence_text.clone()) {
                    kept.push((sequence, sentence));
                    kept_here += 1;
                } else {
                    *duplicates_by_year.entry(sentence.year).or_default() += 1;
                    duplicates += 1;
                }
            }

            if duplicates > 0 {
                info!(
                    document = %id,
                    sentences = kept_here,
                    duplicates,
                    "parsed document, duplicates removed"
                );
            } else {
                info!(document = %id, sentences = kept_here, "parsed document");
            }
            outcomes.push(DocumentOutcome {
                id,
                year,
                status: DocumentStatus::Parsed {
                    kept: kept_here,
                    duplicates,
                },
            });
        }

        kept.sort_by_key(|(sequence, s)| (s.year, *sequence, s.sentence_order));

        let mut next_order: HashMap<i32, u64> = HashMap::new();
        let records: Vec<SentenceRecord> = kept
            .into_iter()
            .enumerate()
            .map(|(sentence_id, (_, s))| {
                let order = next_order.entry(s.year).or_insert(0);
                let sentence_order = *order;
                *order += 1;
                SentenceRecord {
                    sentence_id: sentence_id as u64,
                    year: s.year,
                    section_title: s.section_title,
                    sentence_order,
                    sentence_text: s.sentence_text,
                    word_count: s.word_count,
                    char_count: s.char_count,
                }
            })
            .collect();

        let corpus = Corpus::from_records(records);
        let total_duplicates: usize = duplicates_by_year.values().sum();
        if total_duplicates > 0 {
            info!(duplicates = total_duplicates, "duplicates removed across all years");
        }
        log_summary(&corpus.summary());

        BuildReport {
            corpus,
            outcomes,
            duplicates_by_year,
        }
    }
}

pub fn log_summary(summary: &CorpusSummary) {
    match summary.year_range {
        Some((first, last)) => info!(
            sentences = summary.rows,
            words = summary.total_words,
            avg_words_per_sentence = format_args!("{:.1}", summary.avg_words_per_sentence),
            years = format_args!("{}-{}", first, last),
            "corpus summary"
        ),
        None => info!(sentences = 0, "corpus summary: no sentences"),
    }
}
