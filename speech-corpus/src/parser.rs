//! Document parser.
//!
//! A speech document has a metadata header terminated by a `---` rule,
//! followed by a markdown body. The body is split into paragraphs that
//! carry the most recent heading as their section title; each paragraph is
//! then segmented into sentences.
//!
//! ```text
//! # Budget Speech 1965           <- header (dropped)
//! **Date:** 1965-12-13
//! ---
//! ## A. The Economy              <- section title
//! Growth was strong this year.   <- paragraph line
//! We expect more.                <- same paragraph
//!
//! **Annex A**                    <- directive line, not text
//! ```

use crate::sentence::ParsedSentence;
use crate::{ParseError, SourceDocument};
use once_cell::sync::Lazy;
use regex::Regex;
use speech_nlp::{SentenceSegmenter, Tokenizer, UnicodeSentenceSegmenter, UnicodeTokenizer};
use std::borrow::Cow;
use std::sync::Arc;

/// Sentences shorter than this (in characters) are segmentation artifacts.
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 20;

static METADATA_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A.*?---\s*\n").expect("Invalid metadata header regex"));

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}\s+").expect("Invalid heading regex"));

static DATE_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*Date:\*\*\s*(\d{4}-\d{2}-\d{2})").expect("Invalid date field regex")
});

static TITLE_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*Title:\*\*\s*(.+?)(?:\n|\*\*)").expect("Invalid title field regex")
});

static SPEAKERS_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*Speakers:\*\*\s*([^(;]+)").expect("Invalid speakers field regex")
});

/// A run of body lines under one section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub section: Option<String>,
    pub text: String,
}

/// Optional fields from a document's metadata header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechMetadata {
    pub speech_date: Option<String>,
    pub speech_title: Option<String>,
    pub primary_speaker: Option<String>,
}

/// Removes everything up to and including the first `---` rule line.
///
/// Text without a rule is returned unchanged.
pub fn strip_metadata_header(text: &str) -> Cow<'_, str> {
    METADATA_HEADER.replace(text, "")
}

/// Reads `**Date:**`, `**Title:**` and `**Speakers:**` fields.
pub fn extract_metadata(text: &str) -> SpeechMetadata {
    let field = |re: &Regex| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    SpeechMetadata {
        speech_date: field(&*DATE_FIELD),
        speech_title: field(&*TITLE_FIELD),
        primary_speaker: field(&*SPEAKERS_FIELD),
    }
}

/// Splits a document body into paragraphs.
///
/// Lines are trimmed. A heading line sets the section for what follows.
/// Blank lines, `---` rules and lines wrapped in `**` close the current
/// paragraph without contributing text. Other lines are joined with a
/// single space.
pub fn extract_paragraphs(body: &str) -> Vec<Paragraph> {
    fn flush(current: &mut Vec<&str>, section: &Option<String>, out: &mut Vec<Paragraph>) {
        if !current.is_empty() {
            out.push(Paragraph {
                section: section.clone(),
                text: current.join(" "),
            });
            current.clear();
        }
    }

    let mut paragraphs = Vec::new();
    let mut section: Option<String> = None;
    let mut current: Vec<&str> = Vec::new();

    for raw in body.split('\n') {
        let line = raw.trim();

        if let Some(marker) = HEADING.find(line) {
            flush(&mut current, &section, &mut paragraphs);
            section = Some(line[marker.end()..].to_string());
            continue;
        }

        if line.is_empty() || line == "---" || (line.starts_with("**") && line.ends_with("**")) {
            flush(&mut current, &section, &mut paragraphs);
            continue;
        }

        current.push(line);
    }
    flush(&mut current, &section, &mut paragraphs);

    paragraphs
}

/// Turns documents into numbered sentences using pluggable collaborators.
#[derive(Clone)]
pub struct DocumentParser {
    segmenter: Arc<dyn SentenceSegmenter>,
    tokenizer: Arc<dyn Tokenizer>,
    min_sentence_chars: usize,
}

impl std::fmt::Debug for DocumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentParser")
            .field("min_sentence_chars", &self.min_sentence_chars)
            .finish()
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser {
    pub fn new() -> Self {
        DocumentParser {
            segmenter: Arc::new(UnicodeSentenceSegmenter::new()),
            tokenizer: Arc::new(UnicodeTokenizer::new()),
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
        }
    }

    pub fn with_segmenter(mut self, segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_min_sentence_chars(mut self, min_sentence_chars: usize) -> Self {
        self.min_sentence_chars = min_sentence_chars;
        self
    }

    pub fn parse_document(&self, document: &SourceDocument) -> Result<Vec<ParsedSentence>, ParseError> {
        self.parse_text(document.year, &document.text)
    }

    /// Parses a full document (header included) into sentences numbered
    /// from 0 in document order.
    ///
    /// Any collaborator failure aborts the whole document.
    pub fn parse_text(&self, year: i32, text: &str) -> Result<Vec<ParsedSentence>, ParseError> {
        let body = strip_metadata_header(text);
        let mut sentences = Vec::new();
        let mut sentence_order = 0u64;

        for paragraph in extract_paragraphs(&body) {
            for span in self.segmenter.segment(&paragraph.text)? {
                let sentence_text = paragraph
                    .text
                    .get(span)
                    .map(str::trim)
                    .unwrap_or_default();
                let char_count = sentence_text.chars().count();
                if char_count < self.min_sentence_chars {
                    continue;
                }

                let word_count = self.tokenizer.count_words(sentence_text)?;
                sentences.push(ParsedSentence {
                    year,
                    section_title: paragraph.section.clone(),
                    sentence_order,
                    sentence_text: sentence_text.to_string(),
                    word_count: word_count as u64,
                    char_count: char_count as u64,
                });
                sentence_order += 1;
            }
        }

        Ok(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speech_nlp::{CollaboratorError, CollaboratorResult, Token};

    const SPEECH: &str = "# Budget Speech 1965\n\
        **Date:** 1965-12-13\n\
        **Speakers:** Goh Keng Swee (Minister for Finance)\n\
        ---\n\
        \n\
        Opening remarks before any heading are kept here.\n\
        ## A. The Economy\n\
        The economy grew by eight per cent last year.\n\
        We expect growth to continue. Ok.\n\
        \n\
        **Annex A**\n\
        ####### Not a heading but long enough text\n\
        ### B. Taxes\n\
        Income tax rates will remain unchanged this year.\n";

    #[test]
    fn header_is_stripped_once() {
        let stripped = strip_metadata_header("meta\n---\nbody\n---\nmore");
        assert_eq!(stripped, "body\n---\nmore");
        assert_eq!(strip_metadata_header("no rule here"), "no rule here");
    }

    #[test]
    fn metadata_fields() {
        let meta = extract_metadata(SPEECH);
        assert_eq!(meta.speech_date.as_deref(), Some("1965-12-13"));
        assert_eq!(meta.primary_speaker.as_deref(), Some("Goh Keng Swee"));
        assert_eq!(meta.speech_title, None);
    }

    #[test]
    fn paragraphs_follow_headings() {
        let body = strip_metadata_header(SPEECH);
        let paragraphs = extract_paragraphs(&body);
        let summary: Vec<_> = paragraphs
            .iter()
            .map(|p| (p.section.as_deref(), p.text.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (None, "Opening remarks before any heading are kept here."),
                (
                    Some("A. The Economy"),
                    "The economy grew by eight per cent last year. We expect growth to continue. Ok."
                ),
                (Some("A. The Economy"), "####### Not a heading but long enough text"),
                (Some("B. Taxes"), "Income tax rates will remain unchanged this year."),
            ]
        );
    }

    #[test]
    fn short_sentences_are_dropped_and_order_is_dense() {
        let sentences = DocumentParser::new().parse_text(1965, SPEECH).unwrap();
        let texts: Vec<_> = sentences.iter().map(|s| s.sentence_text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Opening remarks before any heading are kept here.",
                "The economy grew by eight per cent last year.",
                "We expect growth to continue.",
                "####### Not a heading but long enough text",
                "Income tax rates will remain unchanged this year.",
            ]
        );
        let orders: Vec<_> = sentences.iter().map(|s| s.sentence_order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4]);
        assert_eq!(sentences[1].word_count, 9);
        assert_eq!(sentences[1].char_count, 45);
        assert!(sentences.iter().all(|s| s.year == 1965));
    }

    struct FailingTokenizer;

    impl Tokenizer for FailingTokenizer {
        fn tokenize<'a>(&self, _text: &'a str) -> CollaboratorResult<Vec<Token<'a>>> {
            Err(CollaboratorError::Unavailable {
                collaborator: "tokenizer",
                message: "model not installed".to_string(),
            })
        }
    }

    #[test]
    fn collaborator_failure_aborts_document() {
        let parser = DocumentParser::new().with_tokenizer(Arc::new(FailingTokenizer));
        let result = parser.parse_text(1965, SPEECH);
        assert!(matches!(result, Err(ParseError::Collaborator(_))));
    }

    #[test]
    fn configurable_minimum_length() {
        let sentences = DocumentParser::new()
            .with_min_sentence_chars(0)
            .parse_text(1965, SPEECH)
            .unwrap();
        assert!(sentences.iter().any(|s| s.sentence_text == "Ok."));
    }
}
