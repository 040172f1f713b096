//! Text collaborators for policy speech analysis.
//!
//! The corpus and analysis crates never segment, tokenize or parse text
//! themselves. They go through the narrow traits defined here, so the
//! matching, scoring and aggregation logic can be exercised with fixed or
//! fake collaborator output.
//!
//! ## Modules
//!
//! - [`segment`] - Sentence segmentation ([`SentenceSegmenter`])
//! - [`tokenize`] - Word tokenization ([`Tokenizer`])
//! - [`dependency`] - Subject-relation parsing ([`DependencyParser`])
//! - [`span_display`] - Underlined span rendering for diagnostics and snapshots

mod error;

pub mod dependency;
pub mod segment;
pub mod span_display;
pub mod tokenize;

pub use dependency::{DependencyParser, HeadPos, HeuristicDependencyParser, SubjectArc, SubjectRelation};
pub use error::{CollaboratorError, CollaboratorResult};
pub use segment::{SentenceSegmenter, UnicodeSentenceSegmenter};
pub use span_display::SpanDisplay;
pub use tokenize::{Token, TokenKind, Tokenizer, UnicodeTokenizer};
