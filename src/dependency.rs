//! Subject-relation parsing.
//!
//! Linguistic scoring only needs to know, per clause, whether the subject is
//! a passive subject or an ordinary nominal subject and what kind of word
//! heads it. [`DependencyParser`] exposes exactly that. The bundled
//! [`HeuristicDependencyParser`] approximates it with a "be + participle"
//! rule; a statistical parser can be plugged in behind the same trait.

use crate::segment::{SentenceSegmenter, UnicodeSentenceSegmenter};
use crate::CollaboratorResult;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Dependency label of a subject token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectRelation {
    /// `nsubj`
    Nominal,
    /// `nsubjpass`
    Passive,
}

/// Coarse part of speech of a subject's head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadPos {
    Verb,
    Auxiliary,
    Other,
}

/// One subject arc found in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectArc {
    pub relation: SubjectRelation,
    pub head: HeadPos,
}

impl SubjectArc {
    /// A passive subject.
    pub fn is_passive(&self) -> bool {
        self.relation == SubjectRelation::Passive
    }

    /// A nominal subject governed by a full verb.
    pub fn is_active(&self) -> bool {
        self.relation == SubjectRelation::Nominal && self.head == HeadPos::Verb
    }
}

/// Produces the subject arcs of a text.
pub trait DependencyParser: Send + Sync {
    fn subject_arcs(&self, text: &str) -> CollaboratorResult<Vec<SubjectArc>>;
}

static BE_FORMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["am", "is", "are", "was", "were", "be", "been", "being"]
        .iter()
        .copied()
        .collect()
});

static IRREGULAR_PARTICIPLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "given", "taken", "made", "done", "seen", "known", "shown", "built", "paid",
        "spent", "set", "put", "held", "kept", "brought", "bought", "sold", "told",
        "found", "left", "met", "sent", "won", "cut", "grown", "written", "chosen",
        "driven", "drawn", "begun", "run", "borne", "laid", "led", "lent", "lost",
        "meant", "read", "split", "spread", "struck", "thought", "understood",
    ]
    .iter()
    .copied()
    .collect()
});

static INTERVENING: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["not", "also", "still", "already", "being", "further", "now", "then"]
        .iter()
        .copied()
        .collect()
});

/// Rule-based approximation of a dependency parser.
///
/// Each sentence yields at most one subject arc:
/// - a form of "be" followed by a participle (optionally separated by
///   adverbs) is a passive subject;
/// - a form of "be" with no participle is a copular clause headed by an
///   auxiliary;
/// - anything else is an active subject headed by a verb.
#[derive(Debug, Clone, Default)]
pub struct HeuristicDependencyParser {
    segmenter: UnicodeSentenceSegmenter,
}

impl HeuristicDependencyParser {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_participle(word: &str) -> bool {
        (word.len() > 3 && word.ends_with("ed")) || IRREGULAR_PARTICIPLES.contains(word)
    }

    fn is_adverb(word: &str) -> bool {
        (word.len() > 3 && word.ends_with("ly")) || INTERVENING.contains(word)
    }

    fn classify_sentence(words: &[String]) -> Option<SubjectArc> {
        if words.len() < 2 {
            return None;
        }

        let mut saw_be = false;
        for (idx, word) in words.iter().enumerate() {
            if !BE_FORMS.contains(word.as_str()) {
                continue;
            }
            saw_be = true;
            let following = words[idx + 1..]
                .iter()
                .find(|w| !Self::is_adverb(w) || BE_FORMS.contains(w.as_str()));
            if following.map_or(false, |w| Self::is_participle(w)) {
                return Some(SubjectArc {
                    relation: SubjectRelation::Passive,
                    head: HeadPos::Verb,
                });
            }
        }

        let head = if saw_be { HeadPos::Auxiliary } else { HeadPos::Verb };
        Some(SubjectArc {
            relation: SubjectRelation::Nominal,
            head,
        })
    }
}

impl DependencyParser for HeuristicDependencyParser {
    fn subject_arcs(&self, text: &str) -> CollaboratorResult<Vec<SubjectArc>> {
        let mut arcs = Vec::new();
        for span in self.segmenter.segment(text)? {
            let words: Vec<String> = text[span]
                .unicode_words()
                .map(|w| w.to_lowercase())
                .collect();
            if let Some(arc) = Self::classify_sentence(&words) {
                arcs.push(arc);
            }
        }
        Ok(arcs)
    }
}
