//! Compiled whole-word alias matching for one entity.
//!
//! Each entity gets one case-insensitive alternation over its aliases and,
//! when it has any, one case-sensitive alternation over its short forms.
//! Word boundaries are asserted only on alias edges that are word
//! characters, so an alias ending in punctuation ("U.S.") still matches
//! before a space.

use crate::countries::CountrySpec;
use crate::{PatternError, PatternResult};
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// A false-positive context for one alias: the alias followed by one of
/// `followers` is not a mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclusion {
    pub alias: &'static str,
    pub followers: &'static [&'static str],
}

pub const EXCLUSIONS: &[Exclusion] = &[
    Exclusion {
        alias: "china",
        followers: &["clay", "town", "ware", "shop", "syndrome"],
    },
    Exclusion {
        alias: "jordan",
        followers: &["river", "valley", "shoes", "shoe", "brand"],
    },
    Exclusion {
        alias: "georgia",
        followers: &["font", "style", "peach"],
    },
];

#[derive(Debug, Clone)]
struct CompiledExclusion {
    alias: String,
    suffix: Regex,
}

/// Byte range of one alias hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasSpan {
    pub range: Range<usize>,
    pub case_sensitive: bool,
}

/// Matcher for a single knowledge-base entity.
#[derive(Debug, Clone)]
pub struct EntityMatcher {
    spec: &'static CountrySpec,
    insensitive: Option<Regex>,
    sensitive: Option<Regex>,
    exclusions: Vec<CompiledExclusion>,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Builds `(?:\balias\b|...)` with longer aliases first so that "U.S.A."
/// wins over "U.S." at the same position.
fn alternation(aliases: &[&str]) -> String {
    let mut ordered: Vec<&str> = aliases.to_vec();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));

    let branches: Vec<String> = ordered
        .iter()
        .map(|alias| {
            let mut branch = String::new();
            if alias.chars().next().map_or(false, is_word_char) {
                branch.push_str(r"\b");
            }
            branch.push_str(&regex::escape(alias));
            if alias.chars().last().map_or(false, is_word_char) {
                branch.push_str(r"\b");
            }
            branch
        })
        .collect();

    format!("(?:{})", branches.join("|"))
}

fn compile(owner: &str, pattern: &str, case_insensitive: bool) -> PatternResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| PatternError::Compile {
            owner: owner.to_string(),
            source,
        })
}

impl EntityMatcher {
    pub fn compile(spec: &'static CountrySpec) -> PatternResult<Self> {
        let insensitive = if spec.aliases.is_empty() {
            None
        } else {
            Some(compile(spec.name, &alternation(spec.aliases), true)?)
        };
        let sensitive = if spec.case_sensitive.is_empty() {
            None
        } else {
            Some(compile(spec.name, &alternation(spec.case_sensitive), false)?)
        };

        let mut exclusions = Vec::new();
        for exclusion in EXCLUSIONS {
            let applies = spec
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(exclusion.alias));
            if !applies {
                continue;
            }
            let suffix = format!(r"^\s+(?:{})\b", exclusion.followers.join("|"));
            exclusions.push(CompiledExclusion {
                alias: exclusion.alias.to_string(),
                suffix: compile(spec.name, &suffix, true)?,
            });
        }

        Ok(EntityMatcher {
            spec,
            insensitive,
            sensitive,
            exclusions,
        })
    }

    pub fn spec(&self) -> &'static CountrySpec {
        self.spec
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    fn is_excluded(&self, text: &str, range: &Range<usize>) -> bool {
        let matched = &text[range.clone()];
        self.exclusions.iter().any(|exclusion| {
            matched.eq_ignore_ascii_case(&exclusion.alias)
                && exclusion.suffix.is_match(&text[range.end..])
        })
    }

    /// Alias hits in `text`: case-insensitive hits in text order, then
    /// case-sensitive hits in text order. Excluded contexts are dropped.
    pub fn find_spans(&self, text: &str) -> Vec<AliasSpan> {
        let mut spans = Vec::new();
        let passes = [(&self.insensitive, false), (&self.sensitive, true)];
        for (pattern, case_sensitive) in passes.iter() {
            let Some(pattern) = pattern else { continue };
            for found in pattern.find_iter(text) {
                let range = found.range();
                if self.is_excluded(text, &range) {
                    continue;
                }
                spans.push(AliasSpan {
                    range,
                    case_sensitive: *case_sensitive,
                });
            }
        }
        spans
    }

    /// Distinct matched surface forms, first occurrence order.
    pub fn matched_terms(&self, text: &str) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();
        for span in self.find_spans(text) {
            let term = &text[span.range];
            if !terms.iter().any(|t| t == term) {
                terms.push(term.to_string());
            }
        }
        terms
    }

    pub fn is_match(&self, text: &str) -> bool {
        !self.find_spans(text).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::COUNTRIES;

    fn matcher(name: &str) -> EntityMatcher {
        let spec = COUNTRIES.iter().find(|c| c.name == name).unwrap();
        EntityMatcher::compile(spec).unwrap()
    }

    #[test]
    fn alternation_guards_word_edges_only() {
        assert_eq!(alternation(&["U.S.", "USA"]), r"(?:\bU\.S\.|\bUSA\b)");
    }

    #[test]
    fn longer_alias_wins() {
        let us = matcher("United States");
        assert_eq!(us.matched_terms("Trade with the U.S.A. grew."), vec!["U.S.A."]);
        assert_eq!(us.matched_terms("The U.S. economy slowed."), vec!["U.S."]);
    }

    #[test]
    fn whole_words_only() {
        let oman = matcher("Oman");
        assert!(!oman.is_match("a woman of means"));
        assert!(oman.is_match("trade with Oman"));
    }

    #[test]
    fn exclusion_is_scoped_to_alias() {
        let china = matcher("China");
        assert!(!china.is_match("fine china clay"));
        assert_eq!(
            china.matched_terms("Chinese clay and China"),
            vec!["Chinese", "China"]
        );
    }

    #[test]
    fn jordan_brand_excluded() {
        let jordan = matcher("Jordan");
        assert!(!jordan.is_match("new Jordan shoes"));
        assert!(jordan.is_match("King of Jordan visited"));
    }

    #[test]
    fn case_sensitive_after_insensitive() {
        let us = matcher("United States");
        assert_eq!(
            us.matched_terms("US firms and American banks"),
            vec!["American", "US"]
        );
    }
}
