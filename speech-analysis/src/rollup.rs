//! Downstream aggregates built from a [`MentionIndex`] or from yearly
//! [`LinguisticProfile`]s.
//!
//! Every view is a pure function of its input, so identical corpora give
//! identical output.

use crate::linguistic::LinguisticProfile;
use crate::mention::MentionIndex;
use crate::round_to;
use indexmap::IndexMap;
use serde::Serialize;
use speech_corpus::SpeakerPeriods;
use speech_patterns::Region;
use std::collections::BTreeMap;

/// Countries listed in [`GlobalOverview::country_totals`].
pub const OVERVIEW_TOP_COUNTRIES: usize = 50;
/// Countries given a yearly series in [`TimeSeries`].
pub const TIME_SERIES_TOP_COUNTRIES: usize = 20;
/// Sentences kept per country and year in [`EntityDetail`].
pub const DETAIL_SENTENCES_PER_YEAR: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionTotal {
    pub total: usize,
    pub countries: IndexMap<&'static str, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalOverview {
    pub total_mentions: usize,
    pub countries_mentioned: usize,
    pub by_region: IndexMap<&'static str, RegionTotal>,
    pub country_totals: IndexMap<&'static str, usize>,
    pub years: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySeries {
    pub iso: &'static str,
    pub region: Region,
    pub yearly_counts: Vec<usize>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeries {
    pub years: Vec<i32>,
    pub countries: IndexMap<&'static str, EntitySeries>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentionSnippet {
    pub text: String,
    pub section: Option<String>,
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDetail {
    pub iso: &'static str,
    pub region: Region,
    pub total_mentions: usize,
    pub by_year: BTreeMap<i32, Vec<MentionSnippet>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapEntry {
    pub country: &'static str,
    pub total: usize,
    pub region: Region,
}

/// Entity totals, highest first. Equal totals keep first-mention order.
fn ranked_totals(index: &MentionIndex) -> Vec<(&'static str, usize)> {
    let mut ranked: Vec<(&'static str, usize)> = index.totals.iter().map(|(k, v)| (*k, *v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

pub fn global_overview(index: &MentionIndex) -> GlobalOverview {
    let mut by_region = IndexMap::new();
    for region in Region::ALL {
        let countries: IndexMap<&'static str, usize> = region
            .members()
            .map(|spec| (spec.name, index.total_for(spec.name)))
            .filter(|(_, count)| *count > 0)
            .collect();
        let total: usize = countries.values().sum();
        if total > 0 {
            by_region.insert(region.name(), RegionTotal { total, countries });
        }
    }

    GlobalOverview {
        total_mentions: index.total_mentions(),
        countries_mentioned: index.totals.len(),
        by_region,
        country_totals: ranked_totals(index)
            .into_iter()
            .take(OVERVIEW_TOP_COUNTRIES)
            .collect(),
        years: index.years(),
    }
}

pub fn time_series(index: &MentionIndex) -> TimeSeries {
    let years = index.years();
    let countries: IndexMap<&'static str, EntitySeries> = ranked_totals(index)
        .into_iter()
        .take(TIME_SERIES_TOP_COUNTRIES)
        .filter_map(|(name, total)| {
            let spec = index.entity(name)?;
            Some((
                name,
                EntitySeries {
                    iso: spec.iso,
                    region: spec.region,
                    yearly_counts: years.iter().map(|&y| index.count_in_year(name, y)).collect(),
                    total,
                },
            ))
        })
        .collect();

    TimeSeries { years, countries }
}

/// Per-entity details in first-mention order.
pub fn entity_details(index: &MentionIndex) -> IndexMap<&'static str, EntityDetail> {
    index
        .by_entity
        .iter()
        .filter_map(|(&name, years)| {
            let spec = index.entity(name)?;
            let by_year: BTreeMap<i32, Vec<MentionSnippet>> = years
                .iter()
                .map(|(&year, records)| {
                    let snippets: Vec<MentionSnippet> = records
                        .iter()
                        .take(DETAIL_SENTENCES_PER_YEAR)
                        .map(|r| MentionSnippet {
                            text: r.text.clone(),
                            section: r.section.clone(),
                            terms: r.matched_terms.clone(),
                        })
                        .collect();
                    (year, snippets)
                })
                .collect();
            Some((
                name,
                EntityDetail {
                    iso: spec.iso,
                    region: spec.region,
                    total_mentions: index.total_for(name),
                    by_year,
                },
            ))
        })
        .collect()
}

/// Totals keyed by ISO code.
pub fn map_data(index: &MentionIndex) -> IndexMap<&'static str, MapEntry> {
    index
        .totals
        .iter()
        .filter(|(_, total)| **total > 0)
        .filter_map(|(&name, &total)| {
            let spec = index.entity(name)?;
            Some((
                spec.iso,
                MapEntry {
                    country: name,
                    total,
                    region: spec.region,
                },
            ))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearStyle {
    pub total_sentences: usize,
    pub avg_sentence_length: f64,
    pub readability: f64,
    pub speaker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakerStyle {
    pub num_speeches: usize,
    pub total_sentences: usize,
    pub avg_sentence_length: f64,
    pub avg_readability: f64,
}

/// Sentence length and readability per year and per speaker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyOverview {
    pub by_year: BTreeMap<i32, YearStyle>,
    /// Speakers in order of their first profiled year. Values are means of
    /// the yearly figures, rounded to 1 place.
    pub by_speaker: IndexMap<String, SpeakerStyle>,
}

pub fn yearly_overview(profiles: &[LinguisticProfile], speakers: &SpeakerPeriods) -> YearlyOverview {
    let mut ordered: Vec<&LinguisticProfile> = profiles.iter().collect();
    ordered.sort_by_key(|p| p.year);

    let mut by_year = BTreeMap::new();
    let mut grouped: IndexMap<String, Vec<&LinguisticProfile>> = IndexMap::new();
    for profile in ordered {
        let speaker = speakers.speaker_for(profile.year);
        if let Some(speaker) = speaker {
            grouped.entry(speaker.to_string()).or_default().push(profile);
        }
        by_year.insert(
            profile.year,
            YearStyle {
                total_sentences: profile.total_sentences,
                avg_sentence_length: round_to(profile.avg_words_per_sentence, 1),
                readability: round_to(profile.readability, 1),
                speaker: speaker.map(str::to_string),
            },
        );
    }

    let by_speaker = grouped
        .into_iter()
        .map(|(speaker, years)| {
            let count = years.len() as f64;
            let mean = |f: fn(&LinguisticProfile) -> f64| {
                round_to(years.iter().map(|p| f(p)).sum::<f64>() / count, 1)
            };
            let style = SpeakerStyle {
                num_speeches: years.len(),
                total_sentences: years.iter().map(|p| p.total_sentences).sum(),
                avg_sentence_length: mean(|p| p.avg_words_per_sentence),
                avg_readability: mean(|p| p.readability),
            };
            (speaker, style)
        })
        .collect();

    YearlyOverview { by_year, by_speaker }
}
