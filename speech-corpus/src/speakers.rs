//! Year to speaker lookup.

use serde::{Deserialize, Serialize};

/// A closed range of years during which one speaker delivered the speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerPeriod {
    pub speaker: String,
    pub start: i32,
    pub end: i32,
}

impl SpeakerPeriod {
    pub fn new(speaker: impl Into<String>, start: i32, end: i32) -> Self {
        SpeakerPeriod {
            speaker: speaker.into(),
            start,
            end,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

/// Non-overlapping speaker periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerPeriods {
    periods: Vec<SpeakerPeriod>,
}

const FINANCE_MINISTERS: &[(&str, i32, i32)] = &[
    ("Goh Keng Swee", 1960, 1965),
    ("Lim Kim San", 1966, 1967),
    ("Goh Keng Swee", 1968, 1970),
    ("Hon Sui Sen", 1971, 1978),
    ("Goh Chok Tong", 1979, 1981),
    ("Dr Tony Tan Keng Yam", 1982, 1985),
    ("Dr Richard Hu Tsu Tau", 1986, 2001),
    ("Lee Hsien Loong", 2002, 2006),
    ("Tharman Shanmugaratnam", 2007, 2015),
    ("Heng Swee Keat", 2016, 2021),
    ("Lawrence Wong", 2022, 2026),
];

impl Default for SpeakerPeriods {
    fn default() -> Self {
        SpeakerPeriods {
            periods: FINANCE_MINISTERS
                .iter()
                .map(|(speaker, start, end)| SpeakerPeriod::new(*speaker, *start, *end))
                .collect(),
        }
    }
}

impl SpeakerPeriods {
    /// Validates and sorts the periods.
    ///
    /// Returns an error message naming the first inverted or overlapping
    /// period.
    pub fn new(mut periods: Vec<SpeakerPeriod>) -> Result<Self, String> {
        if let Some(bad) = periods.iter().find(|p| p.start > p.end) {
            return Err(format!(
                "period for {} starts after it ends ({} > {})",
                bad.speaker, bad.start, bad.end
            ));
        }

        periods.sort_by_key(|p| p.start);
        for pair in periods.windows(2) {
            if pair[1].start <= pair[0].end {
                return Err(format!(
                    "periods for {} ({}-{}) and {} ({}-{}) overlap",
                    pair[0].speaker, pair[0].start, pair[0].end, pair[1].speaker, pair[1].start, pair[1].end
                ));
            }
        }

        Ok(SpeakerPeriods { periods })
    }

    pub fn speaker_for(&self, year: i32) -> Option<&str> {
        self.periods
            .iter()
            .find(|p| p.contains(year))
            .map(|p| p.speaker.as_str())
    }

    pub fn periods(&self) -> &[SpeakerPeriod] {
        &self.periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_lookups() {
        let speakers = SpeakerPeriods::default();
        assert_eq!(speakers.speaker_for(1965), Some("Goh Keng Swee"));
        assert_eq!(speakers.speaker_for(1967), Some("Lim Kim San"));
        assert_eq!(speakers.speaker_for(1969), Some("Goh Keng Swee"));
        assert_eq!(speakers.speaker_for(2001), Some("Dr Richard Hu Tsu Tau"));
        assert_eq!(speakers.speaker_for(1959), None);
    }

    #[test]
    fn default_table_is_valid() {
        let speakers = SpeakerPeriods::default();
        assert!(SpeakerPeriods::new(speakers.periods().to_vec()).is_ok());
    }

    #[test]
    fn rejects_overlap() {
        let err = SpeakerPeriods::new(vec![
            SpeakerPeriod::new("A", 1960, 1965),
            SpeakerPeriod::new("B", 1965, 1970),
        ])
        .unwrap_err();
        assert!(err.contains("overlap"));
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(SpeakerPeriods::new(vec![SpeakerPeriod::new("A", 1970, 1960)]).is_err());
    }
}
