//! Geographic regions. Every country belongs to exactly one.

use crate::countries::{CountrySpec, COUNTRIES};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    EastAsia,
    SoutheastAsia,
    SouthAsia,
    CentralAsia,
    Oceania,
    WesternEurope,
    NorthernEurope,
    SouthernEurope,
    EasternEurope,
    Caucasus,
    NorthAmerica,
    CentralAmerica,
    SouthAmerica,
    MiddleEast,
    NorthAfrica,
    SubSaharanAfrica,
}

impl Region {
    /// All regions in reporting order.
    pub const ALL: [Region; 16] = [
        Region::EastAsia,
        Region::SoutheastAsia,
        Region::SouthAsia,
        Region::CentralAsia,
        Region::Oceania,
        Region::WesternEurope,
        Region::NorthernEurope,
        Region::SouthernEurope,
        Region::EasternEurope,
        Region::Caucasus,
        Region::NorthAmerica,
        Region::CentralAmerica,
        Region::SouthAmerica,
        Region::MiddleEast,
        Region::NorthAfrica,
        Region::SubSaharanAfrica,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::EastAsia => "East Asia",
            Region::SoutheastAsia => "Southeast Asia",
            Region::SouthAsia => "South Asia",
            Region::CentralAsia => "Central Asia",
            Region::Oceania => "Oceania",
            Region::WesternEurope => "Western Europe",
            Region::NorthernEurope => "Northern Europe",
            Region::SouthernEurope => "Southern Europe",
            Region::EasternEurope => "Eastern Europe",
            Region::Caucasus => "Caucasus",
            Region::NorthAmerica => "North America",
            Region::CentralAmerica => "Central America",
            Region::SouthAmerica => "South America",
            Region::MiddleEast => "Middle East",
            Region::NorthAfrica => "North Africa",
            Region::SubSaharanAfrica => "Sub-Saharan Africa",
        }
    }

    /// Countries of this region, in table order.
    pub fn members(self) -> impl Iterator<Item = &'static CountrySpec> {
        COUNTRIES.iter().filter(move |c| c.region == self)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
