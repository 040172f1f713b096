//! Static country table: names, ISO codes, region membership and aliases.

use crate::regions::Region;

/// One entry of the country knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountrySpec {
    pub name: &'static str,
    pub iso: &'static str,
    pub region: Region,
    /// Matched case-insensitively on word boundaries.
    pub aliases: &'static [&'static str],
    /// Matched exactly, for short forms that collide with common words.
    pub case_sensitive: &'static [&'static str],
}

pub const COUNTRIES: &[CountrySpec] = &[
    CountrySpec {
        name: "China",
        iso: "CHN",
        region: Region::EastAsia,
        aliases: &[
            "China", "Chinese", "PRC", "People's Republic of China", "Beijing", "Shanghai",
            "Shenzhen", "Guangzhou",
        ],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Hong Kong",
        iso: "HKG",
        region: Region::EastAsia,
        aliases: &["Hong Kong", "Hongkong", "HK"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Macau",
        iso: "MAC",
        region: Region::EastAsia,
        aliases: &["Macau", "Macao"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Japan",
        iso: "JPN",
        region: Region::EastAsia,
        aliases: &["Japan", "Japanese", "Tokyo", "Osaka"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "South Korea",
        iso: "KOR",
        region: Region::EastAsia,
        aliases: &["South Korea", "Korea", "Korean", "Seoul", "Republic of Korea", "ROK"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "North Korea",
        iso: "PRK",
        region: Region::EastAsia,
        aliases: &["North Korea", "DPRK", "Pyongyang"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Taiwan",
        iso: "TWN",
        region: Region::EastAsia,
        aliases: &["Taiwan", "Taiwanese", "Taipei", "ROC"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Mongolia",
        iso: "MNG",
        region: Region::EastAsia,
        aliases: &["Mongolia", "Mongolian"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Malaysia",
        iso: "MYS",
        region: Region::SoutheastAsia,
        aliases: &["Malaysia", "Malaysian", "Kuala Lumpur", "Malaya", "Johor", "Penang", "KL"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Indonesia",
        iso: "IDN",
        region: Region::SoutheastAsia,
        aliases: &["Indonesia", "Indonesian", "Jakarta", "Batam", "Riau", "Java", "Sumatra"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Thailand",
        iso: "THA",
        region: Region::SoutheastAsia,
        aliases: &["Thailand", "Thai", "Bangkok", "Siam"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Vietnam",
        iso: "VNM",
        region: Region::SoutheastAsia,
        aliases: &["Vietnam", "Vietnamese", "Hanoi", "Ho Chi Minh", "Saigon", "Viet Nam"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Philippines",
        iso: "PHL",
        region: Region::SoutheastAsia,
        aliases: &["Philippines", "Filipino", "Philippine", "Manila"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Myanmar",
        iso: "MMR",
        region: Region::SoutheastAsia,
        aliases: &["Myanmar", "Burma", "Burmese", "Yangon", "Rangoon"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Cambodia",
        iso: "KHM",
        region: Region::SoutheastAsia,
        aliases: &["Cambodia", "Cambodian", "Phnom Penh", "Kampuchea"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Laos",
        iso: "LAO",
        region: Region::SoutheastAsia,
        aliases: &["Laos", "Laotian", "Vientiane", "Lao PDR"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Brunei",
        iso: "BRN",
        region: Region::SoutheastAsia,
        aliases: &["Brunei", "Bruneian", "Bandar Seri Begawan"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Timor-Leste",
        iso: "TLS",
        region: Region::SoutheastAsia,
        aliases: &["Timor-Leste", "East Timor", "Timorese"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "India",
        iso: "IND",
        region: Region::SouthAsia,
        aliases: &[
            "India", "Indian", "New Delhi", "Delhi", "Mumbai", "Bombay", "Bangalore", "Chennai",
        ],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Pakistan",
        iso: "PAK",
        region: Region::SouthAsia,
        aliases: &["Pakistan", "Pakistani", "Islamabad", "Karachi"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Bangladesh",
        iso: "BGD",
        region: Region::SouthAsia,
        aliases: &["Bangladesh", "Bangladeshi", "Dhaka", "East Pakistan"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Sri Lanka",
        iso: "LKA",
        region: Region::SouthAsia,
        aliases: &["Sri Lanka", "Sri Lankan", "Ceylon", "Colombo"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Nepal",
        iso: "NPL",
        region: Region::SouthAsia,
        aliases: &["Nepal", "Nepalese", "Nepali", "Kathmandu"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Bhutan",
        iso: "BTN",
        region: Region::SouthAsia,
        aliases: &["Bhutan", "Bhutanese", "Thimphu"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Maldives",
        iso: "MDV",
        region: Region::SouthAsia,
        aliases: &["Maldives", "Maldivian", "Male"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Afghanistan",
        iso: "AFG",
        region: Region::SouthAsia,
        aliases: &["Afghanistan", "Afghan", "Kabul"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Kazakhstan",
        iso: "KAZ",
        region: Region::CentralAsia,
        aliases: &["Kazakhstan", "Kazakh", "Astana", "Almaty"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Uzbekistan",
        iso: "UZB",
        region: Region::CentralAsia,
        aliases: &["Uzbekistan", "Uzbek", "Tashkent"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Turkmenistan",
        iso: "TKM",
        region: Region::CentralAsia,
        aliases: &["Turkmenistan", "Turkmen", "Ashgabat"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Kyrgyzstan",
        iso: "KGZ",
        region: Region::CentralAsia,
        aliases: &["Kyrgyzstan", "Kyrgyz", "Bishkek"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Tajikistan",
        iso: "TJK",
        region: Region::CentralAsia,
        aliases: &["Tajikistan", "Tajik", "Dushanbe"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Australia",
        iso: "AUS",
        region: Region::Oceania,
        aliases: &["Australia", "Australian", "Sydney", "Melbourne", "Canberra"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "New Zealand",
        iso: "NZL",
        region: Region::Oceania,
        aliases: &["New Zealand", "NZ", "Kiwi", "Auckland", "Wellington"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Papua New Guinea",
        iso: "PNG",
        region: Region::Oceania,
        aliases: &["Papua New Guinea", "PNG", "Port Moresby"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Fiji",
        iso: "FJI",
        region: Region::Oceania,
        aliases: &["Fiji", "Fijian", "Suva"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "United Kingdom",
        iso: "GBR",
        region: Region::WesternEurope,
        aliases: &[
            "United Kingdom", "UK", "Britain", "British", "England", "English", "Scotland",
            "Scottish", "Wales", "Welsh", "London", "Great Britain",
        ],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Germany",
        iso: "DEU",
        region: Region::WesternEurope,
        aliases: &[
            "Germany", "German", "Berlin", "Frankfurt", "Munich", "West Germany", "East Germany",
        ],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "France",
        iso: "FRA",
        region: Region::WesternEurope,
        aliases: &["France", "French", "Paris", "Lyon"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Netherlands",
        iso: "NLD",
        region: Region::WesternEurope,
        aliases: &["Netherlands", "Dutch", "Holland", "Amsterdam", "Rotterdam"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Belgium",
        iso: "BEL",
        region: Region::WesternEurope,
        aliases: &["Belgium", "Belgian", "Brussels"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Luxembourg",
        iso: "LUX",
        region: Region::WesternEurope,
        aliases: &["Luxembourg", "Luxembourgish"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Switzerland",
        iso: "CHE",
        region: Region::WesternEurope,
        aliases: &["Switzerland", "Swiss", "Geneva", "Zurich", "Bern"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Austria",
        iso: "AUT",
        region: Region::WesternEurope,
        aliases: &["Austria", "Austrian", "Vienna"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Ireland",
        iso: "IRL",
        region: Region::WesternEurope,
        aliases: &["Ireland", "Irish", "Dublin", "Eire"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Sweden",
        iso: "SWE",
        region: Region::NorthernEurope,
        aliases: &["Sweden", "Swedish", "Stockholm"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Norway",
        iso: "NOR",
        region: Region::NorthernEurope,
        aliases: &["Norway", "Norwegian", "Oslo"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Denmark",
        iso: "DNK",
        region: Region::NorthernEurope,
        aliases: &["Denmark", "Danish", "Copenhagen"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Finland",
        iso: "FIN",
        region: Region::NorthernEurope,
        aliases: &["Finland", "Finnish", "Helsinki"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Iceland",
        iso: "ISL",
        region: Region::NorthernEurope,
        aliases: &["Iceland", "Icelandic", "Reykjavik"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Italy",
        iso: "ITA",
        region: Region::SouthernEurope,
        aliases: &["Italy", "Italian", "Rome", "Milan", "Venice"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Spain",
        iso: "ESP",
        region: Region::SouthernEurope,
        aliases: &["Spain", "Spanish", "Madrid", "Barcelona"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Portugal",
        iso: "PRT",
        region: Region::SouthernEurope,
        aliases: &["Portugal", "Portuguese", "Lisbon"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Greece",
        iso: "GRC",
        region: Region::SouthernEurope,
        aliases: &["Greece", "Greek", "Athens", "Grecian"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Cyprus",
        iso: "CYP",
        region: Region::SouthernEurope,
        aliases: &["Cyprus", "Cypriot", "Nicosia"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Malta",
        iso: "MLT",
        region: Region::SouthernEurope,
        aliases: &["Malta", "Maltese", "Valletta"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Russia",
        iso: "RUS",
        region: Region::EasternEurope,
        aliases: &[
            "Russia", "Russian", "Moscow", "Soviet", "USSR", "Soviet Union", "St Petersburg",
        ],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Poland",
        iso: "POL",
        region: Region::EasternEurope,
        aliases: &["Poland", "Polish", "Warsaw"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Ukraine",
        iso: "UKR",
        region: Region::EasternEurope,
        aliases: &["Ukraine", "Ukrainian", "Kyiv", "Kiev"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Czech Republic",
        iso: "CZE",
        region: Region::EasternEurope,
        aliases: &["Czech Republic", "Czech", "Czechia", "Prague", "Czechoslovakia"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Hungary",
        iso: "HUN",
        region: Region::EasternEurope,
        aliases: &["Hungary", "Hungarian", "Budapest"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Romania",
        iso: "ROU",
        region: Region::EasternEurope,
        aliases: &["Romania", "Romanian", "Bucharest"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Bulgaria",
        iso: "BGR",
        region: Region::EasternEurope,
        aliases: &["Bulgaria", "Bulgarian", "Sofia"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Serbia",
        iso: "SRB",
        region: Region::EasternEurope,
        aliases: &["Serbia", "Serbian", "Belgrade", "Yugoslavia"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Croatia",
        iso: "HRV",
        region: Region::EasternEurope,
        aliases: &["Croatia", "Croatian", "Zagreb"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Slovenia",
        iso: "SVN",
        region: Region::EasternEurope,
        aliases: &["Slovenia", "Slovenian", "Ljubljana"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Slovakia",
        iso: "SVK",
        region: Region::EasternEurope,
        aliases: &["Slovakia", "Slovak", "Bratislava"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Belarus",
        iso: "BLR",
        region: Region::EasternEurope,
        aliases: &["Belarus", "Belarusian", "Minsk"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Moldova",
        iso: "MDA",
        region: Region::EasternEurope,
        aliases: &["Moldova", "Moldovan", "Chisinau"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Estonia",
        iso: "EST",
        region: Region::EasternEurope,
        aliases: &["Estonia", "Estonian", "Tallinn"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Latvia",
        iso: "LVA",
        region: Region::EasternEurope,
        aliases: &["Latvia", "Latvian", "Riga"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Lithuania",
        iso: "LTU",
        region: Region::EasternEurope,
        aliases: &["Lithuania", "Lithuanian", "Vilnius"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Kosovo",
        iso: "XKX",
        region: Region::EasternEurope,
        aliases: &["Kosovo", "Kosovar", "Pristina"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Bosnia and Herzegovina",
        iso: "BIH",
        region: Region::EasternEurope,
        aliases: &["Bosnia", "Bosnian", "Herzegovina", "Sarajevo"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Montenegro",
        iso: "MNE",
        region: Region::EasternEurope,
        aliases: &["Montenegro", "Montenegrin", "Podgorica"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "North Macedonia",
        iso: "MKD",
        region: Region::EasternEurope,
        aliases: &["North Macedonia", "Macedonia", "Macedonian", "Skopje"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Albania",
        iso: "ALB",
        region: Region::EasternEurope,
        aliases: &["Albania", "Albanian", "Tirana"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Georgia",
        iso: "GEO",
        region: Region::Caucasus,
        aliases: &["Georgia", "Georgian", "Tbilisi"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Armenia",
        iso: "ARM",
        region: Region::Caucasus,
        aliases: &["Armenia", "Armenian", "Yerevan"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Azerbaijan",
        iso: "AZE",
        region: Region::Caucasus,
        aliases: &["Azerbaijan", "Azerbaijani", "Baku"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "United States",
        iso: "USA",
        region: Region::NorthAmerica,
        aliases: &[
            "United States", "USA", "America", "American", "Washington", "New York", "California",
            "Silicon Valley", "Wall Street", "Texas", "U.S.", "U.S.A.",
        ],
        case_sensitive: &["US"],
    },
    CountrySpec {
        name: "Canada",
        iso: "CAN",
        region: Region::NorthAmerica,
        aliases: &["Canada", "Canadian", "Ottawa", "Toronto", "Vancouver"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Mexico",
        iso: "MEX",
        region: Region::NorthAmerica,
        aliases: &["Mexico", "Mexican", "Mexico City"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Cuba",
        iso: "CUB",
        region: Region::CentralAmerica,
        aliases: &["Cuba", "Cuban", "Havana"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Jamaica",
        iso: "JAM",
        region: Region::CentralAmerica,
        aliases: &["Jamaica", "Jamaican", "Kingston"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Panama",
        iso: "PAN",
        region: Region::CentralAmerica,
        aliases: &["Panama", "Panamanian", "Panama City", "Panama Canal"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Costa Rica",
        iso: "CRI",
        region: Region::CentralAmerica,
        aliases: &["Costa Rica", "Costa Rican", "San Jose"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Brazil",
        iso: "BRA",
        region: Region::SouthAmerica,
        aliases: &["Brazil", "Brazilian", "Sao Paulo", "Rio", "Brasilia"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Argentina",
        iso: "ARG",
        region: Region::SouthAmerica,
        aliases: &["Argentina", "Argentine", "Buenos Aires"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Chile",
        iso: "CHL",
        region: Region::SouthAmerica,
        aliases: &["Chile", "Chilean", "Santiago"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Colombia",
        iso: "COL",
        region: Region::SouthAmerica,
        aliases: &["Colombia", "Colombian", "Bogota"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Peru",
        iso: "PER",
        region: Region::SouthAmerica,
        aliases: &["Peru", "Peruvian", "Lima"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Venezuela",
        iso: "VEN",
        region: Region::SouthAmerica,
        aliases: &["Venezuela", "Venezuelan", "Caracas"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Ecuador",
        iso: "ECU",
        region: Region::SouthAmerica,
        aliases: &["Ecuador", "Ecuadorian", "Quito"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Bolivia",
        iso: "BOL",
        region: Region::SouthAmerica,
        aliases: &["Bolivia", "Bolivian", "La Paz"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Uruguay",
        iso: "URY",
        region: Region::SouthAmerica,
        aliases: &["Uruguay", "Uruguayan", "Montevideo"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Paraguay",
        iso: "PRY",
        region: Region::SouthAmerica,
        aliases: &["Paraguay", "Paraguayan", "Asuncion"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Saudi Arabia",
        iso: "SAU",
        region: Region::MiddleEast,
        aliases: &["Saudi Arabia", "Saudi", "Riyadh", "Mecca", "Jeddah"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "United Arab Emirates",
        iso: "ARE",
        region: Region::MiddleEast,
        aliases: &["UAE", "United Arab Emirates", "Dubai", "Abu Dhabi", "Emirates"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Israel",
        iso: "ISR",
        region: Region::MiddleEast,
        aliases: &["Israel", "Israeli", "Tel Aviv", "Jerusalem"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Turkey",
        iso: "TUR",
        region: Region::MiddleEast,
        aliases: &["Turkey", "Turkish", "Istanbul", "Ankara"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Iran",
        iso: "IRN",
        region: Region::MiddleEast,
        aliases: &["Iran", "Iranian", "Tehran", "Persia", "Persian"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Iraq",
        iso: "IRQ",
        region: Region::MiddleEast,
        aliases: &["Iraq", "Iraqi", "Baghdad"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Kuwait",
        iso: "KWT",
        region: Region::MiddleEast,
        aliases: &["Kuwait", "Kuwaiti"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Qatar",
        iso: "QAT",
        region: Region::MiddleEast,
        aliases: &["Qatar", "Qatari", "Doha"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Bahrain",
        iso: "BHR",
        region: Region::MiddleEast,
        aliases: &["Bahrain", "Bahraini", "Manama"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Oman",
        iso: "OMN",
        region: Region::MiddleEast,
        aliases: &["Oman", "Omani", "Muscat"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Jordan",
        iso: "JOR",
        region: Region::MiddleEast,
        aliases: &["Jordan", "Jordanian", "Amman"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Lebanon",
        iso: "LBN",
        region: Region::MiddleEast,
        aliases: &["Lebanon", "Lebanese", "Beirut"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Syria",
        iso: "SYR",
        region: Region::MiddleEast,
        aliases: &["Syria", "Syrian", "Damascus"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Yemen",
        iso: "YEM",
        region: Region::MiddleEast,
        aliases: &["Yemen", "Yemeni", "Sanaa"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Palestine",
        iso: "PSE",
        region: Region::MiddleEast,
        aliases: &["Palestine", "Palestinian", "Gaza", "West Bank"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Egypt",
        iso: "EGY",
        region: Region::NorthAfrica,
        aliases: &["Egypt", "Egyptian", "Cairo", "Suez"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Morocco",
        iso: "MAR",
        region: Region::NorthAfrica,
        aliases: &["Morocco", "Moroccan", "Rabat", "Casablanca"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Algeria",
        iso: "DZA",
        region: Region::NorthAfrica,
        aliases: &["Algeria", "Algerian", "Algiers"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Tunisia",
        iso: "TUN",
        region: Region::NorthAfrica,
        aliases: &["Tunisia", "Tunisian", "Tunis"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Libya",
        iso: "LBY",
        region: Region::NorthAfrica,
        aliases: &["Libya", "Libyan", "Tripoli"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Sudan",
        iso: "SDN",
        region: Region::NorthAfrica,
        aliases: &["Sudan", "Sudanese", "Khartoum"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "South Africa",
        iso: "ZAF",
        region: Region::SubSaharanAfrica,
        aliases: &["South Africa", "South African", "Johannesburg", "Cape Town", "Pretoria"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Nigeria",
        iso: "NGA",
        region: Region::SubSaharanAfrica,
        aliases: &["Nigeria", "Nigerian", "Lagos", "Abuja"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Kenya",
        iso: "KEN",
        region: Region::SubSaharanAfrica,
        aliases: &["Kenya", "Kenyan", "Nairobi"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Ethiopia",
        iso: "ETH",
        region: Region::SubSaharanAfrica,
        aliases: &["Ethiopia", "Ethiopian", "Addis Ababa"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Ghana",
        iso: "GHA",
        region: Region::SubSaharanAfrica,
        aliases: &["Ghana", "Ghanaian", "Accra"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Tanzania",
        iso: "TZA",
        region: Region::SubSaharanAfrica,
        aliases: &["Tanzania", "Tanzanian", "Dar es Salaam"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Rwanda",
        iso: "RWA",
        region: Region::SubSaharanAfrica,
        aliases: &["Rwanda", "Rwandan", "Kigali"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Uganda",
        iso: "UGA",
        region: Region::SubSaharanAfrica,
        aliases: &["Uganda", "Ugandan", "Kampala"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Zimbabwe",
        iso: "ZWE",
        region: Region::SubSaharanAfrica,
        aliases: &["Zimbabwe", "Zimbabwean", "Harare", "Rhodesia"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Senegal",
        iso: "SEN",
        region: Region::SubSaharanAfrica,
        aliases: &["Senegal", "Senegalese", "Dakar"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Ivory Coast",
        iso: "CIV",
        region: Region::SubSaharanAfrica,
        aliases: &["Ivory Coast", "Cote d'Ivoire", "Ivorian", "Abidjan"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Angola",
        iso: "AGO",
        region: Region::SubSaharanAfrica,
        aliases: &["Angola", "Angolan", "Luanda"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Mozambique",
        iso: "MOZ",
        region: Region::SubSaharanAfrica,
        aliases: &["Mozambique", "Mozambican", "Maputo"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Zambia",
        iso: "ZMB",
        region: Region::SubSaharanAfrica,
        aliases: &["Zambia", "Zambian", "Lusaka"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Botswana",
        iso: "BWA",
        region: Region::SubSaharanAfrica,
        aliases: &["Botswana", "Batswana", "Gaborone"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Namibia",
        iso: "NAM",
        region: Region::SubSaharanAfrica,
        aliases: &["Namibia", "Namibian", "Windhoek"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Mauritius",
        iso: "MUS",
        region: Region::SubSaharanAfrica,
        aliases: &["Mauritius", "Mauritian", "Port Louis"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "DR Congo",
        iso: "COD",
        region: Region::SubSaharanAfrica,
        aliases: &[
            "Democratic Republic of Congo", "Democratic Republic of the Congo", "Congo-Kinshasa",
            "Kinshasa", "Zaire",
        ],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Republic of Congo",
        iso: "COG",
        region: Region::SubSaharanAfrica,
        aliases: &["Republic of Congo", "Congo-Brazzaville", "Brazzaville"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Cameroon",
        iso: "CMR",
        region: Region::SubSaharanAfrica,
        aliases: &["Cameroon", "Cameroonian", "Yaounde"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Madagascar",
        iso: "MDG",
        region: Region::SubSaharanAfrica,
        aliases: &["Madagascar", "Malagasy", "Antananarivo"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Mali",
        iso: "MLI",
        region: Region::SubSaharanAfrica,
        aliases: &["Mali", "Malian", "Bamako"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Niger",
        iso: "NER",
        region: Region::SubSaharanAfrica,
        aliases: &["Niger", "Nigerien", "Niamey"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Burkina Faso",
        iso: "BFA",
        region: Region::SubSaharanAfrica,
        aliases: &["Burkina Faso", "Burkinabe", "Ouagadougou"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Malawi",
        iso: "MWI",
        region: Region::SubSaharanAfrica,
        aliases: &["Malawi", "Malawian", "Lilongwe"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Somalia",
        iso: "SOM",
        region: Region::SubSaharanAfrica,
        aliases: &["Somalia", "Somali", "Mogadishu"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Chad",
        iso: "TCD",
        region: Region::SubSaharanAfrica,
        aliases: &["Chad", "Chadian", "N'Djamena"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Guinea",
        iso: "GIN",
        region: Region::SubSaharanAfrica,
        aliases: &["Guinea", "Guinean", "Conakry"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Benin",
        iso: "BEN",
        region: Region::SubSaharanAfrica,
        aliases: &["Benin", "Beninese", "Porto-Novo", "Dahomey"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Burundi",
        iso: "BDI",
        region: Region::SubSaharanAfrica,
        aliases: &["Burundi", "Burundian", "Bujumbura"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "South Sudan",
        iso: "SSD",
        region: Region::SubSaharanAfrica,
        aliases: &["South Sudan", "South Sudanese", "Juba"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Eritrea",
        iso: "ERI",
        region: Region::SubSaharanAfrica,
        aliases: &["Eritrea", "Eritrean", "Asmara"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Sierra Leone",
        iso: "SLE",
        region: Region::SubSaharanAfrica,
        aliases: &["Sierra Leone", "Sierra Leonean", "Freetown"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Togo",
        iso: "TGO",
        region: Region::SubSaharanAfrica,
        aliases: &["Togo", "Togolese", "Lome"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Liberia",
        iso: "LBR",
        region: Region::SubSaharanAfrica,
        aliases: &["Liberia", "Liberian", "Monrovia"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Central African Republic",
        iso: "CAF",
        region: Region::SubSaharanAfrica,
        aliases: &["Central African Republic", "Bangui"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Gabon",
        iso: "GAB",
        region: Region::SubSaharanAfrica,
        aliases: &["Gabon", "Gabonese", "Libreville"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Lesotho",
        iso: "LSO",
        region: Region::SubSaharanAfrica,
        aliases: &["Lesotho", "Basotho", "Maseru"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Eswatini",
        iso: "SWZ",
        region: Region::SubSaharanAfrica,
        aliases: &["Eswatini", "Swaziland", "Swazi", "Mbabane"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Djibouti",
        iso: "DJI",
        region: Region::SubSaharanAfrica,
        aliases: &["Djibouti", "Djiboutian"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Gambia",
        iso: "GMB",
        region: Region::SubSaharanAfrica,
        aliases: &["Gambia", "Gambian", "Banjul"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Guinea-Bissau",
        iso: "GNB",
        region: Region::SubSaharanAfrica,
        aliases: &["Guinea-Bissau", "Bissau"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Equatorial Guinea",
        iso: "GNQ",
        region: Region::SubSaharanAfrica,
        aliases: &["Equatorial Guinea", "Malabo"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Mauritania",
        iso: "MRT",
        region: Region::NorthAfrica,
        aliases: &["Mauritania", "Mauritanian", "Nouakchott"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Seychelles",
        iso: "SYC",
        region: Region::SubSaharanAfrica,
        aliases: &["Seychelles", "Seychellois", "Victoria"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Cape Verde",
        iso: "CPV",
        region: Region::SubSaharanAfrica,
        aliases: &["Cape Verde", "Cabo Verde", "Praia"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Comoros",
        iso: "COM",
        region: Region::SubSaharanAfrica,
        aliases: &["Comoros", "Comorian", "Moroni"],
        case_sensitive: &[],
    },
    CountrySpec {
        name: "Sao Tome and Principe",
        iso: "STP",
        region: Region::SubSaharanAfrica,
        aliases: &["Sao Tome", "Principe"],
        case_sensitive: &[],
    },
];
