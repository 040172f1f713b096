//! Ministry topic definitions.
//!
//! Keyword phrases are matched as lower-case substrings. A phrase contributes its
//! word count to the topic score, so multi-word phrases outweigh single words.

/// A topic with its display label and ordered keyword phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

/// Label assigned to sentences that match no topic keyword.
pub const GENERAL_TOPIC: &str = "general";

/// Registry order; earlier topics win score ties.
pub const MINISTRY_TOPICS: &[TopicSpec] = &[
    TopicSpec {
        key: "communications_information",
        label: "Communications & Information",
        keywords: &[
            "5g", "broadband", "broadcasting", "communications", "cyber", "digital", "imda",
            "infocomm", "information", "internet", "media", "technology", "telecommunications",
        ],
    },
    TopicSpec {
        key: "culture_community_youth",
        label: "Culture, Community & Youth",
        keywords: &[
            "arts", "community", "culture", "day rally", "heritage", "library", "mccy", "museum",
            "national day", "national day rally", "nlb", "racial harmony", "recreation", "sport",
            "sports", "youth",
        ],
    },
    TopicSpec {
        key: "defence",
        label: "Defence",
        keywords: &[
            "air force", "army", "defence", "defense", "military", "mindef", "national service",
            "navy", "ns", "rsaf", "rsn", "saf", "safti", "security",
        ],
    },
    TopicSpec {
        key: "education",
        label: "Education",
        keywords: &[
            "college", "curriculum", "despite", "education", "ite", "items", "learning", "moe",
            "ntu", "nus", "polytechnic", "preschool", "primary", "school", "schools", "secondary",
            "skillsfuture", "smu", "student", "students", "teacher", "united", "universities",
            "university",
        ],
    },
    TopicSpec {
        key: "finance",
        label: "Finance",
        keywords: &[
            "budget", "corporate", "corporate tax", "customs", "debt", "deficit", "estimated",
            "excise", "fiscal", "gst", "income tax", "iras", "personal", "personal income",
            "property", "property tax", "revenue", "stamp duty", "surplus", "tax", "tax rate",
            "tax rates", "taxes", "treasury",
        ],
    },
    TopicSpec {
        key: "foreign_affairs",
        label: "Foreign Affairs",
        keywords: &[
            "ambassador", "asean", "bilateral", "diplomatic", "embassy", "foreign",
            "international", "mfa", "overseas", "relations", "treaty",
        ],
    },
    TopicSpec {
        key: "health",
        label: "Health",
        keywords: &[
            "careshield", "clinic", "disease", "doctor", "eldercare", "eldershield", "health",
            "healthcare", "hospital", "hospitals", "medical", "medisave", "medisave top",
            "medishield", "moh", "nurse", "patient", "patients", "polyclinic",
        ],
    },
    TopicSpec {
        key: "home_affairs",
        label: "Home Affairs",
        keywords: &[
            "approves", "april", "citizen", "civil defence", "crime", "emergency",
            "financial policy", "fire", "home affairs", "ica", "immigration", "law enforcement",
            "police", "pr", "safety", "scdf",
        ],
    },
    TopicSpec {
        key: "law",
        label: "Law",
        keywords: &[
            "attorney general", "court", "judge", "judiciary", "justice", "law", "legal",
            "legislation", "minlaw", "regulation", "statute",
        ],
    },
    TopicSpec {
        key: "manpower",
        label: "Manpower",
        keywords: &[
            "cpf", "employers", "employment", "foreign workers", "jobs", "labor", "labour",
            "manpower", "ntuc", "progressive wage", "retirement", "salary", "skilled", "skills",
            "training", "unemployment", "wage", "wages", "workers", "workfare", "workforce",
        ],
    },
    TopicSpec {
        key: "national_development",
        label: "National Development",
        keywords: &[
            "bca", "bto", "building", "construction", "estate", "estate duty", "flat", "flats",
            "hdb", "hdb flats", "housing", "inflation", "planning", "property", "public housing",
            "resale", "room", "room hdb", "town", "ura", "urban",
        ],
    },
    TopicSpec {
        key: "social_family_development",
        label: "Social & Family Development",
        keywords: &[
            "aged", "assistance", "children", "comcare", "elderly", "family", "family development",
            "low income", "msf", "social", "social support", "subsidy", "vulnerable", "welfare",
        ],
    },
    TopicSpec {
        key: "sustainability_environment",
        label: "Sustainability & Environment",
        keywords: &[
            "carbon", "climate", "climate change", "emission", "emissions", "energy",
            "environment", "green", "nea", "net zero", "pollution", "pub", "recycling",
            "renewable", "sustainability", "waste", "water",
        ],
    },
    TopicSpec {
        key: "trade_industry",
        label: "Trade & Industry",
        keywords: &[
            "assessment", "business", "businesses", "commerce", "edb", "enterprise", "enterprises",
            "export", "exports", "fdi", "import", "important", "industrial", "industry",
            "innovation", "investment", "investments", "manufacturing", "productivity", "sme",
            "smes", "startup", "trade",
        ],
    },
    TopicSpec {
        key: "transport",
        label: "Transport",
        keywords: &[
            "bus", "car", "cars", "changi airport", "coe", "erp", "lrt", "lta", "maritime", "mrt",
            "opportunities", "port", "road", "shipping", "smrt", "taxi", "traffic", "train",
            "transport",
        ],
    },
];
