//! Temporal orientation and certainty marker lexicons.
//!
//! Each marker is counted as a whole-word occurrence in lower-cased text. The
//! families overlap: "will" is both forward-looking and certain.

/// Future-oriented words and phrases.
pub const FORWARD_MARKERS: &[&str] = &[
    "will", "shall", "going to", "aim to", "plan to", "intend",
    "future", "upcoming", "next year", "ahead", "seek to",
    "expect to", "hope to", "want to", "new", "propose",
    "proposed", "introduce", "launch", "implement", "initiative",
    "strategy", "vision", "goal", "target", "ambition",
];

/// Past-oriented words and phrases.
pub const BACKWARD_MARKERS: &[&str] = &[
    "was", "were", "had", "last year", "previously",
    "in the past", "historically", "since", "achieved",
    "accomplished", "completed", "established", "built", "developed",
    "progress", "progressed", "improved", "grew", "increased",
    "reduced", "record", "history", "legacy", "foundation",
];

/// Tentative language.
pub const HEDGE_MARKERS: &[&str] = &[
    "may", "might", "could", "perhaps", "possibly", "probably",
    "likely", "unlikely", "approximately", "around", "about",
    "estimate", "expect", "believe", "seem", "seems", "appear",
    "appears", "suggest", "suggests", "tend to", "generally",
    "somewhat", "relatively", "partially",
];

/// Assertive language.
pub const CERTAINTY_MARKERS: &[&str] = &[
    "will", "shall", "must", "certainly", "definitely",
    "absolutely", "clearly", "undoubtedly", "surely", "certain",
    "confident", "commit", "committed", "commitment", "ensure",
    "guarantee", "determined", "resolved", "firmly", "strongly",
    "decisive", "crucial", "essential", "vital", "critical",
];
