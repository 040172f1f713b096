//! Static knowledge bases for policy speech analysis, compiled into a shared
//! [`PatternRegistry`].
//!
//! ## Modules
//!
//! - [`countries`] - Country table with ISO codes, regions and aliases
//! - [`regions`] - The region partition
//! - [`topics`] - Ministry topics and weighted keyword phrases
//! - [`markers`] - Temporal and certainty marker lexicons
//! - [`stopwords`] - Stopword and boilerplate lexicons
//! - [`alias`] - Whole-word alias matching with scoped exclusions
//! - [`registry`] - Compile-once registry shared across workers

mod errors;

pub mod alias;
pub mod countries;
pub mod markers;
pub mod regions;
pub mod registry;
pub mod stopwords;
pub mod topics;

pub use alias::{AliasSpan, EntityMatcher, Exclusion, EXCLUSIONS};
pub use countries::{CountrySpec, COUNTRIES};
pub use errors::{PatternError, PatternResult};
pub use regions::Region;
pub use registry::{CompiledTopic, MarkerFamily, MarkerSets, PatternRegistry};
pub use topics::{TopicSpec, GENERAL_TOPIC, MINISTRY_TOPICS};

#[cfg(test)]
mod tests {
    mod matching;
}
