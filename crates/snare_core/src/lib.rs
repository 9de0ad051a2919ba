//! Minimal secret detection engine for the snare rule catalog.
//!
//! This crate is the engine side of the workspace: it knows nothing about
//! individual credential formats. It takes compiled [`Rule`]s from a catalog,
//! pre-filters content with an Aho-Corasick keyword automaton, runs each
//! candidate rule's regex, applies the entropy gate and allowlists, and
//! returns [`Finding`]s.
//!
//! # Main Types
//!
//! - [`Detector`] - Matches a set of rules against strings or bytes
//! - [`Rule`] - The engine-native rule shape (regex, keywords, entropy, ...)
//! - [`AllowList`] - Per-rule suppression of known-benign matches
//! - [`Finding`] - One detected secret with its byte span and entropy
//!
//! Zero findings on a given input is a normal outcome, not an error; the
//! engine has no fallible runtime paths of its own.

/// The keyword-prefiltered matching engine.
pub mod detector;
pub(crate) mod entropy;
/// A detected secret and its location.
pub mod finding;
/// Engine-native rule and allowlist types.
pub mod rule;
#[cfg(test)]
pub(crate) mod test_utils;

pub use detector::Detector;
pub use entropy::shannon_entropy;
pub use finding::Finding;
pub use rule::{AllowList, Rule};
