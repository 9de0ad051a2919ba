//! Secret detection rule catalog for snare.
//!
//! This crate owns everything that turns credential knowledge into engine
//! configuration: regex fragments and the two assembly strategies, the
//! [`RuleRecord`] shape, the default/special catalogs, and the
//! select/ignore/special filtering used by callers to tailor the rule set.
//! The matching itself lives in `snare_core`; every record converts into
//! that engine's native rule via [`RuleRecord::to_engine`].
//!
//! # Main Entry Points
//!
//! - [`default_rules`] / [`special_rules`] - The catalogs, in declaration order
//! - [`filter_rules`] - Select/ignore/special composition over the catalogs
//! - [`rules`] - One constructor per credential type (e.g. `rules::github::personal_access_token`)
//! - [`validate`] - The fixture harness every rule's tests run through
//!
//! # Error Handling
//!
//! Structured errors use [`thiserror`]: [`ValidationError`] for fixture
//! violations and [`fragments::InvalidLengthSpec`] for malformed length
//! specifiers. A regex that fails to compile during catalog construction is
//! a defect in a rule definition and aborts with a diagnostic instead of
//! surfacing as a runtime error.

/// Assembles full detection regexes from fragments.
pub mod assemble;
/// The default and special rule catalogs.
pub mod catalog;
/// Rule selection by id and tag.
pub mod filter;
/// Regex character-class fragments for common secret shapes.
pub mod fragments;
/// The canonical rule record and its metadata types.
pub mod record;
/// Rule definitions, one module per vendor or credential family.
pub mod rules;
/// Fixture-driven validation of rule records.
pub mod validate;

pub use catalog::{cached_default_rules, default_rules, special_rules};
pub use filter::{filter_rules, ignore_rules, is_rule_match, select_rules};
pub use record::{RuleCategory, RuleRecord, ScoreParameters, Severity};
pub use validate::{ValidationError, validate};
