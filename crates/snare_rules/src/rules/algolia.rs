//! Algolia search API keys.

use crate::assemble;
use crate::fragments;
use crate::record::{RuleCategory, RuleRecord, ScoreParameters, Severity};

/// Admin or search API key, a bare 32-character alphanumeric run.
#[must_use]
pub fn api_key() -> RuleRecord {
    RuleRecord {
        rule_id: "algolia-api-key",
        base_rule_id: "c5a1f7d3-9b0e-4426-b8c0-e6f2a4d81597",
        description: "Algolia API key; admin keys can rewrite every index in the application.",
        regex: assemble::semi_generic(&["algolia"], &fragments::alpha_numeric("32"), true),
        secret_group: 1,
        keywords: vec!["algolia".into()],
        entropy: None,
        severity: Severity::Medium,
        tags: vec!["api-key", "algolia"],
        score: ScoreParameters::semi_generic(RuleCategory::ApiKey),
        allow_lists: Vec::new(),
        path: None,
    }
}
