//! Heroku platform API keys.

use crate::assemble;
use crate::fragments;
use crate::record::{RuleCategory, RuleRecord, ScoreParameters, Severity};

/// Platform API key, a bare UUID.
///
/// UUIDs appear everywhere, so the rule demands a `heroku` identifier in
/// assignment position rather than matching the shape alone.
#[must_use]
pub fn api_key() -> RuleRecord {
    RuleRecord {
        rule_id: "heroku-api-key",
        base_rule_id: "92a4c6e8-5b1d-4f37-80c2-a7d9e3f0b154",
        description: "Heroku platform API key, granting full control of the account's apps.",
        regex: assemble::semi_generic(&["heroku"], &fragments::hex8_4_4_4_12(), true),
        secret_group: 1,
        keywords: vec!["heroku".into()],
        entropy: None,
        severity: Severity::High,
        tags: vec!["api-key", "heroku"],
        score: ScoreParameters::semi_generic(RuleCategory::ApiKey),
        allow_lists: Vec::new(),
        path: None,
    }
}
