//! Datadog access tokens.

use crate::assemble;
use crate::fragments;
use crate::record::{RuleCategory, RuleRecord, ScoreParameters, Severity};

/// Application access token, a bare 40-character alphanumeric run.
#[must_use]
pub fn access_token() -> RuleRecord {
    RuleRecord {
        rule_id: "datadog-access-token",
        base_rule_id: "51e9c7a3-0f6d-4b84-ae12-c3d7f5b09268",
        description: "Datadog application token, granting monitoring API access.",
        regex: assemble::semi_generic(&["datadog"], &fragments::alpha_numeric("40"), true),
        secret_group: 1,
        keywords: vec!["datadog".into()],
        entropy: Some(3.0),
        severity: Severity::Medium,
        tags: vec!["access-token", "datadog"],
        score: ScoreParameters::semi_generic(RuleCategory::AccessToken),
        allow_lists: Vec::new(),
        path: None,
    }
}
