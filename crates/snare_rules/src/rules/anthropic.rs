//! Anthropic API and admin keys.
//!
//! Both key families carry a fixed `sk-ant-` prefix with a role segment and
//! end in a literal `AA`, so casing is significant and the patterns stay
//! case-sensitive.

use crate::assemble;
use crate::record::{RuleCategory, RuleRecord, ScoreParameters, Severity};

/// Anthropic admin key (`sk-ant-admin01-...`).
#[must_use]
pub fn admin_key() -> RuleRecord {
    RuleRecord {
        rule_id: "anthropic-admin-key",
        base_rule_id: "4c90ddc6-b3a1-4e7a-9c4f-2f1c8b0a5d3e",
        description: "Anthropic admin key, granting organization-level management access.",
        regex: assemble::unique_token(r"sk-ant-admin01-[\w\-]{93}AA", false),
        secret_group: 1,
        keywords: vec!["sk-ant-admin01".into()],
        entropy: Some(3.5),
        severity: Severity::Critical,
        tags: vec!["api-key", "anthropic"],
        score: ScoreParameters::unique_token(RuleCategory::ApiKey),
        allow_lists: Vec::new(),
        path: None,
    }
}

/// Anthropic API key (`sk-ant-api03-...`).
#[must_use]
pub fn api_key() -> RuleRecord {
    RuleRecord {
        rule_id: "anthropic-api-key",
        base_rule_id: "9e2b71a4-5c8d-4f30-8a6e-d1b9c7e24f05",
        description: "Anthropic API key, granting model inference access billed to the owner.",
        regex: assemble::unique_token(r"sk-ant-api03-[\w\-]{93}AA", false),
        secret_group: 1,
        keywords: vec!["sk-ant-api03".into()],
        entropy: Some(3.5),
        severity: Severity::High,
        tags: vec!["api-key", "anthropic"],
        score: ScoreParameters::unique_token(RuleCategory::ApiKey),
        allow_lists: Vec::new(),
        path: None,
    }
}
