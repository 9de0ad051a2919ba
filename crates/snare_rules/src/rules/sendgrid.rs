//! SendGrid API tokens.

use crate::assemble;
use crate::fragments;
use crate::record::{RuleCategory, RuleRecord, ScoreParameters, Severity};

/// API token (`SG.` followed by a 66-character body).
#[must_use]
pub fn api_token() -> RuleRecord {
    RuleRecord {
        rule_id: "sendgrid-api-token",
        base_rule_id: "1f7c5a9e-3d0b-4628-a4f6-98e2c0d5b713",
        description: "SendGrid API token, able to send mail as the account.",
        regex: assemble::unique_token(
            &format!(r"SG\.{}", fragments::alpha_numeric_extended("66")),
            true,
        ),
        secret_group: 1,
        keywords: vec!["sg.".into()],
        entropy: Some(3.0),
        severity: Severity::Medium,
        tags: vec!["api-key", "sendgrid"],
        score: ScoreParameters::unique_token(RuleCategory::ApiKey),
        allow_lists: Vec::new(),
        path: None,
    }
}
