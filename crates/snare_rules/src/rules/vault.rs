//! HashiCorp Vault service and batch tokens.

use crate::assemble;
use crate::record::{RuleCategory, RuleRecord, ScoreParameters, Severity};

/// Service token (`hvs....`).
#[must_use]
pub fn service_token() -> RuleRecord {
    RuleRecord {
        rule_id: "vault-service-token",
        base_rule_id: "e0b8d6f4-2a9c-4573-b1e8-06c4a2d8f597",
        description: "Vault service token, granting whatever policies it was minted with.",
        regex: assemble::unique_token(r"hvs\.[a-z0-9_-]{90,120}", true),
        secret_group: 1,
        keywords: vec!["hvs.".into()],
        entropy: Some(3.5),
        severity: Severity::Critical,
        tags: vec!["service-credential", "vault"],
        score: ScoreParameters::unique_token(RuleCategory::ServiceCredential),
        allow_lists: Vec::new(),
        path: None,
    }
}

/// Batch token (`hvb....`).
#[must_use]
pub fn batch_token() -> RuleRecord {
    RuleRecord {
        rule_id: "vault-batch-token",
        base_rule_id: "74f2a8c0-6e3d-4b19-a5c7-d0e8b4f62931",
        description: "Vault batch token, a lightweight credential for high-volume workloads.",
        regex: assemble::unique_token(r"hvb\.[a-z0-9_-]{138,300}", true),
        secret_group: 1,
        keywords: vec!["hvb.".into()],
        entropy: Some(3.5),
        severity: Severity::High,
        tags: vec!["service-credential", "vault"],
        score: ScoreParameters::unique_token(RuleCategory::ServiceCredential),
        allow_lists: Vec::new(),
        path: None,
    }
}
