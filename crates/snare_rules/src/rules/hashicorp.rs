//! HashiCorp cloud tokens and Terraform configuration passwords.

use crate::assemble;
use crate::fragments;
use crate::record::{RuleCategory, RuleRecord, ScoreParameters, Severity};

/// HCP / Terraform Cloud API token (`...atlasv1....`).
#[must_use]
pub fn cloud_platform_token() -> RuleRecord {
    RuleRecord {
        rule_id: "hashicorp-cloud-token",
        base_rule_id: "3c9f1e5b-8d26-4a70-92f4-b5e0c8d3a617",
        description: "HashiCorp cloud API token for Terraform Cloud and HCP services.",
        regex: assemble::unique_token(r"atlasv1\.[a-z0-9+/=_\-]{60,100}", true),
        secret_group: 1,
        keywords: vec!["atlasv1".into()],
        entropy: Some(3.5),
        severity: Severity::High,
        tags: vec!["access-token", "hashicorp"],
        score: ScoreParameters::unique_token(RuleCategory::AccessToken),
        allow_lists: Vec::new(),
        path: None,
    }
}

/// Password assignment inside Terraform configuration.
///
/// Only meaningful in Terraform files, so the rule carries a path filter
/// and stays quiet elsewhere.
#[must_use]
pub fn terraform_password() -> RuleRecord {
    let shape = format!("\"{}\"", fragments::alpha_numeric_extended("8,20"));
    RuleRecord {
        rule_id: "hashicorp-terraform-password",
        base_rule_id: "b7d5f3a1-4c8e-4062-8b9d-f2a6c0e48153",
        description: "Password literal in Terraform configuration, stored unencrypted in state.",
        regex: assemble::semi_generic(
            &["administrator_login_password", "password"],
            &shape,
            true,
        ),
        secret_group: 1,
        keywords: vec!["password".into()],
        entropy: Some(3.0),
        severity: Severity::Medium,
        tags: vec!["password", "hashicorp"],
        score: ScoreParameters::semi_generic(RuleCategory::Password),
        allow_lists: Vec::new(),
        path: Some(assemble::compile(r"(?i)\.(tf|tfvars|hcl)$")),
    }
}
