//! GitHub token families.
//!
//! All current GitHub tokens are prefixed (`ghp_`, `gho_`, `ghu_`/`ghs_`,
//! `ghr_`, `github_pat_`) with case-significant bodies, so every rule here
//! is a case-sensitive unique-token match.

use crate::assemble;
use crate::record::{RuleCategory, RuleRecord, ScoreParameters, Severity};

/// Classic personal access token (`ghp_...`).
#[must_use]
pub fn personal_access_token() -> RuleRecord {
    RuleRecord {
        rule_id: "github-pat",
        base_rule_id: "2d5e8f1a-3b7c-4d90-b2e6-4a8c0f5d7e19",
        description: "GitHub classic personal access token, scoped to the owner's repositories.",
        regex: assemble::unique_token(r"ghp_[0-9a-zA-Z]{36}", false),
        secret_group: 1,
        keywords: vec!["ghp_".into()],
        entropy: Some(3.0),
        severity: Severity::High,
        tags: vec!["access-token", "github"],
        score: ScoreParameters::unique_token(RuleCategory::AccessToken),
        allow_lists: Vec::new(),
        path: None,
    }
}

/// Fine-grained personal access token (`github_pat_...`).
#[must_use]
pub fn fine_grained_pat() -> RuleRecord {
    RuleRecord {
        rule_id: "github-fine-grained-pat",
        base_rule_id: "8b4a6c2e-1d9f-4a53-9e07-c6f2d8b0a341",
        description: "GitHub fine-grained personal access token with per-repository permissions.",
        regex: assemble::unique_token(r"github_pat_[0-9a-zA-Z_]{82}", false),
        secret_group: 1,
        keywords: vec!["github_pat_".into()],
        entropy: Some(3.0),
        severity: Severity::High,
        tags: vec!["access-token", "github"],
        score: ScoreParameters::unique_token(RuleCategory::AccessToken),
        allow_lists: Vec::new(),
        path: None,
    }
}

/// OAuth access token (`gho_...`).
#[must_use]
pub fn oauth_token() -> RuleRecord {
    RuleRecord {
        rule_id: "github-oauth",
        base_rule_id: "6f0d3b8a-9c2e-4617-85b4-e1a7c9d2f680",
        description: "GitHub OAuth access token issued to a third-party application.",
        regex: assemble::unique_token(r"gho_[0-9a-zA-Z]{36}", false),
        secret_group: 1,
        keywords: vec!["gho_".into()],
        entropy: Some(3.0),
        severity: Severity::Medium,
        tags: vec!["access-token", "github"],
        score: ScoreParameters::unique_token(RuleCategory::AccessToken),
        allow_lists: Vec::new(),
        path: None,
    }
}

/// App installation or server-to-server token (`ghu_`/`ghs_`).
#[must_use]
pub fn app_token() -> RuleRecord {
    RuleRecord {
        rule_id: "github-app-token",
        base_rule_id: "a1c7e5d9-2f48-4b60-8d3a-5e9b1f7c0d26",
        description: "GitHub App installation token acting with the app's permissions.",
        regex: assemble::unique_token(r"(?:ghu|ghs)_[0-9a-zA-Z]{36}", false),
        secret_group: 1,
        keywords: vec!["ghu_".into(), "ghs_".into()],
        entropy: Some(3.0),
        severity: Severity::High,
        tags: vec!["access-token", "github"],
        score: ScoreParameters::unique_token(RuleCategory::AccessToken),
        allow_lists: Vec::new(),
        path: None,
    }
}

/// OAuth refresh token (`ghr_...`).
#[must_use]
pub fn refresh_token() -> RuleRecord {
    RuleRecord {
        rule_id: "github-refresh-token",
        base_rule_id: "e9b3d7f1-6a5c-4280-9f4e-7c1d8a3b5026",
        description: "GitHub OAuth refresh token, exchangeable for new access tokens.",
        regex: assemble::unique_token(r"ghr_[0-9a-zA-Z]{36}", false),
        secret_group: 1,
        keywords: vec!["ghr_".into()],
        entropy: Some(3.0),
        severity: Severity::Medium,
        tags: vec!["access-token", "github"],
        score: ScoreParameters::unique_token(RuleCategory::AccessToken),
        allow_lists: Vec::new(),
        path: None,
    }
}
