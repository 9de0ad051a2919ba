//! Generic identifier-context rules with no vendor identity.
//!
//! These rules trade precision for coverage: they match anything
//! secret-shaped sitting next to a credential-flavored identifier, leaning
//! on the entropy gate and an allowlist to keep placeholder noise down.

use crate::assemble;
use crate::fragments;
use crate::record::{RuleCategory, RuleRecord, ScoreParameters, Severity};

const API_KEY_IDENTIFIERS: &[&str] = &[
    "access",
    "api",
    "auth",
    "credential",
    "creds",
    "key",
    "passwd",
    "password",
    "secret",
    "token",
];

/// Catch-all for secret-shaped values assigned to credential identifiers.
#[must_use]
pub fn api_key() -> RuleRecord {
    RuleRecord {
        rule_id: "generic-api-key",
        base_rule_id: "f1b9d5a7-3e0c-4648-92b6-a8d4f0c27315",
        description: "Unrecognized credential assigned to an access, key, or token identifier.",
        regex: assemble::semi_generic(
            API_KEY_IDENTIFIERS,
            &fragments::alpha_numeric_extended("10,150"),
            true,
        ),
        secret_group: 1,
        keywords: API_KEY_IDENTIFIERS.iter().map(ToString::to_string).collect(),
        entropy: Some(3.5),
        severity: Severity::Medium,
        tags: vec!["api-key", "generic"],
        score: ScoreParameters::generic(RuleCategory::ApiKey),
        allow_lists: vec![snare_core::AllowList {
            description: "common placeholder values".into(),
            // Sequential runs score high on the frequency measure but are
            // obviously documentation filler.
            regexes: vec![assemble::compile(
                "(?i)^(?:abcdefghijklmnopqrstuvwxyz|0123456789)",
            )],
            paths: Vec::new(),
            stop_words: vec![
                "example".into(),
                "placeholder".into(),
                "sample".into(),
                "changeme".into(),
                "insert_".into(),
                "xxxx".into(),
            ],
        }],
        path: None,
    }
}

/// Password literal next to a password identifier. Opt-in only: the shape
/// accepts almost any non-whitespace run, which is far too noisy for the
/// default catalog.
#[must_use]
pub fn hardcoded_password() -> RuleRecord {
    RuleRecord {
        rule_id: "hardcoded-password",
        base_rule_id: "08c6e2d4-7a5f-4b31-90d8-b2f4a6c08159",
        description: "Password literal assigned to a password identifier in source or config.",
        regex: assemble::semi_generic(
            &["password", "passwd", "pwd"],
            r#"[^\s'"`;]{8,64}"#,
            true,
        ),
        secret_group: 1,
        keywords: vec!["password".into(), "passwd".into(), "pwd".into()],
        entropy: Some(3.0),
        severity: Severity::High,
        tags: vec!["password", "generic"],
        score: ScoreParameters::generic(RuleCategory::Password),
        allow_lists: Vec::new(),
        path: None,
    }
}
