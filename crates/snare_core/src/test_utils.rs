//! Test helpers for `snare_core` (compiled only during testing).

use std::sync::Arc;

use regex::Regex;

use crate::rule::Rule;

#[expect(clippy::unwrap_used, reason = "test patterns are known-valid at compile time")]
fn base_rule(id: &str, pattern: &str) -> Rule {
    Rule {
        id: Arc::from(id),
        regex: Regex::new(pattern).unwrap(),
        keywords: Vec::new(),
        entropy: None,
        secret_group: 0,
        allow_lists: Vec::new(),
        path: None,
    }
}

/// Rule matching the whole regex match, gated on `keywords`.
pub fn make_rule(id: &str, pattern: &str, keywords: &[&str]) -> Rule {
    Rule {
        keywords: keywords.iter().map(|&k| k.to_string()).collect(),
        ..base_rule(id, pattern)
    }
}

/// Rule capturing group 1 as the secret, gated on `min_entropy`.
pub fn make_rule_with_entropy(id: &str, pattern: &str, min_entropy: f64) -> Rule {
    Rule {
        entropy: Some(min_entropy),
        secret_group: 1,
        ..base_rule(id, pattern)
    }
}
