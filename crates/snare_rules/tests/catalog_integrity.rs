//! Structural checks over the full catalog.
//!
//! Every rule constructor already has its own fixture tests; these tests
//! check the properties that only hold (or fail) across the catalog as a
//! whole, like id uniqueness.

#![expect(clippy::panic, reason = "tests panic with rule context for clearer failure messages")]

use std::collections::HashSet;

use snare_rules::{RuleRecord, cached_default_rules, default_rules, special_rules};

fn all_rules() -> Vec<RuleRecord> {
    let mut rules = default_rules();
    rules.extend(special_rules());
    rules
}

#[test]
fn rule_ids_are_unique() {
    let mut seen = HashSet::new();
    for rule in all_rules() {
        assert!(seen.insert(rule.rule_id), "duplicate rule id {}", rule.rule_id);
    }
}

#[test]
fn base_rule_ids_are_unique_valid_uuids() {
    let mut seen = HashSet::new();
    for rule in all_rules() {
        uuid::Uuid::parse_str(rule.base_rule_id)
            .unwrap_or_else(|err| panic!("{}: bad base_rule_id: {err}", rule.rule_id));
        assert!(
            seen.insert(rule.base_rule_id),
            "duplicate base rule id {}",
            rule.base_rule_id
        );
    }
}

#[test]
fn rule_ids_are_kebab_case() {
    for rule in all_rules() {
        assert!(
            rule.rule_id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "rule id {} is not kebab-case",
            rule.rule_id
        );
    }
}

#[test]
fn every_rule_has_a_description_and_tags() {
    for rule in all_rules() {
        assert!(!rule.description.is_empty(), "{}: empty description", rule.rule_id);
        assert!(!rule.tags.is_empty(), "{}: no tags", rule.rule_id);
    }
}

#[test]
fn secret_groups_exist_in_their_patterns() {
    for rule in all_rules() {
        assert!(
            rule.secret_group < rule.regex.captures_len(),
            "{}: secret group {} exceeds capture count {}",
            rule.rule_id,
            rule.secret_group,
            rule.regex.captures_len()
        );
    }
}

#[test]
fn every_rule_carries_scoring_inputs() {
    for rule in all_rules() {
        assert_ne!(rule.score.rule_type, 0, "{}: zero rule type", rule.rule_id);
    }
}

#[test]
fn keywords_are_present_and_already_normalized() {
    for rule in all_rules() {
        assert!(!rule.keywords.is_empty(), "{}: no keywords", rule.rule_id);
        let normalized = rule.clone().normalized();
        assert_eq!(
            rule.keywords, normalized.keywords,
            "{}: keywords not declared in normalized form",
            rule.rule_id
        );
    }
}

#[test]
fn entropy_thresholds_are_sane() {
    // Shannon entropy over bytes tops out at 8 bits; catalog thresholds
    // stay well below the ceiling so real secrets can pass.
    for rule in all_rules() {
        if let Some(entropy) = rule.entropy {
            assert!(
                entropy > 0.0 && entropy <= 6.0,
                "{}: implausible entropy threshold {entropy}",
                rule.rule_id
            );
        }
    }
}

#[test]
fn special_ids_never_collide_with_defaults() {
    let defaults: HashSet<&str> = default_rules().iter().map(|r| r.rule_id).collect();
    for special in special_rules() {
        assert!(!defaults.contains(special.rule_id));
    }
}

#[test]
fn cached_catalog_agrees_with_a_fresh_build() {
    let fresh = default_rules();
    let cached = cached_default_rules();
    assert_eq!(cached.len(), fresh.len());
    for (cached, fresh) in cached.iter().zip(&fresh) {
        assert_eq!(cached.rule_id, fresh.rule_id);
    }
}

#[test]
fn every_record_converts_to_an_engine_rule() {
    for rule in all_rules() {
        let engine = rule.normalized().to_engine();
        assert!(!engine.id.is_empty());
    }
}
