//! Rule selection by id and tag.
//!
//! Callers tailor the catalog with three lists: rule ids or tags to select,
//! rule ids or tags to ignore, and special rule ids to opt into. Matching is
//! ASCII-case-insensitive throughout, and entries naming nothing in the
//! catalog are silent no-ops so configuration survives catalog renames
//! without breaking the caller.

use crate::catalog;
use crate::record::RuleRecord;

/// Whether `query` names `rule`, by rule id or by one of its tags.
///
/// Comparison ignores ASCII case.
#[must_use]
pub fn is_rule_match(rule: &RuleRecord, query: &str) -> bool {
    rule.rule_id.eq_ignore_ascii_case(query)
        || rule.tags.iter().any(|tag| tag.eq_ignore_ascii_case(query))
}

/// Keeps only the rules at least one `queries` entry names.
///
/// An empty query list selects nothing.
#[must_use]
pub fn select_rules<S: AsRef<str>>(rules: Vec<RuleRecord>, queries: &[S]) -> Vec<RuleRecord> {
    rules
        .into_iter()
        .filter(|rule| queries.iter().any(|q| is_rule_match(rule, q.as_ref())))
        .collect()
}

/// Drops the rules any `queries` entry names.
#[must_use]
pub fn ignore_rules<S: AsRef<str>>(rules: Vec<RuleRecord>, queries: &[S]) -> Vec<RuleRecord> {
    rules
        .into_iter()
        .filter(|rule| !queries.iter().any(|q| is_rule_match(rule, q.as_ref())))
        .collect()
}

/// Composes the effective rule set from the default catalog.
///
/// Selection first (when `selected` is non-empty), then ignores, then the
/// requested special rules appended in request order. Special rules bypass
/// both the select and ignore stages: asking for one is already the opt-in.
///
/// Reads the catalog through [`catalog::cached_default_rules`], so repeated
/// calls share one compiled regex set instead of rebuilding it.
#[must_use]
pub fn filter_rules<S: AsRef<str>>(
    selected: &[S],
    ignored: &[S],
    special: &[S],
) -> Vec<RuleRecord> {
    if !selected.is_empty() && !ignored.is_empty() {
        tracing::warn!(
            "both selected and ignored rule lists supplied; applying selection first, then ignores"
        );
    }

    let mut rules = catalog::cached_default_rules().to_vec();
    if !selected.is_empty() {
        rules = select_rules(rules, selected);
    }
    if !ignored.is_empty() {
        rules = ignore_rules(rules, ignored);
    }

    let special_catalog = catalog::special_rules();
    for id in special {
        if let Some(rule) = special_catalog
            .iter()
            .find(|rule| rule.rule_id.eq_ignore_ascii_case(id.as_ref()))
        {
            rules.push(rule.clone());
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_ids() -> Vec<&'static str> {
        catalog::cached_default_rules()
            .iter()
            .map(|rule| rule.rule_id)
            .collect()
    }

    #[test]
    fn empty_lists_return_the_full_default_catalog() {
        let rules = filter_rules::<&str>(&[], &[], &[]);
        assert_eq!(rules.len(), catalog::cached_default_rules().len());
    }

    #[test]
    fn filtering_clones_from_the_memoized_catalog() {
        // The records must share the cached compiled regexes, not recompile
        // the catalog on every call.
        let rules = filter_rules::<&str>(&[], &[], &[]);
        for (rule, cached) in rules.iter().zip(catalog::cached_default_rules()) {
            assert!(std::ptr::eq(rule.regex.as_str(), cached.regex.as_str()));
        }
    }

    #[test]
    fn selection_keeps_only_named_rules() {
        let rules = filter_rules(&["github-pat"], &[], &[]);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rule_id, "github-pat");
    }

    #[test]
    fn selection_matches_case_insensitively() {
        let rules = filter_rules(&["GitHub-PAT"], &[], &[]);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rule_id, "github-pat");
    }

    #[test]
    fn selection_by_tag_keeps_every_tagged_rule() {
        let rules = filter_rules(&["api-key"], &[], &[]);
        assert!(!rules.is_empty());
        assert!(rules.iter().all(|r| r.tags.contains(&"api-key")));
    }

    #[test]
    fn ignore_removes_named_rules_and_keeps_the_rest() {
        let all = default_ids();
        let rules = filter_rules(&[], &["github-pat"], &[]);
        assert_eq!(rules.len(), all.len() - 1);
        assert!(rules.iter().all(|r| r.rule_id != "github-pat"));
    }

    #[test]
    fn unknown_queries_are_silent_no_ops() {
        let rules = filter_rules(&[], &["no-such-rule"], &["also-no-such-rule"]);
        assert_eq!(rules.len(), catalog::cached_default_rules().len());
    }

    #[test]
    fn selecting_an_unknown_query_yields_nothing() {
        let rules = filter_rules(&["no-such-tag"], &[], &[]);
        assert!(rules.is_empty());
    }

    #[test]
    fn special_request_alone_extends_the_full_catalog() {
        let rules = filter_rules(&[], &[], &["hardcoded-password"]);
        assert_eq!(rules.len(), catalog::cached_default_rules().len() + 1);
        assert_eq!(rules.last().map(|r| r.rule_id), Some("hardcoded-password"));
    }

    #[test]
    fn special_rules_are_appended_in_request_order() {
        let rules = filter_rules(&["github-pat"], &[], &["hardcoded-password"]);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].rule_id, "github-pat");
        assert_eq!(rules[1].rule_id, "hardcoded-password");
    }

    #[test]
    fn special_rules_bypass_the_ignore_list() {
        let rules = filter_rules(&[], &["password"], &["hardcoded-password"]);
        assert!(rules.iter().any(|r| r.rule_id == "hardcoded-password"));
    }

    #[test]
    fn special_rules_never_appear_unrequested() {
        let rules = filter_rules::<&str>(&[], &[], &[]);
        assert!(rules.iter().all(|r| r.rule_id != "hardcoded-password"));
    }

    #[test]
    fn select_and_ignore_compose_in_order() {
        let rules = filter_rules(&["api-key"], &["github-pat"], &[]);
        assert!(rules.iter().all(|r| r.rule_id != "github-pat"));
        assert!(rules.iter().all(|r| r.tags.contains(&"api-key")));
    }
}
