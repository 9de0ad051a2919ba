//! Fixture-driven validation of rule records.
//!
//! Every rule constructor's tests run through [`validate`]: the rule is
//! normalized, loaded into a single-rule detector, and exercised against
//! true-positive and false-positive fixtures. The full engine path runs,
//! so keyword gating, entropy thresholds, and allowlists all participate.
//! A fixture the keyword pre-filter rejects fails validation the same way
//! a regex miss does.

use snare_core::Detector;
use thiserror::Error;

use crate::record::RuleRecord;

/// A rule failed its fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A true-positive fixture produced no finding.
    #[error("rule '{rule_id}' missed true positive {fixture:?} (pattern: {pattern})")]
    MissedTruePositive {
        /// Id of the failing rule.
        rule_id: String,
        /// The fixture that should have matched.
        fixture: String,
        /// The rule's pattern, for diagnosis.
        pattern: String,
    },
    /// A false-positive fixture produced a finding.
    #[error("rule '{rule_id}' matched false positive {fixture:?} (pattern: {pattern})")]
    MatchedFalsePositive {
        /// Id of the failing rule.
        rule_id: String,
        /// The fixture that should not have matched.
        fixture: String,
        /// The rule's pattern, for diagnosis.
        pattern: String,
    },
}

/// Checks `rule` against its fixtures and returns the normalized record.
///
/// Every `true_positives` entry must yield at least one finding and every
/// `false_positives` entry must yield none, through the complete detection
/// pipeline. The first violation is returned.
///
/// # Errors
///
/// [`ValidationError::MissedTruePositive`] or
/// [`ValidationError::MatchedFalsePositive`] for the first failing fixture.
pub fn validate(
    rule: RuleRecord,
    true_positives: &[&str],
    false_positives: &[&str],
) -> Result<RuleRecord, ValidationError> {
    let rule = rule.normalized();
    let detector = Detector::new(vec![rule.to_engine()]);

    for fixture in true_positives {
        if detector.detect_string(fixture).is_empty() {
            return Err(ValidationError::MissedTruePositive {
                rule_id: rule.rule_id.to_string(),
                fixture: (*fixture).to_string(),
                pattern: rule.regex.as_str().to_string(),
            });
        }
    }

    for fixture in false_positives {
        if !detector.detect_string(fixture).is_empty() {
            return Err(ValidationError::MatchedFalsePositive {
                rule_id: rule.rule_id.to_string(),
                fixture: (*fixture).to_string(),
                pattern: rule.regex.as_str().to_string(),
            });
        }
    }

    Ok(rule)
}
