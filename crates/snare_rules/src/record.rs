//! The canonical rule record and its metadata types.
//!
//! One record shape carries everything a rule declares; the only conversion
//! out of it is [`RuleRecord::to_engine`], the one-to-one mapping into the
//! engine's native rule. Records are built once at catalog-construction time
//! and treated as immutable afterwards.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an invalid severity string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid severity '{0}': expected one of 'low', 'medium', 'high', 'critical'")]
pub struct ParseSeverityError(Box<str>);

impl ParseSeverityError {
    /// The value that failed to parse.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.0
    }
}

/// How severe an exposure of a detected secret is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Limited scope, unlikely to be exploitable on its own.
    Low,
    /// Could grant partial access.
    Medium,
    /// Grants broad access to sensitive resources.
    High,
    /// Grants administrative or billing-level access.
    Critical,
}

impl Severity {
    /// All severity levels in ascending order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Lowercase string form, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseSeverityError(s.into())),
        }
    }
}

/// Risk-scoring category consumed by downstream scoring, not computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    /// Bearer tokens granting delegated access.
    AccessToken,
    /// Service API keys.
    ApiKey,
    /// OAuth-style client secrets.
    ClientSecret,
    /// Private keys and signing material.
    CryptoKey,
    /// Plain passwords.
    Password,
    /// Long-lived service account credentials.
    ServiceCredential,
}

impl RuleCategory {
    /// Kebab-case string form, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccessToken => "access-token",
            Self::ApiKey => "api-key",
            Self::ClientSecret => "client-secret",
            Self::CryptoKey => "crypto-key",
            Self::Password => "password",
            Self::ServiceCredential => "service-credential",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scoring inputs every rule must carry: a category plus a non-zero weight
/// class reflecting how the rule detects its secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreParameters {
    /// What kind of credential the rule finds.
    pub category: RuleCategory,
    /// Detection weight class; see the constructors. Never zero.
    pub rule_type: u8,
}

impl ScoreParameters {
    /// Weight class for rules matching a self-describing token prefix.
    #[must_use]
    pub const fn unique_token(category: RuleCategory) -> Self {
        Self { category, rule_type: 1 }
    }

    /// Weight class for rules requiring identifier context near the secret.
    #[must_use]
    pub const fn semi_generic(category: RuleCategory) -> Self {
        Self { category, rule_type: 2 }
    }

    /// Weight class for heuristic rules with no service identity at all.
    #[must_use]
    pub const fn generic(category: RuleCategory) -> Self {
        Self { category, rule_type: 3 }
    }
}

/// A complete rule definition: the compiled detection regex plus all
/// catalog metadata.
#[derive(Debug, Clone)]
pub struct RuleRecord {
    /// Unique kebab-case identifier, stable across releases.
    pub rule_id: &'static str,
    /// UUID identifying the rule's conceptual identity across edits to its
    /// regex or description.
    pub base_rule_id: &'static str,
    /// Human-readable explanation of the exposure risk.
    pub description: &'static str,
    /// Compiled detection expression.
    pub regex: Regex,
    /// Capture group holding the secret; 0 means the whole match. Rules
    /// built on the assemblers use 1.
    pub secret_group: usize,
    /// Pre-filter literals; the engine only runs the regex against content
    /// containing at least one of them, case-insensitively.
    pub keywords: Vec<String>,
    /// Minimum Shannon entropy for the captured secret; `None` disables the
    /// gate.
    pub entropy: Option<f64>,
    /// Exposure severity.
    pub severity: Severity,
    /// Categorical labels used by rule selection.
    pub tags: Vec<&'static str>,
    /// Downstream scoring inputs.
    pub score: ScoreParameters,
    /// Suppression of known-benign matches, evaluated by the engine.
    pub allow_lists: Vec<snare_core::AllowList>,
    /// When set, restricts the rule to files whose path matches.
    pub path: Option<Regex>,
}

impl RuleRecord {
    /// Returns a copy with lowercased, de-duplicated keywords.
    ///
    /// First-seen order is preserved. Idempotent: normalizing an already
    /// normalized record changes nothing.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let mut keywords: Vec<String> = Vec::with_capacity(self.keywords.len());
        for keyword in &self.keywords {
            let keyword = keyword.to_lowercase();
            if !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }
        self.keywords = keywords;
        self
    }

    /// Converts this record into the engine's native rule: a one-to-one
    /// mapping of the fields matching needs.
    #[must_use]
    pub fn to_engine(&self) -> snare_core::Rule {
        snare_core::Rule {
            id: Arc::from(self.rule_id),
            regex: self.regex.clone(),
            keywords: self.keywords.clone(),
            entropy: self.entropy,
            secret_group: self.secret_group,
            allow_lists: self.allow_lists.clone(),
            path: self.path.clone(),
        }
    }
}
