//! The default and special rule catalogs.
//!
//! [`default_rules`] builds every rule that participates in detection out of
//! the box, in declaration order. [`special_rules`] holds opt-in rules that
//! are too noisy for the default set and only run when a caller names them
//! in [`crate::filter_rules`].

use std::sync::OnceLock;

use crate::record::RuleRecord;
use crate::rules;

/// Builds the default catalog, in declaration order.
#[must_use]
pub fn default_rules() -> Vec<RuleRecord> {
    vec![
        rules::anthropic::admin_key(),
        rules::anthropic::api_key(),
        rules::aws::access_key_id(),
        rules::github::personal_access_token(),
        rules::github::fine_grained_pat(),
        rules::github::oauth_token(),
        rules::github::app_token(),
        rules::github::refresh_token(),
        rules::gitlab::personal_access_token(),
        rules::gitlab::pipeline_trigger_token(),
        rules::openai::api_key(),
        rules::slack::bot_token(),
        rules::slack::user_token(),
        rules::stripe::secret_key(),
        rules::twilio::api_key(),
        rules::sendgrid::api_token(),
        rules::heroku::api_key(),
        rules::telegram::bot_token(),
        rules::npm::access_token(),
        rules::vault::service_token(),
        rules::vault::batch_token(),
        rules::hashicorp::cloud_platform_token(),
        rules::hashicorp::terraform_password(),
        rules::datadog::access_token(),
        rules::algolia::api_key(),
        rules::generic::api_key(),
    ]
}

/// Builds the opt-in rules excluded from the default catalog.
#[must_use]
pub fn special_rules() -> Vec<RuleRecord> {
    vec![rules::generic::hardcoded_password()]
}

/// The default catalog, built once per process.
///
/// Construction compiles every rule's regex, so callers that only need to
/// read the catalog should prefer this over [`default_rules`].
#[must_use]
pub fn cached_default_rules() -> &'static [RuleRecord] {
    static CACHE: OnceLock<Vec<RuleRecord>> = OnceLock::new();
    CACHE.get_or_init(default_rules)
}
