//! Rule definitions, one module per vendor or credential family.
//!
//! Every constructor returns a fully-populated [`crate::RuleRecord`] and is
//! covered by fixture tests running through [`crate::validate`]. Catalog
//! membership is decided in [`crate::catalog`], not here.

/// Algolia search API keys.
pub mod algolia;
/// Anthropic API and admin keys.
pub mod anthropic;
/// AWS access key ids.
pub mod aws;
/// Datadog access tokens.
pub mod datadog;
/// Generic identifier-context rules with no vendor identity.
pub mod generic;
/// GitHub token families.
pub mod github;
/// GitLab tokens.
pub mod gitlab;
/// HashiCorp cloud tokens and Terraform configuration passwords.
pub mod hashicorp;
/// Heroku platform API keys.
pub mod heroku;
/// npm registry access tokens.
pub mod npm;
/// OpenAI API keys.
pub mod openai;
/// SendGrid API tokens.
pub mod sendgrid;
/// Slack bot and user tokens.
pub mod slack;
/// Stripe secret and restricted keys.
pub mod stripe;
/// Telegram bot tokens.
pub mod telegram;
/// Twilio API keys.
pub mod twilio;
/// HashiCorp Vault service and batch tokens.
pub mod vault;
