//! Telegram bot tokens.

use crate::assemble;
use crate::fragments;
use crate::record::{RuleCategory, RuleRecord, ScoreParameters, Severity};

/// Bot token (`<bot id>:A<35-character body>`).
///
/// The numeric-id-colon shape collides with timestamps and ratios, so the
/// rule requires a telegram or bot identifier in assignment position.
#[must_use]
pub fn bot_token() -> RuleRecord {
    let shape = format!(
        "{}:A{}",
        fragments::numeric("5,16"),
        fragments::alpha_numeric_extended_short("34")
    );
    RuleRecord {
        rule_id: "telegram-bot-token",
        base_rule_id: "68d0b4f2-7e9a-4c15-b3d8-f1a5c7e92046",
        description: "Telegram bot token, giving full control of the bot's messages.",
        regex: assemble::semi_generic(&["telegram", "tgram", "bot"], &shape, true),
        secret_group: 1,
        keywords: vec!["telegram".into(), "tgram".into(), "bot".into()],
        entropy: None,
        severity: Severity::Medium,
        tags: vec!["access-token", "telegram"],
        score: ScoreParameters::semi_generic(RuleCategory::AccessToken),
        allow_lists: Vec::new(),
        path: None,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests use expect/unwrap for clearer failure messages")]
mod tests {
    use super::*;
    use crate::validate::validate;

    #[test]
    fn bot_token_fixtures() {
        validate(
            bot_token(),
            &[
                r#"TELEGRAM_BOT_TOKEN = "1234567890:Aabcdefghijklmnopqrstuvwxyz01234567""#,
                "bot_token=98765:Azyxwvutsrqponmlkjihgfedcba76543210",
            ],
            &[
                r#"telegram_user = "alice""#,
                // Body one character short of the token shape.
                "bot_token=98765:Azyxwvutsrqponmlkjihgfedcba7654321",
            ],
        )
        .unwrap();
    }
}
