//! Assembles full detection regexes from fragments.
//!
//! Two strategies cover the catalog. [`semi_generic`] requires a service
//! identifier near an assignment-like operator before the secret, which is
//! how generically-shaped secrets (hex runs, short alphanumerics) avoid
//! matching arbitrary code. [`unique_token`] trusts the secret's own prefix
//! (`ghp_`, `xoxb-`, ...) and only enforces boundaries around it.

use regex::Regex;

/// Assignment-like operators between an identifier and its secret.
const OPERATOR: &str = r"(?:=|>|:{1,3}=|\|\||:|=>|\?=|,)";

/// Quotes or light whitespace tolerated between identifier and operator,
/// covering JSON-style `"api_key": "..."`.
const PRE_OPERATOR: &str = r#"[\s'"]{0,3}"#;

/// Quote/backtick/whitespace run between the operator and the secret.
const SECRET_BOUNDARY: &str = "(?:'|\"|\\s|=|`){0,20}";

/// What may legally follow a secret: a quote, backtick, whitespace,
/// semicolon, an escaped newline, or the end of input. Anything else means
/// the match is a substring of a longer token and must be rejected.
const TERMINATOR: &str = "(?:['\"`\\s;]|\\\\[nr]|$)";

/// Arbitrary word/dot/hyphen prefix so `MY_APP_API_KEY` still carries the
/// `api_key` identifier.
const IDENTIFIER_PREFIX: &str = r"[\w.-]{0,50}?";

/// Filler after the identifier, tolerating suffixes like `_TOKEN` or `-Key`.
const IDENTIFIER_SUFFIX: &str = r"(?:[ \t\w.-]{0,20})";

/// Builds a pattern requiring one of `identifiers` near an operator before
/// a secret matching `secret_shape`.
///
/// The secret is capture group 1, so records built on this assembly use
/// `secret_group: 1`. When `case_insensitive` is false only the identifier
/// alternation is made case-insensitive; the secret shape's casing stays
/// exact, which matters for formats with meaningful case.
#[must_use]
pub fn semi_generic(identifiers: &[&str], secret_shape: &str, case_insensitive: bool) -> Regex {
    let alternation = identifiers.join("|");
    let pattern = if case_insensitive {
        format!(
            "(?i){IDENTIFIER_PREFIX}(?:{alternation}){IDENTIFIER_SUFFIX}\
             {PRE_OPERATOR}{OPERATOR}{SECRET_BOUNDARY}({secret_shape}){TERMINATOR}"
        )
    } else {
        format!(
            "{IDENTIFIER_PREFIX}(?i:{alternation}){IDENTIFIER_SUFFIX}\
             {PRE_OPERATOR}{OPERATOR}{SECRET_BOUNDARY}({secret_shape}){TERMINATOR}"
        )
    };
    compile(&pattern)
}

/// Builds a pattern for a secret whose own prefix is distinctive enough to
/// need no nearby identifier.
///
/// The secret is capture group 1, bounded by a word boundary on the left and
/// a terminator on the right so partial matches inside longer tokens fail.
#[must_use]
pub fn unique_token(secret_shape: &str, case_insensitive: bool) -> Regex {
    let pattern = if case_insensitive {
        format!(r"(?i)\b({secret_shape}){TERMINATOR}")
    } else {
        format!(r"\b({secret_shape}){TERMINATOR}")
    };
    compile(&pattern)
}

/// Compiles a hand-written pattern, for the few record fields (path filters,
/// allowlist expressions) that fall outside the two assembly strategies.
pub(crate) fn compile(pattern: &str) -> Regex {
    // An invalid pattern is a defect in a rule definition, caught the first
    // time the catalog is built in CI. There is no runtime recovery path.
    #[expect(
        clippy::panic,
        reason = "regex compilation failure is a build-time defect in a rule definition"
    )]
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("rule pattern failed to compile: {err} (pattern: {pattern})"),
    }
}
