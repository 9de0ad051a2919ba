//! Regex character-class fragments for common secret shapes.
//!
//! Every fragment takes a length specifier that is either a fixed count
//! (`"32"`) or an inclusive range (`"40,46"`), matching the regex quantifier
//! syntax it expands into. Call sites in this crate pass static literals, so
//! the fragment functions only `debug_assert!` well-formedness; dynamic
//! callers can pre-validate with [`LengthSpec`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when parsing a malformed length specifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid length spec '{spec}': expected a count like \"32\" or a range like \"40,46\"")]
pub struct InvalidLengthSpec {
    spec: Box<str>,
}

impl InvalidLengthSpec {
    fn new(spec: &str) -> Self {
        Self { spec: spec.into() }
    }

    /// The specifier that failed to parse.
    #[must_use]
    pub fn spec(&self) -> &str {
        &self.spec
    }
}

/// A parsed length specifier: a fixed repetition count or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthSpec {
    /// Exactly `n` repetitions.
    Exact(u16),
    /// Between `min` and `max` repetitions, inclusive.
    Range(u16, u16),
}

impl FromStr for LengthSpec {
    type Err = InvalidLengthSpec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            None => s
                .parse::<u16>()
                .map(Self::Exact)
                .map_err(|_| InvalidLengthSpec::new(s)),
            Some((min, max)) => {
                let min = min.parse::<u16>().map_err(|_| InvalidLengthSpec::new(s))?;
                let max = max.parse::<u16>().map_err(|_| InvalidLengthSpec::new(s))?;
                if min > max {
                    return Err(InvalidLengthSpec::new(s));
                }
                Ok(Self::Range(min, max))
            }
        }
    }
}

impl fmt::Display for LengthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Range(min, max) => write!(f, "{min},{max}"),
        }
    }
}

fn quantified(class: &str, len: &str) -> String {
    debug_assert!(
        len.parse::<LengthSpec>().is_ok(),
        "malformed length spec '{len}'"
    );
    format!("{class}{{{len}}}")
}

/// Digits: `[0-9]{len}`.
#[must_use]
pub fn numeric(len: &str) -> String {
    quantified("[0-9]", len)
}

/// Lowercase hex: `[a-f0-9]{len}`.
#[must_use]
pub fn hex(len: &str) -> String {
    quantified("[a-f0-9]", len)
}

/// Lowercase letters and digits: `[a-z0-9]{len}`.
#[must_use]
pub fn alpha_numeric(len: &str) -> String {
    quantified("[a-z0-9]", len)
}

/// Alphanumerics plus `=`, `_`, and `-`: the base64-ish token alphabet.
#[must_use]
pub fn alpha_numeric_extended(len: &str) -> String {
    quantified(r"[a-z0-9=_\-]", len)
}

/// Alphanumerics plus `_` and `-`: the url-safe token alphabet.
#[must_use]
pub fn alpha_numeric_extended_short(len: &str) -> String {
    quantified("[a-z0-9_-]", len)
}

/// UUID-shaped dash-grouped hex: 8-4-4-4-12.
#[must_use]
pub fn hex8_4_4_4_12() -> String {
    "[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}".to_string()
}
