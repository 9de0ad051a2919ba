//! A detected secret and its location.

use std::sync::Arc;

/// One secret detected by a [`Detector`](crate::Detector).
///
/// The byte span covers the captured secret group, not the full rule match,
/// so downstream consumers can mask or fingerprint exactly the credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Identifier of the rule that fired.
    pub rule_id: Arc<str>,
    /// The captured secret value.
    pub secret: Box<str>,
    /// Byte offset where the secret starts in the scanned content.
    pub start: usize,
    /// Byte offset one past the end of the secret.
    pub end: usize,
    /// Shannon entropy of the captured secret, in bits per byte.
    pub entropy: f64,
}

impl Finding {
    /// Length of the captured secret in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the captured secret is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
