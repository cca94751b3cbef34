//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a string for `Debug` output.
///
/// Identifiers such as an access key id are partially redacted:
///
/// - If the input string has fewer than 12 characters, it is entirely redacted.
/// - If the input string has 12 or more characters, only the first three and the last three
///   characters are kept.
///
/// This allows users to tell different identifiers apart without leaking them.
///
/// Secrets built with [`Redact::secret`] never show any character, only whether they are empty.
pub struct Redact<'a> {
    value: &'a str,
    keep_edges: bool,
}

impl<'a> Redact<'a> {
    /// Redact a secret entirely.
    pub fn secret(value: &'a str) -> Self {
        Redact {
            value,
            keep_edges: false,
        }
    }
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact {
            value,
            keep_edges: true,
        }
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact::from(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.value.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 || !self.keep_edges || !self.value.is_ascii() {
            f.write_str("***")
        } else {
            f.write_str(&self.value[..3])?;
            f.write_str("***")?;
            f.write_str(&self.value[length - 3..])
        }
    }
}
