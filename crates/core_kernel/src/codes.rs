//! Normalized owner codes
//!
//! The same department code is typed by hand in two sheets, so it shows up
//! with stray spaces and mixed case. Both sides are keyed by the normalized
//! form: every whitespace character removed, letters upper-cased.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Normalized department / owner code
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerCode(String);

impl OwnerCode {
    /// Normalizes raw cell text into a code
    pub fn normalize(raw: &str) -> Self {
        Self(raw.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_uppercase())
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when normalization left nothing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OwnerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for OwnerCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OwnerCode {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}
