//! Password Policy
//!
//! Rules the form enforces before a password change is submitted.
//! Keep aligned with the server-side rules.

use serde::{Deserialize, Serialize};

use super::rules::CharacterClass;

/// Default number of positions that must differ from the old password
pub const DEFAULT_SIGNIFICANT_DIFF: usize = 4;

/// Password policy supplied by the caller
///
/// Lengths are counted in UTF-16 code units, the way the browser form
/// counts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicy {
    /// Minimum length required
    pub min_length: usize,
    /// Must contain an uppercase letter (A-Z)
    pub require_upper: bool,
    /// Must contain a lowercase letter (a-z)
    pub require_lower: bool,
    /// Must contain a digit (0-9)
    pub require_digit: bool,
    /// Must contain a character outside A-Z, a-z, 0-9
    pub require_symbol: bool,
    /// Minimum differing positions versus the old password; 0 disables
    #[serde(default = "default_significant_diff")]
    pub significant_diff: usize,
}

fn default_significant_diff() -> usize {
    DEFAULT_SIGNIFICANT_DIFF
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 12,
            require_upper: true,
            require_lower: true,
            require_digit: true,
            require_symbol: true,
            significant_diff: DEFAULT_SIGNIFICANT_DIFF,
        }
    }
}

impl PasswordPolicy {
    /// Whether the policy demands a character class
    pub fn requires(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.require_lower,
            CharacterClass::Uppercase => self.require_upper,
            CharacterClass::Digit => self.require_digit,
            CharacterClass::Symbol => self.require_symbol,
        }
    }

    /// Policy without character class requirements (development)
    pub fn development() -> Self {
        Self {
            min_length: 8,
            require_upper: false,
            require_lower: false,
            require_digit: false,
            require_symbol: false,
            ..Default::default()
        }
    }
}
