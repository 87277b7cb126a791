//! Static Validation Data
//!
//! Denylist, length ceiling and character classes used by the validator.

// ============================================================================
// Constants
// ============================================================================

/// Maximum password length (UTF-16 code units), not configurable by policy
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Frequently used passwords, compared case-insensitively
pub const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "123456789",
    "qwerty",
    "111111",
    "12345678",
    "iloveyou",
    "abc123",
    "123123",
    "12345",
    "000000",
    "admin",
    "letmein",
];

/// Character classes in the order they are checked
pub const CHARACTER_CLASSES: [CharacterClass; 4] = [
    CharacterClass::Lowercase,
    CharacterClass::Uppercase,
    CharacterClass::Digit,
    CharacterClass::Symbol,
];

// ============================================================================
// Character classes
// ============================================================================

/// Class of characters a policy can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// `[a-z]`
    Lowercase,
    /// `[A-Z]`
    Uppercase,
    /// `[0-9]`
    Digit,
    /// `[^A-Za-z0-9]`
    Symbol,
}

impl CharacterClass {
    pub fn matches(&self, ch: char) -> bool {
        match self {
            CharacterClass::Lowercase => ch.is_ascii_lowercase(),
            CharacterClass::Uppercase => ch.is_ascii_uppercase(),
            CharacterClass::Digit => ch.is_ascii_digit(),
            CharacterClass::Symbol => !ch.is_ascii_alphanumeric(),
        }
    }

    /// Whether `s` contains at least one character of this class
    pub fn is_present_in(&self, s: &str) -> bool {
        s.chars().any(|ch| self.matches(ch))
    }
}

/// Whether `password` is on the denylist
pub fn is_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    COMMON_PASSWORDS.contains(&lower.as_str())
}
