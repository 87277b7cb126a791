//! Password Validator
//!
//! Evaluates a candidate password against a [`PasswordPolicy`] and the
//! password it replaces. Every applicable check runs, so the form can show
//! all problems at once; nothing here ever fails.

use serde::Serialize;
use thiserror::Error;

use super::policy::PasswordPolicy;
use super::rules::{CHARACTER_CLASSES, CharacterClass, MAX_PASSWORD_LENGTH, is_common_password};

// ============================================================================
// Violations
// ============================================================================

/// Password policy violations, in the order they are reported
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordViolation {
    /// No password entered
    #[error("New password is required.")]
    Required,

    /// Shorter than the policy minimum
    #[error("Must be at least {min} characters.")]
    TooShort { min: usize, actual: usize },

    /// Longer than [`MAX_PASSWORD_LENGTH`]
    #[error("Must be at most {max} characters.")]
    TooLong { max: usize, actual: usize },

    /// One or more required character classes are absent
    #[error("Include upper, lower, number, and special character.")]
    MissingCharacterClasses(Vec<CharacterClass>),

    /// On the common password denylist
    #[error("Too common. Please choose a stronger password.")]
    Common,

    /// Identical to the old password
    #[error("New password must differ from old password.")]
    SameAsOld,

    /// Same length as the old password with too few changed positions
    #[error("New password must differ significantly from old password.")]
    InsufficientDifference { required: usize, actual: usize },
}

// ============================================================================
// Result
// ============================================================================

/// Outcome of validating a password
///
/// `valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
    #[serde(skip)]
    violations: Vec<PasswordViolation>,
}

impl ValidationResult {
    fn from_violations(violations: Vec<PasswordViolation>) -> Self {
        Self {
            valid: violations.is_empty(),
            errors: violations.iter().map(ToString::to_string).collect(),
            violations,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Caller-facing messages, in reporting order
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Most important message, if any
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn violations(&self) -> &[PasswordViolation] {
        &self.violations
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate `next` as a replacement for `old`
///
/// Reporting order: required, min length, max length, character classes
/// (collapsed into one entry), common password, same as old, insufficient
/// difference. An empty `old` skips both comparisons with it.
///
/// The similarity check only compares equal-length passwords position by
/// position; length-changing edits are never checked.
pub fn validate_password(next: &str, old: &str, policy: &PasswordPolicy) -> ValidationResult {
    if next.is_empty() {
        return ValidationResult::from_violations(vec![PasswordViolation::Required]);
    }

    let mut violations = Vec::new();
    let length = utf16_len(next);

    if length < policy.min_length {
        violations.push(PasswordViolation::TooShort {
            min: policy.min_length,
            actual: length,
        });
    }
    if length > MAX_PASSWORD_LENGTH {
        violations.push(PasswordViolation::TooLong {
            max: MAX_PASSWORD_LENGTH,
            actual: length,
        });
    }

    let missing: Vec<CharacterClass> = CHARACTER_CLASSES
        .into_iter()
        .filter(|class| policy.requires(*class) && !class.is_present_in(next))
        .collect();
    if !missing.is_empty() {
        violations.push(PasswordViolation::MissingCharacterClasses(missing));
    }

    if is_common_password(next) {
        violations.push(PasswordViolation::Common);
    }

    if !old.is_empty() {
        if next == old {
            violations.push(PasswordViolation::SameAsOld);
        }

        if policy.significant_diff > 0 && length == utf16_len(old) {
            let changed = differing_positions(next, old);
            if changed < policy.significant_diff {
                violations.push(PasswordViolation::InsufficientDifference {
                    required: policy.significant_diff,
                    actual: changed,
                });
            }
        }
    }

    ValidationResult::from_violations(violations)
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Positions (UTF-16 code units) where two equal-length strings differ
fn differing_positions(a: &str, b: &str) -> usize {
    a.encode_utf16()
        .zip(b.encode_utf16())
        .filter(|(x, y)| x != y)
        .count()
}
