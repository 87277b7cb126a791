//! Credential (Password Change) Module
//!
//! Layout:
//! - `domain/` - Password policy, validator, clear text password, gateway trait, events
//! - `application/` - Password change use case and configuration
//! - `infra/` - Mock backend gateway and analytics sinks
//!
//! ## Features
//! - Policy validation on every keystroke, returning all violations in a fixed order
//! - Missing character classes reported as one combined message
//! - Similarity check against the current password for equal-length edits
//! - Submission flow with analytics events tagged by experiment variant
//!
//! ## Security Model
//! - Clear text passwords are zeroized on drop and redacted in debug output
//! - Nothing here hashes or stores passwords; that belongs to the backend

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::FormConfig;
pub use application::update_password::{UpdatePasswordUseCase, UpdateState};
pub use domain::password::ClearTextPassword;
pub use domain::policy::PasswordPolicy;
pub use domain::validator::{ValidationResult, validate_password};
pub use error::{UpdatePasswordError, UpdatePasswordResult};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
