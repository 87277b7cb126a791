//! Password Gateway Trait
//!
//! Interface to the backend that actually changes the password.
//! Implementations live in the infrastructure layer.

use super::password::ClearTextPassword;

/// Why the backend refused a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The current password did not match
    IncorrectCurrentPassword,
    /// The backend failed; the same request may succeed later
    Server,
}

/// Backend response to a password change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    Rejected {
        reason: RejectionReason,
        message: String,
    },
}

impl UpdateOutcome {
    pub fn rejected(reason: RejectionReason, message: impl Into<String>) -> Self {
        UpdateOutcome::Rejected {
            reason,
            message: message.into(),
        }
    }
}

/// Password change backend
#[trait_variant::make(PasswordGateway: Send)]
pub trait LocalPasswordGateway {
    /// Replace `current` with `next`
    async fn update_password(
        &self,
        current: &ClearTextPassword,
        next: &ClearTextPassword,
    ) -> UpdateOutcome;
}
