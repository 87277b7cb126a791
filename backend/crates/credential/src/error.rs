//! Credential Error Types
//!
//! Password change failures, integrated with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::gateway::RejectionReason;
use crate::domain::validator::ValidationResult;

/// Credential-specific result type alias
pub type UpdatePasswordResult<T> = Result<T, UpdatePasswordError>;

/// Why a password change did not go through
#[derive(Debug, Clone, Error)]
pub enum UpdatePasswordError {
    /// The new password violates the policy; nothing was submitted
    #[error("{message}")]
    Validation {
        /// First validation message, shown in the form
        message: String,
        /// Full validation outcome
        result: ValidationResult,
    },

    /// The backend refused the change
    #[error("{message}")]
    Rejected {
        reason: RejectionReason,
        message: String,
    },
}

impl UpdatePasswordError {
    pub(crate) fn validation(result: ValidationResult) -> Self {
        let message = result
            .first_error()
            .unwrap_or("Password does not meet the policy.")
            .to_string();
        UpdatePasswordError::Validation { message, result }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UpdatePasswordError::Validation { .. } => ErrorKind::InvalidInput,
            UpdatePasswordError::Rejected {
                reason: RejectionReason::IncorrectCurrentPassword,
                ..
            } => ErrorKind::Unauthorized,
            UpdatePasswordError::Rejected {
                reason: RejectionReason::Server,
                ..
            } => ErrorKind::Unavailable,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self.kind() {
            ErrorKind::InvalidInput => err.with_action("Please choose a stronger password"),
            ErrorKind::Unauthorized => err.with_action("Please re-enter your current password"),
            ErrorKind::Unavailable => err.with_action("Please try again in a moment"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            UpdatePasswordError::Rejected {
                reason: RejectionReason::Server,
                message,
            } => {
                tracing::warn!(detail = %message, "Password change failed on the backend");
            }
            UpdatePasswordError::Rejected { message, .. } => {
                tracing::info!(detail = %message, "Password change rejected");
            }
            UpdatePasswordError::Validation { result, .. } => {
                tracing::debug!(errors = ?result.errors(), "Password change blocked by policy");
            }
        }
    }
}

impl From<UpdatePasswordError> for AppError {
    fn from(err: UpdatePasswordError) -> Self {
        err.to_app_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::PasswordPolicy;
    use crate::domain::validator::validate_password;

    #[test]
    fn test_validation_error_uses_first_message() {
        let result = validate_password("short", "old", &PasswordPolicy::default());
        let err = UpdatePasswordError::validation(result);
        assert_eq!(err.to_string(), "Must be at least 12 characters.");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_rejection_kinds() {
        let wrong = UpdatePasswordError::Rejected {
            reason: RejectionReason::IncorrectCurrentPassword,
            message: "Incorrect current password".to_string(),
        };
        assert_eq!(wrong.kind(), ErrorKind::Unauthorized);
        assert!(wrong.to_app_error().kind().is_user_error());

        let server = UpdatePasswordError::Rejected {
            reason: RejectionReason::Server,
            message: "Server error. Try again.".to_string(),
        };
        let app_err: AppError = server.into();
        assert_eq!(app_err.kind(), ErrorKind::Unavailable);
        assert!(app_err.is_retryable());
        assert_eq!(app_err.action(), Some("Please try again in a moment"));
    }
}
