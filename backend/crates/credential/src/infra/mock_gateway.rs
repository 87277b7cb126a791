//! Mock Password Gateway
//!
//! Development stand-in for the password change backend. Replace with a
//! real gateway in production.

use std::time::Duration;

use crate::domain::gateway::{PasswordGateway, RejectionReason, UpdateOutcome};
use crate::domain::password::ClearTextPassword;

/// Current password the mock treats as incorrect
pub const MOCK_WRONG_CURRENT: &str = "wrong";

/// New password the mock answers with a server error
pub const MOCK_SERVER_ERROR_NEXT: &str = "ErrorFail1!#";

/// Simulated backend with fixed failure triggers
#[derive(Debug, Clone)]
pub struct MockPasswordGateway {
    latency: Duration,
}

impl Default for MockPasswordGateway {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(500),
        }
    }
}

impl MockPasswordGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Gateway answering without delay (tests)
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl PasswordGateway for MockPasswordGateway {
    async fn update_password(
        &self,
        current: &ClearTextPassword,
        next: &ClearTextPassword,
    ) -> UpdateOutcome {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if current.expose() == MOCK_WRONG_CURRENT {
            return UpdateOutcome::rejected(
                RejectionReason::IncorrectCurrentPassword,
                "Incorrect current password",
            );
        }
        if next.expose() == MOCK_SERVER_ERROR_NEXT {
            return UpdateOutcome::rejected(RejectionReason::Server, "Server error. Try again.");
        }

        UpdateOutcome::Updated
    }
}
