//! Application Configuration
//!
//! Configuration for the password change form.

use std::time::Duration;

use crate::domain::policy::PasswordPolicy;

/// Password form configuration
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Policy enforced before submitting
    pub policy: PasswordPolicy,
    /// Simulated backend latency of the mock gateway
    pub mock_latency: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            policy: PasswordPolicy::default(),
            mock_latency: Duration::from_millis(500),
        }
    }
}

impl FormConfig {
    /// Create config for development (relaxed policy, no latency)
    pub fn development() -> Self {
        Self {
            policy: PasswordPolicy::development(),
            mock_latency: Duration::ZERO,
        }
    }

    pub fn mock_latency_ms(&self) -> u64 {
        u64::try_from(self.mock_latency.as_millis()).unwrap_or(u64::MAX)
    }
}
