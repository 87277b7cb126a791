//! Update Password Use Case
//!
//! Validates locally, submits to the gateway, and reports the outcome to
//! analytics.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::domain::events::{ExperimentTag, SubmitEvent};
use crate::domain::gateway::{PasswordGateway, UpdateOutcome};
use crate::domain::password::ClearTextPassword;
use crate::domain::policy::PasswordPolicy;
use crate::domain::validator::validate_password;
use crate::error::{UpdatePasswordError, UpdatePasswordResult};
use crate::infra::analytics::AnalyticsSink;

/// Form state after the latest submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateState {
    /// A submission is waiting on the gateway
    pub loading: bool,
    /// Message of the latest failure
    pub error: Option<String>,
    /// The latest submission went through
    pub success: bool,
}

/// Update password use case
pub struct UpdatePasswordUseCase<G, T>
where
    G: PasswordGateway,
    T: AnalyticsSink,
{
    gateway: Arc<G>,
    analytics: Arc<T>,
    policy: PasswordPolicy,
    experiment: Option<ExperimentTag>,
    state: Mutex<UpdateState>,
}

impl<G, T> UpdatePasswordUseCase<G, T>
where
    G: PasswordGateway,
    T: AnalyticsSink,
{
    pub fn new(gateway: Arc<G>, analytics: Arc<T>, policy: PasswordPolicy) -> Self {
        Self {
            gateway,
            analytics,
            policy,
            experiment: None,
            state: Mutex::new(UpdateState::default()),
        }
    }

    /// Tag emitted events with the experiment the form is rendered under
    pub fn with_experiment(mut self, test_id: impl Into<String>, variant: impl Into<String>) -> Self {
        self.experiment = Some(ExperimentTag {
            test_id: test_id.into(),
            variant: variant.into(),
        });
        self
    }

    /// Snapshot of the form state
    pub fn state(&self) -> UpdateState {
        self.state.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Change `current` to `next`
    ///
    /// Policy violations fail before the gateway is called and emit no
    /// analytics event.
    pub async fn execute(
        &self,
        current: ClearTextPassword,
        next: ClearTextPassword,
    ) -> UpdatePasswordResult<()> {
        self.update_state(|s| {
            s.error = None;
            s.success = false;
        });
        let started_at = Utc::now();

        // Step 1: local validation
        let validation = validate_password(next.expose(), current.expose(), &self.policy);
        if !validation.is_valid() {
            let err = UpdatePasswordError::validation(validation);
            err.log();
            self.update_state(|s| s.error = Some(err.to_string()));
            return Err(err);
        }

        // Step 2: gateway call
        let outcome = {
            let _loading = LoadingGuard::start(&self.state);
            self.gateway.update_password(&current, &next).await
        };
        let finished_at = Utc::now();

        match outcome {
            UpdateOutcome::Updated => {
                self.update_state(|s| s.success = true);
                self.analytics.track(&SubmitEvent::success(
                    started_at,
                    finished_at,
                    self.experiment.as_ref(),
                ));
                tracing::info!(
                    elapsed_ms = (finished_at - started_at).num_milliseconds(),
                    "Password changed"
                );
                Ok(())
            }
            UpdateOutcome::Rejected { reason, message } => {
                self.analytics.track(&SubmitEvent::error(
                    started_at,
                    finished_at,
                    message.clone(),
                    self.experiment.as_ref(),
                ));
                let err = UpdatePasswordError::Rejected { reason, message };
                err.log();
                self.update_state(|s| s.error = Some(err.to_string()));
                Err(err)
            }
        }
    }

    fn update_state(&self, f: impl FnOnce(&mut UpdateState)) {
        if let Ok(mut state) = self.state.lock() {
            f(&mut state);
        }
    }
}

/// Holds `loading` up until dropped, including when the submission is
/// cancelled mid-call
struct LoadingGuard<'a> {
    state: &'a Mutex<UpdateState>,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a Mutex<UpdateState>) -> Self {
        if let Ok(mut s) = state.lock() {
            s.loading = true;
        }
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut s) = self.state.lock() {
            s.loading = false;
        }
    }
}
