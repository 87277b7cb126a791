//! Password change flow tests

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::events::{SubmitEvent, SubmitEventKind};
use crate::domain::gateway::{PasswordGateway, UpdateOutcome};
use crate::domain::password::ClearTextPassword;
use crate::domain::policy::PasswordPolicy;
use crate::infra::analytics::{AnalyticsSink, TracingSink};
use crate::infra::mock_gateway::{MOCK_SERVER_ERROR_NEXT, MOCK_WRONG_CURRENT, MockPasswordGateway};
use crate::{ErrorKind, UpdatePasswordError, UpdatePasswordUseCase, UpdateState};

/// Sink keeping every event in memory
#[derive(Default)]
struct MemorySink {
    events: Mutex<Vec<SubmitEvent>>,
}

impl MemorySink {
    fn events(&self) -> Vec<SubmitEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl AnalyticsSink for MemorySink {
    fn track(&self, event: &SubmitEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Gateway counting calls, always succeeding
#[derive(Default)]
struct CountingGateway {
    calls: Mutex<usize>,
}

impl PasswordGateway for CountingGateway {
    async fn update_password(
        &self,
        _current: &ClearTextPassword,
        _next: &ClearTextPassword,
    ) -> UpdateOutcome {
        *self.calls.lock().unwrap() += 1;
        UpdateOutcome::Updated
    }
}

fn use_case() -> (
    UpdatePasswordUseCase<MockPasswordGateway, MemorySink>,
    Arc<MemorySink>,
) {
    let sink = Arc::new(MemorySink::default());
    let use_case = UpdatePasswordUseCase::new(
        Arc::new(MockPasswordGateway::instant()),
        Arc::clone(&sink),
        PasswordPolicy::default(),
    );
    (use_case, sink)
}

fn pw(s: &str) -> ClearTextPassword {
    ClearTextPassword::new(s)
}

#[tokio::test]
async fn test_successful_change() {
    let (use_case, sink) = use_case();
    let use_case = use_case.with_experiment("pw-form", "inline-change");

    let result = use_case
        .execute(pw("OldStrong123!Y"), pw("NewStrong123!X"))
        .await;
    assert!(result.is_ok());
    assert_eq!(
        use_case.state(),
        UpdateState {
            loading: false,
            error: None,
            success: true,
        }
    );

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SubmitEventKind::PasswordChangeSuccess);
    assert!(events[0].started_at <= events[0].finished_at);
    assert_eq!(events[0].test_id.as_deref(), Some("pw-form"));
    assert_eq!(events[0].variant.as_deref(), Some("inline-change"));
    assert!(events[0].message.is_none());
}

#[tokio::test]
async fn test_validation_failure_skips_gateway_and_analytics() {
    let sink = Arc::new(MemorySink::default());
    let gateway = Arc::new(CountingGateway::default());
    let use_case = UpdatePasswordUseCase::new(
        Arc::clone(&gateway),
        Arc::clone(&sink),
        PasswordPolicy::default(),
    );

    let err = use_case
        .execute(pw("SamePass123!"), pw("SamePass123!"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "New password must differ from old password.");
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    match &err {
        UpdatePasswordError::Validation { result, .. } => assert_eq!(result.errors().len(), 2),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(*gateway.calls.lock().unwrap(), 0);
    assert!(sink.events().is_empty());
    assert_eq!(
        use_case.state().error.as_deref(),
        Some("New password must differ from old password.")
    );
}

#[tokio::test]
async fn test_incorrect_current_password() {
    let (use_case, sink) = use_case();

    let err = use_case
        .execute(pw(MOCK_WRONG_CURRENT), pw("NewStrong123!X"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(err.to_string(), "Incorrect current password");

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SubmitEventKind::PasswordChangeError);
    assert_eq!(events[0].message.as_deref(), Some("Incorrect current password"));
    assert!(events[0].test_id.is_none());
}

#[tokio::test]
async fn test_server_error() {
    let (use_case, sink) = use_case();

    let err = use_case
        .execute(pw("OldStrong123!Y"), pw(MOCK_SERVER_ERROR_NEXT))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);
    assert!(err.to_app_error().is_retryable());

    let state = use_case.state();
    assert!(!state.loading);
    assert!(!state.success);
    assert_eq!(state.error.as_deref(), Some("Server error. Try again."));
    assert_eq!(sink.events().len(), 1);
}

#[tokio::test]
async fn test_state_resets_between_submissions() {
    let (use_case, _sink) = use_case();

    let _ = use_case.execute(pw("OldStrong123!Y"), pw("short")).await;
    assert!(use_case.state().error.is_some());

    use_case
        .execute(pw("OldStrong123!Y"), pw("NewStrong123!X"))
        .await
        .unwrap();
    let state = use_case.state();
    assert!(state.error.is_none());
    assert!(state.success);
}

#[tokio::test]
async fn test_cancelled_submission_clears_loading() {
    let sink = Arc::new(MemorySink::default());
    let use_case = UpdatePasswordUseCase::new(
        Arc::new(MockPasswordGateway::new(Duration::from_secs(5))),
        Arc::clone(&sink),
        PasswordPolicy::default(),
    );

    let submit = use_case.execute(pw("OldStrong123!Y"), pw("NewStrong123!X"));
    let result = tokio::time::timeout(Duration::from_millis(20), submit).await;
    assert!(result.is_err());

    assert_eq!(use_case.state(), UpdateState::default());
    assert!(sink.events().is_empty());
}

#[test]
fn test_tracing_sink_never_fails() {
    let now = chrono::Utc::now();
    TracingSink.track(&SubmitEvent::success(now, now, None));
    TracingSink.track(&SubmitEvent::error(now, now, "boom", None));
}
