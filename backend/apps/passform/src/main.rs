//! Password Form Entry Point
//!
//! Runs one password change the way the form would: assign the experiment
//! variant, validate, submit to the mock backend, report analytics.
//! Uses `anyhow` for startup errors; form failures are surfaced as
//! `kernel::error::AppError`.

mod config;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use credential::infra::analytics::TracingSink;
use credential::infra::mock_gateway::MockPasswordGateway;
use credential::{ClearTextPassword, UpdatePasswordUseCase, validate_password};
use experiment::VariantAssigner;
use kernel::error::{
    app_error::{AppResult, ResultExt},
    kind::ErrorKind,
};
use platform::storage::JsonFileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Run one password change against the mock backend
#[derive(Parser)]
#[command(name = "passform", version, about, long_about = None)]
struct Args {
    /// Bucket by user id instead of the device fingerprint
    #[arg(long)]
    user: Option<String>,

    /// Clear the stored variant before assigning
    #[arg(long)]
    reset: bool,

    /// Current password
    current: String,

    /// New password
    next: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "passform=info,experiment=info,credential=info,platform=info,analytics=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env()?;

    tracing::info!(
        test_id = %config.experiment.test_id,
        store = %config.experiment.store_path.display(),
        mock_latency_ms = config.form.mock_latency_ms(),
        "Starting password form"
    );

    run(args, config).await?;
    Ok(())
}

async fn run(args: Args, config: AppConfig) -> AppResult<()> {
    // Variant assignment
    let store = open_store(&config.experiment.store_path);
    let assigner = VariantAssigner::new(store, config.signals.clone());

    let test_id = config.experiment.test_id.as_str();
    if args.reset {
        assigner
            .reset(test_id)
            .map_app_err(ErrorKind::Storage, "Could not reset the stored variant")?;
        tracing::info!(test_id, "Cleared stored variant");
    }

    let assignment = assigner.assign(
        test_id,
        args.user.as_deref(),
        config.experiment.weights(),
    );
    match serde_json::to_string(&assignment) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::warn!(error = %e, "Failed to encode assignment"),
    }

    // Live feedback, as shown while typing
    let feedback = validate_password(&args.next, &args.current, &config.form.policy);
    for error in feedback.errors() {
        println!("  - {}", error);
    }

    // Submission
    let use_case = UpdatePasswordUseCase::new(
        Arc::new(MockPasswordGateway::new(config.form.mock_latency)),
        Arc::new(TracingSink),
        config.form.policy.clone(),
    )
    .with_experiment(assignment.test_id(), assignment.variant().as_str());

    use_case
        .execute(
            ClearTextPassword::new(args.current),
            ClearTextPassword::new(args.next),
        )
        .await?;

    println!("Password updated.");
    Ok(())
}

/// Open the variant store, starting over when the file cannot be read
///
/// Assignment never fails on storage; the bad file is replaced by the next
/// persisted decision.
fn open_store(path: &Path) -> JsonFileStore {
    match JsonFileStore::open(path) {
        Ok(store) => store,
        Err(e) => {
            let store = JsonFileStore::empty(path);
            tracing::warn!(
                path = %store.path().display(),
                error = %e,
                "Variant store unreadable, starting empty"
            );
            store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credential::FormConfig;
    use experiment::ExperimentConfig;
    use platform::fingerprint::EnvironmentSignals;
    use platform::storage::KeyValueStore;

    fn args(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("passform").chain(list.iter().copied()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["--user", "alice", "old", "new"]).unwrap();
        assert_eq!(parsed.user.as_deref(), Some("alice"));
        assert!(!parsed.reset);
        assert_eq!(parsed.current, "old");
        assert_eq!(parsed.next, "new");

        let parsed = args(&["old", "--reset", "new"]).unwrap();
        assert!(parsed.reset);
        assert!(parsed.user.is_none());
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(args(&["only-one"]).is_err());
        assert!(args(&["a", "b", "c"]).is_err());
        assert!(args(&["a", "b", "--user"]).is_err());
    }

    fn config_with_store(path: &Path) -> AppConfig {
        AppConfig {
            experiment: ExperimentConfig {
                store_path: path.to_path_buf(),
                ..Default::default()
            },
            form: FormConfig::development(),
            signals: EnvironmentSignals::default(),
        }
    }

    #[tokio::test]
    async fn test_run_recovers_from_corrupt_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.json");
        std::fs::write(&path, b"{not json").unwrap();

        let parsed = args(&["--user", "alice", "OldPassword1", "NewPassword2"]).unwrap();
        run(parsed, config_with_store(&path)).await.unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            store
                .get("ab:variant:password-change-ui")
                .unwrap()
                .as_deref(),
            Some("inline-change")
        );
    }

    #[tokio::test]
    async fn test_run_reports_rejection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.json");

        let parsed = args(&["wrong", "NewPassword2"]).unwrap();
        let err = run(parsed, config_with_store(&path)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }
}
