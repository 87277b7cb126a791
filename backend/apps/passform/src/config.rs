//! Environment Configuration
//!
//! Reads `PASSFORM_*` variables (after `.env` has been loaded) on top of the
//! library defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use credential::FormConfig;
use experiment::{ExperimentConfig, VariantWeights};
use platform::fingerprint::EnvironmentSignals;

/// Everything the CLI needs to run one form submission
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub experiment: ExperimentConfig,
    pub form: FormConfig,
    pub signals: EnvironmentSignals,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any variable source
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let vars = Vars(&lookup);
        let mut experiment = if cfg!(debug_assertions) {
            ExperimentConfig::development()
        } else {
            ExperimentConfig::default()
        };
        if let Some(test_id) = vars.get("PASSFORM_TEST_ID") {
            experiment.test_id = test_id;
        }
        if let Some(path) = vars.get("PASSFORM_STORE_PATH") {
            experiment.store_path = PathBuf::from(path);
        }
        experiment.weights = VariantWeights {
            inline_change: vars.parse("PASSFORM_WEIGHT_INLINE_CHANGE")?,
            lean_save: vars.parse("PASSFORM_WEIGHT_LEAN_SAVE")?,
        };

        let mut form = FormConfig::default();
        let policy = &mut form.policy;
        if let Some(min_length) = vars.parse("PASSFORM_MIN_LENGTH")? {
            policy.min_length = min_length;
        }
        if let Some(require) = vars.parse("PASSFORM_REQUIRE_UPPER")? {
            policy.require_upper = require;
        }
        if let Some(require) = vars.parse("PASSFORM_REQUIRE_LOWER")? {
            policy.require_lower = require;
        }
        if let Some(require) = vars.parse("PASSFORM_REQUIRE_DIGIT")? {
            policy.require_digit = require;
        }
        if let Some(require) = vars.parse("PASSFORM_REQUIRE_SYMBOL")? {
            policy.require_symbol = require;
        }
        if let Some(diff) = vars.parse("PASSFORM_SIGNIFICANT_DIFF")? {
            policy.significant_diff = diff;
        }
        if let Some(ms) = vars.parse("PASSFORM_MOCK_LATENCY_MS")? {
            form.mock_latency = Duration::from_millis(ms);
        }

        Ok(Self {
            experiment,
            form,
            signals: signals_from(&vars)?,
        })
    }
}

/// Device signals of the terminal session
///
/// `PASSFORM_SCREEN` takes `WIDTHxHEIGHTxDEPTH`, e.g. `1920x1080x24`.
fn signals_from(vars: &Vars<'_>) -> anyhow::Result<EnvironmentSignals> {
    let mut signals = EnvironmentSignals {
        user_agent: vars
            .get("PASSFORM_USER_AGENT")
            .or_else(|| Some(format!("passform/{}", env!("CARGO_PKG_VERSION")))),
        language: vars
            .get("PASSFORM_LANGUAGE")
            .or_else(|| vars.get("LANG").and_then(|l| posix_locale_tag(&l))),
        timezone: vars.get("PASSFORM_TIMEZONE").or_else(|| vars.get("TZ")),
        ..Default::default()
    };

    if let Some(screen) = vars.get("PASSFORM_SCREEN") {
        let mut dims = screen.split('x').map(|d| d.trim().parse::<u32>());
        let mut next = || {
            dims.next()
                .transpose()
                .context("PASSFORM_SCREEN must look like 1920x1080x24")
        };
        signals.screen_width = next()?;
        signals.screen_height = next()?;
        signals.color_depth = next()?;
    }

    Ok(signals)
}

/// `en_US.UTF-8` -> `en-US`
fn posix_locale_tag(locale: &str) -> Option<String> {
    let tag = locale.split(['.', '@']).next()?.replace('_', "-");
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        None
    } else {
        Some(tag)
    }
}

/// Non-blank variables from a lookup function
struct Vars<'a>(&'a dyn Fn(&str) -> Option<String>);

impl Vars<'_> {
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    fn parse<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.get(key)
            .map(|v| v.trim().parse::<T>())
            .transpose()
            .with_context(|| format!("{} has an invalid value", key))
    }
}
