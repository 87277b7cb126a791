//! Device fingerprinting utilities
//!
//! Builds a semi-stable device identity from environment signals. The key is
//! not unique and drifts across browser updates; callers pin decisions in a
//! store instead of relying on it alone.

use http::{HeaderMap, header};

/// Separator between signals in a device key
pub const SIGNAL_SEPARATOR: &str = "|";

/// Environment signals describing the current device
///
/// Any signal may be unavailable. Unavailable signals contribute an empty
/// component to the device key rather than shifting the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSignals {
    /// User-Agent string
    pub user_agent: Option<String>,
    /// Preferred language tag (e.g. `en-US`)
    pub language: Option<String>,
    /// Resolved IANA timezone name (e.g. `Europe/Paris`)
    pub timezone: Option<String>,
    pub screen_width: Option<u32>,
    pub screen_height: Option<u32>,
    pub color_depth: Option<u32>,
}

impl EnvironmentSignals {
    /// Collect the signals available from HTTP request headers
    ///
    /// Only User-Agent and the first `Accept-Language` tag are present on a
    /// request; timezone and screen geometry stay unavailable.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let language = headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(primary_language);

        Self {
            user_agent,
            language,
            ..Default::default()
        }
    }
}

/// Source of environment signals
///
/// Implemented by whatever can observe the device: a browser bridge, request
/// headers, or a fixed set of values in tests.
pub trait SignalSource {
    fn signals(&self) -> EnvironmentSignals;
}

impl SignalSource for EnvironmentSignals {
    fn signals(&self) -> EnvironmentSignals {
        self.clone()
    }
}

/// Build the device key from signals
///
/// Order is fixed: user agent, language, timezone, screen width, screen
/// height, color depth.
pub fn derive_device_key(signals: &EnvironmentSignals) -> String {
    let number = |n: Option<u32>| n.map(|v| v.to_string()).unwrap_or_default();

    let parts = [
        signals.user_agent.clone().unwrap_or_default(),
        signals.language.clone().unwrap_or_default(),
        signals.timezone.clone().unwrap_or_default(),
        number(signals.screen_width),
        number(signals.screen_height),
        number(signals.color_depth),
    ];

    parts.join(SIGNAL_SEPARATOR)
}

/// First language tag of an `Accept-Language` value, without its quality
fn primary_language(accept_language: &str) -> Option<String> {
    accept_language
        .split(',')
        .next()
        .and_then(|tag| tag.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != "*")
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn desktop() -> EnvironmentSignals {
        EnvironmentSignals {
            user_agent: Some("Mozilla/5.0 (X11; Linux x86_64)".to_string()),
            language: Some("en-US".to_string()),
            timezone: Some("Europe/Paris".to_string()),
            screen_width: Some(1920),
            screen_height: Some(1080),
            color_depth: Some(24),
        }
    }

    #[test]
    fn test_derive_device_key_order() {
        assert_eq!(
            derive_device_key(&desktop()),
            "Mozilla/5.0 (X11; Linux x86_64)|en-US|Europe/Paris|1920|1080|24"
        );
    }

    #[test]
    fn test_derive_device_key_missing_signals() {
        assert_eq!(derive_device_key(&EnvironmentSignals::default()), "|||||");

        let partial = EnvironmentSignals {
            timezone: None,
            color_depth: None,
            ..desktop()
        };
        assert_eq!(
            derive_device_key(&partial),
            "Mozilla/5.0 (X11; Linux x86_64)|en-US||1920|1080|"
        );
    }

    #[test]
    fn test_signal_source_is_stable() {
        let signals = desktop();
        assert_eq!(
            derive_device_key(&signals.signals()),
            derive_device_key(&signals.signals())
        );
    }

    #[test]
    fn test_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static("Mozilla/5.0 Test Browser"),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("fr-CH, fr;q=0.9, en;q=0.8"),
        );

        let signals = EnvironmentSignals::from_headers(&headers);
        assert_eq!(signals.user_agent.as_deref(), Some("Mozilla/5.0 Test Browser"));
        assert_eq!(signals.language.as_deref(), Some("fr-CH"));
        assert!(signals.timezone.is_none());
        assert_eq!(
            derive_device_key(&signals),
            "Mozilla/5.0 Test Browser|fr-CH||||"
        );
    }

    #[test]
    fn test_from_headers_empty() {
        let signals = EnvironmentSignals::from_headers(&HeaderMap::new());
        assert_eq!(signals, EnvironmentSignals::default());
    }

    #[test]
    fn test_primary_language() {
        assert_eq!(primary_language("de;q=0.7"), Some("de".to_string()));
        assert_eq!(primary_language("*"), None);
        assert_eq!(primary_language(""), None);
    }
}
