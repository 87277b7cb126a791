//! Domain Services
//!
//! Pure bucketing logic for variant assignment.

use platform::fingerprint::{EnvironmentSignals, derive_device_key};
use platform::hash::stable_hash;

use super::assignment::AssignmentSource;
use super::variant::Variant;

/// Prefix of the store key holding a persisted decision
pub const STORAGE_KEY_PREFIX: &str = "ab:variant:";

/// Number of buckets the hash is reduced to
pub const BUCKET_COUNT: u32 = 10_000;

/// Store key for an experiment
pub fn storage_key(test_id: &str) -> String {
    format!("{}{}", STORAGE_KEY_PREFIX, test_id)
}

/// Identity key and provenance for a visitor
///
/// A non-empty user id takes precedence so logged-in users keep their
/// variant across devices.
pub fn identity_key(user_id: Option<&str>, signals: &EnvironmentSignals) -> (String, AssignmentSource) {
    match user_id.filter(|id| !id.is_empty()) {
        Some(id) => (format!("user:{}", id), AssignmentSource::User),
        None => (
            format!("device:{}", derive_device_key(signals)),
            AssignmentSource::Device,
        ),
    }
}

/// Deterministic draw in `[0, 0.9999]`
pub fn bucket_draw(test_id: &str, identity_key: &str) -> f64 {
    let hash = stable_hash(&format!("{}|{}", test_id, identity_key));
    f64::from(hash % BUCKET_COUNT) / f64::from(BUCKET_COUNT)
}

/// Pick the variant for a draw; a draw equal to the cutoff goes to `LeanSave`
pub fn pick_variant(draw: f64, cutoff: f64) -> Variant {
    if draw < cutoff {
        Variant::InlineChange
    } else {
        Variant::LeanSave
    }
}
