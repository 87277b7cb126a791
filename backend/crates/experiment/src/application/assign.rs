//! Variant Assignment Use Case

use platform::fingerprint::SignalSource;
use platform::storage::KeyValueStore;

use crate::domain::assignment::{Assignment, AssignmentSource};
use crate::domain::services::{bucket_draw, identity_key, pick_variant, storage_key};
use crate::domain::variant::{Variant, VariantWeights};

/// Assigns visitors to experiment variants
///
/// Decisions are persisted in `store` under `ab:variant:<test_id>`. A
/// persisted decision is returned unchanged on later calls, even when
/// weights or identity signals have changed since.
///
/// Assignment never fails: a store that cannot be read is treated as empty,
/// and a store that cannot be written only costs stability on the next visit.
pub struct VariantAssigner<S, E> {
    store: S,
    signals: E,
}

impl<S, E> VariantAssigner<S, E>
where
    S: KeyValueStore,
    E: SignalSource,
{
    pub fn new(store: S, signals: E) -> Self {
        Self { store, signals }
    }

    /// Assign a visitor to a variant of `test_id`
    ///
    /// ## Arguments
    /// * `test_id` - Experiment identifier
    /// * `user_id` - Logged-in user, if any; empty ids are ignored
    /// * `weights` - Relative variant weights, 50/50 when omitted
    pub fn assign(
        &self,
        test_id: &str,
        user_id: Option<&str>,
        weights: Option<&VariantWeights>,
    ) -> Assignment {
        let key = storage_key(test_id);

        if let Some(variant) = self.stored_variant(&key) {
            tracing::debug!(test_id, %variant, "Reusing stored variant");
            return Assignment::new(test_id, variant, AssignmentSource::Stored);
        }

        let cutoff = weights.copied().unwrap_or_default().cutoff();
        let (identity, source) = identity_key(user_id, &self.signals.signals());
        let draw = bucket_draw(test_id, &identity);
        let variant = pick_variant(draw, cutoff);

        if let Err(e) = self.store.set(&key, variant.as_str()) {
            tracing::warn!(
                test_id,
                error = %e,
                "Failed to persist variant, assignment may change on next visit"
            );
        }

        tracing::debug!(
            test_id,
            %variant,
            source = source.as_str(),
            draw,
            cutoff,
            "Assigned variant"
        );

        Assignment::new(test_id, variant, source)
    }

    /// Forget the persisted decision for `test_id`
    pub fn reset(&self, test_id: &str) -> Result<(), platform::storage::StoreError> {
        self.store.remove(&storage_key(test_id))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn stored_variant(&self, key: &str) -> Option<Variant> {
        match self.store.get(key) {
            Ok(Some(label)) => {
                let variant = Variant::from_label(&label);
                if variant.is_none() {
                    tracing::debug!(key, label = %label, "Ignoring unrecognized stored variant");
                }
                variant
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read stored variant, recomputing");
                None
            }
        }
    }
}
