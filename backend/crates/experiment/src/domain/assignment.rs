//! Assignment Value Object

use serde::{Deserialize, Serialize};

use super::variant::Variant;

/// Where an assignment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentSource {
    /// Computed from a user identifier
    User,
    /// Computed from the device key
    Device,
    /// Recovered from the store
    Stored,
}

impl AssignmentSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssignmentSource::User => "user",
            AssignmentSource::Device => "device",
            AssignmentSource::Stored => "stored",
        }
    }
}

/// Result of assigning a visitor to an experiment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    test_id: String,
    variant: Variant,
    source: AssignmentSource,
}

impl Assignment {
    pub fn new(test_id: impl Into<String>, variant: Variant, source: AssignmentSource) -> Self {
        Self {
            test_id: test_id.into(),
            variant,
            source,
        }
    }

    pub fn test_id(&self) -> &str {
        &self.test_id
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn source(&self) -> AssignmentSource {
        self.source
    }
}
