//! Variant and Weight Value Objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// UI variant of the password change experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Password is changed inline in the settings page
    InlineChange,
    /// Minimal form with a single save action
    LeanSave,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::InlineChange, Variant::LeanSave];

    /// Label used in storage and analytics
    pub const fn as_str(&self) -> &'static str {
        match self {
            Variant::InlineChange => "inline-change",
            Variant::LeanSave => "lean-save",
        }
    }

    /// Parse a stored label; only exact labels are recognized
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == label)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default weight of a variant left out of [`VariantWeights`]
pub const DEFAULT_WEIGHT: f64 = 0.5;

/// Relative weights of the two variants
///
/// Either weight may be omitted and then defaults to [`DEFAULT_WEIGHT`].
/// An explicit `0.0` is kept as is. Negative weights are not validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VariantWeights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lean_save: Option<f64>,
}

impl VariantWeights {
    pub fn new(inline_change: f64, lean_save: f64) -> Self {
        Self {
            inline_change: Some(inline_change),
            lean_save: Some(lean_save),
        }
    }

    /// Weight of a variant after applying the default
    pub fn weight(&self, variant: Variant) -> f64 {
        let weight = match variant {
            Variant::InlineChange => self.inline_change,
            Variant::LeanSave => self.lean_save,
        };
        weight.unwrap_or(DEFAULT_WEIGHT)
    }

    /// Share of the bucket range assigned to [`Variant::InlineChange`]
    ///
    /// A zero (or NaN) total is replaced by 1, so `{0, 0}` yields a cutoff
    /// of 0 rather than a division by zero.
    pub fn cutoff(&self) -> f64 {
        let inline = self.weight(Variant::InlineChange);
        let sum = inline + self.weight(Variant::LeanSave);
        let total = if sum == 0.0 || sum.is_nan() { 1.0 } else { sum };
        inline / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_labels() {
        assert_eq!(Variant::InlineChange.as_str(), "inline-change");
        assert_eq!(Variant::LeanSave.to_string(), "lean-save");
        assert_eq!(Variant::from_label("lean-save"), Some(Variant::LeanSave));
        assert_eq!(Variant::from_label("Lean-Save"), None);
        assert_eq!(Variant::from_label(" lean-save"), None);
        assert_eq!(Variant::from_label(""), None);
    }

    #[test]
    fn test_variant_serde_matches_labels() {
        for variant in Variant::ALL {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
    }

    #[test]
    fn test_default_cutoff_is_even() {
        assert_eq!(VariantWeights::default().cutoff(), 0.5);
    }

    #[test]
    fn test_cutoff_normalizes() {
        assert_eq!(VariantWeights::new(1.0, 3.0).cutoff(), 0.25);
        assert_eq!(VariantWeights::new(1.0, 0.0).cutoff(), 1.0);
        assert_eq!(VariantWeights::new(0.0, 1.0).cutoff(), 0.0);
    }

    #[test]
    fn test_cutoff_partial_weights() {
        let only_inline = VariantWeights {
            inline_change: Some(1.5),
            lean_save: None,
        };
        assert_eq!(only_inline.cutoff(), 0.75);
    }

    #[test]
    fn test_cutoff_zero_sum_guard() {
        assert_eq!(VariantWeights::new(0.0, 0.0).cutoff(), 0.0);
        assert!(!VariantWeights::new(f64::NAN, 0.5).cutoff().is_finite());
    }

    #[test]
    fn test_weights_deserialize_partial() {
        let weights: VariantWeights = serde_json::from_str(r#"{"lean-save": 0.9}"#).unwrap();
        assert_eq!(weights.inline_change, None);
        assert_eq!(weights.weight(Variant::InlineChange), DEFAULT_WEIGHT);
        assert_eq!(weights.weight(Variant::LeanSave), 0.9);
    }
}
