//! Experiment (A/B Assignment) Module
//!
//! Cookie-less, stable assignment of a user or device to a UI variant.
//!
//! Layout:
//! - `domain/` - Variants, weights, assignment value object, pure bucketing
//! - `application/` - Assignment use case and configuration
//!
//! ## Assignment Model
//! - A decision already persisted for the experiment always wins
//! - Otherwise the variant is a pure function of experiment, identity and weights
//! - Logged-in users are bucketed by user id, everyone else by device key

pub mod application;
pub mod domain;


// Re-exports for convenience
pub use application::assign::VariantAssigner;
pub use application::config::ExperimentConfig;
pub use domain::assignment::{Assignment, AssignmentSource};
pub use domain::variant::{Variant, VariantWeights};
