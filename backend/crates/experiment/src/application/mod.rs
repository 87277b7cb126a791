//! Application Layer
//!
//! Use cases orchestrating storage, signals and domain services.

pub mod assign;
pub mod config;
