//! Domain Layer
//!
//! Value objects and pure decision functions.

pub mod assignment;
pub mod services;
pub mod variant;
