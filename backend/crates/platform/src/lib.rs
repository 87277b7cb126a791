//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Stable non-cryptographic string hashing (bucketing only, never secrets)
//! - Device fingerprinting from environment signals
//! - Key-value persistence (in-memory and JSON file backed)

pub mod fingerprint;
pub mod hash;
pub mod storage;
