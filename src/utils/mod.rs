//! Utility functions shared across layers.
//!
//! - [`password`] - Argon2id password hashing and verification

pub mod password;
