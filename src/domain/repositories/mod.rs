//! Repository trait definitions for the domain layer.
//!
//! Every entity is persisted through the same contract:
//!
//! - [`CrudRepository`] - list, lookup, insert, overwrite, patch, hard delete
//! - [`SoftDeleteRepository`] - active listing, soft delete and restore for
//!   tables carrying a `delete_at` column
//!
//! Absence is reported as `Option`/`bool`; only infrastructure faults are
//! returned as [`RepositoryError`]. Implementations live in
//! `crate::infrastructure::persistence`.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod crud_repository;

pub use crud_repository::{CrudRepository, RepositoryError, RepositoryResult, SoftDeleteRepository};
