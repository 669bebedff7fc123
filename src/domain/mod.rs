//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Row shapes, creation drafts and partial-update patches
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or on the concrete database
//! driver beyond `sqlx::FromRow` derives used to map result rows.

pub mod entities;
pub mod repositories;
