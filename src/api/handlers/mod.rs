//! HTTP request handlers for API endpoints.
//!
//! [`crud`] holds one generic handler per route shape, shared by every entity.

pub mod crud;
pub mod health;

pub use health::health_handler;
