//! HTTP middleware for request processing.

pub mod cors;
pub mod tracing;
