//! Application layer: validation, orchestration and DTO mapping.
//!
//! # Modules
//!
//! - [`resources`] - Wire DTOs per entity and the [`resources::Resource`] mapping
//! - [`services`] - [`services::CrudService`], the business contract shared by every entity

pub mod resources;
pub mod services;
