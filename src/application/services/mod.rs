//! Business logic services for the application layer.

pub mod crud_service;

pub use crud_service::CrudService;
pub(crate) use crud_service::not_found;
