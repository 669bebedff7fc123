//! Response bodies shared by the API handlers.
//!
//! Entity representations live in [`crate::application::resources`].

pub mod health;
pub mod message;

pub use message::MessageResponse;
