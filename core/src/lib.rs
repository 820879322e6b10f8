//! # Agenda Core
//!
//! Core business logic and domain layer for the Agenda backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types. It knows nothing about HTTP or SQL; those live in `ag_api`
//! and `ag_infra`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
