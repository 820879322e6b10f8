//! Request handling helpers shared by the routes

pub mod error;

pub use error::{bad_request, error_response, handle_domain_error};
