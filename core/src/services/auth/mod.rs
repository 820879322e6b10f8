//! Authentication service module
//!
//! - Username and password login
//! - Access token renewal from a refresh token
//! - bcrypt helpers shared with the user administration service

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::{hash_password, hash_password_with_cost, verify_password, BCRYPT_COST};
pub use service::{AuthOutcome, AuthService, RefreshOutcome};
