//! Wire types shared by the server and the session client

pub mod auth;
pub mod language;

pub use auth::{AuthResponse, UserSummary};
pub use language::Language;
