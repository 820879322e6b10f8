//! Business services containing domain logic and use cases.

pub mod auth;
pub mod rental;
pub mod task;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::{AuthOutcome, AuthService, RefreshOutcome};
pub use rental::RentalService;
pub use task::TaskService;
pub use token::{TokenService, TokenServiceConfig};
pub use user::UserService;
