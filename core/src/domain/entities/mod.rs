//! Domain entities representing core business objects.

pub mod rental;
pub mod task;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use rental::{
    parse_rental_date, validate_hours, NewRental, Rental, RentalView, DEFAULT_END_HOUR,
    DEFAULT_START_HOUR, MAX_HOUR,
};
pub use task::{Task, TaskStatus, TaskView, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
pub use token::{
    AuthTokens, TokenPayload, TokenType, ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use user::{PublicUser, User, DEFAULT_USER_COLOR};
