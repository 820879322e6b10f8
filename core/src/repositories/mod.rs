pub mod rental;
pub mod task;
pub mod user;

pub use rental::{MockRentalRepository, RentalRepository};
pub use task::{MockTaskRepository, TaskRepository};
pub use user::{MockUserRepository, UserRepository};
