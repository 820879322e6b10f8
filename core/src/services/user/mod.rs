//! User administration: account creation, password changes, color assignment

mod palette;
mod service;

#[cfg(test)]
mod tests;

pub use palette::{pick_color, USER_COLORS};
pub use service::UserService;
