//! HTTP route handlers

pub mod auth;
pub mod protected;
pub mod rentals;
pub mod tasks;
