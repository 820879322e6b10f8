//! Rental service: day bookings, one per user per day

mod service;

#[cfg(test)]
mod tests;

pub use service::RentalService;
