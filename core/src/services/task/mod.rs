//! Task service: the shared to-do list

mod service;

#[cfg(test)]
mod tests;

pub use service::TaskService;
