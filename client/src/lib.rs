//! Session client for the Agenda API
//!
//! Keeps the short-lived access token in memory and relies on the
//! `refresh_token` cookie (held by the HTTP client's cookie store) to renew it:
//! - once when the session starts,
//! - periodically through a [`RefreshTimer`],
//! - and on demand when a protected call answers 401.

pub mod error;
pub mod retry;
pub mod session;
pub mod timer;

pub use error::ClientError;
pub use retry::{send_with_single_retry, AuthStatus};
pub use session::{SessionClient, SessionState};
pub use timer::{RefreshTimer, REFRESH_INTERVAL};
