//! Authentication route handlers
//!
//! - Login with username and password
//! - Access token refresh from the http-only cookie
//! - Logout (clears the cookie)

pub mod login;
pub mod logout;
pub mod refresh;

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use ag_shared::RefreshCookieConfig;

/// Cookie carrying the refresh token
pub fn refresh_cookie(config: &RefreshCookieConfig, token: String) -> Cookie<'static> {
    Cookie::build(config.name.clone(), token)
        .path(config.path.clone())
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(config.max_age))
        .finish()
}

/// Same cookie, emptied and expiring immediately
pub fn cleared_refresh_cookie(config: &RefreshCookieConfig) -> Cookie<'static> {
    let mut cookie = refresh_cookie(config, String::new());
    cookie.set_max_age(Duration::ZERO);
    cookie
}
