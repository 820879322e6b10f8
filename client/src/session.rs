//! Client-side session state machine
//!
//! `Loading -> Authenticated | Unauthenticated`. A successful silent refresh
//! keeps the session `Authenticated` with a new access token; a failed one
//! drops it to `Unauthenticated`.

use std::sync::Arc;
use std::time::Duration;

use ag_shared::{AuthResponse, UserSummary};
use reqwest::{Method, Response};
use serde_json::json;
use tokio::sync::RwLock;

use crate::error::ClientError;
use crate::retry::send_with_single_retry;
use crate::timer::{RefreshTimer, REFRESH_INTERVAL};

const LOGIN_PATH: &str = "/api/auth/login";
const REFRESH_PATH: &str = "/api/auth/refresh";
const LOGOUT_PATH: &str = "/api/auth/logout";

/// Shown when the server rejects a login without saying why
const LOGIN_FALLBACK_ERROR: &str = "Error al iniciar sesión";

/// Shown when the login request or its response could not be processed
const LOGIN_REQUEST_ERROR: &str = "Error al procesar la solicitud";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Initial silent refresh has not finished yet
    Loading,
    Authenticated {
        user: UserSummary,
        access_token: String,
    },
    Unauthenticated,
}

/// Session bound to one API base URL
///
/// Cloning is cheap and every clone shares the same cookie jar and state.
#[derive(Clone)]
pub struct SessionClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    state: Arc<RwLock<SessionState>>,
}

impl SessionClient {
    /// Build a client in the `Loading` state without contacting the server
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: Arc::from(base_url),
            state: Arc::new(RwLock::new(SessionState::Loading)),
        })
    }

    /// Build a client and try to resume a session from the refresh cookie
    pub async fn start(base_url: &str) -> Result<Self, ClientError> {
        let client = Self::new(base_url)?;
        client.refresh().await;
        Ok(client)
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn user(&self) -> Option<UserSummary> {
        match &*self.state.read().await {
            SessionState::Authenticated { user, .. } => Some(user.clone()),
            _ => None,
        }
    }

    pub async fn access_token(&self) -> Option<String> {
        match &*self.state.read().await {
            SessionState::Authenticated { access_token, .. } => Some(access_token.clone()),
            _ => None,
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        matches!(*self.state.read().await, SessionState::Authenticated { .. })
    }

    /// Exchange the refresh cookie for a new access token
    ///
    /// Any failure, including a network error, ends the session.
    pub async fn refresh(&self) -> bool {
        let outcome = match self.http.post(self.url(REFRESH_PATH)).send().await {
            Ok(response) if response.status().is_success() => {
                response.json::<AuthResponse>().await.ok().and_then(authenticated)
            }
            Ok(response) => {
                tracing::debug!("Refresh rejected with {}", response.status());
                None
            }
            Err(e) => {
                tracing::warn!("Refresh request failed: {}", e);
                None
            }
        };

        let mut state = self.state.write().await;
        match outcome {
            Some((user, access_token)) => {
                *state = SessionState::Authenticated { user, access_token };
                true
            }
            None => {
                *state = SessionState::Unauthenticated;
                false
            }
        }
    }

    /// Log in and store the access token; the server sets the refresh cookie
    ///
    /// Every failure, including a network error or a non-JSON reply, is a
    /// [`ClientError::LoginFailed`] carrying a user-facing message.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserSummary, ClientError> {
        let reply: Result<AuthResponse, reqwest::Error> = async {
            self.http
                .post(self.url(LOGIN_PATH))
                .json(&json!({ "username": username, "password": password }))
                .send()
                .await?
                .json::<AuthResponse>()
                .await
        }
        .await;

        let body = match reply {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Login request failed: {}", e);
                return Err(self.login_failed(LOGIN_REQUEST_ERROR.to_string()).await);
            }
        };
        let error = body.error.clone();

        match authenticated(body) {
            Some((user, access_token)) => {
                tracing::info!("Logged in as {}", user.username);
                *self.state.write().await = SessionState::Authenticated {
                    user: user.clone(),
                    access_token,
                };
                Ok(user)
            }
            None => Err(self
                .login_failed(error.unwrap_or_else(|| LOGIN_FALLBACK_ERROR.to_string()))
                .await),
        }
    }

    /// An existing session survives a failed login; a pending one ends
    async fn login_failed(&self, message: String) -> ClientError {
        let mut state = self.state.write().await;
        if *state == SessionState::Loading {
            *state = SessionState::Unauthenticated;
        }
        ClientError::LoginFailed(message)
    }

    /// Clear the server cookie if possible, then the local session
    pub async fn logout(&self) {
        if let Err(e) = self.http.post(self.url(LOGOUT_PATH)).send().await {
            tracing::warn!("Logout request failed: {}", e);
        }
        *self.state.write().await = SessionState::Unauthenticated;
    }

    /// Call a protected endpoint with the bearer token
    ///
    /// A 401 triggers one refresh and one retry with the renewed token.
    pub async fn authenticated_fetch(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response, ClientError> {
        if self.access_token().await.is_none() {
            return Err(ClientError::NoAccessToken);
        }

        let method = &method;
        send_with_single_retry(
            move || self.send_with_token(method.clone(), path, body),
            move || self.refresh(),
        )
        .await
    }

    /// Keep the session alive every [`REFRESH_INTERVAL`]
    pub fn spawn_refresh_timer(&self) -> RefreshTimer {
        RefreshTimer::spawn(self.clone(), REFRESH_INTERVAL)
    }

    async fn send_with_token(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response, ClientError> {
        let token = self.access_token().await.ok_or(ClientError::NoAccessToken)?;

        let mut request = self.http.request(method, self.url(path)).bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn authenticated(body: AuthResponse) -> Option<(UserSummary, String)> {
    match body {
        AuthResponse {
            success: true,
            access_token: Some(access_token),
            user: Some(user),
            ..
        } => Some((user, access_token)),
        _ => None,
    }
}
