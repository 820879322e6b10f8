//! Shared setup for the API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use ag_api::AppState;
use ag_core::domain::entities::user::User;
use ag_core::repositories::{
    MockRentalRepository, MockTaskRepository, MockUserRepository, UserRepository,
};
use ag_core::services::auth::hash_password_with_cost;
use ag_core::services::{TokenService, TokenServiceConfig};
use ag_shared::{Environment, RefreshCookieConfig};

pub const ACCESS_SECRET: &str = "test-access-secret";
pub const REFRESH_SECRET: &str = "test-refresh-secret";
pub const PASSWORD: &str = "correct";

pub type TestState = AppState<MockUserRepository, MockRentalRepository, MockTaskRepository>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub token_service: Arc<TokenService>,
    pub admin: User,
    pub other: User,
}

impl TestContext {
    /// Bearer header value for `user`
    pub fn bearer(&self, user: &User) -> String {
        format!(
            "Bearer {}",
            self.token_service.issue_access_token(user).unwrap()
        )
    }
}

pub async fn setup() -> TestContext {
    setup_with(TokenServiceConfig::new(ACCESS_SECRET, REFRESH_SECRET)).await
}

pub async fn setup_with(config: TokenServiceConfig) -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let hash = hash_password_with_cost(PASSWORD, 4).await.unwrap();

    let admin = users
        .create(User::new("admin", hash.clone(), "#C96E2D"))
        .await
        .unwrap();
    let other = users
        .create(User::new("bea", hash, "#228B22"))
        .await
        .unwrap();

    let rentals = Arc::new(MockRentalRepository::new(Arc::clone(&users)));
    let tasks = Arc::new(MockTaskRepository::new(Arc::clone(&users)));
    let token_service = Arc::new(TokenService::new(config).unwrap());

    let state = web::Data::new(AppState::new(
        users,
        rentals,
        tasks,
        Arc::clone(&token_service),
        RefreshCookieConfig::for_environment(Environment::Development),
    ));

    TestContext {
        state,
        token_service,
        admin,
        other,
    }
}
