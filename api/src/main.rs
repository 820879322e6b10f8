use std::sync::Arc;

use actix_web::{web, HttpServer};
use ag_api::{create_app, AppState};
use ag_core::services::{TokenService, TokenServiceConfig};
use ag_infra::database::{
    DatabasePool, MySqlRentalRepository, MySqlTaskRepository, MySqlUserRepository,
};
use ag_shared::{AppConfig, Environment};
use anyhow::Context;
use log::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    let environment = Environment::from_env();
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(environment.default_log_filter()),
    );

    info!("Starting Agenda API Server ({})", environment);

    // Secrets and lifetimes are read exactly once, here
    let config = AppConfig::from_env().context("invalid configuration")?;
    let token_service = Arc::new(
        TokenServiceConfig::try_from(&config.auth.jwt)
            .and_then(TokenService::new)
            .context("could not initialise token service")?,
    );

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("could not connect to the database")?;
    pool.run_migrations().await?;
    info!("Database ready: {}", pool.get_statistics());

    let db = pool.get_pool().clone();
    let app_state = web::Data::new(AppState::new(
        Arc::new(MySqlUserRepository::new(db.clone())),
        Arc::new(MySqlRentalRepository::new(db.clone())),
        Arc::new(MySqlTaskRepository::new(db)),
        token_service,
        config.auth.cookie.clone(),
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    pool.close().await;
    Ok(())
}
