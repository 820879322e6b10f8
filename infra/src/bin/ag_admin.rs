//! Account administration for the agenda database.
//!
//! ```text
//! ag_admin create-user <username> <password>
//! ag_admin set-password <username> <password>
//! ag_admin assign-colors
//! ag_admin hash <password>
//! ```
//!
//! Reads `DATABASE_URL` (and the other `DATABASE_*` variables) from the
//! environment or a `.env` file.

use std::sync::Arc;

use ag_core::services::auth::hash_password;
use ag_core::services::UserService;
use ag_infra::database::{DatabasePool, MySqlUserRepository};
use ag_shared::config::DatabaseConfig;
use anyhow::{bail, Context};
use log::info;

const USAGE: &str = "usage: ag_admin <create-user <username> <password> | set-password <username> <password> | assign-colors | hash <password>>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    CreateUser { username: String, password: String },
    SetPassword { username: String, password: String },
    AssignColors,
    Hash { password: String },
}

impl Command {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let command = match args.as_slice() {
            ["create-user", username, password] => Command::CreateUser {
                username: username.to_string(),
                password: password.to_string(),
            },
            ["set-password", username, password] => Command::SetPassword {
                username: username.to_string(),
                password: password.to_string(),
            },
            ["assign-colors"] => Command::AssignColors,
            ["hash", password] => Command::Hash {
                password: password.to_string(),
            },
            _ => bail!("{}", USAGE),
        };
        Ok(command)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info,sqlx=warn"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    // Hashing is offline; everything else needs the database
    if let Command::Hash { password } = &command {
        println!("{}", hash_password(password).await?);
        return Ok(());
    }

    let config = DatabaseConfig::from_env().context("invalid database configuration")?;
    let pool = DatabasePool::new(config)
        .await
        .context("could not connect to the database")?;
    pool.run_migrations().await?;

    let users = UserService::new(Arc::new(MySqlUserRepository::new(pool.get_pool().clone())));

    match command {
        Command::CreateUser { username, password } => {
            let user = users.create_user(&username, &password).await?;
            println!("Created user {} ({}) with color {}", user.username, user.id, user.color);
        }
        Command::SetPassword { username, password } => {
            let user = users.change_password(&username, &password).await?;
            println!("Password updated for {}", user.username);
        }
        Command::AssignColors => {
            let updated = users.assign_colors().await?;
            if updated.is_empty() {
                println!("All users already have a color");
            }
            for user in updated {
                println!("{} -> {}", user.username, user.color);
            }
        }
        Command::Hash { password } => println!("{}", hash_password(&password).await?),
    }

    info!("Done");
    pool.close().await;
    Ok(())
}
