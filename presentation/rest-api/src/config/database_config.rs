use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::error::ConfigError;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: migrations directory applied at start-up
///   (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVariable("DATABASE_URL"))?;
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .map(|value| parse_max_connections(&value))
            .transpose()?;
        let migrations_path = env::var("DATABASE_MIGRATIONS_PATH")
            .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

fn parse_max_connections(value: &str) -> Result<u32, ConfigError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ConfigError::InvalidVariable {
            name: "DATABASE_MAX_CONNECTIONS",
            value: value.to_string(),
        })
}

/// Connects the pool and applies pending migrations
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let mut config = DatabaseConfig::new(settings.url.clone());
    if let Some(max_connections) = settings.max_connections {
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    Ok(pool)
}
