//! Runtime settings from the environment (`.env` is loaded when present).

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl Settings {
    /// Read `DATABASE_URL`, `BIND_ADDR`, and `DATABASE_MAX_CONNECTIONS`,
    /// falling back to local defaults.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/learnnest".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(v) => v.parse().map_err(|_| {
                AppError::Config("DATABASE_MAX_CONNECTIONS must be an integer".into())
            })?,
            Err(_) => 5,
        };
        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
