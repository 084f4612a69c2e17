use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Default administrator password for local development. Anything real
/// must set `ADMIN_PASSWORD`; startup logs a warning when this is in use.
pub const DEFAULT_ADMIN_PASSWORD: &str = "arbolado-dev";

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Path of the SQLite database file (default: `arbolado.db`).
    pub database_path: PathBuf,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Email of the administrator seeded on first boot.
    pub admin_email: String,
    /// Password of the administrator seeded on first boot.
    pub admin_password: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_PATH`        | `arbolado.db`              |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_EMAIL`          | `admin@arbolado.local`     |
    /// | `ADMIN_PASSWORD`       | dev-only default           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_path =
            PathBuf::from(std::env::var("DATABASE_PATH").unwrap_or_else(|_| "arbolado.db".into()));

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@arbolado.local".into());
        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into());

        Self {
            host,
            port,
            database_path,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            admin_email,
            admin_password,
        }
    }
}
