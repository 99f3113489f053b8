use log::info;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env::{self, VarError};
use thiserror::Error;

/// Default Postgres port when `PORT` is not set
const DEFAULT_PORT: u16 = 5432;

/// Characters left as-is in the user-info part of a connection URL
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("{name} environment variable is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Connection settings for the catalog database
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseConfig {
    /// A full connection URL, taken from `DATABASE_URL`
    Url(String),
    /// Individual settings, taken from `HOST`, `PORT`, `DATABASE_NAME`,
    /// `APPUSERNAME` and `PASSWORD`
    Parts {
        host: String,
        port: u16,
        name: String,
        username: String,
        password: String,
    },
}

impl DatabaseConfig {
    /// Reads the configuration from the environment, loading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key))
    }

    /// Resolves the configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        if let Ok(url) = lookup("DATABASE_URL") {
            return Ok(Self::Url(url));
        }

        let required = |key: &'static str| lookup(key).map_err(|_| ConfigError::Missing(key));

        let port = match lookup("PORT") {
            Ok(port) => port.parse().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: format!("{e}"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self::Parts {
            host: required("HOST")?,
            port,
            name: required("DATABASE_NAME")?,
            username: required("APPUSERNAME")?,
            password: required("PASSWORD")?,
        })
    }

    pub fn url(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Parts {
                host,
                port,
                name,
                username,
                password,
            } => {
                let username = utf8_percent_encode(username, USERINFO);
                let password = utf8_percent_encode(password, USERINFO);
                format!("postgres://{username}:{password}@{host}:{port}/{name}")
            }
        }
    }
}

/// Creates a database connection
pub async fn create_connection(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url());
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Connected to the catalog database");

    Ok(db)
}
