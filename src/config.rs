//! Server settings read from the environment.

use std::env;

use actix_web::cookie::Key;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TEMPLATES_DIR: &str = "templates/**/*";

/// Cookie signing keys must carry at least this many bytes.
const MIN_SECRET_KEY_LEN: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got `{0}`")]
    InvalidPort(String),
    #[error("SECRET_KEY must be at least 64 bytes long")]
    SecretKeyTooShort,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Key used to sign flash message cookies. A random key is generated when absent.
    pub secret_key: Option<String>,
    /// Glob passed to Tera when loading templates.
    pub templates_dir: String,
}

impl ServerConfig {
    /// Reads `DATABASE_URL`, `ADDRESS`, `PORT`, `SECRET_KEY` and `TEMPLATES_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let secret_key = lookup("SECRET_KEY").filter(|value| !value.is_empty());
        if let Some(secret) = &secret_key {
            if secret.len() < MIN_SECRET_KEY_LEN {
                return Err(ConfigError::SecretKeyTooShort);
            }
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            address: lookup("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
            port,
            secret_key,
            templates_dir: lookup("TEMPLATES_DIR")
                .unwrap_or_else(|| DEFAULT_TEMPLATES_DIR.to_string()),
        })
    }

    /// Key for signing cookies; generated when no secret is configured.
    pub fn cookie_key(&self) -> Key {
        match &self.secret_key {
            Some(secret) => Key::from(secret.as_bytes()),
            None => Key::generate(),
        }
    }
}
