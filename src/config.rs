// src/config.rs

use std::{env, fmt, time::Duration};

use crate::error::ConfigError;

pub const DEFAULT_SECRET_KEY: &str = "zxy-bi-dashboard-secret-key";

#[derive(Clone)]
pub struct AppConfig {
    pub secret_key: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
}

#[derive(Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub recycle_after: Duration,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first if a
    /// `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let secret_key = get("SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.into());
        // FLASK_DEBUG is the fallback name for the flag
        let debug = match get("APP_DEBUG")
            .map(|v| ("APP_DEBUG", v))
            .or_else(|| get("FLASK_DEBUG").map(|v| ("FLASK_DEBUG", v)))
        {
            Some((name, v)) => parse_flag(name, &v)?,
            None => false,
        };
        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_num("PORT", get("PORT"), 5000u16)?;

        let url = match get("DATABASE_URL") {
            Some(url) => url,
            None => {
                let db_host = get("DB_HOST").ok_or(ConfigError::Missing("DATABASE_URL"))?;
                let db_port = parse_num("DB_PORT", get("DB_PORT"), 5432u16)?;
                let name = get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
                let user = get("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
                let password = get("DB_PASSWORD").unwrap_or_default();
                format!(
                    "postgres://{}:{}@{}:{}/{}",
                    urlencoding::encode(&user),
                    urlencoding::encode(&password),
                    db_host,
                    db_port,
                    name
                )
            }
        };

        let database = DatabaseSettings {
            url,
            max_connections: parse_num("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 15u32)?,
            recycle_after: Duration::from_secs(parse_num(
                "DB_RECYCLE_SECS",
                get("DB_RECYCLE_SECS"),
                3600u64,
            )?),
        };

        Ok(Self { secret_key, debug, host, port, database })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { name, value: value.to_string() }),
    }
}

fn parse_num<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { name, value: v }),
        None => Ok(default),
    }
}

/// Hides the password portion of a connection URL.
fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    match rest.rsplit_once('@') {
        Some((creds, host)) => {
            let user = creds.split(':').next().unwrap_or_default();
            format!("{scheme}://{user}:***@{host}")
        }
        None => url.to_string(),
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("secret_key", &"***")
            .field("debug", &self.debug)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &redact_url(&self.url))
            .field("max_connections", &self.max_connections)
            .field("recycle_after", &self.recycle_after)
            .finish()
    }
}
