use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
}

/// Process settings, read once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub api_version: String,
    pub database_path: PathBuf,
    pub allowed_origins: Vec<String>,
    pub log_level: String,
    pub enable_docs: bool,
    pub max_page_size: u32,
    pub default_page_size: u32,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            api_version: env!("CARGO_PKG_VERSION").to_string(),
            database_path: PathBuf::from("sports_league.sqlite"),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            log_level: "info".to_string(),
            enable_docs: true,
            max_page_size: 100,
            default_page_size: 20,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
        }
    }
}

impl Config {
    /// Build from the process environment. Call `dotenvy::dotenv()` first if a
    /// `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            api_version: lookup("API_VERSION").unwrap_or(defaults.api_version),
            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|raw| split_origins(&raw))
                .unwrap_or(defaults.allowed_origins),
            log_level: lookup("LOG_LEVEL")
                .map(|level| level.to_lowercase())
                .unwrap_or(defaults.log_level),
            enable_docs: match lookup("ENABLE_DOCS") {
                Some(raw) => parse_flag("ENABLE_DOCS", &raw)?,
                None => defaults.enable_docs,
            },
            max_page_size: parse_or("MAX_PAGE_SIZE", &lookup, defaults.max_page_size)?,
            default_page_size: parse_or("DEFAULT_PAGE_SIZE", &lookup, defaults.default_page_size)?,
            host: parse_or("HOST", &lookup, defaults.host)?,
            port: parse_or("PORT", &lookup, defaults.port)?,
        };

        if config.max_page_size == 0 {
            return Err(ConfigError::NotPositive("MAX_PAGE_SIZE"));
        }
        if config.default_page_size == 0 {
            return Err(ConfigError::NotPositive("DEFAULT_PAGE_SIZE"));
        }

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
        }),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
