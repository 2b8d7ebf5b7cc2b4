use serde::Deserialize;
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::models::MovieId;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

// Главная структура конфигурации
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub page: PageConfig,
}

// Настройки хоста
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки административного API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Готовое значение заголовка `Cookie` с сессией администратора.
    pub session_cookie: Option<String>,
}

// Что показывает страница помимо сетки
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub poster_movie_ids: Vec<MovieId>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Читает настройки через произвольный источник переменных.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Ok(Config {
            app: AppConfig {
                host: var("HOST", "0.0.0.0"),
                port: parse("PORT", var("PORT", "8000"), "port number")?,
                environment: var("ENVIRONMENT", "development"),
                rust_log: var("RUST_LOG", "seat_admin=debug,tower_http=debug"),
            },
            api: ApiConfig {
                base_url: var("ADMIN_API_URL", "http://localhost:5003")
                    .trim_end_matches('/')
                    .to_string(),
                timeout_seconds: parse(
                    "ADMIN_API_TIMEOUT_SECONDS",
                    var("ADMIN_API_TIMEOUT_SECONDS", "30"),
                    "number of seconds",
                )?,
                session_cookie: lookup("ADMIN_SESSION_COOKIE").filter(|v| !v.trim().is_empty()),
            },
            page: PageConfig {
                poster_movie_ids: parse_id_list("POSTER_MOVIE_IDS", &var("POSTER_MOVIE_IDS", ""))?,
            },
        })
    }
}

fn parse<T: FromStr>(name: &'static str, value: String, expected: &'static str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, expected, value })
}

fn parse_id_list(name: &'static str, value: &str) -> Result<Vec<MovieId>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse(name, part.to_string(), "comma-separated list of ids"))
        .collect()
}
