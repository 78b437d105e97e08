//! Process configuration read from the environment
//!
//! `main` loads `.env` with `dotenvy` first, then calls [`AppConfig::from_env`].

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

use crate::airline_db::AirlineDbConfig;
use crate::llm::{GenerationConfig, ToolChoice};
use crate::llm::openai::DEFAULT_BASE_URL;
use crate::weather::DEFAULT_WEATHER_URL;

pub const DEFAULT_SQL_PORT: u16 = 5432;
pub const DEFAULT_POOL_SIZE: usize = 16;
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Everything the server needs at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: AirlineDbConfig,
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub openai_base_url: String,
    pub generation: GenerationConfig,
    pub weather_api_key: SecretString,
    pub weather_base_url: String,
    pub vector_store_id: String,
    pub bind_address: SocketAddr,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let secret = |key: &'static str| required(key).map(SecretString::from);

        let port = parse_optional::<u16>("SQL_PORT", get("SQL_PORT"))?.unwrap_or(DEFAULT_SQL_PORT);

        let max_pool_size = match get("SQL_POOL_SIZE") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: "SQL_POOL_SIZE",
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "SQL_POOL_SIZE",
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_POOL_SIZE,
        };

        let database = AirlineDbConfig {
            host: required("SQL_SERVER")?,
            port,
            database: required("SQL_DATABASE")?,
            user: required("SQL_USERNAME")?,
            password: secret("SQL_PASSWORD")?,
            max_pool_size,
        };

        let bind_address = get("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDRESS",
                reason: e.to_string(),
            })?;

        let mut generation = GenerationConfig::new().with_tool_choice(ToolChoice::Auto);
        let key = "OPENAI_MAX_OUTPUT_TOKENS";
        if let Some(max) = parse_optional::<u32>(key, get(key))? {
            generation = generation.with_max_output_tokens(max);
        }
        let key = "OPENAI_TEMPERATURE";
        if let Some(temperature) = parse_optional::<f32>(key, get(key))? {
            generation = generation.with_temperature(temperature);
        }
        let key = "OPENAI_TOP_P";
        if let Some(top_p) = parse_optional::<f32>(key, get(key))? {
            generation = generation.with_top_p(top_p);
        }

        let log_format = match get("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT",
                    reason: format!("expected `pretty` or `json`, got `{}`", other),
                })
            }
        };

        Ok(Self {
            database,
            openai_api_key: secret("OPENAI_API_KEY")?,
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            generation,
            weather_api_key: secret("WEATHER_API_KEY")?,
            weather_base_url: get("WEATHER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string()),
            vector_store_id: required("VECTOR_DB_ID")?,
            bind_address,
            log_format,
        })
    }
}

fn parse_optional<T>(key: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .map(|value| {
            value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            })
        })
        .transpose()
}
