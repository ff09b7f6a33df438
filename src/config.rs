//! Startup configuration for the bot.
//!
//! Everything the bot needs from its environment is read exactly once into a
//! [`Config`] and handed to the constructors that need it.

use std::env;
use std::time::Duration;

use humantime_serde::re::humantime;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Default OMDb endpoint. OMDb serves every query from the root path.
pub const DEFAULT_OMDB_BASE_URL: &str = "http://www.omdbapi.com/";
/// Prefix used for text commands, e.g. `mooname Inception`.
pub const DEFAULT_COMMAND_PREFIX: &str = "moo";
/// The maximum character length allowed for a single Discord message.
pub const DEFAULT_MESSAGE_LIMIT: usize = 2000;
/// How long to wait for OMDb before giving up on a request.
pub const DEFAULT_OMDB_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while reading the configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required key was not set.
    #[error("Missing required configuration value {0}")]
    Missing(&'static str),

    /// A key was set to something we can't use.
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Guild to register commands in. Commands are registered globally when unset.
    pub guild_id: Option<u64>,
    pub command_prefix: String,
    pub omdb_api_key: String,
    pub omdb_base_url: Url,
    pub omdb_timeout: Duration,
    /// Per-message character cap of the chat platform.
    pub message_limit: usize,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenv().ok()` beforehand if values should also come from a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let discord_token = require("DISCORD_TOKEN")?;
        let omdb_api_key = require("OMDB_API_KEY")?;

        let guild_id = get("DISCORD_GUILD")
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    key: "DISCORD_GUILD",
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let command_prefix = get("COMMAND_PREFIX").unwrap_or_else(|| {
            debug!("COMMAND_PREFIX not set, using '{}'", DEFAULT_COMMAND_PREFIX);
            DEFAULT_COMMAND_PREFIX.to_string()
        });

        let raw_url = get("OMDB_BASE_URL").unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.to_string());
        let omdb_base_url = Url::parse(&raw_url).map_err(|e| ConfigError::Invalid {
            key: "OMDB_BASE_URL",
            reason: format!("'{}': {}", raw_url, e),
        })?;

        let omdb_timeout = match get("OMDB_TIMEOUT") {
            Some(raw) => humantime::parse_duration(&raw).map_err(|e| ConfigError::Invalid {
                key: "OMDB_TIMEOUT",
                reason: format!("'{}': {}", raw, e),
            })?,
            None => DEFAULT_OMDB_TIMEOUT,
        };

        let message_limit = match get("MESSAGE_LIMIT") {
            Some(raw) => parse_limit(&raw)?,
            None => DEFAULT_MESSAGE_LIMIT,
        };
        if message_limit > DEFAULT_MESSAGE_LIMIT {
            warn!(
                "MESSAGE_LIMIT {} is above Discord's {} character cap; long replies may be rejected",
                message_limit, DEFAULT_MESSAGE_LIMIT
            );
        }

        Ok(Self {
            discord_token,
            guild_id,
            command_prefix,
            omdb_api_key,
            omdb_base_url,
            omdb_timeout,
            message_limit,
        })
    }
}

fn parse_limit(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: "MESSAGE_LIMIT",
        reason,
    };

    match raw.parse::<usize>() {
        Ok(0) => Err(invalid("must be greater than zero".to_string())),
        Ok(limit) => Ok(limit),
        Err(e) => Err(invalid(format!("'{}': {}", raw, e))),
    }
}
