//! Common test utilities, fixtures, and mocks
//! This module contains shared functionality used across the integration tests

#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

use std::sync::Once;
use std::time::Duration;

use moobot::config::Config;
use tracing::Level;
use url::Url;

static INIT: Once = Once::new();

/// Initialize tracing for tests
pub fn init() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .init();
    });
}

/// Configuration pointing the OMDb client at `base_url`
pub fn test_config(base_url: &str) -> Config {
    Config {
        discord_token: "test-token".to_string(),
        guild_id: None,
        command_prefix: "moo".to_string(),
        omdb_api_key: fixtures::API_KEY.to_string(),
        omdb_base_url: Url::parse(&format!("{}/", base_url)).expect("mock server uri is a url"),
        omdb_timeout: Duration::from_secs(5),
        message_limit: 2000,
    }
}
