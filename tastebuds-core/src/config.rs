//! Centralized configuration for Tastebuds.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

/// Central configuration for all Tastebuds components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct TastebudsConfig {
    pub share: ShareConfig,
    pub store: StoreConfig,
}

/// Share link and preview presentation configuration.
#[derive(Debug, Clone)]
pub struct ShareConfig {
    /// Base URL for canonical share links
    pub base_url: String,
    /// Cover images collected for social preview metadata
    pub social_image_limit: usize,
    /// Cover images collected for in-page preview tiles
    pub tile_image_limit: usize,
    /// Immediate forks shown in the lineage panel
    pub fork_display_limit: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "https://tastebuds.example".to_string(),
            social_image_limit: 4,
            tile_image_limit: 3,
            fork_display_limit: 4,
        }
    }
}

/// Upstream menu store and availability service configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// HTTP endpoint of the menu store service
    pub endpoint: String,
    /// Request timeout for store and availability calls
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8600".to_string(),
            request_timeout: Duration::from_secs(10),
            user_agent: "tastebuds/0.1.0",
        }
    }
}

impl TastebudsConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("TASTEBUDS_SHARE_BASE_URL") {
            config.share.base_url = base_url;
        }

        if let Ok(limit) = std::env::var("TASTEBUDS_FORK_DISPLAY_LIMIT") {
            if let Ok(count) = limit.parse::<usize>() {
                config.share.fork_display_limit = count;
            }
        }

        if let Ok(endpoint) = std::env::var("TASTEBUDS_STORE_ENDPOINT") {
            config.store.endpoint = endpoint;
        }

        if let Ok(timeout) = std::env::var("TASTEBUDS_STORE_TIMEOUT") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.store.request_timeout = Duration::from_secs(seconds);
            }
        }

        config
    }

    /// Creates a configuration suitable for tests: localhost share links and
    /// a short store timeout.
    pub fn for_testing() -> Self {
        Self {
            share: ShareConfig {
                base_url: "http://localhost:3000".to_string(),
                ..ShareConfig::default()
            },
            store: StoreConfig {
                request_timeout: Duration::from_secs(1),
                ..StoreConfig::default()
            },
        }
    }
}
