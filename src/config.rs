use std::env;
use std::time::Duration;

use anyhow::Result;

/// Default seconds to wait between raiders in a batch. The data API
/// penalizes burst traffic, so we pace conservatively by default.
pub const DEFAULT_RATE_LIMIT_DELAY_SECS: u64 = 60;

/// Default number of timeline entries the verification flow requests.
pub const DEFAULT_TIMELINE_DEPTH: usize = 50;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Base URL of the social-platform data API.
    pub api_url: String,
    /// API key sent with every request (empty if the gateway doesn't need one).
    pub api_key: String,
    /// Fixed pause between raiders in a batch.
    pub rate_limit_delay: Duration,
    /// How many recent timeline entries to scan per raider.
    pub timeline_depth: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything except the API URL has a default — the URL is required
    /// for any operation that actually talks to the platform.
    pub fn load() -> Result<Self> {
        let rate_limit_delay = env::var("RAID_RATE_LIMIT_DELAY")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_RATE_LIMIT_DELAY_SECS));

        let timeline_depth = env::var("RAID_TIMELINE_DEPTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMELINE_DEPTH);

        Ok(Self {
            api_url: env::var("DATA_API_URL").unwrap_or_default(),
            api_key: env::var("DATA_API_KEY").unwrap_or_default(),
            rate_limit_delay,
            timeline_depth,
        })
    }

    /// Check that the data API endpoint is configured.
    /// Call this before any operation that needs the platform API.
    pub fn require_api(&self) -> Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!(
                "DATA_API_URL not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
