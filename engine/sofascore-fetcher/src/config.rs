use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the Sofascore highlights fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Sofascore API configuration
    pub sofascore: SofascoreConfig,

    /// Output artifact configuration
    pub output: OutputConfig,

    /// Team-name fragments that mark a match as priority (lowercase)
    pub watchlist: Vec<String>,

    /// Extra trailing calendar days to cover (0 = current day only)
    pub lookback_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SofascoreConfig {
    /// Base URL for the scheduled-events endpoint
    pub events_base: String,

    /// Base URL for the per-event highlights endpoint
    pub highlights_base: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where the highlights artifact is written, relative to the working directory
    pub path: PathBuf,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            sofascore: SofascoreConfig {
                events_base: "https://www.sofascore.com/api/v1".to_string(),
                highlights_base: "https://api.sofascore.com/api/v1".to_string(),
                request_timeout_secs: 30,
            },
            output: OutputConfig { path: PathBuf::from("api/highlights.json") },
            watchlist: [
                "al-nassr",
                "inter miami cf",
                "fc-bayern-munchen",
                "dortmund",
                "leverkusen",
                "paris-saint-germain",
                "juventus",
                "atletico-madrid",
                "barcelona",
                "real madrid",
                "arsenal",
                "chelsea",
                "manchester city",
                "manchester united",
                "liverpool",
                "portugal",
                "argentina",
                "brazil",
                "spain",
                "england",
                "france",
                "inter",
                "milan",
                "roma",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            lookback_days: 0,
        }
    }
}

impl FetcherConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        // Override with environment variables if present
        if let Ok(base) = std::env::var("SOFASCORE_EVENTS_BASE") {
            config.sofascore.events_base = base;
        }

        if let Ok(base) = std::env::var("SOFASCORE_HIGHLIGHTS_BASE") {
            config.sofascore.highlights_base = base;
        }

        if let Ok(path) = std::env::var("HIGHLIGHTS_OUTPUT_PATH") {
            config.output.path = PathBuf::from(path);
        }

        if let Ok(days) = std::env::var("HIGHLIGHTS_LOOKBACK_DAYS") {
            config.lookback_days = days.parse().unwrap_or(0);
        }

        Ok(config)
    }
}
