use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use crate::config::FetcherConfig;
use crate::models::{Event, Highlight, HighlightsResponse, ScheduledEventsResponse};

/// Sofascore API client
pub struct SofascoreFetcher {
    client: Client,
    events_base: String,
    highlights_base: String,
}

impl SofascoreFetcher {
    /// Create a new fetcher instance
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.sofascore.request_timeout_secs))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            events_base: config.sofascore.events_base.clone(),
            highlights_base: config.sofascore.highlights_base.clone(),
        })
    }

    /// Fetch all football events scheduled for a date
    pub async fn fetch_scheduled_events(&self, date: NaiveDate) -> Result<Vec<Event>> {
        let url = format!(
            "{}/sport/football/scheduled-events/{}",
            self.events_base,
            date.format("%Y-%m-%d")
        );

        info!("Fetching scheduled events from: {}", url);

        let response =
            self.client.get(&url).send().await.context("Failed to fetch scheduled events")?;

        if !response.status().is_success() {
            anyhow::bail!("API request failed with status: {}", response.status());
        }

        let parsed: ScheduledEventsResponse =
            response.json().await.context("Failed to parse scheduled events JSON")?;

        info!("Fetched {} events for {}", parsed.events.len(), date);
        Ok(parsed.events)
    }

    /// Fetch the highlight candidates for a single event
    pub async fn fetch_event_highlights(&self, event_id: i64) -> Result<Vec<Highlight>> {
        let url = format!("{}/event/{}/highlights", self.highlights_base, event_id);

        let response =
            self.client.get(&url).send().await.context("Failed to fetch event highlights")?;

        if !response.status().is_success() {
            anyhow::bail!("API request failed with status: {}", response.status());
        }

        let parsed: HighlightsResponse =
            response.json().await.context("Failed to parse event highlights JSON")?;

        Ok(parsed.highlights)
    }
}
