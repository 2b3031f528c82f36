use chrono::Utc;
use sofascore_fetcher::{pipeline, FetcherConfig, SofascoreFetcher};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Checking Sofascore scheduled events");

    // Load configuration
    let config = FetcherConfig::from_env()?;
    let fetcher = SofascoreFetcher::new(&config)?;

    let today = Utc::now().date_naive();
    let events = match fetcher.fetch_scheduled_events(today).await {
        Ok(events) => events,
        Err(e) => {
            error!("Failed to fetch scheduled events: {:#}", e);
            return Err(e);
        }
    };

    let finished = pipeline::filter_finished(events);
    info!("{} finished matches for {}", finished.len(), today);

    for (i, event) in finished.iter().take(5).enumerate() {
        info!(
            "  {}. {} vs {} ({})",
            i + 1,
            event.home_team.name,
            event.away_team.name,
            event.tournament.name
        );
    }

    // Probe highlights for the first finished match
    if let Some(event) = finished.first() {
        match fetcher.fetch_event_highlights(event.id).await {
            Ok(highlights) => {
                info!("Event {} has {} highlight candidates", event.id, highlights.len());
                match pipeline::resolve_watch_link(&highlights) {
                    Some(link) => info!("Resolved watch link: {}", link),
                    None => info!("No usable highlight for event {}", event.id),
                }
            }
            Err(e) => error!("Failed to fetch highlights for event {}: {:#}", event.id, e),
        }
    }

    info!("Check completed");
    Ok(())
}
