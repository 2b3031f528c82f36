use sofascore_fetcher::{pipeline, FetcherConfig, SofascoreFetcher};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting Sofascore highlights fetcher");

    // Load configuration
    let config = FetcherConfig::from_env()?;
    let fetcher = SofascoreFetcher::new(&config)?;

    match pipeline::run(&fetcher, &config).await {
        Ok(summary) => {
            info!(
                "Run complete: {} finished matches checked, {} records written ({} priority)",
                summary.finished_matches, summary.written, summary.priority
            );
            Ok(())
        }
        Err(e) => {
            error!("Highlights run failed: {:#}", e);
            Err(e)
        }
    }
}
