//! Sofascore Highlights Fetcher
//!
//! This service fetches the day's finished football matches from the Sofascore API,
//! resolves a YouTube highlight link for each one, and writes the ranked result set
//! to `api/highlights.json` for the static site to consume.

pub mod config;
pub mod fetcher;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod record_id;
pub mod video;

pub use config::FetcherConfig;
pub use fetcher::SofascoreFetcher;
pub use models::HighlightRecord;
pub use pipeline::RunSummary;
