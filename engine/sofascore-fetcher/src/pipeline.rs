use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use tracing::{info, warn};

use crate::config::FetcherConfig;
use crate::fetcher::SofascoreFetcher;
use crate::models::{Event, Highlight, HighlightRecord};
use crate::output;
use crate::record_id;
use crate::video;

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Finished matches seen across all covered days
    pub finished_matches: usize,

    /// Records written to the artifact
    pub written: usize,

    /// Records in the priority group
    pub priority: usize,
}

/// Keep only matches played to completion, preserving their relative order
pub fn filter_finished(events: Vec<Event>) -> Vec<Event> {
    events.into_iter().filter(Event::is_finished).collect()
}

/// Whether either raw team name contains a watchlist fragment
pub fn is_watchlisted(home: &str, away: &str, watchlist: &[String]) -> bool {
    let home = home.to_lowercase();
    let away = away.to_lowercase();
    watchlist.iter().any(|team| home.contains(team.as_str()) || away.contains(team.as_str()))
}

/// Normalize a team name for display: hyphens become spaces, a standalone
/// `FC` token is dropped, ends are trimmed
pub fn clean_team_name(name: &str) -> String {
    let re = Regex::new(r"(?i)\bFC\b").unwrap();
    let spaced = name.replace('-', " ");
    re.replace_all(&spaced, "").trim().to_string()
}

/// Pick the canonical watch URL from the highlight candidates.
///
/// Candidates are scanned in their given order; the first footage candidate
/// whose URL yields a video identifier wins. Footage candidates without an
/// extractable identifier are skipped.
pub fn resolve_watch_link(highlights: &[Highlight]) -> Option<String> {
    for candidate in highlights {
        if !candidate.is_footage() {
            continue;
        }

        if let Some(url) = candidate.media_url() {
            if let Some(id) = video::extract_video_id(url) {
                return Some(video::watch_url(&id));
            }
        }
    }

    None
}

/// Concatenate the two groups, priority first, discovery order within each
pub fn merge_by_priority(
    priority: Vec<HighlightRecord>,
    standard: Vec<HighlightRecord>,
) -> Vec<HighlightRecord> {
    let mut merged = priority;
    merged.extend(standard);
    merged
}

/// Calendar days covered by this run, oldest first
fn run_dates(lookback_days: u32) -> Vec<NaiveDate> {
    let today = Utc::now().date_naive();
    (0..=i64::from(lookback_days)).rev().map(|back| today - Duration::days(back)).collect()
}

/// Run the full extraction pass: fetch, filter, resolve, classify, write.
///
/// A scheduled-events failure aborts the run; a per-match highlights failure
/// only drops that match.
pub async fn run(fetcher: &SofascoreFetcher, config: &FetcherConfig) -> Result<RunSummary> {
    let mut rng = StdRng::from_entropy();
    let mut priority = Vec::new();
    let mut standard = Vec::new();
    let mut finished_matches = 0;

    for date in run_dates(config.lookback_days) {
        let day = date.format("%Y-%m-%d").to_string();
        let events = fetcher.fetch_scheduled_events(date).await?;
        let finished = filter_finished(events);

        info!("Found {} finished matches for {}", finished.len(), day);
        finished_matches += finished.len();

        for event in finished {
            let flagged = is_watchlisted(
                &event.home_team.name,
                &event.away_team.name,
                &config.watchlist,
            );

            let highlights = match fetcher.fetch_event_highlights(event.id).await {
                Ok(highlights) => highlights,
                Err(e) => {
                    warn!("Failed to fetch highlights for event {}: {:#}", event.id, e);
                    continue;
                }
            };

            let link = match resolve_watch_link(&highlights) {
                Some(link) => link,
                None => continue,
            };

            let record = HighlightRecord {
                id: record_id::generate(&mut rng),
                team1: clean_team_name(&event.home_team.name),
                team2: clean_team_name(&event.away_team.name),
                category: event.tournament.name.clone(),
                date: day.clone(),
                link,
                is_priority: flagged,
            };

            if flagged {
                priority.push(record);
            } else {
                standard.push(record);
            }
        }
    }

    let priority_count = priority.len();
    let records = merge_by_priority(priority, standard);
    output::write_highlights(&config.output.path, &records)?;

    info!(
        "Wrote {} highlight records to {} ({} priority)",
        records.len(),
        config.output.path.display(),
        priority_count
    );

    Ok(RunSummary { finished_matches, written: records.len(), priority: priority_count })
}
