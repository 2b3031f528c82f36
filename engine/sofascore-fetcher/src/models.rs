use serde::{Deserialize, Serialize};

/// Scheduled-events API payload
#[derive(Debug, Deserialize)]
pub struct ScheduledEventsResponse {
    /// Missing `events` means "no events today", not a malformed payload
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A scheduled football match
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Event {
    pub id: i64,

    #[serde(rename = "homeTeam")]
    pub home_team: Team,

    #[serde(rename = "awayTeam")]
    pub away_team: Team,

    pub tournament: Tournament,

    pub status: EventStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Team {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Tournament {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EventStatus {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Event {
    /// Whether the match has been played to completion
    pub fn is_finished(&self) -> bool {
        let status = self.status.kind.to_lowercase();
        status == "finished" || status == "ended"
    }
}

/// Per-event highlights API payload
#[derive(Debug, Deserialize)]
pub struct HighlightsResponse {
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

/// A single highlight media candidate
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Highlight {
    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, rename = "sourceUrl")]
    pub source_url: Option<String>,
}

impl Highlight {
    /// Whether the subtitle marks this candidate as match footage
    pub fn is_footage(&self) -> bool {
        match &self.subtitle {
            Some(subtitle) => {
                let subtitle = subtitle.to_lowercase();
                subtitle.contains("highlights") || subtitle.contains("extended")
            }
            None => false,
        }
    }

    /// The candidate's media URL: `url` falling back to `sourceUrl`, empty strings
    /// treated as absent
    pub fn media_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| self.source_url.as_deref().filter(|url| !url.is_empty()))
    }
}

/// One entry of the output artifact
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HighlightRecord {
    /// Generated identifier, four lowercase letters then six digits
    pub id: String,

    /// Cleaned home team name
    pub team1: String,

    /// Cleaned away team name
    pub team2: String,

    /// Tournament name
    pub category: String,

    /// ISO day the match was fetched for (YYYY-MM-DD)
    pub date: String,

    /// Canonical YouTube watch URL
    pub link: String,

    #[serde(rename = "isPriority")]
    pub is_priority: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scheduled_events_payload() {
        let payload = r#"{
            "events": [
                {
                    "id": 12994079,
                    "homeTeam": { "name": "Arsenal" },
                    "awayTeam": { "name": "Chelsea FC" },
                    "tournament": { "name": "Premier League" },
                    "status": { "type": "finished" }
                },
                {
                    "id": 12994080,
                    "homeTeam": { "name": "Getafe" },
                    "awayTeam": { "name": "Osasuna" },
                    "tournament": { "name": "LaLiga" },
                    "status": { "type": "notstarted" }
                }
            ]
        }"#;

        let parsed: ScheduledEventsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.events.len(), 2);
        assert_eq!(parsed.events[0].id, 12994079);
        assert_eq!(parsed.events[0].home_team.name, "Arsenal");
        assert_eq!(parsed.events[0].tournament.name, "Premier League");
        assert!(parsed.events[0].is_finished());
        assert!(!parsed.events[1].is_finished());
    }

    #[test]
    fn missing_events_field_means_no_events() {
        let parsed: ScheduledEventsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.events.is_empty());
    }

    #[test]
    fn ended_status_counts_as_finished() {
        let payload = r#"{
            "id": 1,
            "homeTeam": { "name": "Portugal" },
            "awayTeam": { "name": "France" },
            "tournament": { "name": "Euro" },
            "status": { "type": "Ended" }
        }"#;

        let event: Event = serde_json::from_str(payload).unwrap();
        assert!(event.is_finished());
    }

    #[test]
    fn parses_highlights_with_optional_fields() {
        let payload = r#"{
            "highlights": [
                { "subtitle": "Extended Highlights", "sourceUrl": "https://youtu.be/abc" },
                { "url": "https://example.com/clip" }
            ]
        }"#;

        let parsed: HighlightsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.highlights.len(), 2);
        assert!(parsed.highlights[0].is_footage());
        assert_eq!(parsed.highlights[0].media_url(), Some("https://youtu.be/abc"));
        assert!(!parsed.highlights[1].is_footage());
    }

    #[test]
    fn empty_url_falls_back_to_source_url() {
        let highlight = Highlight {
            subtitle: Some("Highlights".to_string()),
            url: Some(String::new()),
            source_url: Some("https://youtu.be/xyz".to_string()),
        };

        assert_eq!(highlight.media_url(), Some("https://youtu.be/xyz"));
    }

    #[test]
    fn record_serializes_priority_flag_in_camel_case() {
        let record = HighlightRecord {
            id: "abcd123456".to_string(),
            team1: "Arsenal".to_string(),
            team2: "Chelsea".to_string(),
            category: "Premier League".to_string(),
            date: "2025-11-02".to_string(),
            link: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            is_priority: true,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["isPriority"], serde_json::Value::Bool(true));
        assert!(value.get("is_priority").is_none());
    }
}
