use regex::Regex;

/// Extract an 11-character video identifier from a highlight URL.
///
/// The identifier must directly follow one of `v=`, `/`, `vi/` or `embed/`;
/// the leftmost occurrence in the URL wins.
pub fn extract_video_id(url: &str) -> Option<String> {
    let re = Regex::new(r"(?:v=|/|vi/|embed/)([A-Za-z0-9_-]{11})").unwrap();
    re.captures(url).map(|caps| caps[1].to_string())
}

/// Canonical watch-page URL for a video identifier
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}
