use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{TimeRange, Track};

pub const CODE_VERIFIER_LENGTH: usize = 128;
pub const MIN_TRACK_LIMIT: u32 = 1;
pub const MAX_TRACK_LIMIT: u32 = 50;
pub const DEFAULT_TRACK_LIMIT: u32 = 25;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_VERIFIER_LENGTH)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// clap value parser for `--time-range`.
pub fn parse_time_range(s: &str) -> Result<TimeRange, String> {
    s.parse()
}

/// clap value parser for `--limit`, bounded to what the top items endpoint accepts.
pub fn parse_track_limit(s: &str) -> Result<u32, String> {
    let limit: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid limit '{}'. Expected a number", s))?;
    check_track_limit(limit)
}

pub fn check_track_limit(limit: u32) -> Result<u32, String> {
    if (MIN_TRACK_LIMIT..=MAX_TRACK_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(format!(
            "Invalid limit {}. Expected a value between {} and {}",
            limit, MIN_TRACK_LIMIT, MAX_TRACK_LIMIT
        ))
    }
}

/// "`<name>` by `<artist>, <artist>`"
pub fn describe_track(track: &Track) -> String {
    let artists = track
        .artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} by {}", track.name, artists)
}

pub fn track_uris(tracks: &[Track]) -> Vec<String> {
    tracks.iter().map(|track| track.uri.clone()).collect()
}

/// Shortens a secret to its first few characters for diagnostic output.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(6).collect();
    if visible.len() < secret.len() {
        format!("{}…", visible)
    } else {
        "…".to_string()
    }
}

/// Escapes text for use inside HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
