use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};
use url::Url;

use crate::types::{CliError, Playlist, PlaylistTrackEntry, Track};

/// Marker substring identifying a Spotify web URL.
pub const SPOTIFY_URL_MARKER: &str = "spotify.com";

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Extracts a track ID from either a Spotify URL or a plain ID string.
///
/// Inputs containing `spotify.com` are parsed as URLs and must carry a
/// `/track/<id>` path; anything else is returned unchanged. ID syntax is
/// not validated here, the remote lookup decides whether it exists.
pub fn parse_track_id(input: &str) -> Result<String, CliError> {
    if !input.contains(SPOTIFY_URL_MARKER) {
        return Ok(input.to_string());
    }

    let parsed = Url::parse(input).map_err(CliError::InvalidUrl)?;
    let parts: Vec<&str> = parsed.path().trim_matches('/').split('/').collect();
    if parts.len() >= 2 && parts[0] == "track" {
        return Ok(parts[1].to_string());
    }

    Err(CliError::UnrecognizedUrlShape(input.to_string()))
}

pub fn is_base62(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Heuristic: a purely alphanumeric track name is indistinguishable from an
/// ID and will be treated as one.
pub fn looks_like_id_or_url(input: &str) -> bool {
    input.contains(SPOTIFY_URL_MARKER) || is_base62(input)
}

/// First playlist whose name byte-equals `name`, in listing order.
pub fn pick_playlist_by_name(playlists: &[Playlist], name: &str) -> Option<Playlist> {
    playlists.iter().find(|p| p.name == name).cloned()
}

/// Full stable sort descending by popularity, take index 0; ties keep the
/// ordering the search returned them in.
pub fn pick_most_popular_track(mut tracks: Vec<Track>) -> Option<Track> {
    tracks.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    tracks.into_iter().next()
}

/// Scans playlist entries in listing order for the first match against
/// `query`, by parsed ID when the query classifies as an ID/URL, by exact
/// name otherwise. A malformed URL falls through to name matching.
pub fn match_playlist_entry(entries: &[PlaylistTrackEntry], query: &str) -> Option<Track> {
    let parsed = parse_track_id(query)
        .ok()
        .filter(|_| looks_like_id_or_url(query));

    let mut tracks = entries.iter().filter_map(|e| e.track.as_ref());
    match parsed {
        Some(id) => tracks.find(|t| t.id == id).cloned(),
        None => tracks.find(|t| t.name == query).cloned(),
    }
}

/// All track URIs currently in a playlist, duplicates included.
pub fn collect_track_uris(entries: &[PlaylistTrackEntry]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|e| e.track.as_ref())
        .map(|t| t.uri())
        .collect()
}

/// Formats a millisecond duration truncated to whole seconds, e.g. `4m33s`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
