use crate::{
    spotify,
    types::{CliError, Track},
    utils,
};

/// Resolves a free-text track name to a single track via remote search.
///
/// Selects the most popular candidate; ties keep the ordering the search
/// returned them in.
pub async fn resolve_track_by_name(name: &str) -> Result<Track, CliError> {
    let tracks = spotify::tracks::search_tracks(name).await?;
    utils::pick_most_popular_track(tracks).ok_or_else(|| CliError::TrackNotFound(name.to_string()))
}
