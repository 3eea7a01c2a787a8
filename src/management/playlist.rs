use crate::{
    spotify,
    types::{CliError, Playlist, Track},
    utils,
};

/// Resolves a human-readable playlist name against the current user's
/// playlist collection.
///
/// Fetches the full (paginated) collection and returns the first playlist
/// whose name exactly equals `name`, in listing order. If two playlists
/// share a name, whichever the listing API yields first wins; that is a
/// known ambiguity of name-based lookup, not an error.
pub async fn resolve_playlist(name: &str) -> Result<Playlist, CliError> {
    let playlists = spotify::playlists::get_user_playlists().await?;
    utils::pick_playlist_by_name(&playlists, name)
        .ok_or_else(|| CliError::PlaylistNotFound(name.to_string()))
}

/// Locates a track inside a playlist's current contents by free-form query.
///
/// The query is parsed best-effort as an ID/URL and classified: ID-shaped
/// queries match on track ID, everything else matches on exact display
/// name. First match in listing order wins.
pub async fn find_track_in_playlist(playlist: &Playlist, query: &str) -> Result<Track, CliError> {
    let entries = spotify::playlists::get_playlist_tracks(&playlist.id).await?;
    utils::match_playlist_entry(&entries, query).ok_or_else(|| CliError::TrackNotFoundInPlaylist {
        query: query.to_string(),
        playlist: playlist.name.clone(),
    })
}
