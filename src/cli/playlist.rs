use tabled::Table;

use crate::{
    error, info, management, spotify, success,
    types::{CliError, PlaylistTableRow, PlaylistTrackTableRow},
    utils,
};

/// Lists all playlists of the current user.
pub async fn playlists() {
    if let Err(e) = list_playlists().await {
        error!("{}", e);
    }
}

/// Lists the tracks of the named playlist.
pub async fn list(playlist_name: String) {
    if let Err(e) = list_playlist_tracks(&playlist_name).await {
        error!("{}", e);
    }
}

/// Creates a new public playlist.
pub async fn new(playlist_name: String) {
    if let Err(e) = create_playlist(&playlist_name).await {
        error!("{}", e);
    }
}

/// Deletes the named playlist by unfollowing it.
pub async fn del(playlist_name: String) {
    if let Err(e) = delete_playlist(&playlist_name).await {
        error!("{}", e);
    }
}

/// Removes every track from the named playlist.
pub async fn clear(playlist_name: String) {
    if let Err(e) = clear_playlist(&playlist_name).await {
        error!("{}", e);
    }
}

/// Adds the currently playing track to the named playlist.
pub async fn add_current(playlist_name: String) {
    if let Err(e) = add_current_track(&playlist_name).await {
        error!("{}", e);
    }
}

/// Adds a track by ID or URL to the named playlist.
pub async fn add_by_id(track_id: String, playlist_name: String) {
    if let Err(e) = add_track_by_id(&track_id, &playlist_name).await {
        error!("{}", e);
    }
}

/// Adds the most popular search hit for a track name to the named playlist.
pub async fn add_by_name(track_name: String, playlist_name: String) {
    if let Err(e) = add_track_by_name(&track_name, &playlist_name).await {
        error!("{}", e);
    }
}

/// Removes a track, matched by name, ID or URL, from the named playlist.
pub async fn remove(track_query: String, playlist_name: String) {
    if let Err(e) = remove_track(&track_query, &playlist_name).await {
        error!("{}", e);
    }
}

async fn list_playlists() -> Result<(), CliError> {
    let user = spotify::user::get_current_user().await?;
    info!("User: {}", user.label());

    let playlists = spotify::playlists::get_user_playlists().await?;

    let rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            id: p.id,
            name: p.name,
            owner: p.owner.display_name.unwrap_or_default(),
            public: p.public.unwrap_or(false),
            collaborative: p.collaborative,
            tracks: p.tracks.total,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
    Ok(())
}

async fn list_playlist_tracks(playlist_name: &str) -> Result<(), CliError> {
    let user = spotify::user::get_current_user().await?;
    info!("User: {}", user.label());

    let playlist = management::resolve_playlist(playlist_name).await?;

    let entries = spotify::playlists::get_playlist_tracks(&playlist.id).await?;

    let rows: Vec<PlaylistTrackTableRow> = entries
        .into_iter()
        .filter_map(|e| e.track)
        .map(|t| PlaylistTrackTableRow {
            id: t.id.clone(),
            name: t.name.clone(),
            album: t.album.name.clone(),
            artist: t.primary_artist().to_string(),
            popularity: t.popularity,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
    Ok(())
}

async fn create_playlist(playlist_name: &str) -> Result<(), CliError> {
    let user = spotify::user::get_current_user().await?;
    info!("User: {}", user.label());

    let playlist = spotify::playlists::create(&user.id, playlist_name).await?;
    success!("Created public playlist: {}", playlist.name);
    Ok(())
}

async fn delete_playlist(playlist_name: &str) -> Result<(), CliError> {
    let user = spotify::user::get_current_user().await?;
    info!("User: {}", user.label());

    let playlist = management::resolve_playlist(playlist_name).await?;

    // deletion is not exposed by the API; unfollowing only removes the
    // playlist from the user's library
    spotify::playlists::unfollow(&playlist.id).await?;
    success!("Deleted playlist \"{}\" (unfollowed).", playlist.name);
    Ok(())
}

async fn clear_playlist(playlist_name: &str) -> Result<(), CliError> {
    let user = spotify::user::get_current_user().await?;
    info!("User: {}", user.label());

    let playlist = management::resolve_playlist(playlist_name).await?;
    info!("Playlist: {}", playlist.name);

    let entries = spotify::playlists::get_playlist_tracks(&playlist.id).await?;
    if entries.is_empty() {
        info!("Playlist is already empty.");
        return Ok(());
    }

    // duplicates included; removal by URI drops every occurrence anyway
    let uris = utils::collect_track_uris(&entries);
    let count = uris.len();
    spotify::playlists::remove_tracks(&playlist.id, uris).await?;

    success!(
        "Removed {} track(s) from playlist \"{}\".",
        count,
        playlist.name
    );
    Ok(())
}

async fn add_current_track(playlist_name: &str) -> Result<(), CliError> {
    let user = spotify::user::get_current_user().await?;
    info!("User: {}", user.label());

    let playlist = management::resolve_playlist(playlist_name).await?;
    info!("Playlist: {}", playlist.name);

    let track = spotify::player::get_currently_playing()
        .await?
        .ok_or(CliError::NothingPlaying)?;
    info!("Track: {}", track.name);

    spotify::playlists::add_tracks(&playlist.id, vec![track.uri()]).await?;
    success!(
        "Added track \"{}\" to playlist \"{}\".",
        track.name,
        playlist.name
    );
    Ok(())
}

async fn add_track_by_id(track_id: &str, playlist_name: &str) -> Result<(), CliError> {
    let user = spotify::user::get_current_user().await?;
    info!("User: {}", user.label());

    let playlist = management::resolve_playlist(playlist_name).await?;
    info!("Playlist: {}", playlist.name);

    let parsed_track_id = utils::parse_track_id(track_id)?;

    // existence check before mutating
    let track = spotify::tracks::get_track(&parsed_track_id).await?;
    info!("Track: {}", track.name);

    spotify::playlists::add_tracks(&playlist.id, vec![track.uri()]).await?;
    success!(
        "Added track \"{}\" to playlist \"{}\".",
        track.name,
        playlist.name
    );
    Ok(())
}

async fn add_track_by_name(track_name: &str, playlist_name: &str) -> Result<(), CliError> {
    let user = spotify::user::get_current_user().await?;
    info!("User: {}", user.label());

    let playlist = management::resolve_playlist(playlist_name).await?;
    info!("Playlist: {}", playlist.name);

    let track = management::resolve_track_by_name(track_name).await?;
    info!("Track: {}", track.name);

    spotify::playlists::add_tracks(&playlist.id, vec![track.uri()]).await?;
    success!(
        "Added track \"{}\" to playlist \"{}\".",
        track.name,
        playlist.name
    );
    Ok(())
}

async fn remove_track(track_query: &str, playlist_name: &str) -> Result<(), CliError> {
    let user = spotify::user::get_current_user().await?;
    info!("User: {}", user.label());

    let playlist = management::resolve_playlist(playlist_name).await?;

    let track = management::find_track_in_playlist(&playlist, track_query).await?;
    info!("Track: {}", track.name);

    spotify::playlists::remove_tracks(&playlist.id, vec![track.uri()]).await?;
    success!(
        "Removed track \"{}\" from playlist \"{}\".",
        track.name,
        playlist.name
    );
    Ok(())
}
