use tabled::Table;

use crate::{
    error, info, spotify,
    types::{CliError, Track, TrackTableRow},
    utils,
};

/// Displays the currently playing track.
pub async fn now() {
    if let Err(e) = show_current_track().await {
        error!("{}", e);
    }
}

/// Displays a track looked up by ID or Spotify URL.
pub async fn show(track_id: String) {
    if let Err(e) = show_track_by_id(&track_id).await {
        error!("{}", e);
    }
}

async fn show_current_track() -> Result<(), CliError> {
    let user = spotify::user::get_current_user().await?;
    info!("User: {}", user.label());

    let track = spotify::player::get_currently_playing()
        .await?
        .ok_or(CliError::NothingPlaying)?;

    display_track(&track);
    Ok(())
}

async fn show_track_by_id(track_id: &str) -> Result<(), CliError> {
    let user = spotify::user::get_current_user().await?;
    info!("User: {}", user.label());

    let parsed_track_id = utils::parse_track_id(track_id)?;
    let track = spotify::tracks::get_track(&parsed_track_id).await?;

    display_track(&track);
    Ok(())
}

fn display_track(track: &Track) {
    let row = TrackTableRow {
        id: track.id.clone(),
        name: track.name.clone(),
        album: track.album.name.clone(),
        artist: track.primary_artist().to_string(),
        duration: utils::format_duration(track.duration_ms),
        popularity: track.popularity,
        explicit: track.explicit,
        preview: track.preview_url.clone().unwrap_or_default(),
    };

    let table = Table::new(vec![row]);
    println!("{}", table);
}
