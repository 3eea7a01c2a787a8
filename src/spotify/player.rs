use reqwest::{Client, StatusCode};

use crate::{
    config, error,
    management::TokenManager,
    types::{CliError, CurrentlyPlayingResponse, Track},
};

/// Retrieves the currently playing track, if any.
///
/// The endpoint answers 204 No Content when nothing is playing (or the
/// playing item is not a track); both cases surface as `Ok(None)` and the
/// caller decides whether that is an error.
pub async fn get_currently_playing() -> Result<Option<Track>, CliError> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run splcli auth\n Error: {}",
                e
            );
        }
    };
    let token = token_mgr.get_valid_token().await;

    let api_url = format!(
        "{uri}/me/player/currently-playing",
        uri = &config::spotify_apiurl()
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    if response.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let playing = response.json::<CurrentlyPlayingResponse>().await?;
    Ok(playing.item)
}
