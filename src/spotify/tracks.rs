use reqwest::Client;

use crate::{
    config, error,
    management::TokenManager,
    types::{CliError, SearchResponse, Track},
};

/// Retrieves a single track by its Spotify ID.
///
/// Also serves as the existence check for user-supplied IDs: an unknown ID
/// comes back as a non-success status and propagates as a remote-call
/// failure.
pub async fn get_track(track_id: &str) -> Result<Track, CliError> {
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
        "{uri}/tracks/{id}",
        uri = &config::spotify_apiurl(),
        id = track_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<Track>().await?)
}

/// Searches tracks by free-text query.
///
/// Returns the candidate list in the ordering the API produced it; the
/// selection (most popular wins) happens in the caller.
pub async fn search_tracks(query: &str) -> Result<Vec<Track>, CliError> {
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

    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("type", "track"), ("q", query)])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let results = response.json::<SearchResponse>().await?;
    Ok(results.tracks.map(|t| t.items).unwrap_or_default())
}
