use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{
    config, error,
    management::TokenManager,
    types::{
        AddTracksRequest, CliError, CreatePlaylistRequest, CreatePlaylistResponse, Playlist,
        PlaylistPage, PlaylistTrackEntry, PlaylistTrackPage, RemoveTrackRef, RemoveTracksRequest,
        SnapshotResponse,
    },
};

async fn load_token_manager() -> TokenManager {
    match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run splcli auth\n Error: {}",
                e
            );
        }
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Retrieves the current user's full playlist collection.
///
/// Follows `next` page links until the listing is exhausted, preserving the
/// listing order the API yields. Name-based resolution relies on that order
/// being stable within one invocation.
pub async fn get_user_playlists() -> Result<Vec<Playlist>, CliError> {
    let mut token_mgr = load_token_manager().await;

    let pb = spinner("Fetching playlists...");

    let mut playlists: Vec<Playlist> = Vec::new();
    let mut api_url = format!("{uri}/me/playlists?limit=50", uri = &config::spotify_apiurl());

    loop {
        let token = token_mgr.get_valid_token().await;
        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    pb.finish_and_clear();
                    return Err(CliError::RemoteCallFailed(err));
                }
            },
            Err(err) => {
                pb.finish_and_clear();
                return Err(CliError::RemoteCallFailed(err));
            } // network or reqwest error
        };

        let page = match response.json::<PlaylistPage>().await {
            Ok(page) => page,
            Err(err) => {
                pb.finish_and_clear();
                return Err(CliError::RemoteCallFailed(err));
            }
        };

        playlists.extend(page.items);
        pb.set_message(format!("Fetched {} playlists...", playlists.len()));

        match page.next {
            Some(next) => api_url = next,
            None => break,
        }
    }

    pb.finish_and_clear();
    Ok(playlists)
}

/// Retrieves a playlist's full track listing.
///
/// Follows `next` page links; entries come back in playlist order, which is
/// the scan order for removal matching.
pub async fn get_playlist_tracks(playlist_id: &str) -> Result<Vec<PlaylistTrackEntry>, CliError> {
    let mut token_mgr = load_token_manager().await;

    let pb = spinner("Fetching playlist tracks...");

    let mut entries: Vec<PlaylistTrackEntry> = Vec::new();
    let mut api_url = format!(
        "{uri}/playlists/{id}/tracks?limit=100",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    loop {
        let token = token_mgr.get_valid_token().await;
        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    pb.finish_and_clear();
                    return Err(CliError::RemoteCallFailed(err));
                }
            },
            Err(err) => {
                pb.finish_and_clear();
                return Err(CliError::RemoteCallFailed(err));
            } // network or reqwest error
        };

        let page = match response.json::<PlaylistTrackPage>().await {
            Ok(page) => page,
            Err(err) => {
                pb.finish_and_clear();
                return Err(CliError::RemoteCallFailed(err));
            }
        };

        entries.extend(page.items);
        pb.set_message(format!("Fetched {} tracks...", entries.len()));

        match page.next {
            Some(next) => api_url = next,
            None => break,
        }
    }

    pb.finish_and_clear();
    Ok(entries)
}

/// Adds the given track URIs to a playlist in a single call.
pub async fn add_tracks(playlist_id: &str, uris: Vec<String>) -> Result<(), CliError> {
    let mut token_mgr = load_token_manager().await;
    let token = token_mgr.get_valid_token().await;

    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&AddTracksRequest { uris })
        .send()
        .await?
        .error_for_status()?;

    response.json::<SnapshotResponse>().await?;
    Ok(())
}

/// Removes the given track URIs from a playlist in a single call.
///
/// Removing a URI deletes every occurrence of it in the playlist, which is
/// what clearing relies on.
pub async fn remove_tracks(playlist_id: &str, uris: Vec<String>) -> Result<(), CliError> {
    let mut token_mgr = load_token_manager().await;
    let token = token_mgr.get_valid_token().await;

    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let tracks = uris
        .into_iter()
        .map(|uri| RemoveTrackRef { uri })
        .collect::<Vec<_>>();

    let client = Client::new();
    let response = client
        .delete(&api_url)
        .bearer_auth(token)
        .json(&RemoveTracksRequest { tracks })
        .send()
        .await?
        .error_for_status()?;

    response.json::<SnapshotResponse>().await?;
    Ok(())
}

/// Creates a public playlist with an empty description for the given user.
pub async fn create(user_id: &str, name: &str) -> Result<CreatePlaylistResponse, CliError> {
    let mut token_mgr = load_token_manager().await;
    let token = token_mgr.get_valid_token().await;

    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let request = CreatePlaylistRequest {
        name: name.to_string(),
        description: String::new(),
        public: true,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<CreatePlaylistResponse>().await?)
}

/// Unfollows a playlist on behalf of the current user.
///
/// This is the closest the Web API offers to deletion. For playlists the
/// user does not own it merely removes them from the library.
pub async fn unfollow(playlist_id: &str) -> Result<(), CliError> {
    let mut token_mgr = load_token_manager().await;
    let token = token_mgr.get_valid_token().await;

    let api_url = format!(
        "{uri}/playlists/{id}/followers",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::new();
    client
        .delete(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}
