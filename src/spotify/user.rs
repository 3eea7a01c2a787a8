use reqwest::Client;

use crate::{
    config, error,
    management::TokenManager,
    types::{CliError, User},
};

/// Retrieves the authenticated user's profile.
///
/// Every command fetches this first, both as an implicit auth check and to
/// echo who the command is acting on behalf of.
pub async fn get_current_user() -> Result<User, CliError> {
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

    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<User>().await?)
}
