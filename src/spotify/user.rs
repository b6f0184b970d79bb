use reqwest::Client;

use crate::{config, types::PrivateUser};

/// Retrieves the authenticated user's profile from the Spotify Web API.
///
/// Fetches `GET /me` with the given bearer token. The profile supplies the
/// user id that owns newly created playlists and the display name shown on
/// the home page.
///
/// # Errors
///
/// Returns `reqwest::Error` on network failures, non-success status codes
/// (an expired or revoked token yields 401), or malformed response bodies.
pub async fn current_user(token: &str) -> Result<PrivateUser, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<PrivateUser>().await
}
