use reqwest::Client;

use crate::{
    config,
    types::{Playlist, SearchPlaylistsResponse},
};

/// Resolves a playlist by display name via the Spotify search endpoint.
///
/// Queries `GET /search?type=playlist` and returns the first usable result,
/// or `None` when the result page is empty. The search index occasionally
/// pads result pages with null entries; those are skipped.
///
/// # Errors
///
/// Returns `reqwest::Error` on network failures, non-success status codes,
/// or malformed response bodies.
pub async fn find_playlist(token: &str, query: &str) -> Result<Option<Playlist>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("q", query), ("type", "playlist"), ("limit", "5")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchPlaylistsResponse>().await?;

    Ok(res.playlists.items.into_iter().flatten().next())
}
