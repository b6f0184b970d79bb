use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        FullPlaylist, PlaylistTrackItem, PlaylistTracksResponse,
    },
    warning,
};

/// Number of track entries requested per page.
const TRACK_PAGE_LIMIT: u32 = 100;

/// Retrieves a playlist's metadata from the Spotify Web API.
///
/// Fetches `GET /playlists/{id}`. The backup routine embeds the returned
/// name in the description of the destination playlist.
///
/// # Errors
///
/// Returns `reqwest::Error` on network failures, non-success status codes,
/// or malformed response bodies.
pub async fn get_playlist(token: &str, playlist_id: &str) -> Result<FullPlaylist, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<FullPlaylist>().await
}

/// Creates a new private playlist owned by the given user.
///
/// Posts to `POST /users/{user_id}/playlists` with the desired name and
/// description. The playlist is created private and non-collaborative.
///
/// # Errors
///
/// Returns `reqwest::Error` on network failures, non-success status codes
/// (a missing `playlist-modify-private` scope yields 403), or malformed
/// response bodies.
pub async fn create_playlist(
    token: &str,
    user_id: &str,
    name: &str,
    description: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public: false,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Retrieves one page of a playlist's track listing.
///
/// Without a `page_url` the first page is fetched with a limit of
/// [`TRACK_PAGE_LIMIT`]; subsequent pages are fetched through the `next`
/// URL the previous page returned. The second element of the result is
/// that `next` URL, `None` once the listing is exhausted.
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay. Other
/// errors are propagated immediately.
///
/// # Errors
///
/// Returns `reqwest::Error` on network failures, non-retried status codes,
/// or malformed response bodies.
pub async fn get_playlist_tracks(
    token: &str,
    playlist_id: &str,
    page_url: Option<String>,
) -> Result<(Vec<PlaylistTrackItem>, Option<String>), reqwest::Error> {
    let api_url = page_url.unwrap_or_else(|| {
        format!(
            "{uri}/playlists/{id}/tracks?limit={limit}",
            uri = &config::spotify_apiurl(),
            id = playlist_id,
            limit = TRACK_PAGE_LIMIT
        )
    });

    loop {
        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<PlaylistTracksResponse>().await?;

        return Ok((res.items, res.next));
    }
}

/// Adds tracks to a playlist.
///
/// Posts the track URIs built from the given ids to
/// `POST /playlists/{id}/tracks`. A page of the source listing never
/// exceeds [`TRACK_PAGE_LIMIT`] entries, which is also the upstream limit
/// per add call, so one call per page suffices.
///
/// # Rate Limiting
///
/// 429 Too Many Requests responses are retried after the delay named in
/// the `Retry-After` header, as long as it stays at or below 120 seconds.
/// Longer delays produce a warning and the error is propagated.
///
/// # Errors
///
/// Returns `reqwest::Error` on network failures, non-retried status codes,
/// or malformed response bodies.
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    track_ids: &[String],
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let body = AddTracksRequest {
        uris: track_ids
            .iter()
            .map(|id| format!("spotify:track:{}", id))
            .collect(),
    };

    loop {
        let client = Client::new();
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(0);

            if retry_after <= 120 {
                sleep(Duration::from_secs(retry_after)).await;
                continue; // retry
            }

            warning!(
                "Retry after has reached an abnormal high of {} seconds. Try again tomorrow.",
                retry_after
            );
        }

        let response = response.error_for_status()?;
        let res = response.json::<AddTracksResponse>().await?;

        return Ok(res);
    }
}
