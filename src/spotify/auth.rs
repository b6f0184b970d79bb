use reqwest::Client;
use serde_json::Value;

use crate::{
    config,
    types::{OauthState, Token},
    utils,
};

/// Builds the Spotify authorization URL from its parts.
///
/// Pure assembly of the query string for the authorization-code flow with
/// PKCE: response type, client id, redirect URI, code challenge (S256),
/// requested scope, and the anti-forgery state token that Spotify echoes
/// back on the callback.
pub fn build_authorize_url(
    auth_url: &str,
    client_id: &str,
    redirect_uri: &str,
    scope: &str,
    code_challenge: &str,
    state_token: &str,
) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}&state={state_token}",
    )
}

/// Returns the authorization URL for the running process.
///
/// Derives the code challenge from the process-wide verifier and fills the
/// remaining parts from configuration. The `/login` page links here.
pub fn authorize_url(oauth: &OauthState) -> String {
    let code_challenge = utils::generate_code_challenge(&oauth.code_verifier);

    build_authorize_url(
        &config::spotify_apiauth_url(),
        &config::spotify_client_id(),
        &config::spotify_redirect_uri(),
        &config::spotify_scope(),
        &code_challenge,
        &oauth.state_token,
    )
}

/// Exchanges an authorization code for an access token.
///
/// Completes the OAuth flow by posting the code, the PKCE verifier, and
/// the application credentials to the token endpoint. The returned token
/// carries the access token the session cookie stores, the granted scope,
/// and the expiry in seconds.
///
/// # Errors
///
/// Returns `reqwest::Error` on network failures or when the response body
/// is not valid JSON. Missing fields in an error response degrade to
/// defaults; callers should treat an empty access token as a failed login.
pub async fn exchange_code(code: &str, verifier: &str) -> Result<Token, reqwest::Error> {
    let client_id = &config::spotify_client_id();
    let client_secret = &config::spotify_client_secret();
    let redirect_uri = &config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await?;

    let json: Value = res.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
    })
}
