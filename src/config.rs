//! Configuration management for the playlist backup service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Required values (application
//! credentials, redirect URI) panic when absent; values with sensible
//! defaults (endpoint URLs, server address, source playlist name) fall
//! back silently.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory, or in the working directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file.
///
/// Looks for the file in the platform-specific local data directory under
/// `sporback/.env`, creating the directory if needed:
/// - Linux: `~/.local/share/sporback/.env`
/// - macOS: `~/Library/Application Support/sporback/.env`
/// - Windows: `%LOCALAPPDATA%/sporback/.env`
///
/// When no file exists there, falls back to a `.env` in the working
/// directory, which is the usual layout for a deployed service. Variables
/// already present in the environment always win.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or a present
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporback/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    } else {
        dotenv::dotenv().ok();
    }

    Ok(())
}

/// Returns the address the HTTP server binds to.
///
/// Reads the `SERVER_ADDRESS` environment variable, defaulting to
/// `127.0.0.1:8080`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Reads the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable, which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Reads the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable. The
/// secret is sent on the token exchange together with the PKCE verifier
/// and must never appear in logs or version control.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Reads the `SPOTIFY_API_REDIRECT_URI` environment variable. This must
/// match the redirect URI registered in the Spotify application settings
/// and point at this server's `/callback` route.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions.
///
/// Reads the `SPOTIFY_API_AUTH_SCOPE` environment variable. Defaults to
/// the scopes the backup flow needs: reading the private user profile,
/// reading private and collaborative playlists, and modifying private
/// playlists.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| {
        "user-read-private playlist-read-private playlist-read-collaborative playlist-modify-private"
            .to_string()
    })
}

/// Returns the Spotify OAuth authorization URL.
///
/// Reads the `SPOTIFY_API_AUTH_URL` environment variable, defaulting to
/// the public `https://accounts.spotify.com/authorize` endpoint.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable, defaulting to the
/// public `https://api.spotify.com/v1` endpoint.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads the `SPOTIFY_API_TOKEN_URL` environment variable, defaulting to
/// the public `https://accounts.spotify.com/api/token` endpoint.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the display name of the playlist to back up.
///
/// Reads the `BACKUP_SOURCE_PLAYLIST` environment variable, defaulting to
/// `Discover Weekly`.
pub fn backup_source_playlist() -> String {
    env::var("BACKUP_SOURCE_PLAYLIST").unwrap_or_else(|_| "Discover Weekly".to_string())
}
