//! # Spotify Integration Module
//!
//! This module implements the Spotify Web API surface the backup service
//! needs: the OAuth 2.0 authorization-code flow (with PKCE and an
//! anti-forgery state token), the current-user profile, playlist search,
//! and the playlist operations used by the duplication routine. It is the
//! only layer that talks HTTP to Spotify; handlers and the backup routine
//! consume it through plain async functions.
//!
//! ## Core Modules
//!
//! - [`auth`] - Builds the authorization URL and exchanges authorization
//!   codes for access tokens. The code verifier and state token are
//!   generated once at process start; the user's browser is redirected to
//!   Spotify and returns via the `/callback` route.
//! - [`user`] - Fetches the authenticated user's profile (`GET /me`),
//!   which supplies the owner id for playlist creation.
//! - [`search`] - Resolves a playlist by display name via the search
//!   endpoint (`GET /search?type=playlist`).
//! - [`playlist`] - Playlist metadata, creation, paginated track listing,
//!   and track addition.
//!
//! ## Error Handling
//!
//! All functions return `Result` with `reqwest::Error`; callers decide
//! whether a failure redirects, logs, or aborts the process. Two upstream
//! quirks are handled in place:
//!
//! - 502 Bad Gateway on the track listing is retried after a fixed delay.
//! - 429 Too Many Requests on track addition honors the `Retry-After`
//!   header up to a cap and warns beyond it.
//!
//! ## Authentication Strategy
//!
//! The service uses the authorization-code flow with PKCE on top: the
//! token exchange sends the client secret and the code verifier. Because
//! the session is a cookie holding the raw access token, there is no
//! refresh step; when the token expires the user logs in again.

pub mod auth;
pub mod playlist;
pub mod search;
pub mod user;
