//! # API Module
//!
//! HTTP handlers for the web server routes. The service is plain
//! request/response plumbing around the Spotify client: every handler
//! either redirects, renders a small server-side HTML page, or kicks off
//! the backup routine.
//!
//! ## Routes
//!
//! - [`root`] - `/` redirects to `/home` or `/login` depending on whether
//!   the session cookie is present.
//! - [`login`] - `/login` renders a page linking to the Spotify
//!   authorization URL.
//! - [`callback`] - `/callback` completes the OAuth flow: verifies the
//!   anti-forgery state token, exchanges the authorization code, sets the
//!   session cookie, and redirects to `/`.
//! - [`home`] - `/home` shows the logged-in user's display name and the
//!   backup link.
//! - [`backup`] - `/backup` resolves the source playlist and duplicates it
//!   into a new ISO-week-named playlist.
//! - [`health`] - `/health` returns application status and version for
//!   monitoring.
//!
//! ## Sessions
//!
//! There is no server-side session store. The `spotify` cookie carries the
//! raw access token; its lifetime is the token's expiry. Handlers behind a
//! session redirect to `/login` when the cookie is absent.

mod backup;
mod callback;
mod health;
mod home;
mod login;
mod root;

pub use backup::backup;
pub use callback::callback;
pub use health::health;
pub use home::home;
pub use login::login;
pub use root::root;
