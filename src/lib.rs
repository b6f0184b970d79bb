//! Spotify Playlist Backup Service Library
//!
//! This library implements a small web service that authenticates a single
//! user against the Spotify Web API via OAuth2 and duplicates a source
//! playlist ("Discover Weekly" by default) into a new playlist named by
//! ISO week.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the web server routes
//! - `backup` - The playlist duplication routine
//! - `config` - Configuration management and environment variables
//! - `server` - HTTP server setup and routing
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use sporback::{config, server, types::OauthState, utils};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> sporback::Res<()> {
//!     config::load_env().await?;
//!     let state = Arc::new(OauthState {
//!         state_token: utils::generate_state_token(),
//!         code_verifier: utils::generate_code_verifier(),
//!     });
//!     server::start_api_server(config::server_addr(), state).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod backup;
pub mod config;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates, accepting the same
/// arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to confirm completed operations, accepting the same arguments
/// as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Used for unrecoverable errors. The process terminates with exit code 1
/// immediately after the message is printed; code after an `error!` call
/// never runs.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important notices that don't require
/// program termination.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
