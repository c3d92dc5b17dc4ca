//! spotsafe library
//!
//! Backs up Spotify playlists to CSV through the spotify-safe backend. The
//! backend handles OAuth with the streaming service; this crate logs in via
//! browser redirect, loads the playlists of the account, filters them by name
//! and exports their tracks to a CSV file.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local redirect listener
//! - `backup` - backend client, login flow and export aggregation
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared across the crate
//! - `management` - Local storage, consent flag and session state
//! - `server` - Local HTTP server receiving the login redirect
//! - `types` - Data structures and type definitions
//! - `utils` - Filtering, flattening and CSV serialization
//!
//! # Example
//!
//! ```
//! use spotsafe::{backup::BackupClient, types::Token};
//!
//! #[tokio::main]
//! async fn main() -> spotsafe::Res<()> {
//!     let client = BackupClient::new("https://spotify-safe.com/api");
//!     let playlists = client.get_playlists(&Token::new("BQC...")).await?;
//!     println!("{} playlists", playlists.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// All fallible library functions return this, with [`error::Error`] as
/// the error type.
///
/// # Example
///
/// ```
/// use spotsafe::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, error::Error>;

/// Prints a status line prefixed with a blue `o`.
///
/// ```
/// info!("Found {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a status line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints to stderr with a red `!` and exits with code 1.
///
/// Only for failures before any command runs, e.g. an unreadable `.env`.
/// Command failures go through the session status instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints to stderr with a yellow `!`.
///
/// Warnings go to stderr so stdout stays clean for output such as the token
/// printed by `spotsafe login`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
