//! Configuration management for spotsafe.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use crate::error::Error;

/// Base URL of the backup backend used when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "https://spotify-safe.com/api";

/// Address of the local redirect listener used when `SERVER_ADDRESS` is not set.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// File name the export is saved under unless `--output` says otherwise.
pub const EXPORT_FILE_NAME: &str = "spotify_playlists_backup.csv";

/// How long the login flow waits for the redirect to arrive.
pub const LOGIN_TIMEOUT_SECS: u64 = 120;

/// Directory under the platform data dir holding the `.env` file and local storage.
pub const APP_DIR: &str = "spotsafe";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is optional. Variables already present in the environment are
/// not overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotsafe/.env`
/// - macOS: `~/Library/Application Support/spotsafe/.env`
/// - Windows: `%LOCALAPPDATA%/spotsafe/.env`
///
/// # Errors
///
/// Fails when the data directory cannot be created or the `.env` file exists
/// but cannot be parsed.
pub async fn load_env() -> Result<(), Error> {
    let path = app_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
        log::debug!("Loaded environment from {}", path.display());
    }
    Ok(())
}

/// Platform-specific application directory, falling back to the working directory.
pub fn app_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Returns the base URL of the backend serving `/login`, `/playlists` and `/tracks`.
///
/// Read from `API_BASE_URL`; defaults to [`DEFAULT_API_BASE_URL`]. A trailing
/// slash is stripped so paths can be appended directly.
pub fn api_base_url() -> String {
    let base = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    base.trim_end_matches('/').to_string()
}

/// Returns the address the local redirect listener binds to.
///
/// Read from `SERVER_ADDRESS`; defaults to [`DEFAULT_SERVER_ADDRESS`].
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns an access token supplied through `SPOTSAFE_ACCESS_TOKEN`, if any.
pub fn access_token() -> Option<String> {
    env::var("SPOTSAFE_ACCESS_TOKEN")
        .ok()
        .filter(|t| !t.is_empty())
}
