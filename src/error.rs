//! Error types shared by the backup client, the login flow and local storage.

use thiserror::Error;

/// Everything that can go wrong while talking to the backup backend or
/// touching local files.
///
/// The backend gives no way to tell an invalid token from a missing playlist
/// or an unreachable host, so all of those end up as [`Error::Http`].
#[derive(Error, Debug)]
pub enum Error {
    /// Connection failure, non-2xx status or undecodable response body.
    ///
    /// The request URL is stripped on conversion since it carries the token.
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize data: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The redirect carrying the access token never reached the local listener.
    #[error("Login timed out after {0} seconds")]
    LoginTimeout(u64),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.without_url())
    }
}

impl From<dotenv::Error> for Error {
    fn from(err: dotenv::Error) -> Self {
        Error::Configuration(err.to_string())
    }
}
