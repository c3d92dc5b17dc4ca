use reqwest::Client;
use url::Url;

use crate::{
    Res, config,
    error::Error,
    types::{GetPlaylistsResponse, GetTracksResponse, Playlist, PlaylistTrack, Token},
};

/// HTTP client for the backup backend.
///
/// The backend proxies the streaming service: it owns the OAuth exchange and
/// forwards `/playlists` and `/tracks` with the token given as a query
/// parameter.
#[derive(Debug, Clone)]
pub struct BackupClient {
    client: Client,
    base_url: String,
}

impl BackupClient {
    /// Creates a client against `base_url` (e.g. `https://spotify-safe.com/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client using the configured base URL.
    pub fn from_env() -> Self {
        Self::new(config::api_base_url())
    }

    /// Creates a client sharing an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// URL the browser is sent to for login. Carries no parameters; where the
    /// user ends up afterwards is decided by the backend.
    pub fn login_url(&self) -> Res<Url> {
        self.endpoint("login", &[])
    }

    /// Fetches the playlists visible to `token`.
    ///
    /// Calls `GET /playlists?token=<token>` and returns `items` in the order
    /// received. A body without `items` yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on connection failure, a non-2xx status or a
    /// body that is not JSON. The error text never contains the request URL.
    ///
    /// # Example
    ///
    /// ```
    /// let client = BackupClient::from_env();
    /// let playlists = client.get_playlists(&Token::new("BQC123")).await?;
    /// ```
    pub async fn get_playlists(&self, token: &Token) -> Res<Vec<Playlist>> {
        let url = self.endpoint("playlists", &[("token", token.as_str())])?;
        log::debug!("GET {}/playlists", self.base_url);

        let res = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<GetPlaylistsResponse>()
            .await?;

        log::debug!("Received {} playlists", res.items.len());
        Ok(res.items)
    }

    /// Fetches the track entries of one playlist.
    ///
    /// Calls `GET /tracks?token=<token>&playlist_id=<id>`. Fails the same way
    /// as [`get_playlists`](Self::get_playlists).
    pub async fn get_tracks(&self, token: &Token, playlist_id: &str) -> Res<Vec<PlaylistTrack>> {
        let url = self.endpoint(
            "tracks",
            &[("token", token.as_str()), ("playlist_id", playlist_id)],
        )?;
        log::debug!("GET {}/tracks playlist_id={}", self.base_url, playlist_id);

        let res = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<GetTracksResponse>()
            .await?;

        log::debug!("Received {} tracks for {}", res.items.len(), playlist_id);
        Ok(res.items)
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Res<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        if url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "API base URL is not usable: {}",
                self.base_url
            )));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_has_no_query() {
        let client = BackupClient::new("https://spotify-safe.com/api/");
        let url = client.login_url().unwrap();
        assert_eq!(url.as_str(), "https://spotify-safe.com/api/login");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn endpoint_encodes_query_values() {
        let client = BackupClient::new("http://localhost:8000");
        let url = client
            .endpoint("tracks", &[("token", "a b&c"), ("playlist_id", "p1")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/tracks?token=a+b%26c&playlist_id=p1"
        );
    }

    #[test]
    fn rejects_unusable_base() {
        let client = BackupClient::new("not a url");
        assert!(client.login_url().is_err());
    }
}
