use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Opaque access token issued by the streaming service after login.
///
/// Only ever held in memory. `Debug` output hides the value so tokens do not
/// end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Token(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// A playlist as returned by `/playlists`.
///
/// Fields other than `id` and `name` are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Playlist {
    /// Track count advertised by the service (`tracks.total`), when present.
    pub fn track_total(&self) -> Option<u64> {
        self.extra
            .get("tracks")
            .and_then(|t| t.get("total"))
            .and_then(Value::as_u64)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetPlaylistsResponse {
    #[serde(default)]
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetTracksResponse {
    #[serde(default)]
    pub items: Vec<PlaylistTrack>,
}

/// One playlist/track association from `/tracks`.
///
/// `track` is null for tracks the service no longer serves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub track: Option<Track>,
    #[serde(default)]
    pub added_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackArtist {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub name: String,
}

/// Flattened export unit, one CSV line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRow {
    pub playlist: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub added_at: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub tracks: String,
    pub id: String,
}
