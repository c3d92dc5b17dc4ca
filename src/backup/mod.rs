//! # Backup Backend Integration
//!
//! Client side of the backup backend. The backend owns the OAuth exchange
//! with the streaming service and proxies the two data endpoints this crate
//! needs:
//!
//! | Method | Path | Query params |
//! |---|---|---|
//! | GET | `/login` | none (browser redirect) |
//! | GET | `/playlists` | `token` |
//! | GET | `/tracks` | `token`, `playlist_id` |
//!
//! After login the backend redirects the browser back with `access_token` in
//! the query string.
//!
//! - [`client`] - typed requests against the endpoints
//! - [`auth`] - redirect login flow and token extraction
//! - [`export`] - sequential track aggregation and CSV output

pub mod auth;
pub mod client;
pub mod export;

pub use client::BackupClient;
