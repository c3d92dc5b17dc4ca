//! # CLI Module
//!
//! User-facing commands of spotsafe. Each command builds a fresh
//! [`AppState`](crate::management::AppState), runs its actions in order and
//! renders the resulting status after every step:
//!
//! ```text
//! login ──> load playlists ──> (filter) ──> export
//! ```
//!
//! - [`login`] - run the redirect login flow and print the token
//! - [`playlists`] - list playlists, optionally filtered by name
//! - [`export`] - write the tracks of every playlist to CSV
//! - [`consent`] / [`banner`] - one-time consent notice
//!
//! A failed step is reported as a warning and ends the command with a
//! non-zero exit code; later steps are skipped.
//!
//! ```bash
//! spotsafe login
//! spotsafe playlists --filter rock
//! spotsafe export --output backup.csv
//! ```

mod consent;
mod export;
mod login;
mod playlists;
pub mod session;

pub use consent::banner;
pub use consent::consent;
pub use export::export;
pub use login::login;
pub use playlists::playlists;
pub use session::TokenSource;
