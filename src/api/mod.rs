//! # API Module
//!
//! HTTP endpoints of the local redirect listener that runs during login.
//!
//! - [`redirect`] - receives the browser redirect from the backup backend and
//!   takes the `access_token` query parameter out of it.
//! - [`health`] - reports status and version.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotsafe::api::{health, redirect};
//!
//! let app = Router::new()
//!     .route("/", get(redirect))
//!     .route("/health", get(health));
//! ```

mod health;
mod redirect;

pub use health::health;
pub use redirect::redirect;
