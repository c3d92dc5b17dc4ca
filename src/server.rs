use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

use crate::{Res, api, types::Token};

/// Router of the local redirect listener.
///
/// The backend's redirect may land on `/` or on `/callback`, both deliver
/// `access_token` into `state`.
pub fn redirect_router(state: Arc<Mutex<Option<Token>>>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/", get(api::redirect))
        .route("/callback", get(api::redirect))
        .layer(Extension(state))
}

/// Serves [`redirect_router`] on `listener` until the task is aborted.
///
/// # Arguments
///
/// * `listener` - Already bound listener, so the caller knows the address
///   before the browser is opened
/// * `state` - Slot the received token is written to
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if serving fails.
///
/// # Example
///
/// ```
/// let listener = TcpListener::bind("127.0.0.1:8888").await?;
/// let server = tokio::spawn(start_redirect_server(listener, Arc::clone(&state)));
/// ```
pub async fn start_redirect_server(
    listener: TcpListener,
    state: Arc<Mutex<Option<Token>>>,
) -> Res<()> {
    axum::serve(listener, redirect_router(state)).await?;
    Ok(())
}
