use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::{net::TcpListener, sync::Mutex, task::JoinHandle};
use url::Url;

use crate::{
    Res, backup::BackupClient, error::Error, info, server::start_redirect_server, types::Token,
    warning,
};

/// Query parameter the backend puts the access token in when redirecting back.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Extracts the access token from a redirect URL.
///
/// Accepts a full URL or just its query part (`?access_token=...`). Returns
/// `Ok(None)` when the parameter is missing or empty.
///
/// # Example
///
/// ```
/// let token = token_from_redirect("https://spotify-safe.com/?access_token=BQC")?;
/// assert_eq!(token.unwrap().as_str(), "BQC");
/// ```
pub fn token_from_redirect(redirect: &str) -> Res<Option<Token>> {
    let base = Url::parse("http://localhost/")?;
    let url = base.join(redirect.trim())?;
    let token = url
        .query_pairs()
        .find(|(key, _)| key == ACCESS_TOKEN_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .map(Token::new);
    Ok(token)
}

/// Runs the redirect login flow and returns the received token.
///
/// 1. Binds the local redirect listener on `server_addr`
/// 2. Opens the backend's `/login` page in the default browser
/// 3. Waits up to `timeout` for the redirect to deliver `access_token`
///
/// The backend decides where the browser is sent after login, so it must be
/// configured to redirect to the listener for this to complete.
///
/// # Arguments
///
/// * `client` - Backend client, used for the login URL
/// * `server_addr` - Address the redirect listener binds to, e.g. `127.0.0.1:8888`
/// * `timeout` - How long to wait for the redirect
///
/// # Errors
///
/// - [`Error::Io`] if the listener cannot bind or stops while waiting
/// - [`Error::LoginTimeout`] if no token arrives within `timeout`
///
/// # Example
///
/// ```
/// let client = BackupClient::from_env();
/// let token = login(&client, &config::server_addr(), Duration::from_secs(120)).await?;
/// ```
pub async fn login(client: &BackupClient, server_addr: &str, timeout: Duration) -> Res<Token> {
    let shared_state: Arc<Mutex<Option<Token>>> = Arc::new(Mutex::new(None));

    let listener = TcpListener::bind(server_addr).await?;
    info!("Waiting for login redirect on http://{}", listener.local_addr()?);

    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move { start_redirect_server(listener, server_state).await });

    let login_url = client.login_url()?;
    if webbrowser::open(login_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            login_url
        );
    }

    wait_for_redirect(shared_state, server, timeout).await
}

/// Waits for the token while watching the redirect listener task.
///
/// The listener is aborted once this returns. If it ends before a token
/// arrives, its error is returned right away instead of waiting out `timeout`.
///
/// # Errors
///
/// - The listener's own error, or [`Error::Io`] if it stopped or panicked
/// - [`Error::LoginTimeout`] if no token arrives within `timeout`
pub async fn wait_for_redirect(
    shared_state: Arc<Mutex<Option<Token>>>,
    mut server: JoinHandle<Res<()>>,
    timeout: Duration,
) -> Res<Token> {
    let result = tokio::select! {
        token = wait_for_token(shared_state, timeout) => {
            token.ok_or(Error::LoginTimeout(timeout.as_secs()))
        }
        served = &mut server => Err(match served {
            Ok(Err(err)) => err,
            Ok(Ok(())) => Error::Io(std::io::Error::other("redirect listener stopped")),
            Err(err) => Error::Io(std::io::Error::other(err)),
        }),
    };
    server.abort();
    result
}

/// Polls the shared state once per second until a token shows up or `max_wait` passes.
pub async fn wait_for_token(
    shared_state: Arc<Mutex<Option<Token>>>,
    max_wait: Duration,
) -> Option<Token> {
    let start = Instant::now();

    loop {
        {
            let lock = shared_state.lock().await;
            if let Some(token) = lock.as_ref() {
                return Some(token.clone());
            }
        }
        if start.elapsed() >= max_wait {
            return None;
        }
        tokio::time::sleep(Duration::from_secs(1).min(max_wait)).await;
    }
}
