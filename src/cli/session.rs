use std::{path::Path, time::Duration};

use crate::{
    Res,
    backup::{BackupClient, auth, export},
    config,
    error::Error,
    management::{Action, ActionKind, AppState, Status},
    success,
    types::Token,
    utils, warning,
};

/// Where a command takes its access token from, besides the login flow.
#[derive(Debug, Clone, Default)]
pub struct TokenSource {
    /// Token given directly on the command line.
    pub token: Option<String>,
    /// Redirect URL pasted from the browser after login.
    pub redirect_url: Option<String>,
}

/// Resolves the access token for this run.
///
/// Order: `--token`, `--redirect-url`, `SPOTSAFE_ACCESS_TOKEN`, then the
/// interactive login flow. The token is never written to disk.
pub async fn resolve_token(source: &TokenSource, client: &BackupClient) -> Res<Token> {
    if let Some(token) = &source.token {
        return Ok(Token::new(token.as_str()));
    }

    if let Some(redirect_url) = &source.redirect_url {
        return auth::token_from_redirect(redirect_url)?.ok_or_else(|| {
            Error::Configuration(format!(
                "redirect URL has no `{}` parameter",
                auth::ACCESS_TOKEN_PARAM
            ))
        });
    }

    if let Some(token) = config::access_token() {
        return Ok(Token::new(token));
    }

    auth::login(
        client,
        &config::server_addr(),
        Duration::from_secs(config::LOGIN_TIMEOUT_SECS),
    )
    .await
}

/// Resolves the token and records the outcome in `state`.
///
/// On success the token is stored and no status is set. On failure the state
/// carries a `Failed` status for [`ActionKind::Login`].
pub async fn login(state: AppState, source: &TokenSource, client: &BackupClient) -> AppState {
    match resolve_token(source, client).await {
        Ok(token) => state.apply(Action::TokenReceived(token)),
        Err(e) => state.apply(Action::failed(ActionKind::Login, e)),
    }
}

/// Loads the playlists for the session token, replacing the loaded list.
pub async fn load_playlists(state: AppState, client: &BackupClient) -> AppState {
    let Some(token) = state.token().cloned() else {
        return state.apply(Action::failed(ActionKind::LoadPlaylists, "not logged in"));
    };

    let pb = utils::spinner("Loading playlists...");
    let result = client.get_playlists(&token).await;
    pb.finish_and_clear();

    match result {
        Ok(playlists) => state.apply(Action::PlaylistsLoaded(playlists)),
        Err(e) => state.apply(Action::failed(ActionKind::LoadPlaylists, e)),
    }
}

/// Exports every loaded playlist to `output`.
///
/// Nothing is written unless all track requests succeed.
///
/// # Arguments
///
/// * `state` - Session state holding the token and the loaded playlists
/// * `client` - Backend client used for the `/tracks` requests
/// * `output` - Destination file, replaced if it exists
///
/// # Returns
///
/// The next state. Its status is `Exported N tracks to PATH.` on success or a
/// `Failed` status for [`ActionKind::Export`] otherwise. Loaded playlists are
/// kept either way.
///
/// # Example
///
/// ```
/// let state = session::load_playlists(state, &client).await;
/// let state = session::export_playlists(state, &client, Path::new("backup.csv")).await;
/// let (_, failed) = session::render_status(state);
/// ```
pub async fn export_playlists(state: AppState, client: &BackupClient, output: &Path) -> AppState {
    let Some(token) = state.token().cloned() else {
        return state.apply(Action::failed(ActionKind::Export, "not logged in"));
    };

    let pb = utils::progress_bar(state.playlists().len() as u64);
    let result = export::collect_rows(client, &token, state.playlists(), |index, playlist| {
        pb.set_position(index as u64);
        pb.set_message(playlist.name.clone());
    })
    .await;
    pb.finish_and_clear();

    let rows = match result {
        Ok(rows) => rows,
        Err(e) => return state.apply(Action::failed(ActionKind::Export, e)),
    };

    match export::save_csv(output, &rows).await {
        Ok(()) => state.apply(Action::ExportSaved {
            path: output.to_path_buf(),
            rows: rows.len(),
        }),
        Err(e) => state.apply(Action::failed(ActionKind::Export, e)),
    }
}

/// Prints the pending status, if any, and dismisses it.
///
/// Returns the next state and whether the status was a failure.
pub fn render_status(state: AppState) -> (AppState, bool) {
    let failed = match state.status() {
        Some(status @ Status::Failed { .. }) => {
            warning!("{}", status);
            true
        }
        Some(status @ Status::Info(_)) => {
            success!("{}", status);
            false
        }
        None => false,
    };
    (state.apply(Action::DismissStatus), failed)
}
