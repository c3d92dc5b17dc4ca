use std::{path::PathBuf, process::ExitCode};

use crate::{
    backup::BackupClient,
    cli::session::{self, TokenSource},
    info,
    management::AppState,
};

/// Loads all playlists and exports their tracks to a CSV file at `output`.
pub async fn export(output: PathBuf, source: TokenSource) -> ExitCode {
    let client = BackupClient::from_env();

    let state = session::login(AppState::default(), &source, &client).await;
    let (state, failed) = session::render_status(state);
    if failed {
        return ExitCode::FAILURE;
    }

    let state = session::load_playlists(state, &client).await;
    let (state, failed) = session::render_status(state);
    if failed {
        return ExitCode::FAILURE;
    }

    info!("Exporting {} playlists...", state.playlists().len());
    let state = session::export_playlists(state, &client, &output).await;
    let (_, failed) = session::render_status(state);
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
