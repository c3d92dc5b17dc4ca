use std::process::ExitCode;

use tabled::Table;

use crate::{
    backup::BackupClient,
    cli::session::{self, TokenSource},
    info,
    management::{Action, AppState},
    utils,
};

/// Loads the user's playlists and prints those matching `filter` as a table.
pub async fn playlists(filter: Option<String>, source: TokenSource) -> ExitCode {
    let client = BackupClient::from_env();

    let state = session::login(AppState::default(), &source, &client).await;
    let (state, failed) = session::render_status(state);
    if failed {
        return ExitCode::FAILURE;
    }

    let state = session::load_playlists(state, &client)
        .await
        .apply(Action::FilterChanged(filter.unwrap_or_default()));
    let (state, failed) = session::render_status(state);
    if failed {
        return ExitCode::FAILURE;
    }

    let visible = state.visible_playlists();
    if visible.is_empty() {
        info!("No playlists match \"{}\".", state.filter());
        return ExitCode::SUCCESS;
    }

    println!("{}", Table::new(utils::playlist_table_rows(&visible)));
    ExitCode::SUCCESS
}
