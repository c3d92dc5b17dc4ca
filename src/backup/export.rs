use std::path::Path;

use crate::{
    Res,
    backup::BackupClient,
    types::{Playlist, Token, TrackRow},
    utils,
};

/// Fetches the tracks of every playlist and flattens them into rows.
///
/// Requests go out one at a time in playlist order; rows keep playlist order
/// and then track order. The first failed request aborts the whole run.
/// `on_playlist` is called before each playlist is fetched.
///
/// # Errors
///
/// Returns the [`Error::Http`](crate::error::Error::Http) of the first failed
/// `/tracks` request. Rows collected up to that point are dropped.
pub async fn collect_rows<F>(
    client: &BackupClient,
    token: &Token,
    playlists: &[Playlist],
    mut on_playlist: F,
) -> Res<Vec<TrackRow>>
where
    F: FnMut(usize, &Playlist),
{
    let mut rows = Vec::new();
    for (index, playlist) in playlists.iter().enumerate() {
        on_playlist(index, playlist);
        let items = client.get_tracks(token, &playlist.id).await?;
        rows.extend(utils::flatten_tracks(playlist, &items));
    }
    Ok(rows)
}

/// Writes the CSV rendering of `rows` to `path`, replacing any existing file.
///
/// Missing parent directories are created first.
pub async fn save_csv(path: &Path, rows: &[TrackRow]) -> Res<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        async_fs::create_dir_all(parent).await?;
    }
    async_fs::write(path, utils::to_csv(rows)).await?;
    log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
