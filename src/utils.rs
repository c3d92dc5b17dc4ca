use std::{borrow::Cow, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{Playlist, PlaylistTableRow, PlaylistTrack, TrackRow};

/// Column names of the export, in output order.
pub const CSV_HEADER: [&str; 5] = ["playlist", "title", "artist", "album", "added_at"];

/// Returns the playlists whose name contains `filter`, ignoring case.
///
/// Load order is preserved and an empty filter keeps everything.
pub fn filter_playlists<'a>(playlists: &'a [Playlist], filter: &str) -> Vec<&'a Playlist> {
    let needle = filter.to_lowercase();
    playlists
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Flattens the tracks of one playlist into export rows.
///
/// The artist column holds the first listed artist only. Entries without a
/// track object still produce a row, with empty track columns.
pub fn flatten_tracks(playlist: &Playlist, items: &[PlaylistTrack]) -> Vec<TrackRow> {
    items
        .iter()
        .map(|item| {
            let track = item.track.as_ref();
            TrackRow {
                playlist: playlist.name.clone(),
                title: track.map(|t| t.name.clone()).unwrap_or_default(),
                artist: track
                    .and_then(|t| t.artists.first())
                    .map(|a| a.name.clone())
                    .unwrap_or_default(),
                album: track
                    .and_then(|t| t.album.as_ref())
                    .map(|a| a.name.clone())
                    .unwrap_or_default(),
                added_at: item.added_at.clone().unwrap_or_default(),
            }
        })
        .collect()
}

/// Quotes a CSV field when it contains a delimiter, quote or line break.
///
/// Embedded quotes are doubled. Anything else is returned untouched.
pub fn escape_csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Serializes rows to CSV text: header line, then one line per row, joined by `\n`.
pub fn to_csv(rows: &[TrackRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for row in rows {
        let fields = [
            &row.playlist,
            &row.title,
            &row.artist,
            &row.album,
            &row.added_at,
        ];
        lines.push(
            fields
                .iter()
                .map(|f| escape_csv_field(f))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Converts playlists into rows for the `playlists` table.
///
/// # Arguments
///
/// * `playlists` - Playlists to display, usually the filtered view
///
/// # Returns
///
/// One row per playlist, in the given order. Playlists whose track count is
/// unknown show `-` in the tracks column.
///
/// # Example
///
/// ```
/// let visible = filter_playlists(&playlists, "rock");
/// let table = Table::new(playlist_table_rows(&visible));
/// println!("{}", table);
/// ```
pub fn playlist_table_rows(playlists: &[&Playlist]) -> Vec<PlaylistTableRow> {
    playlists
        .iter()
        .map(|p| PlaylistTableRow {
            name: p.name.clone(),
            tracks: p
                .track_total()
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string()),
            id: p.id.clone(),
        })
        .collect()
}

/// Starts a steady-ticking spinner with `message`.
///
/// The caller finishes it with `finish_and_clear` once the work is done.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Progress bar over `len` steps, one per playlist during an export.
pub fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.blue} [{bar:30.blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("=> ").tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
