use std::{fmt, path::PathBuf};

use crate::{
    types::{Playlist, Token},
    utils,
};

/// User-triggered actions that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Login,
    LoadPlaylists,
    Export,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Login => "login",
            ActionKind::LoadPlaylists => "load playlists",
            ActionKind::Export => "export",
        };
        f.write_str(name)
    }
}

/// Outcome of the most recent action, shown to the user until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Failed { action: ActionKind, message: String },
}

impl Status {
    pub fn is_failure(&self) -> bool {
        matches!(self, Status::Failed { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Info(message) => f.write_str(message),
            Status::Failed { action, message } => write!(f, "Failed to {}: {}", action, message),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    TokenReceived(Token),
    PlaylistsLoaded(Vec<Playlist>),
    FilterChanged(String),
    ExportSaved { path: PathBuf, rows: usize },
    Failed { action: ActionKind, message: String },
    DismissStatus,
}

impl Action {
    pub fn failed(action: ActionKind, err: impl fmt::Display) -> Self {
        Action::Failed {
            action,
            message: err.to_string(),
        }
    }
}

/// Session state: token, loaded playlists, filter text and last status.
///
/// State only changes through [`AppState::apply`], which consumes the old
/// value and returns the next one.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    token: Option<Token>,
    playlists: Vec<Playlist>,
    filter: String,
    status: Option<Status>,
}

impl AppState {
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::TokenReceived(token) => Self {
                token: Some(token),
                ..self
            },
            Action::PlaylistsLoaded(playlists) => {
                let status = Status::Info(format!("Loaded {} playlists.", playlists.len()));
                Self {
                    playlists,
                    status: Some(status),
                    ..self
                }
            }
            Action::FilterChanged(filter) => Self { filter, ..self },
            Action::ExportSaved { path, rows } => Self {
                status: Some(Status::Info(format!(
                    "Exported {} tracks to {}.",
                    rows,
                    path.display()
                ))),
                ..self
            },
            Action::Failed { action, message } => Self {
                status: Some(Status::Failed { action, message }),
                ..self
            },
            Action::DismissStatus => Self {
                status: None,
                ..self
            },
        }
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Loaded playlists matching the current filter.
    pub fn visible_playlists(&self) -> Vec<&Playlist> {
        utils::filter_playlists(&self.playlists, &self.filter)
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Map;

    use super::*;

    fn playlist(id: &str, name: &str) -> Playlist {
        Playlist {
            id: id.to_string(),
            name: name.to_string(),
            extra: Map::new(),
        }
    }

    #[test]
    fn loading_replaces_playlists_wholesale() {
        let state = AppState::default()
            .apply(Action::PlaylistsLoaded(vec![playlist("1", "Old")]))
            .apply(Action::PlaylistsLoaded(vec![
                playlist("2", "Rock Classics"),
                playlist("3", "Jazz"),
            ]));

        let names: Vec<&str> = state.playlists().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rock Classics", "Jazz"]);
        assert_eq!(
            state.status(),
            Some(&Status::Info("Loaded 2 playlists.".to_string()))
        );
    }

    #[test]
    fn filter_only_changes_the_view() {
        let state = AppState::default()
            .apply(Action::PlaylistsLoaded(vec![
                playlist("1", "Rock Classics"),
                playlist("2", "Jazz"),
            ]))
            .apply(Action::FilterChanged("ROCK".to_string()));

        let visible: Vec<&str> = state
            .visible_playlists()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(visible, vec!["Rock Classics"]);
        assert_eq!(state.playlists().len(), 2);
    }

    #[test]
    fn failure_keeps_previous_playlists() {
        let state = AppState::default()
            .apply(Action::TokenReceived(Token::new("t")))
            .apply(Action::PlaylistsLoaded(vec![playlist("1", "Mix")]))
            .apply(Action::failed(ActionKind::LoadPlaylists, "boom"));

        assert_eq!(state.playlists().len(), 1);
        assert_eq!(state.token(), Some(&Token::new("t")));
        let status = state.status().unwrap();
        assert!(status.is_failure());
        assert_eq!(status.to_string(), "Failed to load playlists: boom");
    }

    #[test]
    fn dismiss_clears_status() {
        let state = AppState::default()
            .apply(Action::failed(ActionKind::Export, "boom"))
            .apply(Action::DismissStatus);
        assert!(state.status().is_none());
    }
}
