use std::{fmt, sync::Arc};

use im::Vector;

use crate::model::{CurrentlyPlaying, Playlist, PlaylistSummary, UserInfo};

/// A field of [`AppState`](super::state::AppState) owned by exactly one action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    Token,
    UserInfo,
    Playlists,
    SelectedPlaylistId,
    SelectedPlaylist,
    CurrentPlaying,
    PlayerState,
}

impl Slice {
    pub const ALL: [Slice; 7] = [
        Slice::Token,
        Slice::UserInfo,
        Slice::Playlists,
        Slice::SelectedPlaylistId,
        Slice::SelectedPlaylist,
        Slice::CurrentPlaying,
        Slice::PlayerState,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slice::Token => "token",
            Slice::UserInfo => "user_info",
            Slice::Playlists => "playlists",
            Slice::SelectedPlaylistId => "selected_playlist_id",
            Slice::SelectedPlaylist => "selected_playlist",
            Slice::CurrentPlaying => "current_playing",
            Slice::PlayerState => "player_state",
        }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every state transition the store understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetToken(Option<String>),
    SetUserInfo(Option<UserInfo>),
    SetPlaylists(Vector<PlaylistSummary>),
    SetPlaylistId(Option<String>),
    /// Replaces the whole selected playlist, never merges.
    SetPlaylist(Option<Arc<Playlist>>),
    SetPlaying(Option<Arc<CurrentlyPlaying>>),
    SetPlayerState(bool),
}

impl Action {
    pub fn slice(&self) -> Slice {
        match self {
            Action::SetToken(_) => Slice::Token,
            Action::SetUserInfo(_) => Slice::UserInfo,
            Action::SetPlaylists(_) => Slice::Playlists,
            Action::SetPlaylistId(_) => Slice::SelectedPlaylistId,
            Action::SetPlaylist(_) => Slice::SelectedPlaylist,
            Action::SetPlaying(_) => Slice::CurrentPlaying,
            Action::SetPlayerState(_) => Slice::PlayerState,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::SetToken(_) => "SET_TOKEN",
            Action::SetUserInfo(_) => "SET_USER_INFO",
            Action::SetPlaylists(_) => "SET_PLAYLISTS",
            Action::SetPlaylistId(_) => "SET_PLAYLIST_ID",
            Action::SetPlaylist(_) => "SET_PLAYLIST",
            Action::SetPlaying(_) => "SET_PLAYING",
            Action::SetPlayerState(_) => "SET_PLAYER_STATE",
        }
    }
}
