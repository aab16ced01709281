use std::sync::Arc;

use im::Vector;

use super::action::Slice;
use crate::model::{CurrentlyPlaying, Playlist, PlaylistSummary, UserInfo};

/// The single application state record.
///
/// Cloning is shallow: `im::Vector` and `Arc` fields share their contents,
/// so a transition only pays for the field it replaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
    pub playlists: Vector<PlaylistSummary>,
    pub selected_playlist_id: Option<String>,
    pub selected_playlist: Option<Arc<Playlist>>,
    pub current_playing: Option<Arc<CurrentlyPlaying>>,
    pub player_state: bool,
}

impl AppState {
    /// Whether `slice` holds the same value in both states.
    pub fn slice_eq(&self, other: &AppState, slice: Slice) -> bool {
        match slice {
            Slice::Token => self.token == other.token,
            Slice::UserInfo => self.user_info == other.user_info,
            Slice::Playlists => self.playlists == other.playlists,
            Slice::SelectedPlaylistId => self.selected_playlist_id == other.selected_playlist_id,
            Slice::SelectedPlaylist => {
                arc_eq(&self.selected_playlist, &other.selected_playlist)
            }
            Slice::CurrentPlaying => arc_eq(&self.current_playing, &other.current_playing),
            Slice::PlayerState => self.player_state == other.player_state,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn current_uri(&self) -> Option<&str> {
        self.current_playing.as_ref().and_then(|p| p.uri.as_deref())
    }
}

fn arc_eq<T: PartialEq>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a == b,
        (None, None) => true,
        _ => false,
    }
}
