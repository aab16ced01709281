use super::{action::Action, state::AppState};

/// Computes the state that follows `state` once `action` is applied.
///
/// The input is only borrowed, the returned record is a shallow copy with
/// exactly the field owned by `action` overwritten.
pub fn transition(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::SetToken(token) => next.token = token,
        Action::SetUserInfo(user_info) => next.user_info = user_info,
        Action::SetPlaylists(playlists) => next.playlists = playlists,
        Action::SetPlaylistId(id) => next.selected_playlist_id = id,
        Action::SetPlaylist(playlist) => next.selected_playlist = playlist,
        Action::SetPlaying(playing) => next.current_playing = playing,
        Action::SetPlayerState(playing) => next.player_state = playing,
    }
    next
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use im::Vector;

    use super::*;
    use crate::{
        model::{CurrentlyPlaying, Playlist, PlaylistSummary, Track, UserInfo},
        store::action::Slice,
    };

    fn track(id: &str, track_number: u32) -> Track {
        Track {
            id: id.to_string(),
            name: format!("Track {id}"),
            artists: vec!["Artist".to_string()],
            image: None,
            duration_ms: 180_000,
            album: "Album".to_string(),
            context_uri: "spotify:album:a1".to_string(),
            track_number,
            uri: format!("spotify:track:{id}"),
        }
    }

    fn populated() -> AppState {
        AppState {
            token: Some("tok".into()),
            user_info: Some(UserInfo {
                user_id: "u1".into(),
                name: "Hung".into(),
                user_url: None,
            }),
            playlists: Vector::from(vec![PlaylistSummary::new("p1", "Chill")]),
            selected_playlist_id: Some("p1".into()),
            selected_playlist: Some(Arc::new(Playlist {
                id: "p1".into(),
                name: "Chill".into(),
                description: String::new(),
                image: None,
                tracks: Vector::from(vec![track("a", 1), track("b", 2)]),
            })),
            current_playing: None,
            player_state: false,
        }
    }

    fn every_action() -> Vec<Action> {
        vec![
            Action::SetToken(Some("other".into())),
            Action::SetUserInfo(None),
            Action::SetPlaylists(Vector::new()),
            Action::SetPlaylistId(Some("p2".into())),
            Action::SetPlaylist(None),
            Action::SetPlaying(Some(Arc::new(CurrentlyPlaying::default()))),
            Action::SetPlayerState(true),
        ]
    }

    #[test]
    fn each_action_touches_only_its_slice() {
        let state = populated();
        for action in every_action() {
            let owned = action.slice();
            let next = transition(&state, action);
            for slice in Slice::ALL {
                if slice != owned {
                    assert!(
                        state.slice_eq(&next, slice),
                        "{owned} transition changed {slice}"
                    );
                }
            }
            assert!(!state.slice_eq(&next, owned), "{owned} was not applied");
        }
    }

    #[test]
    fn untouched_fields_are_shared() {
        let state = populated();
        let next = transition(&state, Action::SetPlayerState(true));
        let before = state.selected_playlist.as_ref().unwrap();
        let after = next.selected_playlist.as_ref().unwrap();
        assert!(Arc::ptr_eq(before, after));
    }

    #[test]
    fn input_state_is_not_mutated() {
        let state = populated();
        let copy = state.clone();
        let _ = transition(&state, Action::SetPlaylists(Vector::new()));
        let _ = transition(&state, Action::SetPlaylist(None));
        assert_eq!(state, copy);
        assert_eq!(state.playlists.len(), 1);
    }

    #[test]
    fn player_state_is_idempotent() {
        let state = AppState::default();
        let once = transition(&state, Action::SetPlayerState(true));
        let twice = transition(&once, Action::SetPlayerState(true));
        assert_eq!(once, twice);
    }

    #[test]
    fn set_playlists_on_initial_state() {
        let state = AppState::default();
        let playlists = Vector::from(vec![PlaylistSummary::new("p1", "Chill")]);
        let next = transition(&state, Action::SetPlaylists(playlists.clone()));

        assert_eq!(next.playlists, playlists);
        assert_eq!(next, AppState { playlists, ..AppState::default() });
    }

    #[test]
    fn deleting_a_track_replaces_the_whole_playlist() {
        let state = populated();
        let current = state.selected_playlist.clone().unwrap();
        let rebuilt = current.without_track("spotify:track:a");

        let next = transition(&state, Action::SetPlaylist(Some(Arc::new(rebuilt))));
        let tracks = &next.selected_playlist.as_ref().unwrap().tracks;

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, "b");
        assert_eq!(state.selected_playlist.as_ref().unwrap().tracks.len(), 2);
    }

    #[test]
    fn play_then_player_state_are_both_visible() {
        let playing = CurrentlyPlaying {
            id: "t1".into(),
            uri: Some("spotify:track:t1".into()),
            ..CurrentlyPlaying::default()
        };
        let state = transition(&AppState::default(), Action::SetPlaying(Some(Arc::new(playing))));
        let state = transition(&state, Action::SetPlayerState(true));

        assert_eq!(state.current_playing.as_ref().map(|p| p.id.as_str()), Some("t1"));
        assert_eq!(state.current_uri(), Some("spotify:track:t1"));
        assert!(state.player_state);
    }
}
