//! Network-backed operations started from the UI.
//!
//! Each operation runs inside a spawned task and never touches the store:
//! results travel back to the event loop as [`Event`]s, which dispatches
//! them in arrival order.

use std::sync::Arc;

use flume::Sender;
use tracing::{error, info, warn};

use crate::{
    config::Config,
    event::events::Event,
    http::{
        ApiError, AuthBackend, AuthOutcome, PlaybackStart, SpotifyClient,
        auth::{authorize_url, is_valid_email},
        spotify::parse_playlist_link,
    },
    model::{CurrentlyPlaying, PlaylistSummary, Track, TrackSuggestion},
    store::{Action, AppState},
};

pub const DELETE_OK: &str = "Song deleted successfully!";
pub const DELETE_FAILED: &str = "Error deleting song.";
pub const ADD_OK: &str = "Song added to selected playlists!";
pub const ADD_FAILED: &str = "Error adding song to playlists.";
pub const PLAYLIST_EMPTY: &str = "The selected playlist is empty.";
pub const NOTHING_PLAYING: &str = "Nothing is playing.";
pub const WRONG_EMAIL: &str = "WRONG EMAIL FORMAT";
pub const ACCOUNT_CREATED: &str = "ACCOUNT CREATED SUCCESSFULLY";

/// How a new sidebar playlist is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewPlaylist {
    ByName(String),
    ByLink(String),
}

/// Everything a play request needs: what to show and where to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayTarget {
    pub playing: CurrentlyPlaying,
    pub context_uri: String,
    pub position: u32,
}

impl From<&Track> for PlayTarget {
    fn from(track: &Track) -> Self {
        Self {
            playing: track.into(),
            context_uri: track.context_uri.clone(),
            position: track.offset(),
        }
    }
}

impl From<&TrackSuggestion> for PlayTarget {
    fn from(track: &TrackSuggestion) -> Self {
        Self {
            playing: track.into(),
            context_uri: track.context_uri.clone(),
            position: track.offset(),
        }
    }
}

fn dispatch(tx: &Sender<Event>, action: Action) {
    let _ = tx.send(Event::Dispatch(action));
}

fn notify(tx: &Sender<Event>, message: impl Into<String>) {
    let _ = tx.send(Event::Notify(message.into()));
}

/// Selects the home playlist, then loads the profile and sidebar playlists.
pub async fn start_session(client: SpotifyClient, home_playlist: String, tx: Sender<Event>) {
    dispatch(&tx, Action::SetPlaylistId(Some(home_playlist)));

    match client.me().await {
        Ok(user) => {
            info!(user_id = %user.user_id, "session started");
            dispatch(&tx, Action::SetUserInfo(Some(user)));
        }
        Err(e) => {
            error!("Failed to fetch profile: {}", e);
            notify(&tx, format!("Failed to load profile: {e}"));
        }
    }

    match client.my_playlists().await {
        Ok(playlists) => {
            dispatch(&tx, Action::SetPlaylists(playlists.into_iter().collect()));
        }
        Err(e) => {
            error!("Failed to fetch playlists: {}", e);
            notify(&tx, format!("Failed to load playlists: {e}"));
        }
    }
}

pub async fn load_playlist(client: SpotifyClient, playlist_id: String, tx: Sender<Event>) {
    match client.playlist(&playlist_id).await {
        Ok(playlist) => {
            info!(playlist_id = %playlist.id, tracks = playlist.tracks.len(), "playlist fetched");
            dispatch(&tx, Action::SetPlaylist(Some(Arc::new(playlist))));
        }
        Err(e) => {
            error!(playlist_id = %playlist_id, "Failed to fetch playlist: {}", e);
            notify(&tx, format!("Failed to load playlist: {e}"));
        }
    }
}

pub async fn check_playlist_empty(client: SpotifyClient, playlist_id: String, tx: Sender<Event>) {
    match client.playlist_track_count(&playlist_id).await {
        Ok(0) => notify(&tx, PLAYLIST_EMPTY),
        Ok(_) => {}
        Err(e) => warn!(playlist_id = %playlist_id, "Failed to count playlist tracks: {}", e),
    }
}

pub async fn remove_track(
    client: SpotifyClient,
    playlist_id: String,
    uri: String,
    tx: Sender<Event>,
) {
    match client.remove_track(&playlist_id, &uri).await {
        Ok(()) => {
            let _ = tx.send(Event::TrackRemoved { playlist_id, uri });
            notify(&tx, DELETE_OK);
        }
        Err(e) => {
            error!("Failed to delete track: {}", e);
            notify(&tx, DELETE_FAILED);
        }
    }
}

/// Rebuilds the selected playlist from `state` without `uri`.
///
/// Returns `None` when another playlist has been selected meanwhile.
pub fn without_track(state: &AppState, playlist_id: &str, uri: &str) -> Option<Action> {
    let playlist = state.selected_playlist.as_ref()?;
    if playlist.id != playlist_id {
        return None;
    }
    Some(Action::SetPlaylist(Some(Arc::new(playlist.without_track(uri)))))
}

/// Appends `playlist` to the sidebar list held in `state`.
pub fn with_playlist(state: &AppState, playlist: PlaylistSummary) -> Action {
    let mut playlists = state.playlists.clone();
    playlists.push_back(playlist);
    Action::SetPlaylists(playlists)
}

/// Starts playback; on a confirmed start the player shows `target.playing`.
///
/// Both actions are sent back to back so the loop applies them in one drain.
pub async fn play(client: SpotifyClient, target: PlayTarget, tx: Sender<Event>) {
    match client.play(&target.context_uri, target.position).await {
        Ok(PlaybackStart::Confirmed) => {
            info!(track_id = %target.playing.id, "playback started");
            dispatch(&tx, Action::SetPlaying(Some(Arc::new(target.playing))));
            dispatch(&tx, Action::SetPlayerState(true));
        }
        Ok(PlaybackStart::Accepted) => {
            dispatch(&tx, Action::SetPlayerState(true));
        }
        Err(e) => {
            error!(context_uri = %target.context_uri, "Failed to start playback: {}", e);
            notify(&tx, format!("Playback failed: {e}"));
        }
    }
}

pub async fn toggle_playback(client: SpotifyClient, playing: bool, tx: Sender<Event>) {
    let result = if playing {
        client.pause().await
    } else {
        client.resume().await
    };

    match result {
        Ok(()) => dispatch(&tx, Action::SetPlayerState(!playing)),
        Err(e) => {
            error!("Failed to toggle playback: {}", e);
            notify(&tx, format!("Playback control failed: {e}"));
        }
    }
}

/// Adds `uri` at the top of each playlist, one request at a time.
///
/// Stops at the first failure; playlists already updated stay updated.
pub async fn add_to_playlists(
    client: SpotifyClient,
    uri: String,
    playlist_ids: Vec<String>,
    tx: Sender<Event>,
) {
    for playlist_id in &playlist_ids {
        if let Err(e) = client.add_track(playlist_id, &uri, 0).await {
            error!(playlist_id = %playlist_id, "Error adding song to playlists: {}", e);
            notify(&tx, ADD_FAILED);
            return;
        }
    }
    notify(&tx, ADD_OK);
}

pub async fn create_playlist(
    client: SpotifyClient,
    user_id: Option<String>,
    request: NewPlaylist,
    tx: Sender<Event>,
) {
    let result = match &request {
        NewPlaylist::ByName(name) => match &user_id {
            Some(user_id) => client.create_playlist(user_id, name).await,
            None => Err(ApiError::MissingUser),
        },
        NewPlaylist::ByLink(link) => match parse_playlist_link(link) {
            Ok(playlist_id) => client
                .playlist(&playlist_id)
                .await
                .map(|p| PlaylistSummary::from(&p)),
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(playlist) => {
            let _ = tx.send(Event::PlaylistCreated(playlist));
        }
        Err(e) => {
            error!(request = ?request, "Error creating playlist: {}", e);
            notify(&tx, format!("Error creating playlist: {e}"));
        }
    }
}

pub async fn search(client: SpotifyClient, query: String, tx: Sender<Event>) {
    if query.trim().is_empty() {
        let _ = tx.send(Event::SearchResults(query, Vec::new()));
        return;
    }

    match client.search(&query).await {
        Ok(suggestions) => {
            let _ = tx.send(Event::SearchResults(query, suggestions));
        }
        Err(e) => error!("Error fetching suggestions: {}", e),
    }
}

pub async fn login(
    auth: AuthBackend,
    config: Arc<Config>,
    email: String,
    password: String,
    tx: Sender<Event>,
) {
    match auth.login(&email, &password).await {
        Ok(AuthOutcome::Accepted) => match authorize_url(&config) {
            Ok(url) => {
                let _ = tx.send(Event::AuthorizeReady(url));
            }
            Err(e) => {
                error!("Failed to build authorize url: {}", e);
                let _ = tx.send(Event::LoginStatus(e.to_string()));
            }
        },
        Ok(AuthOutcome::Rejected(message)) => {
            let _ = tx.send(Event::LoginStatus(message));
        }
        Err(e) => {
            error!("Login request failed: {}", e);
            let _ = tx.send(Event::LoginStatus(format!("Login failed: {e}")));
        }
    }
}

pub async fn register(
    auth: AuthBackend,
    email: String,
    username: String,
    password: String,
    tx: Sender<Event>,
) {
    if !is_valid_email(&email) {
        let _ = tx.send(Event::RegisterStatus(WRONG_EMAIL.to_string()));
        return;
    }

    match auth.register(&email, &username, &password).await {
        Ok(AuthOutcome::Accepted) => {
            let _ = tx.send(Event::RegisterStatus(ACCOUNT_CREATED.to_string()));
        }
        Ok(AuthOutcome::Rejected(message)) => {
            let _ = tx.send(Event::RegisterStatus(message));
        }
        Err(e) => {
            error!("Register request failed: {}", e);
            let _ = tx.send(Event::RegisterStatus(format!("Register failed: {e}")));
        }
    }
}
