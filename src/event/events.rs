use crate::{
    model::{PlaylistSummary, Suggestion, Track, TrackSuggestion},
    ops::NewPlaylist,
    store::Action,
};

#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    // Events
    Dispatch(Action),
    Notify(String),
    SearchResults(String, Vec<Suggestion>),
    TrackRemoved { playlist_id: String, uri: String },
    PlaylistCreated(PlaylistSummary),
    LoginStatus(String),
    RegisterStatus(String),
    AuthorizeReady(String),

    // Commands
    SubmitToken(String),
    Login {
        email: String,
        password: String,
    },
    Register {
        email: String,
        username: String,
        password: String,
    },
    SelectPlaylist(String),
    PlayTrack(Track),
    PlaySuggestion(TrackSuggestion),
    DeleteTrack(Track),
    AddToPlaylists(Vec<String>),
    CreatePlaylist(NewPlaylist),
    Search(String),
    TogglePlayback,
}
