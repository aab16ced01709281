pub mod playlist;
pub mod search;
pub mod track;
pub mod user;

pub use playlist::{Playlist, PlaylistSummary};
pub use search::{Suggestion, TrackSuggestion};
pub use track::{CurrentlyPlaying, Track};
pub use user::UserInfo;
