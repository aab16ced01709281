pub mod add_to_playlist;
pub mod create_playlist;
pub mod login;
pub mod playlist_detail;
pub mod playlists;
pub mod search;

pub use add_to_playlist::AddToPlaylist;
pub use create_playlist::CreatePlaylist;
pub use login::Login;
pub use playlist_detail::PlaylistDetail;
pub use playlists::Playlists;
pub use search::Search;
