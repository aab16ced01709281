//! Wire shapes of the streaming API and their mapping onto the domain model.

use serde::{Deserialize, Serialize};

use crate::model::{Playlist, PlaylistSummary, Suggestion, Track, TrackSuggestion, UserInfo};

/// Album art index used for list rows (the smallest rendition).
const THUMBNAIL: usize = 2;

#[derive(Debug, Deserialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct ImageDto {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AlbumDto {
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub images: Option<Vec<ImageDto>>,
}

#[derive(Debug, Deserialize)]
pub struct TrackDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    pub album: AlbumDto,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub track_number: u32,
    pub uri: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<TrackDto>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<ImageDto>>,
    pub tracks: Paging<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
pub struct SearchAlbum {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub images: Option<Vec<ImageDto>>,
    pub uri: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
pub struct SearchArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Option<Vec<ImageDto>>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<Paging<TrackDto>>,
    pub albums: Option<Paging<SearchAlbum>>,
    pub artists: Option<Paging<SearchArtist>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthResponse {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UriRef<'a> {
    pub uri: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RemoveTracksBody<'a> {
    pub tracks: Vec<UriRef<'a>>,
}

#[derive(Debug, Serialize)]
pub struct AddTracksBody<'a> {
    pub uris: Vec<&'a str>,
    pub position: u32,
}

#[derive(Debug, Serialize)]
pub struct Offset {
    pub position: u32,
}

#[derive(Debug, Serialize)]
pub struct PlayBody<'a> {
    pub context_uri: &'a str,
    pub offset: Offset,
    pub position_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct CreatePlaylistBody<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub public: bool,
}

#[derive(Debug, Serialize)]
pub struct RegisterBody<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Picks `index`, falling back to the last rendition when fewer exist.
fn pick_image(images: &Option<Vec<ImageDto>>, index: usize) -> Option<String> {
    let images = images.as_deref()?;
    images.get(index).or(images.last()).map(|i| i.url.clone())
}

fn artist_names(artists: Vec<ArtistRef>) -> Vec<String> {
    artists.into_iter().map(|a| a.name).collect()
}

impl From<TrackDto> for Track {
    fn from(track: TrackDto) -> Self {
        Self {
            image: pick_image(&track.album.images, THUMBNAIL),
            id: track.id.unwrap_or_default(),
            name: track.name,
            artists: artist_names(track.artists),
            duration_ms: track.duration_ms,
            album: track.album.name,
            context_uri: track.album.uri,
            track_number: track.track_number,
            uri: track.uri,
        }
    }
}

impl From<TrackDto> for TrackSuggestion {
    fn from(track: TrackDto) -> Self {
        Self {
            image: pick_image(&track.album.images, THUMBNAIL),
            id: track.id.unwrap_or_default(),
            name: track.name,
            artists: artist_names(track.artists),
            context_uri: track.album.uri,
            track_number: track.track_number,
            uri: track.uri,
        }
    }
}

impl From<PlaylistDto> for Playlist {
    fn from(playlist: PlaylistDto) -> Self {
        // Editorial playlists ship an HTML link as their description.
        let description = playlist
            .description
            .filter(|d| !d.starts_with("<a"))
            .unwrap_or_default();

        Self {
            image: pick_image(&playlist.images, 0),
            id: playlist.id,
            name: playlist.name,
            description,
            tracks: playlist
                .tracks
                .items
                .into_iter()
                .filter_map(|item| item.track)
                .map(Track::from)
                .collect(),
        }
    }
}

impl From<PlaylistRef> for PlaylistSummary {
    fn from(playlist: PlaylistRef) -> Self {
        Self::new(playlist.id, playlist.name)
    }
}

impl From<UserDto> for UserInfo {
    fn from(user: UserDto) -> Self {
        Self {
            name: user.display_name.unwrap_or_else(|| user.id.clone()),
            user_id: user.id,
            user_url: user.external_urls.spotify,
        }
    }
}

impl SearchResponse {
    /// Tracks first, then at most `cap` albums and `cap` artists.
    pub fn into_suggestions(self, cap: usize) -> Vec<Suggestion> {
        let tracks = self
            .tracks
            .map(|p| p.items)
            .unwrap_or_default()
            .into_iter()
            .map(|t| Suggestion::Track(t.into()));

        let albums = self
            .albums
            .map(|p| p.items)
            .unwrap_or_default()
            .into_iter()
            .take(cap)
            .map(|album| Suggestion::Album {
                image: pick_image(&album.images, THUMBNAIL),
                id: album.id,
                name: album.name,
                artists: artist_names(album.artists),
                context_uri: album.uri,
                external_url: album.external_urls.spotify,
            });

        let artists = self
            .artists
            .map(|p| p.items)
            .unwrap_or_default()
            .into_iter()
            .take(cap)
            .map(|artist| Suggestion::Artist {
                image: pick_image(&artist.images, THUMBNAIL),
                id: artist.id,
                name: artist.name,
                external_url: artist.external_urls.spotify,
            });

        tracks.chain(albums).chain(artists).collect()
    }
}
