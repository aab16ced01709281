use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::{
    http::{
        dto::{
            AddTracksBody, CreatePlaylistBody, Offset, Paging, PlayBody, PlaylistDto,
            PlaylistItem, PlaylistRef, RemoveTracksBody, SearchResponse, UriRef, UserDto,
        },
        error::{ApiError, Result},
    },
    model::{Playlist, PlaylistSummary, Suggestion, UserInfo},
};

const NEW_PLAYLIST_DESCRIPTION: &str = "New playlist description";

/// How the player answered a play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStart {
    /// `204 No Content`: playback switched to the requested context.
    Confirmed,
    /// Any other success status.
    Accepted,
}

/// Unauthenticated entry point to the streaming API.
#[derive(Clone)]
pub struct SpotifyApi {
    http: Client,
    base_url: Arc<str>,
    market: Arc<str>,
    search_limit: u8,
    suggestion_cap: usize,
}

impl SpotifyApi {
    pub fn new(
        http: Client,
        base_url: &str,
        market: &str,
        search_limit: u8,
        suggestion_cap: usize,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').into(),
            market: market.into(),
            search_limit,
            suggestion_cap,
        }
    }

    /// Binds a bearer token; the returned client is cheap to clone into tasks.
    pub fn authorized(&self, token: impl Into<String>) -> SpotifyClient {
        SpotifyClient {
            api: self.clone(),
            token: token.into(),
        }
    }
}

#[derive(Clone)]
pub struct SpotifyClient {
    api: SpotifyApi,
    token: String,
}

impl SpotifyClient {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ApiError::from_send)?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %message, "streaming API rejected request");
            Err(ApiError::status(status.as_u16(), &message))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let response = self.send(self.api.http.get(&url)).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("{path}: {e}")))
    }

    pub async fn me(&self) -> Result<UserInfo> {
        let user: UserDto = self.get_json("/me").await?;
        Ok(user.into())
    }

    pub async fn my_playlists(&self) -> Result<Vec<PlaylistSummary>> {
        let page: Paging<PlaylistRef> = self.get_json("/me/playlists").await?;
        Ok(page.items.into_iter().map(Into::into).collect())
    }

    pub async fn playlist(&self, playlist_id: &str) -> Result<Playlist> {
        let playlist: PlaylistDto = self.get_json(&format!("/playlists/{playlist_id}")).await?;
        Ok(playlist.into())
    }

    pub async fn playlist_track_count(&self, playlist_id: &str) -> Result<usize> {
        let page: Paging<PlaylistItem> = self
            .get_json(&format!("/playlists/{playlist_id}/tracks"))
            .await?;
        Ok(page.items.len())
    }

    pub async fn remove_track(&self, playlist_id: &str, uri: &str) -> Result<()> {
        let url = self.url(&format!("/playlists/{playlist_id}/tracks"));
        let body = RemoveTracksBody {
            tracks: vec![UriRef { uri }],
        };
        self.send(self.api.http.delete(&url).json(&body)).await?;
        info!(playlist_id, uri, "track removed from playlist");
        Ok(())
    }

    pub async fn add_track(&self, playlist_id: &str, uri: &str, position: u32) -> Result<()> {
        let url = self.url(&format!("/playlists/{playlist_id}/tracks"));
        let body = AddTracksBody {
            uris: vec![uri],
            position,
        };
        self.send(self.api.http.post(&url).json(&body)).await?;
        info!(playlist_id, uri, position, "track added to playlist");
        Ok(())
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Suggestion>> {
        let url = self.url("/search");
        let limit = self.api.search_limit.to_string();
        let request = self.api.http.get(&url).query(&[
            ("q", query),
            ("type", "track,album,artist"),
            ("market", self.api.market.as_ref()),
            ("limit", limit.as_str()),
        ]);
        let response = self.send(request).await?;
        let results: SearchResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("/search: {e}")))?;
        Ok(results.into_suggestions(self.api.suggestion_cap))
    }

    /// Starts `context_uri` at the zero-based `position`, from its beginning.
    pub async fn play(&self, context_uri: &str, position: u32) -> Result<PlaybackStart> {
        let url = self.url("/me/player/play");
        let body = PlayBody {
            context_uri,
            offset: Offset { position },
            position_ms: 0,
        };
        let response = self.send(self.api.http.put(&url).json(&body)).await?;
        Ok(if response.status() == StatusCode::NO_CONTENT {
            PlaybackStart::Confirmed
        } else {
            PlaybackStart::Accepted
        })
    }

    pub async fn resume(&self) -> Result<()> {
        let url = self.url("/me/player/play");
        self.send(self.api.http.put(&url)).await?;
        Ok(())
    }

    pub async fn pause(&self) -> Result<()> {
        let url = self.url("/me/player/pause");
        self.send(self.api.http.put(&url)).await?;
        Ok(())
    }

    pub async fn create_playlist(&self, user_id: &str, name: &str) -> Result<PlaylistSummary> {
        let url = self.url(&format!("/users/{user_id}/playlists"));
        let body = CreatePlaylistBody {
            name,
            description: NEW_PLAYLIST_DESCRIPTION,
            public: false,
        };
        let response = self.send(self.api.http.post(&url).json(&body)).await?;
        let created: PlaylistRef = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("create playlist: {e}")))?;
        info!(playlist_id = %created.id, name, "playlist created");
        Ok(created.into())
    }
}

/// Extracts the playlist id from an `open.spotify.com/playlist/<id>?...` link.
pub fn parse_playlist_link(link: &str) -> Result<String> {
    let id = link
        .split_once("playlist/")
        .map(|(_, rest)| rest)
        .and_then(|rest| rest.split(['?', '/', '#']).next())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::InvalidPlaylistLink(link.to_string()))?;
    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_link_variants() {
        assert_eq!(
            parse_playlist_link("https://open.spotify.com/playlist/37i9dQZF?si=abc").unwrap(),
            "37i9dQZF"
        );
        assert_eq!(
            parse_playlist_link("https://open.spotify.com/playlist/xyz").unwrap(),
            "xyz"
        );
        assert_eq!(parse_playlist_link("open.spotify.com/playlist/xyz/").unwrap(), "xyz");
    }

    #[test]
    fn malformed_links_are_rejected() {
        for link in ["", "https://open.spotify.com/album/xyz", "playlist/?si=1"] {
            assert!(matches!(
                parse_playlist_link(link),
                Err(ApiError::InvalidPlaylistLink(_))
            ));
        }
    }
}
