use im::Vector;

use super::track::Track;

const SHARE_BASE: &str = "https://open.spotify.com/playlist";

/// Sidebar entry: just enough to list and select a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
}

impl PlaylistSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A fully hydrated playlist with its ordered tracks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub tracks: Vector<Track>,
}

impl Playlist {
    /// Returns the same record with every track matching `uri` removed.
    pub fn without_track(&self, uri: &str) -> Self {
        Self {
            tracks: self
                .tracks
                .iter()
                .filter(|t| t.uri != uri)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    pub fn share_url(&self) -> String {
        share_url(&self.id)
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.tracks.iter().map(|t| t.duration_ms).sum()
    }
}

impl From<&Playlist> for PlaylistSummary {
    fn from(playlist: &Playlist) -> Self {
        Self::new(playlist.id.clone(), playlist.name.clone())
    }
}

pub fn share_url(playlist_id: &str) -> String {
    format!("{SHARE_BASE}/{playlist_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            name: id.to_uppercase(),
            artists: vec![],
            image: None,
            duration_ms: 1_000,
            album: String::new(),
            context_uri: String::new(),
            track_number: 1,
            uri: format!("spotify:track:{id}"),
        }
    }

    #[test]
    fn without_track_keeps_everything_else() {
        let playlist = Playlist {
            id: "p1".into(),
            name: "Chill".into(),
            description: "slow".into(),
            image: Some("img".into()),
            tracks: Vector::from(vec![track("a"), track("b"), track("c")]),
        };

        let trimmed = playlist.without_track("spotify:track:b");

        assert_eq!(trimmed.tracks.len(), 2);
        assert!(trimmed.tracks.iter().all(|t| t.id != "b"));
        assert_eq!(trimmed.name, playlist.name);
        assert_eq!(trimmed.image, playlist.image);
        assert_eq!(playlist.tracks.len(), 3);
        assert_eq!(trimmed.total_duration_ms(), 2_000);
    }

    #[test]
    fn share_url_points_at_open_spotify() {
        assert_eq!(share_url("xyz"), "https://open.spotify.com/playlist/xyz");
    }
}
