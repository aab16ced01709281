/// A track as listed inside a hydrated playlist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub image: Option<String>,
    pub duration_ms: u64,
    pub album: String,
    /// URI of the album the track belongs to, used as the playback context.
    pub context_uri: String,
    /// 1-based position of the track inside its album.
    pub track_number: u32,
    pub uri: String,
}

impl Track {
    /// Zero-based offset of this track inside `context_uri`.
    pub fn offset(&self) -> u32 {
        self.track_number.saturating_sub(1)
    }

    pub fn artists_line(&self) -> String {
        self.artists.join(", ")
    }
}

/// The track loaded into the player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrentlyPlaying {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub image: Option<String>,
    pub uri: Option<String>,
}

impl From<&Track> for CurrentlyPlaying {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            name: track.name.clone(),
            artists: track.artists.clone(),
            image: track.image.clone(),
            uri: Some(track.uri.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(track_number: u32) -> Track {
        Track {
            id: "t1".to_string(),
            name: "Intro".to_string(),
            artists: vec!["A".to_string(), "B".to_string()],
            image: None,
            duration_ms: 61_000,
            album: "Album".to_string(),
            context_uri: "spotify:album:a1".to_string(),
            track_number,
            uri: "spotify:track:t1".to_string(),
        }
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(track(1).offset(), 0);
        assert_eq!(track(7).offset(), 6);
        assert_eq!(track(0).offset(), 0);
    }

    #[test]
    fn currently_playing_keeps_uri() {
        let playing = CurrentlyPlaying::from(&track(3));
        assert_eq!(playing.uri.as_deref(), Some("spotify:track:t1"));
        assert_eq!(playing.artists, vec!["A", "B"]);
        assert_eq!(track(3).artists_line(), "A, B");
    }
}
