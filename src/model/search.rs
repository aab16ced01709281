use super::track::CurrentlyPlaying;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackSuggestion {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub image: Option<String>,
    pub context_uri: String,
    pub track_number: u32,
    pub uri: String,
}

impl TrackSuggestion {
    pub fn offset(&self) -> u32 {
        self.track_number.saturating_sub(1)
    }
}

impl From<&TrackSuggestion> for CurrentlyPlaying {
    fn from(track: &TrackSuggestion) -> Self {
        Self {
            id: track.id.clone(),
            name: track.name.clone(),
            artists: track.artists.clone(),
            image: track.image.clone(),
            uri: Some(track.uri.clone()),
        }
    }
}

/// One entry of the search dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Track(TrackSuggestion),
    Album {
        id: String,
        name: String,
        artists: Vec<String>,
        image: Option<String>,
        context_uri: String,
        external_url: Option<String>,
    },
    Artist {
        id: String,
        name: String,
        image: Option<String>,
        external_url: Option<String>,
    },
}

impl Suggestion {
    pub fn name(&self) -> &str {
        match self {
            Suggestion::Track(track) => &track.name,
            Suggestion::Album { name, .. } | Suggestion::Artist { name, .. } => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Suggestion::Track(_) => "track",
            Suggestion::Album { .. } => "album",
            Suggestion::Artist { .. } => "artist",
        }
    }

    pub fn external_url(&self) -> Option<&str> {
        match self {
            Suggestion::Track(_) => None,
            Suggestion::Album { external_url, .. } | Suggestion::Artist { external_url, .. } => {
                external_url.as_deref()
            }
        }
    }
}
