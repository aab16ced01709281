use std::time::Duration;

/// Scopes requested by the authorize redirect.
pub const SCOPES: &[&str] = &[
    "streaming",
    "user-read-email",
    "user-read-private",
    "user-modify-playback-state",
    "user-read-playback-state",
    "user-read-currently-playing",
    "playlist-read-private",
    "playlist-read-collaborative",
    "playlist-modify-public",
    "playlist-modify-private",
    "user-read-recently-played",
    "user-library-read",
    "user-library-modify",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub token: Option<String>,
    pub api_url: String,
    pub auth_url: String,
    pub authorize_url: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub market: String,
    pub home_playlist: String,
    pub search_limit: u8,
    pub suggestion_cap: usize,
    pub notification_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            api_url: "https://api.spotify.com/v1".to_string(),
            auth_url: "http://localhost:3001".to_string(),
            authorize_url: "https://accounts.spotify.com/authorize".to_string(),
            client_id: "5ce22bf9a89040eb895942284fe06912".to_string(),
            redirect_uri: "http://localhost:3000/".to_string(),
            market: "VN".to_string(),
            home_playlist: "37i9dQZF1DWVOaOWiVD1Lf".to_string(),
            search_limit: 5,
            suggestion_cap: 2,
            notification_ttl: Duration::from_secs(3),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            token: get("SPOTIFY_TOKEN"),
            api_url: get("SPOTITERM_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            auth_url: get("SPOTITERM_AUTH_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.auth_url),
            authorize_url: get("SPOTITERM_AUTHORIZE_URL").unwrap_or(defaults.authorize_url),
            client_id: get("SPOTITERM_CLIENT_ID").unwrap_or(defaults.client_id),
            redirect_uri: get("SPOTITERM_REDIRECT_URI").unwrap_or(defaults.redirect_uri),
            market: get("SPOTITERM_MARKET").unwrap_or(defaults.market),
            home_playlist: get("SPOTITERM_HOME_PLAYLIST").unwrap_or(defaults.home_playlist),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);
        assert!(config.token.is_none());
        assert_eq!(config.api_url, "https://api.spotify.com/v1");
        assert_eq!(config.market, "VN");
        assert_eq!(config.search_limit, 5);
        assert_eq!(config.notification_ttl, Duration::from_secs(3));
    }

    #[test]
    fn overrides_are_trimmed() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SPOTIFY_TOKEN", " abc "),
            ("SPOTITERM_API_URL", "http://127.0.0.1:9000/"),
            ("SPOTITERM_MARKET", ""),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.market, "VN");
    }
}
