pub mod auth;
pub mod dto;
pub mod error;
pub mod spotify;

use reqwest::Client;

pub use auth::{AuthBackend, AuthOutcome};
pub use error::{ApiError, Result};
pub use spotify::{PlaybackStart, SpotifyApi, SpotifyClient};

use crate::config::Config;

pub struct ApiService {
    pub spotify: SpotifyApi,
    pub auth: AuthBackend,
}

impl ApiService {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("spotiterm/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            spotify: SpotifyApi::new(
                http.clone(),
                &config.api_url,
                &config.market,
                config.search_limit,
                config.suggestion_cap,
            ),
            auth: AuthBackend::new(http, &config.auth_url),
        })
    }

    pub fn authorized(&self, token: impl Into<String>) -> SpotifyClient {
        self.spotify.authorized(token)
    }
}
