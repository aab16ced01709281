use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use crate::{
    config::{Config, SCOPES},
    http::{
        dto::{AuthResponse, LoginBody, RegisterBody},
        error::{ApiError, Result},
    },
};

/// Answer of the account backend to a login or register request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Accepted,
    Rejected(String),
}

/// Client for the small account backend guarding the authorize redirect.
#[derive(Clone)]
pub struct AuthBackend {
    http: Client,
    base_url: String,
}

impl AuthBackend {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn register(&self, email: &str, username: &str, password: &str) -> Result<AuthOutcome> {
        let url = format!("{}/register", self.base_url);
        debug!(url = %url, email, username, "registering account");
        let body = RegisterBody {
            email,
            username,
            password,
        };
        self.post(&url, &body).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        let url = format!("{}/login", self.base_url);
        debug!(url = %url, email, "logging in");
        let body = LoginBody { email, password };
        self.post(&url, &body).await
    }

    async fn post<B: serde::Serialize>(&self, url: &str, body: &B) -> Result<AuthOutcome> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %message, "auth backend error");
            return Err(ApiError::status(status.as_u16(), &message));
        }

        // An empty body counts as success, same as a body without `message`.
        let text = response.text().await?;
        let parsed: AuthResponse = if text.trim().is_empty() {
            AuthResponse::default()
        } else {
            serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))?
        };

        Ok(match parsed.message {
            Some(message) => {
                info!(message = %message, "auth backend rejected request");
                AuthOutcome::Rejected(message)
            }
            None => AuthOutcome::Accepted,
        })
    }
}

/// Implicit-grant authorize URL the user opens after a successful login.
pub fn authorize_url(config: &Config) -> Result<String> {
    let scope = SCOPES.join(" ");
    let url = Url::parse_with_params(
        &config.authorize_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("response_type", "token"),
            ("show_dialog", "true"),
        ],
    )
    .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    Ok(url.into())
}

/// Accepts `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("hung@hust.edu.vn"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
        assert!(!is_valid_email("a@.d"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn authorize_url_carries_client_and_scopes() {
        let url = authorize_url(&Config::default()).unwrap();
        assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
        assert!(url.contains("client_id=5ce22bf9a89040eb895942284fe06912"));
        assert!(url.contains("response_type=token"));
        assert!(url.contains("show_dialog=true"));
        assert!(url.contains("playlist-modify-private"));
    }
}
