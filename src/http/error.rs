use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Host unreachable: {0}")]
    Unreachable(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid playlist link: {0}")]
    InvalidPlaylistLink(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("No user id available")]
    MissingUser,
}

/// Longest error body kept in a status error, in characters.
const MAX_BODY_CHARS: usize = 120;

impl ApiError {
    /// Builds a status error from a response body, keeping only its
    /// `error.message` (or `message`) when the body is JSON, otherwise its
    /// first line, cut to [`MAX_BODY_CHARS`].
    pub(crate) fn status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: summarize_body(body),
        }
    }

    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ApiError::Unreachable(e.to_string())
        } else {
            ApiError::Request(e)
        }
    }
}

fn summarize_body(body: &str) -> String {
    let json_message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .or_else(|| v.pointer("/message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });

    let text = json_message.unwrap_or_else(|| {
        body.lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or_default()
            .to_string()
    });

    if text.chars().count() > MAX_BODY_CHARS {
        let mut cut: String = text.chars().take(MAX_BODY_CHARS).collect();
        cut.push('…');
        cut
    } else {
        text
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_bodies_keep_only_the_message() {
        let body = r#"{"error":{"status":404,"message":"Player command failed: No active device found"}}"#;
        assert_eq!(
            ApiError::status(404, body).to_string(),
            "API error (404): Player command failed: No active device found"
        );
    }

    #[test]
    fn long_bodies_are_cut() {
        let body = format!("<html>\n{}\n</html>", "x".repeat(10_000));
        match ApiError::status(502, &body) {
            ApiError::Status { message, .. } => {
                assert_eq!(message, "<html>");
            }
            other => panic!("unexpected {other:?}"),
        }

        match ApiError::status(500, &"y".repeat(500)) {
            ApiError::Status { message, .. } => {
                assert_eq!(message.chars().count(), MAX_BODY_CHARS + 1);
                assert!(message.ends_with('…'));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
