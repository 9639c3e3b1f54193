use thiserror::Error;

#[derive(Debug, Error)]
pub enum DilemmaError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Completion API error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to access completion API: {0}")]
    Completion(String),
}

impl DilemmaError {
    /// Builds an upstream error from a raw response body, which is not
    /// guaranteed to be UTF-8.
    #[must_use]
    pub fn upstream(status: u16, raw_body: &[u8]) -> Self {
        DilemmaError::Upstream {
            status,
            body: sanitize_utf8(raw_body),
        }
    }
}

impl From<reqwest::Error> for DilemmaError {
    fn from(error: reqwest::Error) -> Self {
        DilemmaError::Http(error.to_string())
    }
}

/// Decodes bytes as UTF-8, replacing every invalid sequence with U+FFFD.
#[must_use]
pub fn sanitize_utf8(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Sanitizes an error's display text before it is embedded in a response.
#[must_use]
pub fn sanitize_message(error: &DilemmaError) -> String {
    sanitize_utf8(error.to_string().as_bytes())
}
