use reqwest::header::InvalidHeaderValue;

/// Everything that stops a smoke run before it finishes.
///
/// Create and list responses never end up here: whatever the server answers
/// on those two calls is reported, not treated as a failure.
#[derive(Debug, thiserror::Error)]
pub enum SmokeError {
    #[error("login failed with status {status}: {body}")]
    LoginRejected { status: u16, body: String },
    #[error("login succeeded but the response has no string `token` field")]
    MissingToken,
    #[error("login succeeded but the response is not valid JSON: {body}")]
    InvalidLoginBody {
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("token cannot be sent as an Authorization header")]
    InvalidToken(#[from] InvalidHeaderValue),
    #[error("invalid value {value:?} for {var}")]
    InvalidConfig { var: &'static str, value: String },
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),
    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}

impl SmokeError {
    /// Whether the runner already printed this failure to the report.
    pub fn is_reported(&self) -> bool {
        matches!(self, SmokeError::LoginRejected { .. })
    }
}
