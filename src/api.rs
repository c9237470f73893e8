// API client module: a small blocking HTTP client for the category API.
// Each method performs exactly one request and hands the answer back to
// the runner, which decides what to print.

use std::fmt;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::SmokeConfig;
use crate::error::SmokeError;

/// Simple API client that holds a reqwest blocking client, the base URL
/// of the category API and an optional bearer token for authenticated calls.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: SmokeConfig,
    token: Option<String>,
}

/// Login request payload.
#[derive(Serialize, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Category payload sent to the create endpoint.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub icon: String,
}

/// Body of a response, parsed as JSON when possible. The server owns the
/// shape, so nothing beyond "is it JSON" is checked.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Raw(String),
}

impl ResponseBody {
    pub fn parse(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Raw(text),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Raw(_) => None,
        }
    }
}

/// Status and body of a create or list call.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiClient {
    /// Build a client for the API described by `config`.
    pub fn new(config: &SmokeConfig) -> Result<Self, SmokeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(ApiClient {
            client: builder.build()?,
            config: config.clone(),
            token: None,
        })
    }

    /// Store a bearer token for subsequent authenticated requests.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    /// Build the Authorization header map when a token is set.
    fn auth_headers(&self) -> Result<HeaderMap, SmokeError> {
        let mut headers = HeaderMap::new();
        if let Some(t) = &self.token {
            let mut val = HeaderValue::from_str(&format!("Bearer {}", t))?;
            val.set_sensitive(true);
            headers.insert(AUTHORIZATION, val);
        }
        Ok(headers)
    }

    /// POST the configured credentials to /api/login and return the token.
    ///
    /// Anything other than 200 comes back as `SmokeError::LoginRejected`
    /// carrying the raw body, so the caller can show what the server said.
    pub fn login(&self) -> Result<String, SmokeError> {
        let url = self.config.url("/api/login");
        debug!(%url, email = %self.config.credentials.email, "POST login");
        let res = self
            .client
            .post(&url)
            .json(&self.config.credentials)
            .send()?;

        let status = res.status();
        let body = res.text()?;
        debug!(status = status.as_u16(), "login responded");
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "login rejected");
            return Err(SmokeError::LoginRejected {
                status: status.as_u16(),
                body,
            });
        }
        extract_token(&body)
    }

    /// POST the configured category to /api/categories with the bearer token.
    /// The response is returned whatever its status.
    pub fn create_category(&self) -> Result<ApiResponse, SmokeError> {
        let url = self.config.url("/api/categories");
        debug!(%url, id = %self.config.category.id, "POST category");
        let res = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(&self.config.category)
            .send()?;
        read_response(res)
    }

    /// GET /api/categories. Never sends the token, even when one is set.
    pub fn list_categories(&self) -> Result<ApiResponse, SmokeError> {
        let url = self.config.url("/api/categories");
        debug!(%url, "GET categories");
        let res = self.client.get(&url).send()?;
        read_response(res)
    }
}

fn read_response(res: reqwest::blocking::Response) -> Result<ApiResponse, SmokeError> {
    let status = res.status();
    let text = res.text()?;
    debug!(status = status.as_u16(), bytes = text.len(), "response received");
    Ok(ApiResponse {
        status,
        body: ResponseBody::parse(text),
    })
}

/// Longest prefix of an unparsable login body kept in the error.
const BODY_PREFIX_CHARS: usize = 200;

/// Pull the `token` string out of a successful login body.
pub fn extract_token(body: &str) -> Result<String, SmokeError> {
    let json: Value =
        serde_json::from_str(body).map_err(|source| SmokeError::InvalidLoginBody {
            body: body.chars().take(BODY_PREFIX_CHARS).collect(),
            source,
        })?;
    json.get("token")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(SmokeError::MissingToken)
}
