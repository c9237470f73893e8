// Run configuration: where the API lives, which account to log in with and
// which category to create. Defaults match the local development server;
// every field can be overridden through the environment.

use std::time::Duration;

use crate::api::{Category, Credentials};
use crate::error::SmokeError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3005";

/// Everything a smoke run needs to know about its target.
#[derive(Clone, Debug)]
pub struct SmokeConfig {
    pub base_url: String,
    pub credentials: Credentials,
    pub category: Category,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        SmokeConfig {
            base_url: DEFAULT_BASE_URL.into(),
            credentials: Credentials {
                email: "admin@digikoder.local".into(),
                password: "admin123".into(),
            },
            category: Category {
                id: "test".into(),
                label: "Test Catégorie".into(),
                icon: "Filter".into(),
            },
            timeout: None,
        }
    }
}

impl SmokeConfig {
    /// Build a configuration from the process environment, falling back to
    /// the defaults for anything that is not set.
    pub fn from_env() -> Result<Self, SmokeError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as `from_env`, but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SmokeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SmokeConfig::default();

        if let Some(url) = lookup("CATEGORY_API_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(email) = lookup("SMOKE_EMAIL") {
            config.credentials.email = email;
        }
        if let Some(password) = lookup("SMOKE_PASSWORD") {
            config.credentials.password = password;
        }
        if let Some(id) = lookup("SMOKE_CATEGORY_ID") {
            config.category.id = id;
        }
        if let Some(label) = lookup("SMOKE_CATEGORY_LABEL") {
            config.category.label = label;
        }
        if let Some(icon) = lookup("SMOKE_CATEGORY_ICON") {
            config.category.icon = icon;
        }
        if let Some(secs) = lookup("SMOKE_TIMEOUT_SECS") {
            let parsed = secs
                .trim()
                .parse::<u64>()
                .map_err(|_| SmokeError::InvalidConfig {
                    var: "SMOKE_TIMEOUT_SECS",
                    value: secs.clone(),
                })?;
            config.timeout = Some(Duration::from_secs(parsed));
        }

        Ok(config)
    }

    /// Absolute URL for an API path such as `/api/login`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
