use url::Url;

use crate::{ClientError, Result};

pub static ENV_VAR_BASE_URL: &str = "BOOKS_API_BASE_URL";
pub static DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Connection settings for the book catalog API.
///
/// Resolved once at startup and handed to [`crate::Client::new`]; the client
/// never reads the environment on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate `base_url` and store its normalized form without trailing
    /// slashes. A query or fragment would swallow the request paths, so both
    /// are rejected.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|err| ClientError::InvalidUrl(format!("{}: {}", base_url, err)))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ClientError::InvalidUrl(format!(
                    "{}: unsupported scheme '{}'",
                    base_url, other
                )))
            }
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ClientError::InvalidUrl(format!(
                "{}: query and fragment are not allowed",
                base_url
            )));
        }

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Read the base URL from `BOOKS_API_BASE_URL`, falling back to
    /// `http://localhost:5000` when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(ENV_VAR_BASE_URL).ok())
    }

    /// Like [`ClientConfig::from_env`], but an unset or blank variable is an
    /// error.
    pub fn from_env_required() -> Result<Self> {
        Self::from_env_required_value(std::env::var(ENV_VAR_BASE_URL).ok())
    }

    fn from_env_required_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Err(ClientError::MissingConfig(ENV_VAR_BASE_URL)),
        }
    }

    fn from_env_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => {
                tracing::warn!(
                    base_url = DEFAULT_BASE_URL,
                    "{} not set, using default base URL",
                    ENV_VAR_BASE_URL
                );
                Self::new(DEFAULT_BASE_URL)
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
