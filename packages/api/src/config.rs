//! Backend configuration from the environment.

use reqwest::Url;
use thiserror::Error;

/// Variable holding the base URL of the users collection.
pub const API_URL_VAR: &str = "USERS_API_URL";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("USERS_API_URL not set")]
    Missing,

    #[error("USERS_API_URL is not a valid URL ({value}): {reason}")]
    InvalidUrl { value: String, reason: String },
}

/// Where the users collection lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate `base_url` as an absolute URL. A trailing `/` is dropped so
    /// item URLs can be built as `{base}/{id}`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            value: trimmed.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Read [`API_URL_VAR`] once at startup.
    ///
    /// Native builds load a `.env` file first and read the process
    /// environment. Browser builds have no environment at runtime, so the
    /// value is captured when the crate is compiled.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(target_arch = "wasm32")]
        let raw = option_env!("USERS_API_URL").map(str::to_string);

        #[cfg(not(target_arch = "wasm32"))]
        let raw = {
            dotenvy::dotenv().ok();
            std::env::var(API_URL_VAR).ok()
        };

        match raw.filter(|value| !value.trim().is_empty()) {
            Some(value) => Self::new(&value),
            None => Err(ConfigError::Missing),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
