use std::env;

use async_trait::async_trait;
use lesson_core::model::{Lesson, LessonsResponse};
use log::debug;
use reqwest::Client;
use url::Url;

use crate::error::{FetchError, SourceConfigError};

/// Endpoint used when `LESSONS_URL` is not set.
pub const DEFAULT_LESSONS_URL: &str = "https://www.jsonkeeper.com/b/7JF5";

/// Where lessons come from.
#[async_trait]
pub trait LessonSource: Send + Sync {
    /// Fetch every lesson in server order.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for any transport, status, or decoding failure.
    async fn fetch(&self) -> Result<Vec<Lesson>, FetchError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonSourceConfig {
    pub endpoint: Url,
}

impl LessonSourceConfig {
    /// # Errors
    ///
    /// Returns `SourceConfigError` if `endpoint` is not an absolute http(s) URL.
    pub fn new(endpoint: &str) -> Result<Self, SourceConfigError> {
        let raw = endpoint.trim();
        let url = Url::parse(raw).map_err(|source| SourceConfigError::InvalidEndpoint {
            raw: raw.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SourceConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(Self { endpoint: url })
    }

    /// Read `LESSONS_URL`, falling back to `DEFAULT_LESSONS_URL`.
    ///
    /// # Errors
    ///
    /// Returns `SourceConfigError` if the configured value is not a usable URL.
    pub fn from_env() -> Result<Self, SourceConfigError> {
        let raw = env::var("LESSONS_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LESSONS_URL.into());
        Self::new(&raw)
    }
}

/// `LessonSource` backed by a single HTTP GET.
#[derive(Clone)]
pub struct HttpLessonSource {
    client: Client,
    config: LessonSourceConfig,
}

impl HttpLessonSource {
    #[must_use]
    pub fn new(config: LessonSourceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Use a preconfigured client (proxies, timeouts, TLS roots).
    #[must_use]
    pub fn with_client(config: LessonSourceConfig, client: Client) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl LessonSource for HttpLessonSource {
    async fn fetch(&self) -> Result<Vec<Lesson>, FetchError> {
        debug!("GET {}", self.config.endpoint);
        let response = self
            .client
            .get(self.config.endpoint.clone())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let decoded = LessonsResponse::from_json(&body)?;
        Ok(decoded.lessons)
    }
}
