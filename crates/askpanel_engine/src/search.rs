use std::fmt;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FailureKind, SearchError, VideoResult};

pub const DEFAULT_ENDPOINT: &str = "https://google.serper.dev/videos";
pub const DEFAULT_REGION: &str = "in";
pub const API_KEY_HEADER: &str = "X-API-KEY";

#[derive(Clone)]
pub struct SearchSettings {
    pub endpoint: String,
    pub api_key: String,
    /// Two-letter region code sent as `gl`.
    pub region: String,
    /// `None` leaves the HTTP client's own default in place.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            region: DEFAULT_REGION.to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 1024 * 1024,
        }
    }
}

impl fmt::Debug for SearchSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .field("region", &self.region)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("max_bytes", &self.max_bytes)
            .finish()
    }
}

#[async_trait::async_trait]
pub trait VideoSearch: Send + Sync {
    /// Runs one search and returns every usable hit in provider order.
    async fn search(&self, query: &str) -> Result<Vec<VideoResult>, SearchError>;
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
    gl: &'a str,
}

#[derive(Debug, Deserialize)]
struct WireVideo {
    title: String,
    link: String,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default, rename = "imageUrl")]
    image_url: Option<String>,
    #[serde(default)]
    duration: Option<String>,
}

impl WireVideo {
    fn into_result(self) -> Option<VideoResult> {
        if self.title.trim().is_empty() || url::Url::parse(&self.link).is_err() {
            return None;
        }
        Some(VideoResult {
            title: self.title,
            link: self.link,
            thumbnail: self.thumbnail.or(self.image_url).unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
        })
    }
}

/// Extracts the `videos` array from a provider response body.
///
/// A missing or non-array `videos` field yields an empty list; entries
/// without a title or a parseable link are skipped.
pub fn parse_videos(body: &[u8]) -> Result<Vec<VideoResult>, SearchError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| SearchError::new(FailureKind::MalformedBody, err.to_string()))?;
    let Some(entries) = value.get("videos").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };
    Ok(entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<WireVideo>(entry.clone()).ok())
        .filter_map(WireVideo::into_result)
        .collect())
}

/// Serper video search over HTTPS.
#[derive(Debug, Clone)]
pub struct SerperClient {
    settings: SearchSettings,
}

impl SerperClient {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, SearchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))
    }

    fn request_body(&self, query: &str) -> Result<Vec<u8>, SearchError> {
        serde_json::to_vec(&SearchRequest {
            q: query,
            gl: &self.settings.region,
        })
        .map_err(|err| SearchError::new(FailureKind::MalformedBody, err.to_string()))
    }
}

#[async_trait::async_trait]
impl VideoSearch for SerperClient {
    async fn search(&self, query: &str) -> Result<Vec<VideoResult>, SearchError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| SearchError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(endpoint)
            .header(API_KEY_HEADER, self.settings.api_key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(self.request_body(query)?)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }

        parse_videos(&body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
