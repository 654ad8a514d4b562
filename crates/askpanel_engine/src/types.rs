use std::fmt;

use askpanel_core::{Msg, ResultSource, VideoCard};

pub type RequestId = u64;

/// One validated video hit from the search provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoResult {
    pub title: String,
    pub link: String,
    pub thumbnail: String,
    pub duration: String,
}

/// Outcome of one retrieval. Both variants carry exactly five items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentResult {
    Live(Vec<VideoResult>),
    Fallback(Vec<VideoResult>),
}

impl EnrichmentResult {
    pub fn is_live(&self) -> bool {
        matches!(self, EnrichmentResult::Live(_))
    }

    pub fn items(&self) -> &[VideoResult] {
        match self {
            EnrichmentResult::Live(items) | EnrichmentResult::Fallback(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<VideoResult> {
        match self {
            EnrichmentResult::Live(items) | EnrichmentResult::Fallback(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    EnrichmentSettled {
        request_id: RequestId,
        query: String,
        result: EnrichmentResult,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SearchError {
    pub kind: FailureKind,
    pub message: String,
}

impl SearchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedBody,
    InsufficientResults { found: usize },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::InsufficientResults { found } => {
                write!(f, "insufficient video results ({found})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

impl From<VideoResult> for VideoCard {
    fn from(video: VideoResult) -> Self {
        VideoCard {
            title: video.title,
            link: video.link,
            thumbnail: video.thumbnail,
            duration: video.duration,
        }
    }
}

/// Feeds engine events back into the panel's update loop.
impl From<EngineEvent> for Msg {
    fn from(event: EngineEvent) -> Self {
        match event {
            EngineEvent::EnrichmentSettled {
                request_id, result, ..
            } => {
                let source = if result.is_live() {
                    ResultSource::Live
                } else {
                    ResultSource::Fallback
                };
                Msg::EnrichmentSettled {
                    request_id,
                    source,
                    cards: result.into_items().into_iter().map(VideoCard::from).collect(),
                }
            }
        }
    }
}
