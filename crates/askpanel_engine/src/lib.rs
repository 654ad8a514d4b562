//! Askpanel engine: enrichment retrieval against the video search provider.
mod engine;
mod pipeline;
mod search;
mod types;

pub use engine::EngineHandle;
pub use pipeline::{fallback_videos, retrieve, select_live, MIN_RESULTS};
pub use search::{
    parse_videos, SearchSettings, SerperClient, VideoSearch, API_KEY_HEADER, DEFAULT_ENDPOINT,
    DEFAULT_REGION,
};
pub use types::{EngineEvent, EnrichmentResult, FailureKind, RequestId, SearchError, VideoResult};
