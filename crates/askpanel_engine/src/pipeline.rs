use panel_logging::{panel_debug, panel_warn};

use crate::search::VideoSearch;
use crate::{EnrichmentResult, FailureKind, SearchError, VideoResult};

/// Fewer live hits than this and the fixed fallback set is shown instead.
pub const MIN_RESULTS: usize = 5;

const FALLBACK_DURATIONS: [&str; MIN_RESULTS] = ["3:45", "2:30", "4:15", "5:00", "1:30"];

/// Fixed placeholder set shown whenever live retrieval fails or underdelivers.
pub fn fallback_videos() -> Vec<VideoResult> {
    FALLBACK_DURATIONS
        .iter()
        .enumerate()
        .map(|(idx, duration)| {
            let n = idx + 1;
            VideoResult {
                title: format!("Video {n}"),
                link: format!("https://video{n}.example.com"),
                thumbnail: format!("https://via.placeholder.com/300x200?text=Video+{n}"),
                duration: (*duration).to_string(),
            }
        })
        .collect()
}

/// Keeps the first [`MIN_RESULTS`] hits in provider order, or reports a
/// short list as a failure.
pub fn select_live(mut videos: Vec<VideoResult>) -> Result<Vec<VideoResult>, SearchError> {
    if videos.len() < MIN_RESULTS {
        return Err(SearchError::new(
            FailureKind::InsufficientResults {
                found: videos.len(),
            },
            "insufficient video results returned",
        ));
    }
    videos.truncate(MIN_RESULTS);
    Ok(videos)
}

/// Runs one retrieval for an admitted query. Never fails: every error,
/// including an empty or short answer, settles to the fallback set.
pub async fn retrieve(search: &dyn VideoSearch, query: &str) -> EnrichmentResult {
    match search.search(query).await.and_then(select_live) {
        Ok(videos) => {
            panel_debug!("Enrichment live: {} videos for query_len={}", videos.len(), query.len());
            EnrichmentResult::Live(videos)
        }
        Err(err) => {
            panel_warn!("Error fetching video results: {}", err);
            EnrichmentResult::Fallback(fallback_videos())
        }
    }
}
