pub type RequestId = u64;

/// Number of video cards shown next to the conversation.
pub const MAX_CARDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub title: String,
    pub link: String,
    pub thumbnail: String,
    pub duration: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Live,
    Fallback,
}

/// Retrieval state for the panel: `Idle → Requesting → {Accepted | Rejected}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrichmentPhase {
    #[default]
    Idle,
    Requesting,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingRequest {
    request_id: RequestId,
    query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Settled {
    query: String,
    source: ResultSource,
    cards: Vec<VideoCard>,
}

/// Single result slot for the enrichment panel.
///
/// Every retrieval gets a fresh id when it is issued. A settlement is only
/// applied when its id matches the request still pending, so a slow answer
/// for an older query never replaces a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnrichmentSlot {
    last_issued: RequestId,
    pending: Option<PendingRequest>,
    settled: Option<Settled>,
}

impl EnrichmentSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, query: &str) -> RequestId {
        self.last_issued += 1;
        self.pending = Some(PendingRequest {
            request_id: self.last_issued,
            query: query.to_owned(),
        });
        self.last_issued
    }

    /// Applies a settlement; returns `false` when it is stale and was dropped.
    pub fn settle(
        &mut self,
        request_id: RequestId,
        source: ResultSource,
        mut cards: Vec<VideoCard>,
    ) -> bool {
        let Some(pending) = self.pending.take_if(|p| p.request_id == request_id) else {
            return false;
        };
        cards.truncate(MAX_CARDS);
        self.settled = Some(Settled {
            query: pending.query,
            source,
            cards,
        });
        true
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.settled = None;
    }

    pub fn phase(&self) -> EnrichmentPhase {
        if self.pending.is_some() {
            return EnrichmentPhase::Requesting;
        }
        match self.settled.as_ref().map(|s| s.source) {
            None => EnrichmentPhase::Idle,
            Some(ResultSource::Live) => EnrichmentPhase::Accepted,
            Some(ResultSource::Fallback) => EnrichmentPhase::Rejected,
        }
    }

    /// Cards of the most recent settlement. They stay visible while the next
    /// query is requesting and are replaced as a whole when it settles.
    pub fn cards(&self) -> &[VideoCard] {
        self.settled
            .as_ref()
            .map(|s| s.cards.as_slice())
            .unwrap_or_default()
    }

    pub fn source(&self) -> Option<ResultSource> {
        self.settled.as_ref().map(|s| s.source)
    }

    pub fn settled_query(&self) -> Option<&str> {
        self.settled.as_ref().map(|s| s.query.as_str())
    }
}
