/// Admits each distinct query value into the conversation at most once.
///
/// The marker is session state: it lives as long as one conversation view
/// and is cleared by [`DispatchGuard::reset`] when a new chat starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchGuard {
    marker: Option<String>,
}

impl DispatchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last admitted query, if any.
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    /// Returns `true` and records `candidate` when it is non-blank and differs
    /// from the last admitted value. The marker is written before the caller
    /// issues any asynchronous work.
    pub fn try_admit(&mut self, candidate: &str) -> bool {
        if candidate.trim().is_empty() {
            return false;
        }
        if self.marker.as_deref() == Some(candidate) {
            return false;
        }
        self.marker = Some(candidate.to_owned());
        true
    }

    pub fn reset(&mut self) {
        self.marker = None;
    }
}
