use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use panel_logging::panel_debug;

use crate::pipeline::retrieve;
use crate::search::{SearchSettings, SerperClient, VideoSearch};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Fetch { request_id: RequestId, query: String },
}

/// Runs enrichment retrievals on a background tokio runtime.
///
/// Each enqueued request is spawned independently; nothing is deduplicated
/// or cancelled here. Settlements arrive on the event channel in completion
/// order, and consumers match them against the request they still expect.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> io::Result<Self> {
        Self::with_search(Arc::new(SerperClient::new(settings)))
    }

    pub fn with_search(search: Arc<dyn VideoSearch>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("askpanel-engine")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let search = search.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(search.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        })
    }

    pub fn enqueue(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            query: query.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    search: &dyn VideoSearch,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { request_id, query } => {
            panel_debug!("Enrichment request_id={} started", request_id);
            let result = retrieve(search, &query).await;
            let _ = event_tx.send(EngineEvent::EnrichmentSettled {
                request_id,
                query,
                result,
            });
        }
    }
}
