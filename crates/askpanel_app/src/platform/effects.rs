use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use askpanel_core::{Effect, Msg};
use askpanel_engine::{EngineEvent, EngineHandle, SearchSettings};
use panel_logging::{panel_debug, panel_info};

use super::sink::{ChatMessage, ConversationSink};

pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    sink: Box<dyn ConversationSink>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        settings: SearchSettings,
        sink: Box<dyn ConversationSink>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> io::Result<Self> {
        let engine = Arc::new(EngineHandle::new(settings)?);
        let runner = Self {
            engine,
            sink,
            msg_tx,
        };
        runner.spawn_event_loop();
        Ok(runner)
    }

    pub fn sink(&self) -> &dyn ConversationSink {
        self.sink.as_ref()
    }

    /// Runs `effects` and returns the messages they answer with right away.
    ///
    /// Follow-ups go back to the caller instead of the shared channel, so a
    /// form submit is handled before any later keystroke is applied.
    pub fn enqueue(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::RequestFormSubmit => follow_ups.push(Msg::FormSubmitted),
                Effect::ScheduleSubmitUnlock { after } => {
                    schedule_after(after, self.msg_tx.clone(), Msg::SubmitUnlockElapsed);
                }
                Effect::AppendUserMessage { content } => {
                    self.sink.append(ChatMessage::user(content));
                    follow_ups.push(self.conversation_changed());
                }
                Effect::FetchEnrichment { request_id, query } => {
                    panel_info!(
                        "FetchEnrichment request_id={} query_len={}",
                        request_id,
                        query.len()
                    );
                    self.engine.enqueue(request_id, query);
                }
                Effect::ClearConversation => {
                    self.sink.set_messages(Vec::new());
                    panel_info!("New chat: conversation cleared, back to start page");
                    follow_ups.push(self.conversation_changed());
                }
                Effect::StopGeneration => {
                    self.sink.stop();
                    follow_ups.push(self.conversation_changed());
                }
            }
        }
        follow_ups
    }

    fn conversation_changed(&self) -> Msg {
        Msg::ConversationChanged {
            message_count: self.sink.messages().len(),
            is_loading: self.sink.is_loading(),
        }
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let EngineEvent::EnrichmentSettled { request_id, .. } = &event;
                panel_debug!("Enrichment request_id={} settled", request_id);
                if msg_tx.send(Msg::from(event)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

/// One-shot timer: posts `msg` after `delay`. There is no handle to cancel it.
pub(crate) fn schedule_after(delay: Duration, msg_tx: mpsc::Sender<Msg>, msg: Msg) {
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = msg_tx.send(msg);
    });
}
