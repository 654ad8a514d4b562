//! Askpanel core: pure state machine for the chat input panel.
//!
//! Input gating, once-only query admission and the enrichment result slot
//! live here. IO is expressed as [`Effect`]s and fed back as [`Msg`]s.
mod dispatch;
mod effect;
mod enrichment;
mod input;
mod msg;
mod state;
mod update;
mod view_model;

pub use dispatch::DispatchGuard;
pub use effect::Effect;
pub use enrichment::{
    EnrichmentPhase, EnrichmentSlot, RequestId, ResultSource, VideoCard, MAX_CARDS,
};
pub use input::{InputSession, Key, KeyOutcome, KeyPress, Placeholder, SUBMIT_UNLOCK_DELAY};
pub use msg::Msg;
pub use state::{AppState, ConversationStatus, ResponseStyle};
pub use update::update;
pub use view_model::{AppViewModel, EnrichmentView, PanelLayout, SubmitButton, SUGGESTIONS};
