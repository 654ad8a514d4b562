use crate::view_model::{AppViewModel, EnrichmentView, PanelLayout, SubmitButton, SUGGESTIONS};
use crate::{DispatchGuard, EnrichmentSlot, InputSession, RequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseStyle {
    #[default]
    Default,
    Professional,
    Short,
    Elaborate,
}

impl ResponseStyle {
    pub const ALL: [ResponseStyle; 4] = [
        ResponseStyle::Default,
        ResponseStyle::Professional,
        ResponseStyle::Short,
        ResponseStyle::Elaborate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResponseStyle::Default => "Default (Simple)",
            ResponseStyle::Professional => "Professional",
            ResponseStyle::Short => "Short",
            ResponseStyle::Elaborate => "Elaborate",
        }
    }

    /// Case-insensitive lookup by variant name, e.g. `"short"`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|style| format!("{style:?}").eq_ignore_ascii_case(name))
    }
}

/// Mirror of what the conversation sink last reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversationStatus {
    pub message_count: usize,
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: InputSession,
    guard: DispatchGuard,
    enrichment: EnrichmentSlot,
    response_style: ResponseStyle,
    conversation: ConversationStatus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &InputSession {
        &self.input
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputSession {
        &mut self.input
    }

    pub fn dispatch_marker(&self) -> Option<&str> {
        self.guard.marker()
    }

    pub fn enrichment(&self) -> &EnrichmentSlot {
        &self.enrichment
    }

    pub fn conversation(&self) -> ConversationStatus {
        self.conversation
    }

    pub fn response_style(&self) -> ResponseStyle {
        self.response_style
    }

    /// Runs the dispatch guard and, on admission, opens an enrichment request.
    /// Both happen in this synchronous step so a repeated trigger sees the
    /// updated marker.
    pub(crate) fn admit(&mut self, candidate: &str) -> Option<RequestId> {
        if !self.guard.try_admit(candidate) {
            return None;
        }
        self.dirty = true;
        Some(self.enrichment.begin(candidate))
    }

    pub(crate) fn settle_enrichment(
        &mut self,
        request_id: RequestId,
        source: crate::ResultSource,
        cards: Vec<crate::VideoCard>,
    ) -> bool {
        let applied = self.enrichment.settle(request_id, source, cards);
        if applied {
            self.dirty = true;
        }
        applied
    }

    pub(crate) fn set_response_style(&mut self, style: ResponseStyle) {
        if self.response_style != style {
            self.response_style = style;
            self.dirty = true;
        }
    }

    pub(crate) fn set_conversation(&mut self, status: ConversationStatus) {
        if self.conversation != status {
            self.conversation = status;
            self.dirty = true;
        }
    }

    pub(crate) fn start_new_chat(&mut self) {
        self.guard.reset();
        self.enrichment.clear();
        self.input.clear();
        self.conversation.message_count = 0;
        self.dirty = true;
    }

    pub fn view(&self) -> AppViewModel {
        let has_messages = self.conversation.message_count > 0;
        let submit_button = if self.conversation.is_loading {
            SubmitButton::Stop
        } else {
            SubmitButton::Send {
                enabled: !self.input.text().is_empty(),
            }
        };

        AppViewModel {
            input_text: self.input.text().to_owned(),
            layout: if has_messages {
                PanelLayout::Docked
            } else {
                PanelLayout::Centered
            },
            empty_screen_visible: !has_messages && self.input.placeholder_visible(),
            suggestions: if has_messages {
                Vec::new()
            } else {
                SUGGESTIONS.iter().map(|s| s.to_string()).collect()
            },
            submit_button,
            new_chat_visible: has_messages,
            new_chat_enabled: has_messages && !self.conversation.is_loading,
            response_style: self.response_style,
            enrichment: EnrichmentView {
                phase: self.enrichment.phase(),
                source: self.enrichment.source(),
                cards: self.enrichment.cards().to_vec(),
            },
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
