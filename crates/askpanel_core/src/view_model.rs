use crate::{EnrichmentPhase, ResponseStyle, ResultSource, VideoCard};

/// Example questions offered on the empty screen.
pub const SUGGESTIONS: [&str; 4] = [
    "Why is Nvidia growing rapidly?",
    "How does the Vision Pro work?",
    "What is the best way to learn Rust?",
    "Tesla vs Rivian",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelLayout {
    /// No messages yet: input centered with the empty screen.
    #[default]
    Centered,
    /// Conversation under way: input docked at the bottom.
    Docked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitButton {
    Send { enabled: bool },
    Stop,
}

impl Default for SubmitButton {
    fn default() -> Self {
        SubmitButton::Send { enabled: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnrichmentView {
    pub phase: EnrichmentPhase,
    pub source: Option<ResultSource>,
    pub cards: Vec<VideoCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input_text: String,
    pub layout: PanelLayout,
    pub empty_screen_visible: bool,
    pub suggestions: Vec<String>,
    pub submit_button: SubmitButton,
    pub new_chat_visible: bool,
    pub new_chat_enabled: bool,
    pub response_style: ResponseStyle,
    pub enrichment: EnrichmentView,
    pub dirty: bool,
}
