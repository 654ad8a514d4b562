use crate::{KeyPress, RequestId, ResponseStyle, ResultSource, VideoCard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the chat input.
    TextChanged(String),
    /// Chat input gained focus.
    InputFocused,
    /// Chat input lost focus.
    InputBlurred,
    /// An IME composition session opened.
    CompositionStarted,
    /// The IME composition session closed.
    CompositionEnded,
    /// The post-composition cool-down elapsed.
    SubmitUnlockElapsed,
    /// A keystroke reached the chat input.
    KeyPressed(KeyPress),
    /// The input form was submitted with the current text.
    FormSubmitted,
    /// A query supplied from outside the input, e.g. a deep link.
    SeedQueryObserved(String),
    /// User picked one of the empty-screen suggestions.
    SuggestionPicked(String),
    /// User changed the response style drop-down.
    ResponseStyleSelected(ResponseStyle),
    /// User asked for a fresh conversation.
    NewChatClicked,
    /// User clicked the stop button while a reply was generating.
    StopClicked,
    /// Conversation sink reported its current shape.
    ConversationChanged {
        message_count: usize,
        is_loading: bool,
    },
    /// Enrichment retrieval finished for a request.
    EnrichmentSettled {
        request_id: RequestId,
        source: ResultSource,
        cards: Vec<VideoCard>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
