use crate::state::ConversationStatus;
use crate::{AppState, Effect, KeyOutcome, Msg, SUBMIT_UNLOCK_DELAY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TextChanged(text) => {
            state.input_mut().on_text_change(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SuggestionPicked(text) => {
            // Fills the input only; the user still submits explicitly.
            state.input_mut().on_text_change(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::InputFocused => {
            state.input_mut().on_focus();
            state.mark_dirty();
            Vec::new()
        }
        Msg::InputBlurred => {
            state.input_mut().on_blur();
            state.mark_dirty();
            Vec::new()
        }
        Msg::CompositionStarted => {
            state.input_mut().on_composition_start();
            Vec::new()
        }
        Msg::CompositionEnded => {
            state.input_mut().on_composition_end();
            vec![Effect::ScheduleSubmitUnlock {
                after: SUBMIT_UNLOCK_DELAY,
            }]
        }
        Msg::SubmitUnlockElapsed => {
            state.input_mut().release_submission_lock();
            Vec::new()
        }
        Msg::KeyPressed(key) => match state.input().on_key(key) {
            KeyOutcome::SubmitRequested => vec![Effect::RequestFormSubmit],
            KeyOutcome::Suppressed | KeyOutcome::Unhandled => Vec::new(),
        },
        Msg::FormSubmitted => {
            let candidate = state.input().text().to_owned();
            let effects = admit(&mut state, candidate.clone());
            if !effects.is_empty() {
                state.input_mut().clear();
            }
            effects
        }
        Msg::SeedQueryObserved(query) => admit(&mut state, query),
        Msg::ResponseStyleSelected(style) => {
            state.set_response_style(style);
            Vec::new()
        }
        Msg::NewChatClicked => {
            let status = state.conversation();
            if status.message_count == 0 || status.is_loading {
                return (state, Vec::new());
            }
            state.start_new_chat();
            vec![Effect::ClearConversation]
        }
        Msg::StopClicked => {
            if state.conversation().is_loading {
                vec![Effect::StopGeneration]
            } else {
                Vec::new()
            }
        }
        Msg::ConversationChanged {
            message_count,
            is_loading,
        } => {
            state.set_conversation(ConversationStatus {
                message_count,
                is_loading,
            });
            Vec::new()
        }
        Msg::EnrichmentSettled {
            request_id,
            source,
            cards,
        } => {
            state.settle_enrichment(request_id, source, cards);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn admit(state: &mut AppState, candidate: String) -> Vec<Effect> {
    let Some(request_id) = state.admit(&candidate) else {
        return Vec::new();
    };
    vec![
        Effect::AppendUserMessage {
            content: candidate.clone(),
        },
        Effect::FetchEnrichment {
            request_id,
            query: candidate,
        },
    ]
}
