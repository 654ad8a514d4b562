use std::sync::Once;
use std::time::Duration;

use askpanel_core::{update, AppState, Effect, KeyPress, Msg, PanelLayout, SubmitButton};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

fn type_text(state: AppState, text: &str) -> AppState {
    update(state, Msg::TextChanged(text.to_string())).0
}

#[test]
fn enter_on_whitespace_does_not_submit() {
    init_logging();
    let state = type_text(AppState::new(), " ");

    let (next, effects) = update(state, Msg::KeyPressed(KeyPress::enter()));

    assert!(effects.is_empty());
    assert_eq!(next.dispatch_marker(), None);
}

#[test]
fn enter_on_text_requests_form_submit() {
    init_logging();
    let state = type_text(AppState::new(), "weather today");

    let (state, effects) = update(state, Msg::KeyPressed(KeyPress::enter()));
    assert_eq!(effects, vec![Effect::RequestFormSubmit]);

    let (state, effects) = update(state, Msg::FormSubmitted);
    assert_eq!(
        effects,
        vec![
            Effect::AppendUserMessage {
                content: "weather today".to_string(),
            },
            Effect::FetchEnrichment {
                request_id: 1,
                query: "weather today".to_string(),
            },
        ]
    );
    assert_eq!(state.dispatch_marker(), Some("weather today"));
    assert_eq!(state.input().text(), "");
}

#[test]
fn shift_enter_is_left_to_the_textarea() {
    init_logging();
    let state = type_text(AppState::new(), "line one");

    let (_state, effects) = update(state, Msg::KeyPressed(KeyPress::shift_enter()));
    assert!(effects.is_empty());
}

#[test]
fn composition_end_locks_until_timer_fires() {
    init_logging();
    let state = type_text(AppState::new(), "東京");
    let (state, _) = update(state, Msg::CompositionStarted);

    let (state, effects) = update(state, Msg::KeyPressed(KeyPress::enter()));
    assert!(effects.is_empty(), "commit key while composing");

    let (state, effects) = update(state, Msg::CompositionEnded);
    assert_eq!(
        effects,
        vec![Effect::ScheduleSubmitUnlock {
            after: Duration::from_millis(300)
        }]
    );

    let (state, effects) = update(state, Msg::KeyPressed(KeyPress::enter()));
    assert!(effects.is_empty(), "commit key inside the cool-down");

    let (state, _) = update(state, Msg::SubmitUnlockElapsed);
    let (_state, effects) = update(state, Msg::KeyPressed(KeyPress::enter()));
    assert_eq!(effects, vec![Effect::RequestFormSubmit]);
}

#[test]
fn unlock_is_not_rearmed_by_a_second_composition() {
    init_logging();
    let state = type_text(AppState::new(), "abc");
    let (state, _) = update(state, Msg::CompositionEnded);
    let (state, _) = update(state, Msg::CompositionStarted);
    let (state, _) = update(state, Msg::SubmitUnlockElapsed);

    assert!(!state.input().is_submission_locked());
    assert!(state.input().is_composing());
}

#[test]
fn placeholder_tracks_text_focus_and_blur() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputFocused);
    assert!(state.view().empty_screen_visible);

    let state = type_text(state, "c");
    assert!(!state.view().empty_screen_visible);

    let state = type_text(state, "");
    assert!(state.view().empty_screen_visible);

    let (state, _) = update(state, Msg::InputBlurred);
    assert!(!state.view().empty_screen_visible);
}

#[test]
fn suggestion_fills_input_without_submitting() {
    init_logging();
    let view = AppState::new().view();
    let suggestion = view.suggestions[0].clone();

    let (state, effects) = update(AppState::new(), Msg::SuggestionPicked(suggestion.clone()));

    assert!(effects.is_empty());
    assert_eq!(state.input().text(), suggestion);
    assert_eq!(state.dispatch_marker(), None);
    assert_eq!(
        state.view().submit_button,
        SubmitButton::Send { enabled: true }
    );
}

#[test]
fn send_button_disabled_on_empty_text() {
    init_logging();
    let view = AppState::new().view();
    assert_eq!(view.submit_button, SubmitButton::Send { enabled: false });
    assert_eq!(view.layout, PanelLayout::Centered);
    assert!(!view.new_chat_visible);
}
