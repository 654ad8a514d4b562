use askpanel_core::{AppViewModel, EnrichmentPhase, PanelLayout, ResultSource, SubmitButton, VideoCard};

use crate::platform::sink::{ChatMessage, Role};

/// Lines to print for the transition from `previous` to `view`.
///
/// Only sections that changed are emitted, so the terminal reads like a log
/// rather than redrawing the whole panel on every tick.
pub fn render(view: &AppViewModel, previous: Option<&AppViewModel>) -> Vec<String> {
    let mut lines = Vec::new();
    if view.empty_screen_visible && previous.map_or(true, |p| !p.empty_screen_visible) {
        lines.push("Ask a question...".to_string());
        for (idx, suggestion) in view.suggestions.iter().enumerate() {
            lines.push(format!("  /suggest {}  {}", idx + 1, suggestion));
        }
    }

    if previous.is_some_and(|p| p.response_style != view.response_style) {
        lines.push(format!("Response style: {}", view.response_style.label()));
    }

    if previous.is_some_and(|p| p.input_text != view.input_text) && !view.input_text.is_empty() {
        lines.push(format!("Input: {}", view.input_text));
    }

    if previous.is_some_and(|p| p.submit_button != view.submit_button)
        && view.submit_button == SubmitButton::Stop
    {
        lines.push("Generating... /stop to cancel".to_string());
    }

    if previous.is_some_and(|p| p.layout == PanelLayout::Docked)
        && view.layout == PanelLayout::Centered
    {
        lines.push("-- new chat --".to_string());
    }

    if previous.map_or(true, |p| p.enrichment != view.enrichment) {
        lines.extend(render_enrichment(view));
    }

    lines
}

fn render_enrichment(view: &AppViewModel) -> Vec<String> {
    let enrichment = &view.enrichment;
    match enrichment.phase {
        EnrichmentPhase::Idle => Vec::new(),
        EnrichmentPhase::Requesting => vec!["Searching videos...".to_string()],
        EnrichmentPhase::Accepted | EnrichmentPhase::Rejected => {
            let heading = match enrichment.source {
                Some(ResultSource::Fallback) => "Video Results (placeholders)",
                _ => "Video Results",
            };
            let mut lines = Vec::with_capacity(enrichment.cards.len() + 1);
            lines.push(heading.to_string());
            lines.extend(
                enrichment
                    .cards
                    .iter()
                    .enumerate()
                    .map(|(idx, card)| format_card(idx + 1, card)),
            );
            lines
        }
    }
}

fn format_card(position: usize, card: &VideoCard) -> String {
    if card.duration.is_empty() {
        format!("  {position}. {} <{}>", card.title, card.link)
    } else {
        format!(
            "  {position}. {} [{}] <{}>",
            card.title, card.duration, card.link
        )
    }
}

pub fn format_message(message: &ChatMessage) -> String {
    let who = match message.role {
        Role::User => "you",
        Role::Assistant => "assistant",
    };
    format!(
        "[{}] {}: {}",
        message.sent_at.format("%H:%M:%S"),
        who,
        message.content
    )
}
