//! Line-oriented input for the terminal panel.
//!
//! A terminal line arrives already composed, so nothing here produces
//! `CompositionStarted`/`CompositionEnded`. The IME submission lock is only
//! reachable from front ends that report composition events.

use askpanel_core::{KeyPress, Msg, ResponseStyle, SUGGESTIONS};

/// What one line typed at the prompt turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &[&str] = &[
    "<text>\\         keep typing on the next line (Shift+Enter)",
    "/new            start a new chat",
    "/stop           stop the reply being generated",
    "/style <name>   default | professional | short | elaborate",
    "/suggest <n>    put suggestion n in the input",
    "/help           show this help",
    "/quit           exit",
];

/// Turns prompt lines into panel messages.
///
/// A plain line is typed text followed by Enter. A trailing backslash stands
/// for Shift+Enter: the line and a newline stay in the input and the next
/// line extends them instead of replacing them.
#[derive(Debug, Default)]
pub struct LineEditor {
    pending: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, line: &str) -> LineAction {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.strip_prefix('/') {
            Some(command) if self.pending.is_empty() => parse_command(command),
            _ => self.type_text(line),
        }
    }

    fn type_text(&mut self, line: &str) -> LineAction {
        self.pending.push_str(line.strip_suffix('\\').unwrap_or(line));
        let (text, key) = if line.ends_with('\\') {
            self.pending.push('\n');
            (self.pending.clone(), KeyPress::shift_enter())
        } else {
            (std::mem::take(&mut self.pending), KeyPress::enter())
        };
        LineAction::Dispatch(vec![Msg::TextChanged(text), Msg::KeyPressed(key)])
    }
}

fn parse_command(command: &str) -> LineAction {
    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().unwrap_or_default().trim();
    match name {
        "new" => LineAction::Dispatch(vec![Msg::NewChatClicked]),
        "stop" => LineAction::Dispatch(vec![Msg::StopClicked]),
        "style" => match ResponseStyle::from_name(arg) {
            Some(style) => LineAction::Dispatch(vec![Msg::ResponseStyleSelected(style)]),
            None => LineAction::Unknown(format!("unknown style {arg:?}")),
        },
        "suggest" => match arg
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| SUGGESTIONS.get(idx))
        {
            Some(text) => LineAction::Dispatch(vec![Msg::SuggestionPicked(text.to_string())]),
            None => LineAction::Unknown(format!("no suggestion {arg:?}")),
        },
        "help" => LineAction::Help,
        "quit" | "exit" => LineAction::Quit,
        other => LineAction::Unknown(format!("unknown command /{other}")),
    }
}
