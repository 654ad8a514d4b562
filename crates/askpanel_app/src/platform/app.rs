use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context};
use askpanel_core::{update, AppState, AppViewModel, Msg};
use clap::Parser;
use panel_logging::{panel_info, LogDestination};

use super::cli::Cli;
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::sink::TranscriptSink;
use super::ui::commands::{LineAction, LineEditor, HELP};
use super::ui::render::{format_message, render};

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = panel_logging::parse_level(&cli.log_level)
        .ok_or_else(|| anyhow!("unknown log level {:?}", cli.log_level))?;
    let destination = if cli.log_to_terminal {
        LogDestination::Both(cli.log_file.clone())
    } else {
        LogDestination::File(cli.log_file.clone())
    };
    panel_logging::initialize(&destination, level);

    let config = AppConfig::load(cli.config.as_deref(), |name| std::env::var(name).ok())
        .context("loading configuration")?;
    panel_info!("Starting askpanel with {:?}", config.search);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(
        config.search.clone(),
        Box::new(TranscriptSink::new()),
        msg_tx.clone(),
    )
    .context("starting enrichment engine")?;

    println!("askpanel: type a question and press Enter. /help lists commands.");
    if config.history_enabled {
        println!("Chat history panel: enabled");
    }

    let quit = Arc::new(AtomicBool::new(false));
    spawn_stdin_reader(msg_tx.clone(), quit.clone());

    // Background tick to coalesce rendering and notice quit requests.
    let tick_tx = msg_tx.clone();
    thread::spawn(move || {
        let interval = Duration::from_millis(75);
        while tick_tx.send(Msg::Tick).is_ok() {
            thread::sleep(interval);
        }
    });

    let _ = msg_tx.send(Msg::InputFocused);
    if let Some(query) = cli.query {
        let _ = msg_tx.send(Msg::SeedQueryObserved(query));
    }
    drop(msg_tx);

    let mut panel = Panel::new(runner);
    while let Ok(msg) = msg_rx.recv() {
        if quit.load(Ordering::SeqCst) {
            break;
        }
        panel.pump(msg, &msg_rx);
    }

    panel_info!("askpanel exiting");
    Ok(())
}

struct Panel {
    state: AppState,
    runner: EffectRunner,
    last_view: Option<AppViewModel>,
    printed_messages: usize,
}

impl Panel {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            last_view: None,
            printed_messages: 0,
        }
    }

    /// Handles `msg`, then everything already queued, then renders once.
    fn pump(&mut self, msg: Msg, msg_rx: &mpsc::Receiver<Msg>) {
        self.dispatch_msg(msg);
        while let Ok(msg) = msg_rx.try_recv() {
            self.dispatch_msg(msg);
        }
        self.flush();
    }

    /// Applies `msg` and every follow-up it causes before returning, so no
    /// queued input can slip in between a keystroke and its submit.
    fn dispatch_msg(&mut self, msg: Msg) {
        let mut pending = VecDeque::from([msg]);
        while let Some(msg) = pending.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            pending.extend(self.runner.enqueue(effects));
        }
    }

    fn flush(&mut self) {
        let messages = self.runner.sink().messages();
        if messages.len() < self.printed_messages {
            self.printed_messages = 0;
        }
        for message in &messages[self.printed_messages..] {
            println!("{}", format_message(message));
        }
        self.printed_messages = messages.len();

        if !self.state.consume_dirty() {
            return;
        }
        let view = self.state.view();
        for line in render(&view, self.last_view.as_ref()) {
            println!("{line}");
        }
        self.last_view = Some(view);
    }
}

fn spawn_stdin_reader(msg_tx: mpsc::Sender<Msg>, quit: Arc<AtomicBool>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        let mut editor = LineEditor::new();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            match editor.parse(&line) {
                LineAction::Dispatch(msgs) => {
                    for msg in msgs {
                        if msg_tx.send(msg).is_err() {
                            return;
                        }
                    }
                }
                LineAction::Help => {
                    for help in HELP {
                        println!("{help}");
                    }
                }
                LineAction::Unknown(reason) => println!("{reason}"),
                LineAction::Quit => break,
            }
        }
        quit.store(true, Ordering::SeqCst);
        let _ = msg_tx.send(Msg::NoOp);
    });
}
