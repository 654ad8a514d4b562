use std::time::Duration;

/// Cool-down after an IME composition ends during which Enter does not submit.
pub const SUBMIT_UNLOCK_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn enter() -> Self {
        Self {
            key: Key::Enter,
            shift: false,
        }
    }

    pub fn shift_enter() -> Self {
        Self {
            key: Key::Enter,
            shift: true,
        }
    }

    fn is_commit(self) -> bool {
        self.key == Key::Enter && !self.shift
    }
}

/// What the input surface should do with a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not ours: let the default action (e.g. inserting a newline) happen.
    Unhandled,
    /// Swallow the keystroke's default action and do nothing else.
    Suppressed,
    /// Swallow the default action and ask the form to submit.
    SubmitRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Show,
    Hide,
}

/// Raw text-entry state of the chat input, including IME awareness.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputSession {
    text: String,
    composing: bool,
    submission_locked: bool,
    placeholder_visible: bool,
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn is_submission_locked(&self) -> bool {
        self.submission_locked
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    pub fn on_text_change(&mut self, text: String) -> Placeholder {
        self.text = text;
        let signal = if self.text.is_empty() {
            Placeholder::Show
        } else {
            Placeholder::Hide
        };
        self.placeholder_visible = signal == Placeholder::Show;
        signal
    }

    pub fn on_focus(&mut self) {
        self.placeholder_visible = true;
    }

    pub fn on_blur(&mut self) {
        self.placeholder_visible = false;
    }

    pub fn on_composition_start(&mut self) {
        self.composing = true;
    }

    /// Ends composition and locks submission. The caller owns the unlock
    /// timer ([`SUBMIT_UNLOCK_DELAY`]); a composition started inside the
    /// window does not extend it.
    pub fn on_composition_end(&mut self) {
        self.composing = false;
        self.submission_locked = true;
    }

    pub fn release_submission_lock(&mut self) {
        self.submission_locked = false;
    }

    pub fn on_key(&self, key: KeyPress) -> KeyOutcome {
        if !key.is_commit() || self.composing || self.submission_locked {
            return KeyOutcome::Unhandled;
        }
        if self.text.trim().is_empty() {
            KeyOutcome::Suppressed
        } else {
            KeyOutcome::SubmitRequested
        }
    }

    /// Drops the typed text after a submission or a new chat.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_text(text: &str) -> InputSession {
        let mut input = InputSession::new();
        input.on_text_change(text.to_string());
        input
    }

    #[test]
    fn placeholder_follows_emptiness() {
        let mut input = InputSession::new();
        assert_eq!(input.on_text_change("a".into()), Placeholder::Hide);
        assert!(!input.placeholder_visible());
        assert_eq!(input.on_text_change(String::new()), Placeholder::Show);
        assert!(input.placeholder_visible());
    }

    #[test]
    fn enter_on_whitespace_is_suppressed() {
        assert_eq!(with_text(" ").on_key(KeyPress::enter()), KeyOutcome::Suppressed);
        assert_eq!(with_text("").on_key(KeyPress::enter()), KeyOutcome::Suppressed);
    }

    #[test]
    fn enter_on_text_requests_submit() {
        assert_eq!(
            with_text("weather today").on_key(KeyPress::enter()),
            KeyOutcome::SubmitRequested
        );
    }

    #[test]
    fn shift_enter_and_other_keys_pass_through() {
        let input = with_text("weather today");
        assert_eq!(input.on_key(KeyPress::shift_enter()), KeyOutcome::Unhandled);
        let other = KeyPress {
            key: Key::Other,
            shift: false,
        };
        assert_eq!(input.on_key(other), KeyOutcome::Unhandled);
    }

    #[test]
    fn composing_and_locked_block_submit() {
        let mut input = with_text("こんにちは");
        input.on_composition_start();
        assert_eq!(input.on_key(KeyPress::enter()), KeyOutcome::Unhandled);

        input.on_composition_end();
        assert!(input.is_submission_locked());
        assert_eq!(input.on_key(KeyPress::enter()), KeyOutcome::Unhandled);

        input.release_submission_lock();
        assert_eq!(input.on_key(KeyPress::enter()), KeyOutcome::SubmitRequested);
    }

    #[test]
    fn release_does_not_wait_for_new_composition() {
        let mut input = with_text("abc");
        input.on_composition_end();
        input.on_composition_start();
        input.release_submission_lock();
        assert!(input.is_composing());
        assert!(!input.is_submission_locked());
    }
}
