//! Contact form feedback. Nothing is sent anywhere: submitting runs a fixed
//! Sending → Sent → reset sequence and raises a toast.

use super::notify::Notification;

/// Time spent in each of the Sending and Sent states
pub const SUBMIT_PHASE_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    fn slot(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending { since_ms: u64 },
    Sent { since_ms: u64 },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    values: [String; 4],
    focused: [bool; 4],
    state: SubmitState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            values: Default::default(),
            focused: [false; 4],
            state: SubmitState::Idle,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.slot()]
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        &mut self.values[field.slot()]
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.slot()] = value.into();
    }

    pub fn focus(&mut self, field: Field) {
        self.focused[field.slot()] = true;
    }

    /// Labels stay raised while the field holds text.
    pub fn blur(&mut self, field: Field) {
        if self.values[field.slot()].is_empty() {
            self.focused[field.slot()] = false;
        }
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused[field.slot()]
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            SubmitState::Idle => "Send Message",
            SubmitState::Sending { .. } => "Sending...",
            SubmitState::Sent { .. } => "Message Sent!",
        }
    }

    /// Start a submission. Ignored unless idle.
    pub fn submit(&mut self, now_ms: u64) -> bool {
        if self.state != SubmitState::Idle {
            return false;
        }
        self.state = SubmitState::Sending { since_ms: now_ms };
        true
    }

    /// Advance the submission. Returns the success toast when the form
    /// resets.
    pub fn tick(&mut self, now_ms: u64) -> Option<Notification> {
        match self.state {
            SubmitState::Sending { since_ms } if now_ms >= since_ms + SUBMIT_PHASE_MS => {
                self.state = SubmitState::Sent {
                    since_ms: since_ms + SUBMIT_PHASE_MS,
                };
                self.tick(now_ms)
            }
            SubmitState::Sent { since_ms } if now_ms >= since_ms + SUBMIT_PHASE_MS => {
                self.reset();
                Some(Notification::success("Message sent successfully!"))
            }
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.values = Default::default();
        self.focused = [false; 4];
        self.state = SubmitState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_sticks_with_text() {
        let mut form = ContactForm::new();
        form.focus(Field::Email);
        form.blur(Field::Email);
        assert!(!form.is_focused(Field::Email));
        form.focus(Field::Email);
        form.set_value(Field::Email, "a@b.c");
        form.blur(Field::Email);
        assert!(form.is_focused(Field::Email));
    }

    #[test]
    fn test_submit_sequence() {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, "Ada");
        assert!(form.submit(0));
        assert!(!form.submit(10));
        assert_eq!(form.button_label(), "Sending...");
        assert!(form.tick(1_999).is_none());
        assert!(form.tick(2_000).is_none());
        assert_eq!(form.button_label(), "Message Sent!");
        let note = form.tick(4_000).unwrap();
        assert_eq!(note.message, "Message sent successfully!");
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.value(Field::Name), "");
    }

    #[test]
    fn test_late_tick_runs_both_phases() {
        let mut form = ContactForm::new();
        form.submit(0);
        assert!(form.tick(10_000).is_some());
        assert_eq!(form.state(), SubmitState::Idle);
    }
}
