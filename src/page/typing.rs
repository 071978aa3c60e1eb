//! Hero typing effect: types a phrase, pauses, deletes it, moves on.

pub const TYPE_STEP_MS: u64 = 120;
pub const DELETE_STEP_MS: u64 = 75;
/// Pause with a complete phrase on screen
pub const HOLD_MS: u64 = 2000;
/// Pause on an empty line before the next phrase
pub const NEXT_PHRASE_MS: u64 = 300;
pub const CARET_BLINK_MS: u64 = 1000;

pub const DEFAULT_PHRASES: [&str; 2] = ["Frontend Developer", "UI/UX Enthusiast"];

#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<String>,
    phrase: usize,
    /// Characters of the current phrase on screen
    shown: usize,
    deleting: bool,
    next_step_ms: Option<u64>,
}

impl Default for TypingEffect {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect())
    }
}

impl TypingEffect {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            deleting: false,
            next_step_ms: None,
        }
    }

    /// Clear the line and type the first character at `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        if self.phrases.is_empty() {
            log::debug!("typing effect has no phrases");
            return;
        }
        self.phrase = 0;
        self.shown = 0;
        self.deleting = false;
        self.next_step_ms = Some(now_ms);
        self.tick(now_ms);
    }

    pub fn is_running(&self) -> bool {
        self.next_step_ms.is_some()
    }

    /// Run every step that is due by `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        while let Some(due) = self.next_step_ms {
            if now_ms < due {
                break;
            }
            let delay = self.step();
            self.next_step_ms = Some(due + delay);
        }
    }

    fn step(&mut self) -> u64 {
        let len = self.phrases[self.phrase].chars().count();
        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
        } else {
            self.shown = (self.shown + 1).min(len);
        }

        if !self.deleting && self.shown == len {
            self.deleting = true;
            HOLD_MS
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            NEXT_PHRASE_MS
        } else if self.deleting {
            DELETE_STEP_MS
        } else {
            TYPE_STEP_MS
        }
    }

    /// Text currently on screen.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn caret_visible(&self, now_ms: u64) -> bool {
        (now_ms % CARET_BLINK_MS) < CARET_BLINK_MS / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(phrases: &[&str]) -> TypingEffect {
        TypingEffect::new(phrases.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_types_one_char_per_step() {
        let mut t = effect(&["abc", "de"]);
        t.start(0);
        assert_eq!(t.text(), "a");
        t.tick(119);
        assert_eq!(t.text(), "a");
        t.tick(120);
        assert_eq!(t.text(), "ab");
        t.tick(240);
        assert_eq!(t.text(), "abc");
    }

    #[test]
    fn test_holds_then_deletes_then_next() {
        let mut t = effect(&["abc", "de"]);
        t.start(0);
        // "abc" complete at 240, hold until 2240
        t.tick(2_239);
        assert_eq!(t.text(), "abc");
        t.tick(2_240);
        assert_eq!(t.text(), "ab");
        t.tick(2_240 + 75);
        assert_eq!(t.text(), "a");
        t.tick(2_240 + 150);
        assert_eq!(t.text(), "");
        // 300ms gap, then the next phrase starts
        t.tick(2_240 + 150 + 299);
        assert_eq!(t.text(), "");
        t.tick(2_240 + 150 + 300);
        assert_eq!(t.text(), "d");
    }

    #[test]
    fn test_multibyte_phrase() {
        let mut t = effect(&["é✓"]);
        t.start(0);
        assert_eq!(t.text(), "é");
        t.tick(120);
        assert_eq!(t.text(), "é✓");
    }

    #[test]
    fn test_empty_phrase_list() {
        let mut t = effect(&[]);
        t.start(0);
        t.tick(10_000);
        assert!(!t.is_running());
        assert_eq!(t.text(), "");
    }

    #[test]
    fn test_default_phrases() {
        let mut t = TypingEffect::default();
        t.start(0);
        t.tick(120 * 17);
        assert_eq!(t.text(), "Frontend Developer");
    }
}
