//! Page boot sequence and the pausable page clock.
//!
//! The loader stays up for `LOADER_MS`; the typing effect starts
//! `TYPING_DELAY_MS` after it hides. Reveal animations are armed once, the
//! moment the loader goes away.

pub const LOADER_MS: u64 = 2000;
pub const TYPING_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootEvent {
    /// Loader hidden; arm reveal animations
    LoaderHidden,
    /// Start the hero typing effect
    TypingStarted,
}

#[derive(Debug, Clone)]
pub struct BootSequence {
    started_ms: u64,
    loader_hidden: bool,
    typing_started: bool,
}

impl BootSequence {
    pub fn new(started_ms: u64) -> Self {
        Self {
            started_ms,
            loader_hidden: false,
            typing_started: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.loader_hidden
    }

    /// Fire the boot events due by `now_ms`, each exactly once.
    pub fn tick(&mut self, now_ms: u64) -> Vec<BootEvent> {
        let mut events = Vec::new();
        let elapsed = now_ms.saturating_sub(self.started_ms);
        if !self.loader_hidden && elapsed >= LOADER_MS {
            self.loader_hidden = true;
            events.push(BootEvent::LoaderHidden);
        }
        if self.loader_hidden && !self.typing_started && elapsed >= LOADER_MS + TYPING_DELAY_MS {
            self.typing_started = true;
            events.push(BootEvent::TypingStarted);
        }
        events
    }
}

/// Page time that stands still while the page is hidden.
#[derive(Debug, Clone, Default)]
pub struct PageClock {
    paused_at: Option<u64>,
    paused_total: u64,
}

impl PageClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pause(&mut self, wall_ms: u64) {
        if self.paused_at.is_none() {
            self.paused_at = Some(wall_ms);
        }
    }

    pub fn resume(&mut self, wall_ms: u64) {
        if let Some(at) = self.paused_at.take() {
            self.paused_total += wall_ms.saturating_sub(at);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Page time for a wall-clock reading.
    pub fn now(&self, wall_ms: u64) -> u64 {
        let wall = self.paused_at.unwrap_or(wall_ms);
        wall.saturating_sub(self.paused_total)
    }
}
