//! Debounced viewport tracking.
//!
//! Resize events arrive in bursts while a window is dragged. The watcher
//! keeps the last size and only reports it once no event has arrived for
//! `debounce_ms`, together with the layout regime it lands in.

use crate::config::ResizeConfig;

/// Widths above this are desktop layout; the mobile sidebar is inert
pub const MOBILE_BREAKPOINT: f32 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutRegime {
    Mobile,
    Desktop,
}

impl LayoutRegime {
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width > breakpoint {
            LayoutRegime::Desktop
        } else {
            LayoutRegime::Mobile
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// One percent of the visible height, for `100 * vh` tall sections.
    pub fn vh(&self) -> f32 {
        self.height * 0.01
    }
}

/// A resize burst that has settled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSettled {
    pub size: ViewportSize,
    pub regime: LayoutRegime,
    pub previous: LayoutRegime,
}

impl ViewportSettled {
    /// Crossed from mobile into desktop layout.
    pub fn entered_desktop(&self) -> bool {
        self.previous == LayoutRegime::Mobile && self.regime == LayoutRegime::Desktop
    }
}

pub struct ViewportWatcher {
    config: ResizeConfig,
    size: ViewportSize,
    regime: LayoutRegime,
    /// Latest unsettled size and the time it arrived
    pending: Option<(ViewportSize, u64)>,
    hidden: bool,
}

impl ViewportWatcher {
    pub fn new(config: ResizeConfig, initial: ViewportSize) -> Self {
        let regime = LayoutRegime::for_width(initial.width, config.breakpoint);
        Self {
            config,
            size: initial,
            regime,
            pending: None,
            hidden: false,
        }
    }

    pub fn size(&self) -> ViewportSize {
        self.size
    }

    pub fn regime(&self) -> LayoutRegime {
        self.regime
    }

    pub fn is_mobile(&self) -> bool {
        self.regime == LayoutRegime::Mobile
    }

    pub fn breakpoint(&self) -> f32 {
        self.config.breakpoint
    }

    /// Record a raw resize event. Restarts the debounce window.
    pub fn resize(&mut self, size: ViewportSize, now_ms: u64) {
        if self.pending.is_none() && size == self.size {
            return;
        }
        self.pending = Some((size, now_ms));
    }

    /// Settle the pending size once the debounce window has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<ViewportSettled> {
        let (size, at) = self.pending?;
        if now_ms.saturating_sub(at) < self.config.debounce_ms {
            return None;
        }
        self.pending = None;
        let previous = self.regime;
        self.size = size;
        self.regime = LayoutRegime::for_width(size.width, self.config.breakpoint);
        log::debug!("viewport settled at {}x{} ({:?})", size.width, size.height, self.regime);
        Some(ViewportSettled {
            size,
            regime: self.regime,
            previous,
        })
    }

    /// Page visibility; hidden pages pause decorative animation.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
