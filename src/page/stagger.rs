//! Staggered entrance reveals.
//!
//! Items start hidden 30px low and fade up one after another. Styles are a
//! pure function of the reveal start time and `now`, like the orbit
//! animator: nothing is stored per frame.

/// Length of each item's fade/slide
pub const REVEAL_DURATION_MS: u64 = 600;
/// Starting vertical offset of a hidden item
pub const REVEAL_OFFSET_PX: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    SkillBars,
    Timeline,
    ProjectCards,
    ContactItems,
}

impl RevealKind {
    pub fn stagger_ms(self) -> u64 {
        match self {
            RevealKind::SkillBars | RevealKind::Timeline => 200,
            RevealKind::ProjectCards | RevealKind::ContactItems => 100,
        }
    }
}

/// Rendered style of one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub opacity: f32,
    pub translate_y: f32,
}

impl ItemStyle {
    pub const HIDDEN: ItemStyle = ItemStyle {
        opacity: 0.0,
        translate_y: REVEAL_OFFSET_PX,
    };
    pub const SHOWN: ItemStyle = ItemStyle {
        opacity: 1.0,
        translate_y: 0.0,
    };
}

#[derive(Debug, Clone)]
pub struct StaggeredReveal {
    kind: RevealKind,
    count: usize,
    started_ms: Option<u64>,
}

impl StaggeredReveal {
    pub fn new(kind: RevealKind, count: usize) -> Self {
        Self {
            kind,
            count,
            started_ms: None,
        }
    }

    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    /// Start the reveal. Later triggers keep the first start time.
    pub fn start(&mut self, now_ms: u64) {
        if self.started_ms.is_none() {
            self.started_ms = Some(now_ms);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_ms.is_some()
    }

    /// Eased progress of item `index`, 0 hidden to 1 shown.
    pub fn progress(&self, index: usize, now_ms: u64) -> f32 {
        let Some(start) = self.started_ms else {
            return 0.0;
        };
        let item_start = start + index as u64 * self.kind.stagger_ms();
        if now_ms <= item_start {
            return 0.0;
        }
        let t = (now_ms - item_start) as f32 / REVEAL_DURATION_MS as f32;
        ease(t.min(1.0))
    }

    pub fn item(&self, index: usize, now_ms: u64) -> ItemStyle {
        let p = self.progress(index, now_ms);
        ItemStyle {
            opacity: p,
            translate_y: REVEAL_OFFSET_PX * (1.0 - p),
        }
    }

    /// Current width of a skill bar growing toward `target_percent`.
    pub fn bar_width(&self, index: usize, target_percent: f32, now_ms: u64) -> f32 {
        target_percent * self.progress(index, now_ms)
    }

    pub fn is_complete(&self, now_ms: u64) -> bool {
        match self.started_ms {
            Some(start) => {
                let last = self.count.saturating_sub(1) as u64 * self.kind.stagger_ms();
                now_ms >= start + last + REVEAL_DURATION_MS
            }
            None => false,
        }
    }
}

/// CSS `ease` timing curve, cubic-bezier(0.25, 0.1, 0.25, 1).
pub fn ease(t: f32) -> f32 {
    cubic_bezier(0.25, 0.1, 0.25, 1.0, t)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let bez = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    // Bisection on x(s); the curve is monotonic in x for these control points
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    let mut s = x;
    for _ in 0..24 {
        let xs = bez(x1, x2, s);
        if (xs - x).abs() < 1e-5 {
            break;
        }
        if xs < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bez(y1, y2, s)
}
