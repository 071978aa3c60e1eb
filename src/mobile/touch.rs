//! Touch primitives for the edge-swipe sidebar.
//!
//! - `TouchPoint`: one contact sample (position, id, timestamp)
//! - `Bounds`: axis-aligned hit rectangle for the panel and toggle
//! - `GestureSession`: the transient record of one in-flight drag
//!
//! Timestamps are caller-supplied milliseconds so the recognizer stays
//! deterministic and independent of any clock.

/// Touch sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
    pub id: u64,
    pub time_ms: u64,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32, id: u64, time_ms: u64) -> Self {
        Self { x, y, id, time_ms }
    }
}

/// Axis-aligned rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Which way a session is trying to move the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Started from the edge while closed; drags right
    Opening,
    /// Started outside the open panel; drags left
    Closing,
}

impl GestureKind {
    /// Sign of `dx` that moves the panel toward the gesture's target.
    pub fn direction(self) -> f32 {
        match self {
            GestureKind::Opening => 1.0,
            GestureKind::Closing => -1.0,
        }
    }
}

/// One in-progress drag, from contact start to release.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub kind: GestureKind,
    /// Contact that owns this session; other contacts are ignored
    pub contact: u64,
    pub origin_x: f32,
    pub origin_y: f32,
    pub origin_time_ms: u64,
    pub current_x: f32,
    pub current_y: f32,
    /// 0 = fully closed, 1 = fully open
    pub progress: f32,
    /// Set once the drag has travelled far enough sideways that vertical
    /// drift can no longer cancel it
    pub horizontal_locked: bool,
}

impl GestureSession {
    pub fn begin(kind: GestureKind, start: TouchPoint) -> Self {
        let progress = match kind {
            GestureKind::Opening => 0.0,
            GestureKind::Closing => 1.0,
        };
        Self {
            kind,
            contact: start.id,
            origin_x: start.x,
            origin_y: start.y,
            origin_time_ms: start.time_ms,
            current_x: start.x,
            current_y: start.y,
            progress,
            horizontal_locked: false,
        }
    }

    pub fn delta_x(&self) -> f32 {
        self.current_x - self.origin_x
    }

    pub fn delta_y_abs(&self) -> f32 {
        (self.current_y - self.origin_y).abs()
    }

    /// Record a new contact position and recompute progress.
    pub fn track(&mut self, x: f32, y: f32, open_distance: f32) {
        self.current_x = x;
        self.current_y = y;
        let ratio = self.delta_x() / open_distance;
        self.progress = match self.kind {
            GestureKind::Opening => ratio.clamp(0.0, 1.0),
            GestureKind::Closing => (1.0 + ratio).clamp(0.0, 1.0),
        };
    }

    /// Average horizontal speed in px/ms up to `end_ms`.
    pub fn velocity(&self, end_ms: u64) -> f32 {
        let duration = end_ms.saturating_sub(self.origin_time_ms).max(1);
        self.delta_x().abs() / duration as f32
    }

    /// Whether the net drag points toward the gesture's target state.
    pub fn moving_toward_target(&self) -> bool {
        self.delta_x() * self.kind.direction() > 0.0
    }
}
