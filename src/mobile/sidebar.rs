//! Edge-Swipe Sidebar Controller
//!
//! Turns raw `start/move/end` touch events into a binary Open/Closed panel:
//! - Closed: a touch within `EDGE_THRESHOLD` of the left edge starts an
//!   opening drag
//! - Open: a touch outside the panel and the toggle starts a closing drag
//! - Vertical travel past `VERTICAL_CANCEL_THRESHOLD` before the drag locks
//!   horizontally hands the gesture back to page scrolling
//! - At release the drag commits on distance (`OPEN_COMMIT` /
//!   `CLOSE_COMMIT`) or on a flick faster than `VELOCITY_THRESHOLD`
//!
//! The controller owns `PanelState` and the live `GestureSession`; every
//! visual change goes out through [`SidebarHost::apply`] as a
//! [`SidebarFrame`].

use crate::config::SidebarConfig;

use super::frame::SidebarFrame;
use super::touch::{Bounds, GestureKind, GestureSession, TouchPoint};
use super::viewport::MOBILE_BREAKPOINT;

/// Left-edge zone (px) for opening gestures
pub const EDGE_THRESHOLD: f32 = 30.0;
/// Drag distance (px) that maps to full progress
pub const OPEN_DISTANCE: f32 = 200.0;
/// Vertical travel (px) that turns a drag into a page scroll
pub const VERTICAL_CANCEL_THRESHOLD: f32 = 50.0;
/// Horizontal travel (px) after which vertical drift no longer cancels
pub const HORIZONTAL_LOCK: f32 = 10.0;
pub const OPEN_COMMIT: f32 = 0.3;
pub const CLOSE_COMMIT: f32 = 0.7;
/// Flick speed in px/ms
pub const VELOCITY_THRESHOLD: f32 = 0.5;
pub const PANEL_WIDTH: f32 = 280.0;
pub const OPEN_HAPTIC_MS: u32 = 20;
pub const CLOSE_HAPTIC_MS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Surfaces the controller paints through.
pub trait SidebarHost {
    /// Paint panel, overlay, toggle and page scroll lock from one frame.
    fn apply(&mut self, frame: &SidebarFrame);

    /// Fire-and-forget haptic pulse. Hosts without haptics ignore it.
    fn vibrate(&mut self, _duration_ms: u32) {}
}

/// What the controller did with a touch event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchOutcome {
    /// Not intercepted; default page behavior proceeds
    Ignored,
    /// A session began
    Started(GestureKind),
    /// Session tracked the move but the drag has not locked horizontally
    /// yet; page scrolling proceeds
    Tracking { progress: f32 },
    /// Horizontally locked drag; page scrolling must be suppressed
    Dragging { progress: f32 },
    /// Vertical scroll detected; session dropped, panel restored
    Cancelled,
    /// Release moved the panel to a new state
    Committed(PanelState),
    /// Release snapped back to the pre-gesture state
    Reverted(PanelState),
}

impl TouchOutcome {
    /// Whether the host should prevent default scrolling for this event.
    pub fn suppresses_scroll(&self) -> bool {
        matches!(self, TouchOutcome::Dragging { .. })
    }
}

/// Swipe-driven profile sidebar.
pub struct SidebarController<H: SidebarHost> {
    config: SidebarConfig,
    breakpoint: f32,
    host: Option<H>,
    state: PanelState,
    session: Option<GestureSession>,
    viewport_width: f32,
    viewport_height: f32,
    toggle_bounds: Option<Bounds>,
}

impl<H: SidebarHost> SidebarController<H> {
    /// Build a controller. Without a host the controller is inert: every
    /// event is ignored and nothing is painted.
    pub fn new(config: SidebarConfig, host: Option<H>, viewport_width: f32, viewport_height: f32) -> Self {
        if host.is_none() {
            log::warn!("sidebar host missing; swipe gestures disabled");
        }
        let mut controller = Self {
            config,
            breakpoint: MOBILE_BREAKPOINT,
            host,
            state: PanelState::Closed,
            session: None,
            viewport_width,
            viewport_height,
            toggle_bounds: None,
        };
        controller.render();
        controller
    }

    /// Set the width above which gestures never qualify.
    pub fn with_breakpoint(mut self, px: f32) -> Self {
        self.breakpoint = px;
        self
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_inert(&self) -> bool {
        self.host.is_none()
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    /// Whether the viewport is in the mobile regime where gestures apply.
    pub fn gestures_enabled(&self) -> bool {
        self.viewport_width <= self.breakpoint
    }

    /// Whether a toggle tap would open the panel right now. False above the
    /// breakpoint even before a debounced resize settles.
    pub fn toggle_usable(&self) -> bool {
        self.host.is_some() && self.gestures_enabled() && self.state == PanelState::Closed
    }

    /// Hit area of the toggle affordance; touches inside never start a
    /// closing drag.
    pub fn set_toggle_bounds(&mut self, bounds: Option<Bounds>) {
        self.toggle_bounds = bounds;
    }

    pub fn panel_bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.config.panel_width, self.viewport_height)
    }

    /// Record the current viewport size. Leaving the mobile regime mid-drag
    /// drops the session.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        if !self.gestures_enabled() && self.session.take().is_some() {
            log::debug!("viewport {}px left mobile regime; gesture dropped", width);
            self.render();
        }
    }

    /// The frame that matches the current state and session.
    pub fn frame(&self) -> SidebarFrame {
        match &self.session {
            Some(s) => SidebarFrame::dragging(self.state, s.progress, self.config.panel_width),
            None => SidebarFrame::resting(self.state, self.config.panel_width),
        }
    }

    /// Contact down.
    pub fn touch_start(&mut self, point: TouchPoint) -> TouchOutcome {
        if self.host.is_none() {
            return TouchOutcome::Ignored;
        }
        if self.session.is_some() {
            log::trace!("contact {} ignored: session already active", point.id);
            return TouchOutcome::Ignored;
        }
        if !self.gestures_enabled() {
            return TouchOutcome::Ignored;
        }

        let kind = match self.state {
            PanelState::Closed if point.x <= self.config.edge_threshold => GestureKind::Opening,
            PanelState::Open if self.outside_panel_and_toggle(point.x, point.y) => GestureKind::Closing,
            _ => return TouchOutcome::Ignored,
        };

        log::debug!("{:?} gesture started at ({}, {})", kind, point.x, point.y);
        self.session = Some(GestureSession::begin(kind, point));
        self.render();
        TouchOutcome::Started(kind)
    }

    /// Contact moved.
    pub fn touch_move(&mut self, point: TouchPoint) -> TouchOutcome {
        let (vertical_cancel, horizontal_lock, open_distance) = (
            self.config.vertical_cancel,
            self.config.horizontal_lock,
            self.config.open_distance,
        );
        let Some(session) = self.session.as_mut() else {
            return TouchOutcome::Ignored;
        };
        if session.contact != point.id {
            return TouchOutcome::Ignored;
        }

        session.track(point.x, point.y, open_distance);
        if !session.horizontal_locked {
            if session.delta_y_abs() > vertical_cancel {
                return self.cancel_session();
            }
            let dx = session.delta_x().abs();
            if dx > horizontal_lock && dx > session.delta_y_abs() {
                session.horizontal_locked = true;
            }
        }

        let (progress, locked) = (session.progress, session.horizontal_locked);
        log::trace!("drag progress {:.3}, locked {}", progress, locked);
        self.render();
        if locked {
            TouchOutcome::Dragging { progress }
        } else {
            TouchOutcome::Tracking { progress }
        }
    }

    /// Contact released: commit or snap back.
    pub fn touch_end(&mut self, point: TouchPoint) -> TouchOutcome {
        match &self.session {
            Some(s) if s.contact == point.id => {}
            _ => return TouchOutcome::Ignored,
        }
        let Some(mut session) = self.session.take() else {
            return TouchOutcome::Ignored;
        };

        session.track(point.x, point.y, self.config.open_distance);
        if !session.horizontal_locked && session.delta_y_abs() > self.config.vertical_cancel {
            log::debug!("gesture released as vertical scroll");
            self.render();
            return TouchOutcome::Cancelled;
        }

        let velocity = session.velocity(point.time_ms);
        let flick = velocity > self.config.velocity_threshold && session.moving_toward_target();
        let (target, commit) = match session.kind {
            GestureKind::Opening => (PanelState::Open, session.progress > self.config.open_commit || flick),
            GestureKind::Closing => (PanelState::Closed, session.progress < self.config.close_commit || flick),
        };
        log::debug!(
            "{:?} released: progress {:.3}, velocity {:.3}px/ms, commit {}",
            session.kind,
            session.progress,
            velocity,
            commit
        );

        if commit {
            self.enter(target);
            TouchOutcome::Committed(target)
        } else {
            self.render();
            TouchOutcome::Reverted(self.state)
        }
    }

    /// Platform cancelled the contact (e.g. system gesture took over).
    pub fn touch_cancel(&mut self, id: u64) -> TouchOutcome {
        match &self.session {
            Some(s) if s.contact == id => self.cancel_session(),
            _ => TouchOutcome::Ignored,
        }
    }

    /// Open without a gesture (toggle tap). Returns whether the state changed.
    pub fn open_panel(&mut self) -> bool {
        if self.host.is_none() {
            return false;
        }
        if !self.gestures_enabled() {
            log::debug!("open ignored above {}px breakpoint", self.breakpoint);
            return false;
        }
        self.session = None;
        self.enter(PanelState::Open)
    }

    /// Close without a gesture (Escape, overlay tap, resize). Returns whether
    /// the state changed.
    pub fn close_panel(&mut self) -> bool {
        if self.host.is_none() {
            return false;
        }
        self.session = None;
        self.enter(PanelState::Closed)
    }

    fn outside_panel_and_toggle(&self, x: f32, y: f32) -> bool {
        let on_toggle = self.toggle_bounds.map_or(false, |b| b.contains(x, y));
        !self.panel_bounds().contains(x, y) && !on_toggle
    }

    fn cancel_session(&mut self) -> TouchOutcome {
        self.session = None;
        log::debug!("gesture cancelled; panel stays {:?}", self.state);
        self.render();
        TouchOutcome::Cancelled
    }

    /// Move to `target` and fire entry side effects. Re-entering the current
    /// state repaints the canonical frame but emits no haptic pulse.
    fn enter(&mut self, target: PanelState) -> bool {
        let changed = self.state != target;
        self.state = target;
        self.render();
        if changed {
            log::debug!("sidebar {:?}", target);
            let pulse = match target {
                PanelState::Open => self.config.open_haptic_ms,
                PanelState::Closed => self.config.close_haptic_ms,
            };
            if let Some(host) = self.host.as_mut() {
                host.vibrate(pulse);
            }
        }
        changed
    }

    fn render(&mut self) {
        let frame = self.frame();
        if let Some(host) = self.host.as_mut() {
            host.apply(&frame);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Host that records every frame and pulse.
    #[derive(Default)]
    pub(crate) struct RecordingHost {
        pub frames: Vec<SidebarFrame>,
        pub pulses: Vec<u32>,
    }

    impl SidebarHost for RecordingHost {
        fn apply(&mut self, frame: &SidebarFrame) {
            self.frames.push(*frame);
        }

        fn vibrate(&mut self, duration_ms: u32) {
            self.pulses.push(duration_ms);
        }
    }

    fn controller() -> SidebarController<RecordingHost> {
        SidebarController::new(SidebarConfig::default(), Some(RecordingHost::default()), 400.0, 800.0)
    }

    fn last_frame(c: &SidebarController<RecordingHost>) -> SidebarFrame {
        *c.host().unwrap().frames.last().unwrap()
    }

    fn drag(c: &mut SidebarController<RecordingHost>, from: (f32, f32), to: (f32, f32), ms: u64) -> TouchOutcome {
        c.touch_start(TouchPoint::new(from.0, from.1, 1, 1_000));
        c.touch_move(TouchPoint::new(to.0, to.1, 1, 1_000 + ms / 2));
        c.touch_end(TouchPoint::new(to.0, to.1, 1, 1_000 + ms))
    }

    #[test]
    fn test_initial_frame_is_closed() {
        let c = controller();
        assert_eq!(c.state(), PanelState::Closed);
        assert_eq!(last_frame(&c), SidebarFrame::resting(PanelState::Closed, PANEL_WIDTH));
    }

    #[test]
    fn test_edge_swipe_opens() {
        let mut c = controller();
        let out = drag(&mut c, (10.0, 400.0), (150.0, 405.0), 1_000);
        assert_eq!(out, TouchOutcome::Committed(PanelState::Open));
        assert!(c.is_open());
        assert!(c.session().is_none());
        let f = last_frame(&c);
        assert!(f.scroll_locked);
        assert!(!f.toggle_visible);
        assert_eq!(c.host().unwrap().pulses, vec![OPEN_HAPTIC_MS]);
    }

    #[test]
    fn test_start_away_from_edge_is_ignored() {
        let mut c = controller();
        assert_eq!(c.touch_start(TouchPoint::new(31.0, 400.0, 1, 0)), TouchOutcome::Ignored);
        assert_eq!(c.touch_move(TouchPoint::new(200.0, 400.0, 1, 10)), TouchOutcome::Ignored);
        assert_eq!(c.touch_end(TouchPoint::new(200.0, 400.0, 1, 20)), TouchOutcome::Ignored);
        assert_eq!(c.state(), PanelState::Closed);
    }

    #[test]
    fn test_short_slow_drag_reverts() {
        let mut c = controller();
        let out = drag(&mut c, (10.0, 400.0), (50.0, 400.0), 1_000);
        assert_eq!(out, TouchOutcome::Reverted(PanelState::Closed));
        assert_eq!(last_frame(&c), SidebarFrame::resting(PanelState::Closed, PANEL_WIDTH));
        assert!(c.host().unwrap().pulses.is_empty());
    }

    #[test]
    fn test_flick_opens_below_distance() {
        // 40px in 50ms = 0.8px/ms, progress 0.2
        let mut c = controller();
        let out = drag(&mut c, (10.0, 400.0), (50.0, 400.0), 50);
        assert_eq!(out, TouchOutcome::Committed(PanelState::Open));
    }

    #[test]
    fn test_flick_wrong_direction_does_not_close() {
        let mut c = controller();
        c.open_panel();
        // Fast rightward flick while open: progress stays 1, direction is wrong
        let out = drag(&mut c, (300.0, 400.0), (390.0, 400.0), 20);
        assert_eq!(out, TouchOutcome::Reverted(PanelState::Open));
        assert!(c.is_open());
    }

    #[test]
    fn test_vertical_scroll_cancels() {
        let mut c = controller();
        assert_eq!(c.touch_start(TouchPoint::new(10.0, 100.0, 1, 0)), TouchOutcome::Started(GestureKind::Opening));
        let out = c.touch_move(TouchPoint::new(15.0, 160.0, 1, 30));
        assert_eq!(out, TouchOutcome::Cancelled);
        assert!(!out.suppresses_scroll());
        assert!(c.session().is_none());
        assert_eq!(c.state(), PanelState::Closed);
        assert_eq!(last_frame(&c), SidebarFrame::resting(PanelState::Closed, PANEL_WIDTH));
        // Later events of that contact are orphans
        assert_eq!(c.touch_end(TouchPoint::new(15.0, 200.0, 1, 60)), TouchOutcome::Ignored);
    }

    #[test]
    fn test_vertical_moves_before_lock_never_suppress_scroll() {
        let mut c = controller();
        c.touch_start(TouchPoint::new(10.0, 100.0, 1, 0));
        for (i, y) in [110.0, 120.0, 130.0, 140.0, 150.0].into_iter().enumerate() {
            let out = c.touch_move(TouchPoint::new(11.0, y, 1, 10 * (i as u64 + 1)));
            assert!(matches!(out, TouchOutcome::Tracking { .. }), "{:?} at y={}", out, y);
            assert!(!out.suppresses_scroll());
        }
        assert!(!c.session().unwrap().horizontal_locked);
        let out = c.touch_move(TouchPoint::new(15.0, 160.0, 1, 60));
        assert_eq!(out, TouchOutcome::Cancelled);
        assert!(!out.suppresses_scroll());
        assert_eq!(c.state(), PanelState::Closed);
    }

    #[test]
    fn test_vertical_drift_after_lock_is_kept() {
        let mut c = controller();
        c.touch_start(TouchPoint::new(10.0, 100.0, 1, 0));
        assert!(c.touch_move(TouchPoint::new(60.0, 110.0, 1, 100)).suppresses_scroll());
        let out = c.touch_move(TouchPoint::new(120.0, 170.0, 1, 200));
        assert!(matches!(out, TouchOutcome::Dragging { .. }));
        assert_eq!(c.touch_end(TouchPoint::new(120.0, 170.0, 1, 300)), TouchOutcome::Committed(PanelState::Open));
    }

    #[test]
    fn test_drag_frames_track_progress() {
        let mut c = controller();
        c.touch_start(TouchPoint::new(0.0, 400.0, 1, 0));
        c.touch_move(TouchPoint::new(100.0, 400.0, 1, 100));
        let f = last_frame(&c);
        assert!((f.progress - 0.5).abs() < 1e-6);
        assert!(!f.animate);
        assert!(f.toggle_visible);
    }

    #[test]
    fn test_tap_never_changes_state() {
        let mut c = controller();
        c.touch_start(TouchPoint::new(5.0, 400.0, 1, 0));
        assert_eq!(c.touch_end(TouchPoint::new(5.0, 400.0, 1, 80)), TouchOutcome::Reverted(PanelState::Closed));

        c.open_panel();
        c.touch_start(TouchPoint::new(350.0, 400.0, 2, 200));
        assert_eq!(c.touch_end(TouchPoint::new(350.0, 400.0, 2, 260)), TouchOutcome::Reverted(PanelState::Open));
        assert!(c.is_open());
    }

    #[test]
    fn test_closing_drag_outside_panel() {
        let mut c = controller();
        c.open_panel();
        assert_eq!(c.touch_start(TouchPoint::new(100.0, 400.0, 1, 0)), TouchOutcome::Ignored);
        assert_eq!(c.touch_start(TouchPoint::new(350.0, 400.0, 1, 0)), TouchOutcome::Started(GestureKind::Closing));
        c.touch_move(TouchPoint::new(270.0, 400.0, 1, 500));
        // progress 0.6 < 0.7
        assert_eq!(c.touch_end(TouchPoint::new(270.0, 400.0, 1, 1_000)), TouchOutcome::Committed(PanelState::Closed));
        let f = last_frame(&c);
        assert!(!f.scroll_locked);
        assert!(f.toggle_visible);
        assert_eq!(c.host().unwrap().pulses, vec![OPEN_HAPTIC_MS, CLOSE_HAPTIC_MS]);
    }

    #[test]
    fn test_vertical_cancel_while_closing_keeps_panel_open() {
        let mut c = controller();
        c.open_panel();
        c.touch_start(TouchPoint::new(350.0, 100.0, 1, 0));
        assert_eq!(c.touch_move(TouchPoint::new(345.0, 170.0, 1, 40)), TouchOutcome::Cancelled);
        assert!(c.is_open());
        assert!(c.session().is_none());
        let f = last_frame(&c);
        assert_eq!(f, SidebarFrame::resting(PanelState::Open, PANEL_WIDTH));
        assert!(f.scroll_locked);
        assert_eq!(c.host().unwrap().pulses, vec![OPEN_HAPTIC_MS]);
    }

    #[test]
    fn test_short_slow_closing_drag_reverts() {
        let mut c = controller();
        c.open_panel();
        c.touch_start(TouchPoint::new(350.0, 400.0, 1, 0));
        // 40px left over 1s: progress 0.8, velocity 0.04px/ms
        c.touch_move(TouchPoint::new(310.0, 400.0, 1, 500));
        assert_eq!(c.touch_end(TouchPoint::new(310.0, 400.0, 1, 1_000)), TouchOutcome::Reverted(PanelState::Open));
        assert!(c.is_open());
        assert_eq!(last_frame(&c), SidebarFrame::resting(PanelState::Open, PANEL_WIDTH));
        assert_eq!(c.host().unwrap().pulses, vec![OPEN_HAPTIC_MS]);
    }

    #[test]
    fn test_closing_flick_commits_below_distance() {
        let mut c = controller();
        c.open_panel();
        // 40px left in 50ms: progress 0.8, velocity 0.8px/ms
        let out = drag(&mut c, (350.0, 400.0), (310.0, 400.0), 50);
        assert_eq!(out, TouchOutcome::Committed(PanelState::Closed));
        assert!(!c.is_open());
        assert_eq!(c.host().unwrap().pulses, vec![OPEN_HAPTIC_MS, CLOSE_HAPTIC_MS]);
    }

    #[test]
    fn test_toggle_area_does_not_start_closing() {
        let mut c = controller();
        c.set_toggle_bounds(Some(Bounds::new(340.0, 740.0, 48.0, 48.0)));
        c.open_panel();
        assert_eq!(c.touch_start(TouchPoint::new(360.0, 760.0, 1, 0)), TouchOutcome::Ignored);
    }

    #[test]
    fn test_second_contact_ignored() {
        let mut c = controller();
        c.touch_start(TouchPoint::new(10.0, 400.0, 1, 0));
        assert_eq!(c.touch_start(TouchPoint::new(12.0, 300.0, 2, 10)), TouchOutcome::Ignored);
        assert_eq!(c.touch_move(TouchPoint::new(200.0, 300.0, 2, 20)), TouchOutcome::Ignored);
        assert_eq!(c.touch_end(TouchPoint::new(200.0, 300.0, 2, 30)), TouchOutcome::Ignored);
        assert!(c.session().is_some());
        assert_eq!(c.session().unwrap().progress, 0.0);
        assert_eq!(c.touch_end(TouchPoint::new(10.0, 400.0, 1, 900)), TouchOutcome::Reverted(PanelState::Closed));
    }

    #[test]
    fn test_touch_cancel_restores() {
        let mut c = controller();
        c.touch_start(TouchPoint::new(10.0, 400.0, 7, 0));
        c.touch_move(TouchPoint::new(150.0, 400.0, 7, 100));
        assert_eq!(c.touch_cancel(3), TouchOutcome::Ignored);
        assert_eq!(c.touch_cancel(7), TouchOutcome::Cancelled);
        assert_eq!(last_frame(&c), SidebarFrame::resting(PanelState::Closed, PANEL_WIDTH));
    }

    #[test]
    fn test_open_twice_same_as_once() {
        let mut c = controller();
        assert!(c.open_panel());
        let once = last_frame(&c);
        assert!(!c.open_panel());
        assert_eq!(last_frame(&c), once);
        assert_eq!(c.host().unwrap().pulses, vec![OPEN_HAPTIC_MS]);
        assert!(c.close_panel());
        assert!(!c.close_panel());
        assert_eq!(last_frame(&c), SidebarFrame::resting(PanelState::Closed, PANEL_WIDTH));
        assert_eq!(c.host().unwrap().pulses, vec![OPEN_HAPTIC_MS, CLOSE_HAPTIC_MS]);
    }

    #[test]
    fn test_explicit_close_drops_session() {
        let mut c = controller();
        c.open_panel();
        c.touch_start(TouchPoint::new(350.0, 400.0, 1, 0));
        c.touch_move(TouchPoint::new(300.0, 400.0, 1, 50));
        assert!(c.close_panel());
        assert!(c.session().is_none());
        assert_eq!(c.touch_end(TouchPoint::new(300.0, 400.0, 1, 90)), TouchOutcome::Ignored);
    }

    #[test]
    fn test_inert_above_breakpoint() {
        let mut c = SidebarController::new(SidebarConfig::default(), Some(RecordingHost::default()), 1024.0, 800.0);
        assert_eq!(c.touch_start(TouchPoint::new(0.0, 400.0, 1, 0)), TouchOutcome::Ignored);
        assert!(!c.open_panel());
    }

    #[test]
    fn test_leaving_mobile_mid_drag_drops_session() {
        let mut c = controller();
        c.touch_start(TouchPoint::new(10.0, 400.0, 1, 0));
        c.touch_move(TouchPoint::new(100.0, 400.0, 1, 50));
        c.set_viewport_size(1200.0, 800.0);
        assert!(c.session().is_none());
        assert_eq!(last_frame(&c), SidebarFrame::resting(PanelState::Closed, PANEL_WIDTH));
    }

    #[test]
    fn test_toggle_unusable_once_viewport_widens() {
        let mut c = controller();
        assert!(c.toggle_usable());
        c.set_viewport_size(1024.0, 800.0);
        assert!(!c.toggle_usable());
        assert!(!c.open_panel());
        c.set_viewport_size(400.0, 800.0);
        assert!(c.toggle_usable());
        c.open_panel();
        assert!(!c.toggle_usable());
    }

    #[test]
    fn test_missing_host_is_noop() {
        let mut c: SidebarController<RecordingHost> =
            SidebarController::new(SidebarConfig::default(), None, 400.0, 800.0);
        assert!(c.is_inert());
        assert_eq!(c.touch_start(TouchPoint::new(0.0, 400.0, 1, 0)), TouchOutcome::Ignored);
        assert!(!c.open_panel());
        assert!(!c.close_panel());
        assert_eq!(c.state(), PanelState::Closed);
    }

    proptest! {
        #[test]
        fn prop_short_slow_opening_stays_closed(d in 0.0f32..59.0, ms in 200u64..5_000) {
            let mut c = controller();
            let out = drag(&mut c, (0.0, 400.0), (d, 400.0), ms);
            prop_assert_eq!(out, TouchOutcome::Reverted(PanelState::Closed));
            prop_assert_eq!(last_frame(&c).progress, 0.0);
        }

        #[test]
        fn prop_long_opening_commits(d in 61.0f32..400.0, ms in 1u64..10_000) {
            let mut c = controller();
            let out = drag(&mut c, (0.0, 400.0), (d, 400.0), ms);
            prop_assert_eq!(out, TouchOutcome::Committed(PanelState::Open));
        }

        #[test]
        fn prop_long_closing_commits(d in 61.0f32..300.0, ms in 1u64..10_000) {
            let mut c = controller();
            c.open_panel();
            let out = drag(&mut c, (390.0, 400.0), (390.0 - d, 400.0), ms);
            prop_assert_eq!(out, TouchOutcome::Committed(PanelState::Closed));
        }

        #[test]
        fn prop_never_qualifies_above_breakpoint(width in 768.5f32..4_000.0, x in 0.0f32..30.0, y in 0.0f32..800.0) {
            let mut c = SidebarController::new(SidebarConfig::default(), Some(RecordingHost::default()), width, 800.0);
            prop_assert_eq!(c.touch_start(TouchPoint::new(x, y, 1, 0)), TouchOutcome::Ignored);
            prop_assert!(c.session().is_none());
        }
    }
}
