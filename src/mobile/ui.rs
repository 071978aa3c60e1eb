//! Mobile shell: routes raw input to the sidebar, the nav menu and the
//! viewport watcher.
//!
//! ┌─────────────────────────┐
//! │ [≡]  Portfolio          │  ← Top bar, nav menu toggle
//! ├─────────────────────────┤
//! │▌                        │  ← Left edge: swipe to open profile
//! │▌    Section content     │
//! │▌                   [👤] │  ← Toggle affordance (hidden while open)
//! └─────────────────────────┘

use crate::config::ShellConfig;

use super::sidebar::{PanelState, SidebarController, SidebarHost, TouchOutcome};
use super::touch::TouchPoint;
use super::viewport::{LayoutRegime, ViewportSize, ViewportWatcher};

/// Input the shell understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellInput {
    TouchStart(TouchPoint),
    TouchMove(TouchPoint),
    TouchEnd(TouchPoint),
    TouchCancel(u64),
    Escape,
    /// Tap on the floating profile button
    ToggleTap,
    /// Tap on the dimming layer behind the open panel
    OverlayTap,
    NavToggleTap,
    NavLinkTap,
    /// Click anywhere outside the nav menu and its toggle
    OutsideTap,
    Resize(ViewportSize),
    Visibility { hidden: bool },
}

/// What the host should do in response
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MobileAction {
    None,
    /// The sidebar consumed the touch; prevent default scrolling
    CaptureScroll,
    SidebarOpened,
    SidebarClosed,
    NavMenu { open: bool },
}

pub struct MobileShell<H: SidebarHost> {
    pub sidebar: SidebarController<H>,
    pub viewport: ViewportWatcher,
    nav_menu_open: bool,
}

impl<H: SidebarHost> MobileShell<H> {
    pub fn new(config: &ShellConfig, host: Option<H>, size: ViewportSize) -> Self {
        let sidebar = SidebarController::new(config.sidebar.clone(), host, size.width, size.height)
            .with_breakpoint(config.resize.breakpoint);
        Self {
            sidebar,
            viewport: ViewportWatcher::new(config.resize.clone(), size),
            nav_menu_open: false,
        }
    }

    pub fn nav_menu_open(&self) -> bool {
        self.nav_menu_open
    }

    pub fn process(&mut self, input: ShellInput, now_ms: u64) -> MobileAction {
        match input {
            ShellInput::TouchStart(p) => touch_action(self.sidebar.touch_start(p)),
            ShellInput::TouchMove(p) => touch_action(self.sidebar.touch_move(p)),
            ShellInput::TouchEnd(p) => touch_action(self.sidebar.touch_end(p)),
            ShellInput::TouchCancel(id) => touch_action(self.sidebar.touch_cancel(id)),

            ShellInput::Escape | ShellInput::OverlayTap => {
                if self.sidebar.is_open() && self.sidebar.close_panel() {
                    MobileAction::SidebarClosed
                } else {
                    MobileAction::None
                }
            }

            ShellInput::ToggleTap => {
                if self.sidebar.open_panel() {
                    MobileAction::SidebarOpened
                } else {
                    MobileAction::None
                }
            }

            ShellInput::NavToggleTap => {
                self.nav_menu_open = !self.nav_menu_open;
                MobileAction::NavMenu {
                    open: self.nav_menu_open,
                }
            }

            ShellInput::NavLinkTap | ShellInput::OutsideTap => self.close_nav_menu(),

            ShellInput::Resize(size) => {
                self.sidebar.set_viewport_size(size.width, size.height);
                self.viewport.resize(size, now_ms);
                MobileAction::None
            }

            ShellInput::Visibility { hidden } => {
                self.viewport.set_hidden(hidden);
                MobileAction::None
            }
        }
    }

    /// Settle debounced resizes. Landing in desktop layout closes the
    /// sidebar and the nav menu.
    pub fn tick(&mut self, now_ms: u64) -> MobileAction {
        let Some(settled) = self.viewport.poll(now_ms) else {
            return MobileAction::None;
        };
        if settled.regime != LayoutRegime::Desktop {
            return MobileAction::None;
        }
        self.nav_menu_open = false;
        if self.sidebar.close_panel() {
            log::debug!("sidebar force-closed at {}px", settled.size.width);
            MobileAction::SidebarClosed
        } else {
            MobileAction::None
        }
    }

    fn close_nav_menu(&mut self) -> MobileAction {
        if self.nav_menu_open {
            self.nav_menu_open = false;
            MobileAction::NavMenu { open: false }
        } else {
            MobileAction::None
        }
    }
}

fn touch_action(outcome: TouchOutcome) -> MobileAction {
    match outcome {
        TouchOutcome::Dragging { .. } => MobileAction::CaptureScroll,
        TouchOutcome::Committed(PanelState::Open) => MobileAction::SidebarOpened,
        TouchOutcome::Committed(PanelState::Closed) => MobileAction::SidebarClosed,
        _ => MobileAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mobile::sidebar::tests::RecordingHost;

    fn shell(width: f32) -> MobileShell<RecordingHost> {
        MobileShell::new(
            &ShellConfig::default(),
            Some(RecordingHost::default()),
            ViewportSize::new(width, 800.0),
        )
    }

    #[test]
    fn test_toggle_then_escape() {
        let mut s = shell(400.0);
        assert_eq!(s.process(ShellInput::ToggleTap, 0), MobileAction::SidebarOpened);
        assert_eq!(s.process(ShellInput::ToggleTap, 10), MobileAction::None);
        assert_eq!(s.process(ShellInput::Escape, 20), MobileAction::SidebarClosed);
        assert_eq!(s.process(ShellInput::Escape, 30), MobileAction::None);
    }

    #[test]
    fn test_overlay_tap_closes() {
        let mut s = shell(400.0);
        s.process(ShellInput::ToggleTap, 0);
        assert_eq!(s.process(ShellInput::OverlayTap, 5), MobileAction::SidebarClosed);
        assert!(!s.sidebar.is_open());
    }

    #[test]
    fn test_swipe_routes_through_shell() {
        let mut s = shell(400.0);
        assert_eq!(s.process(ShellInput::TouchStart(TouchPoint::new(5.0, 300.0, 1, 0)), 0), MobileAction::None);
        assert_eq!(
            s.process(ShellInput::TouchMove(TouchPoint::new(120.0, 300.0, 1, 100)), 100),
            MobileAction::CaptureScroll
        );
        assert_eq!(
            s.process(ShellInput::TouchEnd(TouchPoint::new(120.0, 300.0, 1, 200)), 200),
            MobileAction::SidebarOpened
        );
    }

    #[test]
    fn test_vertical_drag_from_edge_keeps_page_scrolling() {
        let mut s = shell(400.0);
        s.process(ShellInput::TouchStart(TouchPoint::new(10.0, 100.0, 1, 0)), 0);
        assert_eq!(
            s.process(ShellInput::TouchMove(TouchPoint::new(11.0, 130.0, 1, 20)), 20),
            MobileAction::None
        );
        assert_eq!(
            s.process(ShellInput::TouchMove(TouchPoint::new(15.0, 160.0, 1, 40)), 40),
            MobileAction::None
        );
        assert!(s.sidebar.session().is_none());
    }

    #[test]
    fn test_resize_to_desktop_force_closes() {
        let mut s = shell(400.0);
        s.process(ShellInput::ToggleTap, 0);
        s.process(ShellInput::NavToggleTap, 0);
        s.process(ShellInput::Resize(ViewportSize::new(1024.0, 800.0)), 1_000);
        assert_eq!(s.tick(1_100), MobileAction::None);
        assert!(s.sidebar.is_open());
        assert_eq!(s.tick(1_300), MobileAction::SidebarClosed);
        assert!(!s.sidebar.is_open());
        assert!(!s.nav_menu_open());
    }

    #[test]
    fn test_nav_menu_closes_on_link_and_outside() {
        let mut s = shell(400.0);
        assert_eq!(s.process(ShellInput::NavToggleTap, 0), MobileAction::NavMenu { open: true });
        assert_eq!(s.process(ShellInput::NavLinkTap, 1), MobileAction::NavMenu { open: false });
        s.process(ShellInput::NavToggleTap, 2);
        assert_eq!(s.process(ShellInput::OutsideTap, 3), MobileAction::NavMenu { open: false });
        assert_eq!(s.process(ShellInput::OutsideTap, 4), MobileAction::None);
    }

    #[test]
    fn test_desktop_toggle_ignored() {
        let mut s = shell(1280.0);
        assert_eq!(s.process(ShellInput::ToggleTap, 0), MobileAction::None);
    }

    #[test]
    fn test_visibility_flag() {
        let mut s = shell(400.0);
        s.process(ShellInput::Visibility { hidden: true }, 0);
        assert!(s.viewport.is_hidden());
    }
}
