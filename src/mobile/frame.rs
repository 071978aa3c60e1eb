//! Frame-from-state render step for the sidebar.
//!
//! The controller never touches surfaces directly: after every state or
//! progress change it computes a `SidebarFrame` and hands it to its host.

use super::sidebar::PanelState;

/// Overlay opacity when the panel is fully open
pub const OVERLAY_MAX_OPACITY: f32 = 0.5;

/// Everything a host needs to paint the panel, overlay and toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarFrame {
    /// Horizontal translate of the panel: `-panel_width` closed, `0` open
    pub panel_offset: f32,
    /// 0 = closed, 1 = open
    pub progress: f32,
    pub overlay_opacity: f32,
    /// Overlay accepts taps (present at any non-zero progress)
    pub overlay_visible: bool,
    /// Background page must not scroll
    pub scroll_locked: bool,
    pub toggle_visible: bool,
    /// Snap frames animate to position; drag frames follow the finger
    pub animate: bool,
}

impl SidebarFrame {
    /// Canonical resting frame for a panel state.
    pub fn resting(state: PanelState, panel_width: f32) -> Self {
        let progress = match state {
            PanelState::Closed => 0.0,
            PanelState::Open => 1.0,
        };
        Self {
            scroll_locked: state == PanelState::Open,
            toggle_visible: state == PanelState::Closed,
            animate: true,
            ..Self::at_progress(progress, panel_width)
        }
    }

    /// Frame while a drag is in flight. Scroll lock and toggle follow the
    /// state held before the gesture.
    pub fn dragging(base: PanelState, progress: f32, panel_width: f32) -> Self {
        Self {
            scroll_locked: base == PanelState::Open,
            toggle_visible: base == PanelState::Closed,
            animate: false,
            ..Self::at_progress(progress, panel_width)
        }
    }

    fn at_progress(progress: f32, panel_width: f32) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            panel_offset: -panel_width * (1.0 - progress),
            progress,
            overlay_opacity: OVERLAY_MAX_OPACITY * progress,
            overlay_visible: progress > 0.0,
            scroll_locked: false,
            toggle_visible: true,
            animate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_closed() {
        let f = SidebarFrame::resting(PanelState::Closed, 280.0);
        assert!((f.panel_offset + 280.0).abs() < 1e-6);
        assert_eq!(f.overlay_opacity, 0.0);
        assert!(!f.overlay_visible);
        assert!(!f.scroll_locked);
        assert!(f.toggle_visible);
    }

    #[test]
    fn test_resting_open() {
        let f = SidebarFrame::resting(PanelState::Open, 280.0);
        assert_eq!(f.panel_offset, 0.0);
        assert!((f.overlay_opacity - OVERLAY_MAX_OPACITY).abs() < 1e-6);
        assert!(f.scroll_locked);
        assert!(!f.toggle_visible);
    }

    #[test]
    fn test_dragging_is_proportional() {
        let f = SidebarFrame::dragging(PanelState::Closed, 0.25, 280.0);
        assert!((f.panel_offset + 210.0).abs() < 1e-4);
        assert!((f.overlay_opacity - 0.125).abs() < 1e-6);
        assert!(!f.animate);
        assert!(!f.scroll_locked);
    }
}
