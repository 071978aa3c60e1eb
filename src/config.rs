//! Tunables for the sidebar gesture system and the viewport watcher.
//!
//! Every value defaults to the named constant in [`crate::mobile::sidebar`]
//! or [`crate::mobile::viewport`]. Use the `with_*` setters to override and
//! [`ShellConfig::validate`] before handing the config to a controller.

use crate::mobile::sidebar::{
    CLOSE_COMMIT, CLOSE_HAPTIC_MS, EDGE_THRESHOLD, HORIZONTAL_LOCK, OPEN_COMMIT, OPEN_DISTANCE,
    OPEN_HAPTIC_MS, PANEL_WIDTH, VELOCITY_THRESHOLD, VERTICAL_CANCEL_THRESHOLD,
};
use crate::mobile::viewport::{MOBILE_BREAKPOINT, RESIZE_DEBOUNCE_MS};

/// Rejected configuration value
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Gesture thresholds and panel geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarConfig {
    /// Left-edge zone (px) in which a touch can start an opening gesture
    pub edge_threshold: f32,
    /// Drag distance (px) that maps to full progress
    pub open_distance: f32,
    /// Vertical travel (px) that aborts a gesture as a page scroll
    pub vertical_cancel: f32,
    /// Horizontal travel (px) after which vertical drift no longer cancels
    pub horizontal_lock: f32,
    /// Opening commits when progress exceeds this
    pub open_commit: f32,
    /// Closing commits when progress falls below this
    pub close_commit: f32,
    /// Flick velocity in px/ms
    pub velocity_threshold: f32,
    /// Rendered panel width (px)
    pub panel_width: f32,
    pub open_haptic_ms: u32,
    pub close_haptic_ms: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            edge_threshold: EDGE_THRESHOLD,
            open_distance: OPEN_DISTANCE,
            vertical_cancel: VERTICAL_CANCEL_THRESHOLD,
            horizontal_lock: HORIZONTAL_LOCK,
            open_commit: OPEN_COMMIT,
            close_commit: CLOSE_COMMIT,
            velocity_threshold: VELOCITY_THRESHOLD,
            panel_width: PANEL_WIDTH,
            open_haptic_ms: OPEN_HAPTIC_MS,
            close_haptic_ms: CLOSE_HAPTIC_MS,
        }
    }
}

impl SidebarConfig {
    pub fn with_edge_threshold(mut self, px: f32) -> Self {
        self.edge_threshold = px;
        self
    }

    pub fn with_open_distance(mut self, px: f32) -> Self {
        self.open_distance = px;
        self
    }

    pub fn with_commit_thresholds(mut self, open: f32, close: f32) -> Self {
        self.open_commit = open;
        self.close_commit = close;
        self
    }

    pub fn with_velocity_threshold(mut self, px_per_ms: f32) -> Self {
        self.velocity_threshold = px_per_ms;
        self
    }

    pub fn with_panel_width(mut self, px: f32) -> Self {
        self.panel_width = px;
        self
    }

    pub fn with_haptics(mut self, open_ms: u32, close_ms: u32) -> Self {
        self.open_haptic_ms = open_ms;
        self.close_haptic_ms = close_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("edge_threshold", self.edge_threshold)?;
        positive("open_distance", self.open_distance)?;
        positive("vertical_cancel", self.vertical_cancel)?;
        positive("velocity_threshold", self.velocity_threshold)?;
        positive("panel_width", self.panel_width)?;
        if !(0.0..=self.vertical_cancel).contains(&self.horizontal_lock) {
            return Err(ConfigError {
                field: "horizontal_lock",
                message: format!(
                    "{} must lie in 0..={}",
                    self.horizontal_lock, self.vertical_cancel
                ),
            });
        }
        unit("open_commit", self.open_commit)?;
        unit("close_commit", self.close_commit)?;
        Ok(())
    }
}

/// Viewport resize handling.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeConfig {
    /// Width (px) above which the mobile gesture system is inert
    pub breakpoint: f32,
    /// Quiet period before a resize burst is acted on
    pub debounce_ms: u64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            breakpoint: MOBILE_BREAKPOINT,
            debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

/// Top-level configuration for the mobile shell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellConfig {
    pub sidebar: SidebarConfig,
    pub resize: ResizeConfig,
}

impl ShellConfig {
    pub fn with_sidebar(mut self, sidebar: SidebarConfig) -> Self {
        self.sidebar = sidebar;
        self
    }

    pub fn with_breakpoint(mut self, px: f32) -> Self {
        self.resize.breakpoint = px;
        self
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.resize.debounce_ms = ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sidebar.validate()?;
        positive("breakpoint", self.resize.breakpoint)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError {
            field,
            message: format!("{} must be a positive number", value),
        })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError {
            field,
            message: format!("{} must lie in 0.0..=1.0", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(ShellConfig::default().validate().is_ok());
        assert!((ShellConfig::default().resize.breakpoint - 768.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_zero_open_distance() {
        let cfg = ShellConfig::default().with_sidebar(SidebarConfig::default().with_open_distance(0.0));
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.field, "open_distance");
    }

    #[test]
    fn test_rejects_commit_out_of_range() {
        let cfg = SidebarConfig::default().with_commit_thresholds(0.3, 1.5);
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.field, "close_commit");
        assert!(err.to_string().contains("close_commit"));
    }

    #[test]
    fn test_rejects_nan_breakpoint() {
        let cfg = ShellConfig::default().with_breakpoint(f32::NAN);
        assert_eq!(cfg.validate().unwrap_err().field, "breakpoint");
    }
}
