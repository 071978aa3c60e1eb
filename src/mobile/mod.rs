//! Mobile layout: touch-first profile sidebar
//!
//! - Edge-swipe sidebar controller with distance/velocity commit
//! - Frame-from-state render step for panel, overlay and toggle
//! - Debounced viewport watcher with the 768px breakpoint
//! - Shell that routes taps, keys and touches to the above

pub mod frame;
pub mod sidebar;
pub mod touch;
pub mod ui;
pub mod viewport;
