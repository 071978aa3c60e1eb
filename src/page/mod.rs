//! Page behaviors around the sidebar.
//!
//! Every type here is a small state machine driven by caller-supplied
//! millisecond timestamps, so the egui shell only has to feed it time and
//! input and paint the result.

pub mod boot;
pub mod contact;
pub mod counter;
pub mod cursor;
pub mod notify;
pub mod profile;
pub mod projects;
pub mod sections;
pub mod stagger;
pub mod typing;
