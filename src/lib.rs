pub mod config;

// Touch-first profile sidebar
pub mod mobile;

// Section navigation, animations, projects, contact form, toasts
pub mod page;
