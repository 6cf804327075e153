//! UI components built with Leptos.
//!
//! - [`Desktop`] - Window chrome, desktop icon and dock
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`sections`] - Content views for the five sections
//! - [`sidebar`] - File explorer sidebar
//! - [`status`] - Status bar showing section, mode and clock
//! - [`terminal`] - Terminal output and input

mod desktop;
pub mod icons;
pub mod sections;
pub mod sidebar;
pub mod status;
pub mod terminal;

pub use desktop::Desktop;
