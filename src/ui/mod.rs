//! Terminal UI components
//!
//! Built with ratatui. Every renderer takes an explicit frame and target
//! area; an empty area renders nothing.

pub mod boundary;
pub mod detail;
pub mod home;
pub mod theme;

pub use theme::Theme;
