//! tubetui - terminal client for a video catalog
//!
//! Browse the catalog, open a video's detail screen with comments and a
//! rail of other videos, and hand playback to a local player.
//!
//! # Modules
//!
//! - `models` - Videos and comments
//! - `embed` - Embeddable link normalization
//! - `api` - Catalog backend client
//! - `app` - Application state and navigation
//! - `ui` - TUI components
//! - `player` - Local player hand-off
//! - `cli` / `commands` - Scriptable command-line mode
//! - `config` - Config file handling

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod embed;
pub mod models;
pub mod player;
pub mod ui;

// Re-export commonly used types
pub use api::{ApiError, CatalogClient};
pub use app::{App, FetchOutcome, FetchRequest, PageData, PageState, Screen};
pub use embed::embed_url;
pub use models::{other_videos, Comment, Video};
