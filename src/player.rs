//! Local player hand-off
//!
//! A terminal cannot host an embedded frame, so playback is delegated to
//! VLC or mpv with the embeddable link.

use std::process::Stdio;
use thiserror::Error;
use tokio::process::{Child, Command};

/// Supported local players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerKind {
    /// VLC media player (default)
    #[default]
    Vlc,
    /// mpv media player
    Mpv,
}

impl PlayerKind {
    /// Get the command name for this player
    pub fn command(&self) -> &'static str {
        match self {
            PlayerKind::Vlc => {
                // On macOS, VLC is an app bundle - check for it
                #[cfg(target_os = "macos")]
                if std::path::Path::new("/Applications/VLC.app").exists() {
                    return "/Applications/VLC.app/Contents/MacOS/VLC";
                }
                "vlc"
            }
            PlayerKind::Mpv => "mpv",
        }
    }

    /// Resolve a config/CLI name ("mpv", "vlc") to a player kind
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "vlc" => Some(PlayerKind::Vlc),
            "mpv" => Some(PlayerKind::Mpv),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Vlc => write!(f, "VLC"),
            PlayerKind::Mpv => write!(f, "mpv"),
        }
    }
}

/// Errors from local player operations
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Player '{0}' not found. Install it first.")]
    NotFound(String),
    #[error("Failed to start player: {0}")]
    StartFailed(#[from] std::io::Error),
    #[error("Nothing to play: video has no link")]
    EmptyLink,
}

/// Local player for watching a video
pub struct LocalPlayer {
    kind: PlayerKind,
}

impl LocalPlayer {
    pub fn new(kind: PlayerKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Check if the player is available on the system
    pub async fn is_available(&self) -> bool {
        let cmd = self.kind.command();

        // Full path (macOS app bundle) - check existence directly
        if cmd.starts_with('/') {
            return std::path::Path::new(cmd).exists();
        }

        Command::new("which")
            .arg(cmd)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Open a video URL, returning the spawned child process
    pub fn open(&self, url: &str) -> Result<Child, PlayerError> {
        if url.is_empty() {
            return Err(PlayerError::EmptyLink);
        }

        let mut cmd = Command::new(self.kind.command());
        cmd.arg(url);

        match self.kind {
            PlayerKind::Vlc => {
                cmd.arg("--no-video-title-show");
            }
            PlayerKind::Mpv => {
                cmd.arg("--force-window=immediate");
            }
        }

        // Detach output so the player never writes over the TUI
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlayerError::NotFound(self.kind.command().to_string())
            } else {
                PlayerError::StartFailed(e)
            }
        })
    }

    /// Open a video URL and wait for the player to close
    pub async fn open_and_wait(&self, url: &str) -> Result<(), PlayerError> {
        let mut child = self.open(url)?;
        let _ = child.wait().await;
        Ok(())
    }
}
