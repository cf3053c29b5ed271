//! CLI - Command Line Interface for tubetui
//!
//! Run without arguments to launch the interactive TUI. Subcommands are
//! for scripting: every output is JSON-parseable with `--json` (default
//! when stdout is not a terminal).
//!
//! # Examples
//!
//! ```bash
//! tubetui                      Launch interactive TUI
//! tubetui videos --json        List the catalog
//! tubetui info v42             One video's metadata
//! tubetui comments v42         Comments for a video
//! tubetui watch v42            Open the video in mpv/VLC
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Video not found
    NotFound = 4,
    /// Player failed to start
    PlayerFailed = 5,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// tubetui - terminal client for a video catalog
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "tubetui",
    version,
    about = "Terminal client for browsing and watching a video catalog",
    after_help = "EXAMPLES:\n\
                  tubetui                    Launch interactive TUI\n\
                  tubetui videos --json      List the catalog\n\
                  tubetui watch v42          Open a video in the local player"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Catalog backend base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the video catalog
    #[command(visible_alias = "ls")]
    Videos(VideosCmd),

    /// Get one video's metadata
    #[command(visible_alias = "i")]
    Info(InfoCmd),

    /// List comments for a video
    #[command(visible_alias = "c")]
    Comments(CommentsCmd),

    /// Open a video in the local player
    #[command(visible_alias = "w")]
    Watch(WatchCmd),
}

/// List the video catalog
#[derive(Args, Debug)]
pub struct VideosCmd {
    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "50")]
    pub limit: usize,
}

/// Get detailed information about a video
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// Video identifier
    #[arg(required = true)]
    pub id: String,
}

/// List comments for a video
#[derive(Args, Debug)]
pub struct CommentsCmd {
    /// Video identifier
    #[arg(required = true)]
    pub id: String,
}

/// Open a video in the local player
#[derive(Args, Debug)]
pub struct WatchCmd {
    /// Video identifier
    #[arg(required = true)]
    pub id: String,

    /// Player to use ("mpv" or "vlc"); defaults to the configured one
    #[arg(long, short = 'p')]
    pub player: Option<String>,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet and JSON modes)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Video ID Validation
// =============================================================================

/// Validate a video identifier before issuing any network request
pub fn validate_video_id(id: &str) -> Result<&str, &'static str> {
    if !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(id)
    } else {
        Err("Invalid video id (expected letters, digits, '-' or '_')")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from::<_, &str>([]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_videos_command() {
        let cli = Cli::parse_from(["tubetui", "videos", "--limit", "5"]);
        assert!(cli.is_cli_mode());
        if let Some(Command::Videos(cmd)) = cli.command {
            assert_eq!(cmd.limit, 5);
        } else {
            panic!("Expected Videos command");
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["tubetui", "--json", "--quiet", "info", "v1"]);
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_watch_with_player() {
        let cli = Cli::parse_from(["tubetui", "watch", "v42", "-p", "mpv"]);
        if let Some(Command::Watch(cmd)) = cli.command {
            assert_eq!(cmd.id, "v42");
            assert_eq!(cmd.player.as_deref(), Some("mpv"));
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn test_command_aliases() {
        let cli = Cli::parse_from(["tubetui", "ls"]);
        assert!(matches!(cli.command, Some(Command::Videos(_))));

        let cli = Cli::parse_from(["tubetui", "w", "v1"]);
        assert!(matches!(cli.command, Some(Command::Watch(_))));
    }

    #[test]
    fn test_validate_video_id() {
        assert!(validate_video_id("v42").is_ok());
        assert!(validate_video_id("abc-DEF_123").is_ok());
        assert!(validate_video_id("").is_err());
        assert!(validate_video_id("has space").is_err());
        assert!(validate_video_id("slash/id").is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::NetworkError), 3);
        assert_eq!(i32::from(ExitCode::NotFound), 4);
        assert_eq!(i32::from(ExitCode::PlayerFailed), 5);
    }
}
