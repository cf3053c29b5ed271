//! CLI surface tests
//!
//! Covers argument parsing through the public crate, the JSON output
//! envelope, and id validation at the boundary.

use clap::Parser;
use tubetui::cli::{validate_video_id, Cli, Command, ExitCode, JsonOutput};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_tui_mode_without_subcommand() {
    let cli = Cli::parse_from(["tubetui"]);
    assert!(!cli.is_cli_mode());
    assert!(cli.command.is_none());
}

#[test]
fn test_videos_default_limit() {
    let cli = Cli::parse_from(["tubetui", "videos"]);
    match cli.command {
        Some(Command::Videos(cmd)) => assert_eq!(cmd.limit, 50),
        _ => panic!("Expected Videos command"),
    }
}

#[test]
fn test_info_requires_id() {
    assert!(Cli::try_parse_from(["tubetui", "info"]).is_err());
    assert!(Cli::try_parse_from(["tubetui", "info", "v1"]).is_ok());
}

#[test]
fn test_comments_alias() {
    let cli = Cli::parse_from(["tubetui", "c", "v1"]);
    match cli.command {
        Some(Command::Comments(cmd)) => assert_eq!(cmd.id, "v1"),
        _ => panic!("Expected Comments command"),
    }
}

#[test]
fn test_api_url_override_is_global() {
    let cli = Cli::parse_from(["tubetui", "videos", "--api-url", "http://localhost:9999"]);
    assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9999"));
}

// =============================================================================
// JSON Envelope
// =============================================================================

#[test]
fn test_json_success_envelope_omits_error() {
    let output = JsonOutput::success(vec!["a", "b"]);
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["data"][0], "a");
    assert!(json.get("error").is_none());
    assert!(json.get("exit_code").is_none()); // zero is omitted
}

#[test]
fn test_json_error_envelope() {
    let output = JsonOutput::<()>::error_msg("catalog unreachable", ExitCode::NetworkError);
    let json = serde_json::to_value(&output).unwrap();
    assert!(json.get("data").is_none());
    assert_eq!(json["error"], "catalog unreachable");
    assert_eq!(json["exit_code"], 3);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_video_id_validation_at_boundary() {
    assert!(validate_video_id("v42").is_ok());
    assert!(validate_video_id("dQw4w9WgXcQ").is_ok());
    assert!(validate_video_id("").is_err());
    assert!(validate_video_id("../etc/passwd").is_err());
    assert!(validate_video_id("id with spaces").is_err());
}
