//! CLI Command Handlers
//!
//! Implements the subcommands by calling the catalog client.
//! Each handler takes CLI args and Output, returns ExitCode.

use serde::Serialize;

use crate::api::{ApiError, CatalogClient};
use crate::cli::{CommentsCmd, ExitCode, InfoCmd, Output, VideosCmd, WatchCmd};
use crate::config::Config;
use crate::embed::embed_url;
use crate::player::{LocalPlayer, PlayerKind};

/// Build a client from the CLI override or the config fallback chain
fn client_for(api_url: Option<&str>) -> CatalogClient {
    let base = api_url
        .map(str::to_string)
        .unwrap_or_else(|| Config::load().api_url());
    CatalogClient::new(base)
}

/// Map a fetch failure to a semantic exit code
fn fetch_exit_code(e: &anyhow::Error) -> ExitCode {
    match e.downcast_ref::<ApiError>() {
        Some(ApiError::NotFound) => ExitCode::NotFound,
        _ => ExitCode::NetworkError,
    }
}

// =============================================================================
// Videos Command
// =============================================================================

pub async fn videos_cmd(cmd: VideosCmd, api_url: Option<&str>, output: &Output) -> ExitCode {
    let client = client_for(api_url);

    output.info("Fetching catalog...");

    match client.videos().await {
        Ok(mut videos) => {
            videos.truncate(cmd.limit);
            if let Err(e) = output.print(&videos) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => {
            let code = fetch_exit_code(&e);
            output.error(format!("Catalog fetch failed: {}", e), code)
        }
    }
}

// =============================================================================
// Info Command
// =============================================================================

pub async fn info_cmd(cmd: InfoCmd, api_url: Option<&str>, output: &Output) -> ExitCode {
    let client = client_for(api_url);

    output.info(format!("Getting info for: {}", cmd.id));

    match client.video_by_id(&cmd.id).await {
        Ok(video) => {
            if let Err(e) = output.print(&video) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => {
            let code = fetch_exit_code(&e);
            output.error(format!("Info fetch failed: {}", e), code)
        }
    }
}

// =============================================================================
// Comments Command
// =============================================================================

pub async fn comments_cmd(cmd: CommentsCmd, api_url: Option<&str>, output: &Output) -> ExitCode {
    let client = client_for(api_url);

    output.info(format!("Fetching comments for: {}", cmd.id));

    match client.comments(&cmd.id).await {
        Ok(comments) => {
            if let Err(e) = output.print(&comments) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => {
            let code = fetch_exit_code(&e);
            output.error(format!("Comments fetch failed: {}", e), code)
        }
    }
}

// =============================================================================
// Watch Command
// =============================================================================

/// Watch success response
#[derive(Debug, Serialize)]
struct WatchResponse {
    status: &'static str,
    player: String,
    url: String,
}

pub async fn watch_cmd(cmd: WatchCmd, api_url: Option<&str>, output: &Output) -> ExitCode {
    let config = Config::load();
    let client = client_for(api_url);

    let kind = cmd
        .player
        .as_deref()
        .or(config.player.as_deref())
        .and_then(PlayerKind::from_name)
        .unwrap_or_default();

    let video = match client.video_by_id(&cmd.id).await {
        Ok(video) => video,
        Err(e) => {
            let code = fetch_exit_code(&e);
            return output.error(format!("Info fetch failed: {}", e), code);
        }
    };

    let url = embed_url(&video.video_link);
    let player = LocalPlayer::new(kind);

    if !player.is_available().await {
        return output.error(
            format!("Player '{}' not found. Install it first.", kind),
            ExitCode::PlayerFailed,
        );
    }

    output.info(format!("Opening {} in {}...", video.name, kind));

    match player.open_and_wait(&url).await {
        Ok(()) => {
            let response = WatchResponse {
                status: "ok",
                player: kind.to_string(),
                url,
            };
            if let Err(e) = output.print(&response) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Playback failed: {}", e), ExitCode::PlayerFailed),
    }
}
