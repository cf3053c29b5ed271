//! Video catalog API client
//!
//! Fetches videos and comments from the catalog backend:
//! `GET /videos`, `GET /videos/{id}`, `GET /videos/{id}/comments`.
//! All payloads are camelCase JSON.

use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Comment, Video};

/// Catalog API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found (404)")]
    NotFound,

    #[error("Rate limited (429), retries exhausted")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Catalog API client
#[derive(Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
    max_retries: u32,
}

impl CatalogClient {
    /// Create a client against the given backend base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            max_retries: 3,
        }
    }

    /// Make a GET request with retry logic for rate limits
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut retries = 0;

        loop {
            let response = self
                .client
                .get(&url)
                .header("Accept", "application/json")
                .send()
                .await?;

            match response.status() {
                StatusCode::OK => {
                    let body = response.text().await?;
                    let parsed: T = serde_json::from_str(&body).map_err(|e| {
                        ApiError::InvalidResponse(format!("JSON parse error: {}", e))
                    })?;
                    return Ok(parsed);
                }
                StatusCode::NOT_FOUND => {
                    return Err(ApiError::NotFound.into());
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    retries += 1;
                    if retries >= self.max_retries {
                        return Err(ApiError::RateLimited.into());
                    }

                    // Honour Retry-After, else exponential backoff
                    let wait_secs = response
                        .headers()
                        .get("Retry-After")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(2u64.pow(retries));

                    tokio::time::sleep(Duration::from_secs(wait_secs)).await;
                    continue;
                }
                status => {
                    return Err(ApiError::ServerError(status.as_u16()).into());
                }
            }
        }
    }

    /// Fetch the full video catalog
    pub async fn videos(&self) -> Result<Vec<Video>> {
        let videos: Vec<VideoRaw> = self.get("/videos").await?;
        Ok(videos.into_iter().map(VideoRaw::into_video).collect())
    }

    /// Fetch a single video by id
    pub async fn video_by_id(&self, id: &str) -> Result<Video> {
        let endpoint = format!("/videos/{}", urlencoding::encode(id));
        let video: VideoRaw = self.get(&endpoint).await?;
        Ok(video.into_video())
    }

    /// Fetch all comments for a video
    pub async fn comments(&self, id: &str) -> Result<Vec<Comment>> {
        let endpoint = format!("/videos/{}/comments", urlencoding::encode(id));
        let comments: Vec<CommentRaw> = self.get(&endpoint).await?;
        Ok(comments
            .into_iter()
            .map(|c| c.into_comment(id))
            .collect())
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoRaw {
    id: String,
    name: Option<String>,
    video_link: Option<String>,
    description: Option<String>,
    views: Option<u64>,
}

impl VideoRaw {
    fn into_video(self) -> Video {
        Video {
            id: self.id,
            name: self.name.unwrap_or_default(),
            video_link: self.video_link.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            views: self.views.unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentRaw {
    id: String,
    video_id: Option<String>,
    author: Option<String>,
    text: Option<String>,
}

impl CommentRaw {
    // The comments endpoint is already scoped to one video, so a missing
    // videoId field falls back to the requested id.
    fn into_comment(self, video_id: &str) -> Comment {
        Comment {
            id: self.id,
            video_id: self.video_id.unwrap_or_else(|| video_id.to_string()),
            author: self.author.unwrap_or_else(|| "anonymous".to_string()),
            text: self.text.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_raw_defaults() {
        let raw = VideoRaw {
            id: "v1".to_string(),
            name: None,
            video_link: None,
            description: None,
            views: None,
        };
        let video = raw.into_video();
        assert_eq!(video.id, "v1");
        assert_eq!(video.name, "");
        assert_eq!(video.views, 0);
    }

    #[test]
    fn test_comment_raw_backfills_video_id() {
        let raw = CommentRaw {
            id: "c1".to_string(),
            video_id: None,
            author: None,
            text: Some("hello".to_string()),
        };
        let comment = raw.into_comment("v9");
        assert_eq!(comment.video_id, "v9");
        assert_eq!(comment.author, "anonymous");
        assert_eq!(comment.text, "hello");
    }
}
