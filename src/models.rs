//! Data structures and types for tubetui
//!
//! Shared models used across the application:
//! - **Video**: catalog entries served by the backend
//! - **Comment**: per-video comments, append-only on the client side

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Video
// =============================================================================

/// A single catalog entry. Immutable once fetched; a refetch replaces the
/// whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub name: String,
    /// Raw media link as stored by the backend (watch URL, short link, or
    /// already-embeddable form). See `embed::embed_url` for normalization.
    pub video_link: String,
    pub description: String,
    pub views: u64,
}

impl Video {
    /// View count with thousands grouping, e.g. `1,234,567`
    pub fn format_views(&self) -> String {
        group_thousands(self.views)
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} views)", self.name, self.format_views())
    }
}

/// Insert `,` separators every three digits
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The catalog minus the video with the given id, preserving relative order
pub fn other_videos(catalog: Vec<Video>, id: &str) -> Vec<Video> {
    catalog.into_iter().filter(|v| v.id != id).collect()
}

// =============================================================================
// Comment
// =============================================================================

/// A comment on a single video. Ordering is insertion order; the client
/// only ever appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub video_id: String,
    pub author: String,
    pub text: String,
}

impl Comment {
    /// Build a locally authored comment with a fresh client-side id
    pub fn local(video_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            video_id: video_id.into(),
            author: "you".to_string(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.author, self.text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            name: format!("Video {}", id),
            video_link: format!("https://www.youtube.com/watch?v={}", id),
            description: String::new(),
            views: 0,
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(1000000000), "1,000,000,000");
    }

    #[test]
    fn test_other_videos_excludes_target() {
        let catalog = vec![video("a"), video("b"), video("c")];
        let others = other_videos(catalog, "b");
        assert_eq!(others.len(), 2);
        assert!(others.iter().all(|v| v.id != "b"));
    }

    #[test]
    fn test_other_videos_preserves_order() {
        let catalog = vec![video("a"), video("b"), video("c"), video("d")];
        let others = other_videos(catalog, "c");
        let ids: Vec<&str> = others.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "d"]);
    }

    #[test]
    fn test_other_videos_unknown_id_keeps_all() {
        let catalog = vec![video("a"), video("b")];
        assert_eq!(other_videos(catalog, "zzz").len(), 2);
    }

    #[test]
    fn test_video_json_field_names() {
        let json = r#"{
            "id": "v1",
            "name": "First",
            "videoLink": "https://youtu.be/abc",
            "description": "intro",
            "views": 42
        }"#;
        let v: Video = serde_json::from_str(json).unwrap();
        assert_eq!(v.video_link, "https://youtu.be/abc");
        assert_eq!(v.views, 42);
    }

    #[test]
    fn test_comment_json_field_names() {
        let json = r#"{"id": "c1", "videoId": "v1", "author": "ada", "text": "nice"}"#;
        let c: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(c.video_id, "v1");
    }

    #[test]
    fn test_local_comment_has_unique_id() {
        let a = Comment::local("v1", "hi");
        let b = Comment::local("v1", "hi");
        assert_ne!(a.id, b.id);
        assert_eq!(a.author, "you");
    }
}
