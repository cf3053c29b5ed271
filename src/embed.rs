//! Embeddable link normalization
//!
//! The backend stores raw video links in whatever form they were pasted:
//! full watch URLs, short links, or already-embeddable URLs. Players load
//! the embeddable form, so every link goes through `embed_url` first.

/// Rewrite a raw video link into its embeddable form.
///
/// Total and deterministic, four cases:
/// - empty input stays empty
/// - links already containing `embed/` pass through unchanged
/// - `watch?v=` links are rewritten to `embed/`, keeping the rest of the
///   URL intact
/// - `youtu.be/` short links are rewritten to the canonical
///   `www.youtube.com/embed/` host
///
/// Anything else passes through unchanged. Idempotent: applying the
/// transform to its own output is a no-op.
pub fn embed_url(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if raw.contains("embed/") {
        return raw.to_string();
    }
    if raw.contains("watch?v=") {
        return raw.replacen("watch?v=", "embed/", 1);
    }
    if raw.contains("youtu.be/") {
        return raw.replacen("youtu.be/", "www.youtube.com/embed/", 1);
    }
    raw.to_string()
}
