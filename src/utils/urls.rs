//! URL shape checks shared by validation and assembly.
//!
//! Only the canonical `https://(www.)youtube.com/watch?v=<id>` form is
//! accepted. Short links (`youtu.be`) and embed links are rejected even
//! though they point at real videos.

use std::sync::LazyLock;

use coursekit_core::limits::{THUMBNAIL_EXTENSIONS, YOUTUBE_ID_MIN_LENGTH};
use regex::Regex;

static YOUTUBE_WATCH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^https://(?:www\.)?youtube\.com/watch\?v=([A-Za-z0-9_-]{{{YOUTUBE_ID_MIN_LENGTH},}})(?:&\S*)?$"
    ))
    .expect("Invalid YouTube watch URL regex")
});

static THUMBNAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^https?://\S+\.(?:{})$",
        THUMBNAIL_EXTENSIONS.join("|")
    ))
    .expect("Invalid thumbnail URL regex")
});

/// Whether `url` is a canonical YouTube watch URL.
pub fn is_youtube_watch_url(url: &str) -> bool {
    YOUTUBE_WATCH_REGEX.is_match(url.trim())
}

/// Extracts the video id from a canonical watch URL; `None` for any other shape.
pub fn extract_video_id(url: &str) -> Option<String> {
    YOUTUBE_WATCH_REGEX
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Preview image for a YouTube video id.
pub fn video_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/mqdefault.jpg")
}

/// Whether `url` is an http(s) URL ending in an accepted image extension.
pub fn is_thumbnail_url(url: &str) -> bool {
    THUMBNAIL_REGEX.is_match(url.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_watch_urls_are_accepted() {
        assert!(is_youtube_watch_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_watch_url("https://youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_watch_url(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"
        ));
    }

    #[test]
    fn test_other_youtube_forms_are_rejected() {
        assert!(!is_youtube_watch_url("https://youtu.be/dQw4w9WgXcQ"));
        assert!(!is_youtube_watch_url("https://www.youtube.com/embed/dQw4w9WgXcQ"));
        assert!(!is_youtube_watch_url("http://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(!is_youtube_watch_url("https://www.youtube.com/watch?v=short"));
        assert!(!is_youtube_watch_url("https://vimeo.com/watch?v=dQw4w9WgXcQ"));
        assert!(!is_youtube_watch_url(""));
    }

    #[test]
    fn test_extract_video_id_is_tolerant() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL1"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(extract_video_id("not a url"), None);
    }

    #[test]
    fn test_video_thumbnail_url() {
        assert_eq!(
            video_thumbnail_url("dQw4w9WgXcQ"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg"
        );
    }

    #[test]
    fn test_thumbnail_urls() {
        assert!(is_thumbnail_url("https://cdn.example.com/covers/rust.png"));
        assert!(is_thumbnail_url("http://cdn.example.com/a.JPEG"));
        assert!(is_thumbnail_url("https://cdn.example.com/a.webp"));
        assert!(!is_thumbnail_url("https://cdn.example.com/a.svg"));
        assert!(!is_thumbnail_url("ftp://cdn.example.com/a.png"));
        assert!(!is_thumbnail_url("cdn.example.com/a.png"));
        assert!(!is_thumbnail_url("https://cdn.example.com/a.png?size=large"));
    }
}
