//! Course content models.
//!
//! These types describe a course as it is edited and submitted (the payload
//! checked by the validator) and as it is fetched for browsing. Every field
//! the backend may leave out is optional so that a partially filled form can
//! still be normalized and validated, and unknown keys are kept in `extra`
//! and written back untouched.

use crate::ids::{CategoryId, CourseId, InstructorId, LessonId, ModuleId, SubcategoryId};
use coursekit_core::serde::{deserialize_lenient_f64, deserialize_lenient_i64};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The kind of content a lesson holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Text,
    Quiz,
}

impl LessonKind {
    /// Parses a lesson type, ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "video" => Some(Self::Video),
            "text" => Some(Self::Text),
            "quiz" => Some(Self::Quiz),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Text => "text",
            Self::Quiz => "quiz",
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course as submitted for creation or update, or as fetched for browsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CourseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<InstructorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<SubcategoryId>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_hours: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Flat list of video URLs, used when the course has no module structure
    #[serde(default)]
    pub youtube_urls: Vec<String>,
    #[serde(default)]
    pub modules: Vec<Module>,
    /// Keys this crate does not model, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named, ordered group of lessons inside a course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ModuleId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The smallest unit of content: a video, a text page or a quiz.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LessonId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Raw lesson type as received; see [`Lesson::kind`]
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub lesson_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_index: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Client-side completion flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Lesson {
    /// The lesson kind. A missing type means a video; an unknown one is `None`.
    pub fn kind(&self) -> Option<LessonKind> {
        match self.lesson_type.as_deref() {
            None => Some(LessonKind::Video),
            Some(raw) => LessonKind::parse(raw),
        }
    }

    /// The video URL, if one is set and not blank.
    pub fn video_url(&self) -> Option<&str> {
        self.youtube_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// A video row fetched separately from the course, for courses that have
/// no module structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseVideo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LessonId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "url", skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_index: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_kind_parse_ignores_case() {
        assert_eq!(LessonKind::parse("VIDEO"), Some(LessonKind::Video));
        assert_eq!(LessonKind::parse("Quiz"), Some(LessonKind::Quiz));
        assert_eq!(LessonKind::parse(" quiz "), None);
        assert_eq!(LessonKind::parse("text"), Some(LessonKind::Text));
        assert_eq!(LessonKind::parse("podcast"), None);
        assert_eq!(LessonKind::parse(""), None);
    }

    #[test]
    fn test_lesson_without_type_is_video() {
        let lesson = Lesson::default();
        assert_eq!(lesson.kind(), Some(LessonKind::Video));
    }

    #[test]
    fn test_video_url_skips_blank() {
        let lesson = Lesson {
            youtube_url: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(lesson.video_url(), None);
    }

    #[test]
    fn test_payload_deserializes_camel_case_and_keeps_unknown_keys() {
        let json = r#"{
            "title": "Rust",
            "price": "19.99",
            "estimatedHours": 12,
            "instructorId": 4,
            "categoryId": "cat-1",
            "tags": ["systems"],
            "modules": [
                {"title": "Intro", "lessons": [{"title": "Hello", "type": "VIDEO", "durationSeconds": "90", "slug": "hello"}]}
            ]
        }"#;
        let payload: CoursePayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.title.as_deref(), Some("Rust"));
        assert_eq!(payload.price, Some(19.99));
        assert_eq!(payload.estimated_hours, Some(12));
        assert_eq!(payload.instructor_id, Some(InstructorId::from(4)));
        assert!(payload.youtube_urls.is_empty());
        assert_eq!(payload.extra.get("tags"), Some(&serde_json::json!(["systems"])));

        let lesson = &payload.modules[0].lessons[0];
        assert_eq!(lesson.lesson_type.as_deref(), Some("VIDEO"));
        assert_eq!(lesson.duration_seconds, Some(90));
        assert_eq!(lesson.extra.get("slug"), Some(&serde_json::json!("hello")));

        let written = serde_json::to_value(&payload).unwrap();
        assert_eq!(written["tags"], serde_json::json!(["systems"]));
        assert_eq!(written["modules"][0]["lessons"][0]["type"], "VIDEO");
    }

    #[test]
    fn test_course_video_accepts_url_alias() {
        let video: CourseVideo =
            serde_json::from_str(r#"{"url":"https://www.youtube.com/watch?v=dQw4w9WgXcQ"}"#)
                .unwrap();
        assert!(video.youtube_url.is_some());
    }
}
