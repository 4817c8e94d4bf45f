//! View models produced for content-browsing and dashboard screens.
//!
//! Every value here is built fresh by the assembler or the aggregator and
//! never updated in place; a refetch produces a new tree.

use crate::courses::LessonKind;
use crate::enrollments::EnrollmentStatus;
use crate::ids::{CourseId, EnrollmentId, LessonId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playable video inside a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoView {
    pub id: String,
    pub title: String,
    pub youtube_url: String,
    /// YouTube video id, when the URL has the canonical watch shape
    pub video_id: Option<String>,
    pub thumbnail_url: Option<String>,
    pub order_index: i64,
    pub duration_seconds: i64,
    pub duration_label: String,
    pub completed: bool,
}

/// Any lesson inside a module, whatever its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonView {
    pub id: String,
    pub title: String,
    /// `None` when the stored type is not a known kind
    pub kind: Option<LessonKind>,
    pub description: Option<String>,
    pub youtube_url: Option<String>,
    pub order_index: i64,
    pub duration_seconds: i64,
    pub completed: bool,
}

/// A module ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub order_index: i64,
    /// Whether the module was generated from a flat video list
    pub synthetic: bool,
    pub videos: Vec<VideoView>,
    pub lessons: Vec<LessonView>,
    pub total_duration_seconds: i64,
    pub duration_label: String,
    pub completed_lessons: usize,
    pub progress_percent: u32,
}

/// Totals across every module of a course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    pub module_count: usize,
    pub lesson_count: usize,
    pub video_count: usize,
    pub total_duration_seconds: i64,
    pub completed_lessons: usize,
    pub progress_percent: u32,
}

/// One course row in a dashboard list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgressEntry {
    pub enrollment_id: Option<EnrollmentId>,
    pub course_id: Option<CourseId>,
    pub title: String,
    pub instructor: Option<String>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    pub status: EnrollmentStatus,
    pub progress_percentage: f64,
    pub estimated_hours: f64,
    pub enrollment_date: Option<DateTime<Utc>>,
    pub last_accessed: Option<DateTime<Utc>>,
    pub last_lesson_id: Option<LessonId>,
}

/// Aggregated statistics for a student's dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_courses: usize,
    pub active_courses: usize,
    pub completed_courses: usize,
    pub average_progress_percent: u32,
    pub total_estimated_hours: f64,
    pub completed_hours: f64,
    pub top_progress_courses: Vec<CourseProgressEntry>,
    pub recent_courses: Vec<CourseProgressEntry>,
    /// Active courses ordered by last access, for "continue learning"
    pub in_progress_courses: Vec<CourseProgressEntry>,
}
