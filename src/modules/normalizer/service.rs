//! Content normalizer.
//!
//! Fills in the defaults the backend requires before a course is validated
//! and submitted. Normalizing is total and idempotent: applying it to its
//! own output changes nothing. Fields are only ever filled in, never
//! removed, and unknown keys pass through.

use coursekit_core::limits::DEFAULT_ESTIMATED_HOURS;
use coursekit_models::{CoursePayload, Lesson, LessonKind, Module};
use tracing::{debug, instrument};

pub struct NormalizerService;

impl NormalizerService {
    #[instrument(skip_all, fields(modules = payload.modules.len()))]
    pub fn normalize(payload: &CoursePayload) -> CoursePayload {
        let mut course = payload.clone();

        course.is_premium = Some(course.is_premium.unwrap_or(false));
        course.is_published = Some(course.is_published.unwrap_or(false));
        course.is_active = Some(course.is_active != Some(false));

        if course.estimated_hours.unwrap_or(0) == 0 {
            course.estimated_hours = Some(DEFAULT_ESTIMATED_HOURS);
        }
        // NaN counts as falsy, like zero
        if !matches!(course.price, Some(p) if p != 0.0 && !p.is_nan()) {
            course.price = Some(0.0);
        }

        let before = course.youtube_urls.len();
        course.youtube_urls.retain(|url| !url.trim().is_empty());

        for (position, module) in course.modules.iter_mut().enumerate() {
            Self::normalize_module(module, position);
        }

        debug!(
            dropped_urls = before - course.youtube_urls.len(),
            lessons = course.modules.iter().map(|m| m.lessons.len()).sum::<usize>(),
            "Normalized course payload"
        );

        course
    }

    fn normalize_module(module: &mut Module, position: usize) {
        module.order_index.get_or_insert(position as i64 + 1);
        module.is_active = Some(module.is_active != Some(false));

        for (position, lesson) in module.lessons.iter_mut().enumerate() {
            Self::normalize_lesson(lesson, position);
        }
    }

    fn normalize_lesson(lesson: &mut Lesson, position: usize) {
        // Unknown types are only lower-cased; the validator reports them.
        lesson.lesson_type = Some(
            lesson
                .lesson_type
                .take()
                .map(|raw| raw.trim().to_lowercase())
                .filter(|kind| !kind.is_empty())
                .unwrap_or_else(|| LessonKind::Video.as_str().to_string()),
        );
        lesson.order_index.get_or_insert(position as i64 + 1);
        lesson.is_active = Some(lesson.is_active != Some(false));
        lesson.duration_seconds.get_or_insert(0);
    }
}

/// Returns a copy of `payload` with every default applied.
pub fn normalize(payload: &CoursePayload) -> CoursePayload {
    NormalizerService::normalize(payload)
}
