//! Content validator.
//!
//! Checks a course payload against the backend's rules and reports every
//! violation it finds, in a fixed order: course fields first, then each
//! module followed by its lessons. Messages are user-facing Spanish
//! sentences naming the entity and its 1-based position.

use coursekit_core::errors::{Rule, ValidationResult, Violation};
use coursekit_core::limits::{
    DESCRIPTION_MAX_LENGTH, ESTIMATED_HOURS_MAX, ESTIMATED_HOURS_MIN, PRICE_MAX, PRICE_MIN,
    SHORT_DESCRIPTION_MAX_LENGTH, TITLE_MAX_LENGTH,
};
use coursekit_models::{CoursePayload, Lesson, LessonKind, Module};
use tracing::{debug, instrument, warn};
use validator::{ValidateLength, ValidateRange};

use crate::utils::urls::{is_thumbnail_url, is_youtube_watch_url};

/// Checks a text field. Returns the broken rule, if any.
fn check_text(value: Option<&String>, max: u64, required: bool) -> Option<Rule> {
    match value {
        Some(text) if !text.trim().is_empty() => {
            (!text.validate_length(None, Some(max), None)).then_some(Rule::MaxLength)
        }
        _ if required => Some(Rule::Required),
        _ => None,
    }
}

/// Message for a broken text rule. `owner` is appended to the noun, e.g.
/// `" del módulo 2"`.
fn text_message(rule: Rule, noun: &str, feminine: bool, owner: &str, max: u64) -> String {
    match rule {
        Rule::Required if feminine => format!("{noun}{owner} es obligatoria"),
        Rule::Required => format!("{noun}{owner} es obligatorio"),
        _ => format!("{noun}{owner} no puede exceder {max} caracteres"),
    }
}

pub struct ValidatorService;

impl ValidatorService {
    #[instrument(skip_all, fields(modules = payload.modules.len()))]
    pub fn validate(payload: &CoursePayload) -> ValidationResult {
        let mut violations = Vec::new();

        Self::check_course(payload, &mut violations);
        for (position, module) in payload.modules.iter().enumerate() {
            Self::check_module(module, position + 1, &mut violations);
        }

        if violations.is_empty() {
            debug!("Course payload is valid");
        } else {
            warn!(errors = violations.len(), "Course payload failed validation");
        }

        ValidationResult::from_violations(violations)
    }

    fn check_course(payload: &CoursePayload, out: &mut Vec<Violation>) {
        if let Some(rule) = check_text(payload.title.as_ref(), TITLE_MAX_LENGTH, true) {
            out.push(Violation::course(
                "title",
                rule,
                text_message(rule, "El título", false, "", TITLE_MAX_LENGTH),
            ));
        }
        if let Some(rule) = check_text(payload.description.as_ref(), DESCRIPTION_MAX_LENGTH, true) {
            out.push(Violation::course(
                "description",
                rule,
                text_message(rule, "La descripción", true, "", DESCRIPTION_MAX_LENGTH),
            ));
        }
        if let Some(rule) = check_text(
            payload.short_description.as_ref(),
            SHORT_DESCRIPTION_MAX_LENGTH,
            false,
        ) {
            out.push(Violation::course(
                "shortDescription",
                rule,
                text_message(
                    rule,
                    "La descripción corta",
                    true,
                    "",
                    SHORT_DESCRIPTION_MAX_LENGTH,
                ),
            ));
        }

        if !payload.instructor_id.as_ref().is_some_and(|id| !id.is_blank()) {
            out.push(Violation::course(
                "instructorId",
                Rule::Required,
                "El instructor es obligatorio",
            ));
        }
        if !payload.category_id.as_ref().is_some_and(|id| !id.is_blank()) {
            out.push(Violation::course(
                "categoryId",
                Rule::Required,
                "La categoría es obligatoria",
            ));
        }
        if !payload.subcategory_id.as_ref().is_some_and(|id| !id.is_blank()) {
            out.push(Violation::course(
                "subcategoryId",
                Rule::Required,
                "La subcategoría es obligatoria",
            ));
        }

        match payload.price {
            None => out.push(Violation::course(
                "price",
                Rule::Required,
                "El precio es obligatorio",
            )),
            Some(price)
                if !price.is_finite()
                    || !price.validate_range(Some(PRICE_MIN), Some(PRICE_MAX), None, None) =>
            {
                out.push(Violation::course(
                    "price",
                    Rule::Range,
                    format!("El precio debe estar entre {PRICE_MIN} y {PRICE_MAX}"),
                ))
            }
            Some(_) => {}
        }

        if let Some(hours) = payload.estimated_hours {
            if !hours.validate_range(
                Some(ESTIMATED_HOURS_MIN),
                Some(ESTIMATED_HOURS_MAX),
                None,
                None,
            ) {
                out.push(Violation::course(
                    "estimatedHours",
                    Rule::Range,
                    format!(
                        "Las horas estimadas deben estar entre {ESTIMATED_HOURS_MIN} y {ESTIMATED_HOURS_MAX}"
                    ),
                ));
            }
        }

        if let Some(url) = payload.thumbnail_url.as_deref() {
            if !url.trim().is_empty() && !is_thumbnail_url(url) {
                out.push(Violation::course(
                    "thumbnailUrl",
                    Rule::Format,
                    "La URL de la miniatura debe ser una imagen válida (jpg, jpeg, png, gif o webp)",
                ));
            }
        }

        for (i, url) in payload.youtube_urls.iter().enumerate() {
            if !url.trim().is_empty() && !is_youtube_watch_url(url) {
                let position = i + 1;
                out.push(Violation::new(
                    format!("youtubeUrls.{position}"),
                    Some(position),
                    Rule::Format,
                    format!(
                        "La URL de YouTube {position} no es válida (formato: https://www.youtube.com/watch?v=...)"
                    ),
                ));
            }
        }
    }

    fn check_module(module: &Module, m: usize, out: &mut Vec<Violation>) {
        let owner = format!(" del módulo {m}");

        if let Some(rule) = check_text(module.title.as_ref(), TITLE_MAX_LENGTH, true) {
            out.push(Violation::module(
                m,
                "title",
                rule,
                text_message(rule, "El título", false, &owner, TITLE_MAX_LENGTH),
            ));
        }
        if let Some(rule) = check_text(module.description.as_ref(), DESCRIPTION_MAX_LENGTH, false) {
            out.push(Violation::module(
                m,
                "description",
                rule,
                text_message(rule, "La descripción", true, &owner, DESCRIPTION_MAX_LENGTH),
            ));
        }
        if module.order_index.is_some_and(|index| index < 1) {
            out.push(Violation::module(
                m,
                "orderIndex",
                Rule::OrderIndex,
                format!("El orden{owner} debe ser mayor o igual a 1"),
            ));
        }

        for (position, lesson) in module.lessons.iter().enumerate() {
            Self::check_lesson(lesson, m, position + 1, out);
        }
    }

    fn check_lesson(lesson: &Lesson, m: usize, l: usize, out: &mut Vec<Violation>) {
        let owner = format!(" de la lección {l} del módulo {m}");

        if let Some(rule) = check_text(lesson.title.as_ref(), TITLE_MAX_LENGTH, true) {
            out.push(Violation::lesson(
                m,
                l,
                "title",
                rule,
                text_message(rule, "El título", false, &owner, TITLE_MAX_LENGTH),
            ));
        }

        match lesson.kind() {
            None => out.push(Violation::lesson(
                m,
                l,
                "type",
                Rule::LessonType,
                format!("El tipo{owner} debe ser video, text o quiz"),
            )),
            Some(LessonKind::Video) => {
                if let Some(url) = lesson.video_url() {
                    if !is_youtube_watch_url(url) {
                        out.push(Violation::lesson(
                            m,
                            l,
                            "youtubeUrl",
                            Rule::Format,
                            format!("La URL de YouTube{owner} no es válida"),
                        ));
                    }
                }
            }
            Some(_) => {}
        }

        if let Some(rule) = check_text(lesson.description.as_ref(), DESCRIPTION_MAX_LENGTH, false) {
            out.push(Violation::lesson(
                m,
                l,
                "description",
                rule,
                text_message(rule, "La descripción", true, &owner, DESCRIPTION_MAX_LENGTH),
            ));
        }
        if lesson.order_index.is_some_and(|index| index < 1) {
            out.push(Violation::lesson(
                m,
                l,
                "orderIndex",
                Rule::OrderIndex,
                format!("El orden{owner} debe ser mayor o igual a 1"),
            ));
        }
        if lesson.duration_seconds.is_some_and(|seconds| seconds < 0) {
            out.push(Violation::lesson(
                m,
                l,
                "durationSeconds",
                Rule::NonNegative,
                format!("La duración{owner} no puede ser negativa"),
            ));
        }
    }
}

/// Validates `payload`, collecting every violation.
pub fn validate(payload: &CoursePayload) -> ValidationResult {
    ValidatorService::validate(payload)
}
