//! Enrollment models.
//!
//! An enrollment links a student to one course and carries the student's
//! status and progress. The embedded course is a snapshot and may be `null`
//! when the course was deleted or the backend did not expand it.

use crate::ids::{CourseId, EnrollmentId, LessonId};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use coursekit_core::serde::deserialize_lenient_f64;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserializes a timestamp sent either with an offset (RFC 3339), as a
/// local date-time without offset, or as a bare date. Offset-less values
/// are taken as UTC; blank strings are treated as absent.
fn deserialize_lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = opt else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Some(naive.and_utc()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Some(naive.and_utc()));
        }
    }
    Err(serde::de::Error::custom(format!("invalid date: {raw}")))
}

/// Enrollment status. Statuses other than `ACTIVE` and `COMPLETED` are kept
/// as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Other(String),
}

impl From<String> for EnrollmentStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "ACTIVE" => Self::Active,
            "COMPLETED" => Self::Completed,
            _ => Self::Other(raw),
        }
    }
}

impl From<EnrollmentStatus> for String {
    fn from(status: EnrollmentStatus) -> Self {
        match status {
            EnrollmentStatus::Active => "ACTIVE".to_string(),
            EnrollmentStatus::Completed => "COMPLETED".to_string(),
            EnrollmentStatus::Other(raw) => raw,
        }
    }
}

impl Default for EnrollmentStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("ACTIVE"),
            Self::Completed => f.write_str("COMPLETED"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// A reference the backend sends either as a plain name or as an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayRef {
    Name(String),
    Profile {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(
            default,
            rename = "firstName",
            skip_serializing_if = "Option::is_none"
        )]
        first_name: Option<String>,
        #[serde(default, rename = "lastName", skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
    },
}

impl DisplayRef {
    /// Human-readable name, or `None` when the reference carries none.
    pub fn display_name(&self) -> Option<String> {
        let name = match self {
            Self::Name(name) => name.trim().to_string(),
            Self::Profile {
                name: Some(name), ..
            } if !name.trim().is_empty() => name.trim().to_string(),
            Self::Profile {
                first_name,
                last_name,
                ..
            } => [first_name.as_deref(), last_name.as_deref()]
                .into_iter()
                .flatten()
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        };
        (!name.is_empty()).then_some(name)
    }
}

/// The course fields an enrollment carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CourseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<DisplayRef>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<DisplayRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// A student's enrollment in one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EnrollmentId>,
    #[serde(default)]
    pub course: Option<CourseSnapshot>,
    #[serde(default)]
    pub status: EnrollmentStatus,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_percentage: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub enrollment_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_accessed: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_lesson_id: Option<LessonId>,
}

impl Enrollment {
    /// Progress in percent, `0` when absent and clamped to `[0, 100]`.
    pub fn progress(&self) -> f64 {
        match self.progress_percentage {
            Some(p) if p.is_finite() => p.clamp(0.0, 100.0),
            _ => 0.0,
        }
    }

    /// Estimated hours of the enrolled course, `0` when the course or the
    /// estimate is missing.
    pub fn estimated_hours(&self) -> f64 {
        self.course
            .as_ref()
            .and_then(|c| c.estimated_hours)
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(0.0)
    }
}
