//! Validation violations.
//!
//! A validation run never fails as a whole; it collects every rule that was
//! broken. Each broken rule becomes one [`Violation`] carrying the localized
//! message shown to users plus the field path, 1-based position and rule so
//! a form can map it back to an input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// A required value is missing or blank
    Required,
    /// A text value is longer than allowed
    MaxLength,
    /// A number is outside its accepted range
    Range,
    /// A URL does not have the accepted shape
    Format,
    /// A lesson type is not one of the known kinds
    LessonType,
    /// An explicit order index is zero or negative
    OrderIndex,
    /// A duration is negative
    NonNegative,
}

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct Violation {
    /// Dotted path of the offending field, e.g. `modules.2.lessons.1.youtubeUrl`
    pub field: String,
    /// 1-based position of the innermost offending entity, if it is in a list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub rule: Rule,
    /// Localized, user-facing message
    pub message: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        index: Option<usize>,
        rule: Rule,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            index,
            rule,
            message: message.into(),
        }
    }

    /// A violation on a top-level course field.
    pub fn course(field: &str, rule: Rule, message: impl Into<String>) -> Self {
        Self::new(field, None, rule, message)
    }

    /// A violation on a field of the module at 1-based `module`.
    pub fn module(module: usize, field: &str, rule: Rule, message: impl Into<String>) -> Self {
        Self::new(format!("modules.{module}.{field}"), Some(module), rule, message)
    }

    /// A violation on a field of lesson `lesson` inside module `module` (both 1-based).
    pub fn lesson(
        module: usize,
        lesson: usize,
        field: &str,
        rule: Rule,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            format!("modules.{module}.lessons.{lesson}.{field}"),
            Some(lesson),
            rule,
            message,
        )
    }
}

/// Outcome of validating a payload.
///
/// `errors` is the flat message list callers display; `violations` carries
/// the same entries in the same order with their machine-readable parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            is_valid: violations.is_empty(),
            errors: violations.iter().map(|v| v.message.clone()).collect(),
            violations,
        }
    }
}
