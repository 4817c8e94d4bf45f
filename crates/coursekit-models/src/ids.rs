//! Opaque identifier newtypes for domain entities.
//!
//! The backend hands out identifiers as numbers for some entities and as
//! strings for others, and the same endpoint is not always consistent.
//! Each newtype accepts either shape and writes back exactly what it read,
//! while still preventing a `CategoryId` from being passed as an `InstructorId`.
//!
//! # Example
//!
//! ```ignore
//! use coursekit_models::ids::{CategoryId, InstructorId};
//!
//! let instructor = InstructorId::from(42);
//! let category = CategoryId::from("web-dev");
//! assert_eq!(instructor.to_string(), "42");
//! assert!(!category.is_blank());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Macro to define an opaque identifier newtype.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(RawId);

        impl $name {
            /// Whether the id is a blank string and so carries no reference.
            #[inline]
            pub fn is_blank(&self) -> bool {
                matches!(&self.0, RawId::Text(s) if s.trim().is_empty())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.0 {
                    RawId::Number(n) => write!(f, "{}", n),
                    RawId::Text(s) => write!(f, "{}", s),
                }
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(n: i64) -> Self {
                Self(RawId::Number(n))
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(s: &str) -> Self {
                Self(RawId::Text(s.to_string()))
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(s: String) -> Self {
                Self(RawId::Text(s))
            }
        }
    };
}

define_id!(
    /// Identifier of a course.
    CourseId
);

define_id!(
    /// Identifier of a course module.
    ModuleId
);

define_id!(
    /// Identifier of a lesson or a separately-fetched course video.
    LessonId
);

define_id!(
    /// Identifier of the instructor who owns a course.
    InstructorId
);

define_id!(
    /// Identifier of a course category.
    CategoryId
);

define_id!(
    /// Identifier of a course subcategory.
    SubcategoryId
);

define_id!(
    /// Identifier of a student enrollment.
    EnrollmentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_round_trips_as_number() {
        let id: CourseId = serde_json::from_str("17").unwrap();
        assert_eq!(id, CourseId::from(17));
        assert_eq!(serde_json::to_string(&id).unwrap(), "17");
    }

    #[test]
    fn test_string_id_round_trips_as_string() {
        let id: CategoryId = serde_json::from_str(r#""web-dev""#).unwrap();
        assert_eq!(id.to_string(), "web-dev");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""web-dev""#);
    }

    #[test]
    fn test_blank_ids() {
        assert!(InstructorId::from("  ").is_blank());
        assert!(!InstructorId::from("a").is_blank());
        assert!(!InstructorId::from(0).is_blank());
    }

    #[test]
    fn test_debug_names_the_type() {
        assert_eq!(format!("{:?}", LessonId::from(3)), "LessonId(3)");
    }
}
