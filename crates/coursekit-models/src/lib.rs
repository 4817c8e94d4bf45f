//! # Coursekit Models
//!
//! Data structures shared by the content validator, normalizer, module
//! assembler and progress aggregator.
//!
//! # Modules
//!
//! - [`ids`]: Opaque identifier newtypes
//! - [`courses`]: Course payloads, modules, lessons and fetched videos
//! - [`enrollments`]: Enrollments and their course snapshots
//! - [`views`]: Module and dashboard view models
//! - [`navigation`]: Role to sidebar-link table

pub mod courses;
pub mod enrollments;
pub mod ids;
pub mod navigation;
pub mod views;

// Re-export commonly used types at crate root for convenience
pub use courses::{CoursePayload, CourseVideo, Lesson, LessonKind, Module};
pub use enrollments::{CourseSnapshot, DisplayRef, Enrollment, EnrollmentStatus};
pub use ids::{
    CategoryId, CourseId, EnrollmentId, InstructorId, LessonId, ModuleId, SubcategoryId,
};
pub use navigation::{NavLink, Role, links_for};
pub use views::{
    ContentSummary, CourseProgressEntry, DashboardStats, LessonView, ModuleView, VideoView,
};
