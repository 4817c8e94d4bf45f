//! # Coursekit
//!
//! Course content assembly, validation and progress aggregation for an
//! e-learning marketplace. Everything here is a pure function over
//! in-memory data: fetching courses and enrollments and submitting edits
//! belong to the caller.
//!
//! ## Overview
//!
//! - **Normalizer**: fills in the defaults a course payload needs before it
//!   is submitted ([`normalize`])
//! - **Validator**: checks a payload and returns every violation with a
//!   user-facing message ([`validate`])
//! - **Module Assembler**: builds the ordered module/lesson tree, splitting
//!   flat video lists into synthetic modules ([`assemble`])
//! - **Progress Aggregator**: computes dashboard statistics from a
//!   student's enrollments ([`aggregate`])
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # `coursekit` command-line harness
//! ├── modules/          # The four operations
//! │   ├── normalizer/
//! │   ├── validator/
//! │   ├── assembler/
//! │   └── progress/
//! └── utils/            # URL patterns, duration labels, JSON loading
//! ```
//!
//! ## Submitting an edited course
//!
//! A payload must be normalized and then validated before it is sent to
//! the backend. [`prepare_submission`] runs both steps in that order:
//!
//! ```ignore
//! match coursekit::prepare_submission(&payload) {
//!     Ok(ready) => course_service.update(ready).await?,
//!     Err(result) => show_errors(&result.errors),
//! }
//! ```

pub mod cli;
pub mod modules;
pub mod utils;

// Re-export workspace crates for convenience
pub use coursekit_config;
pub use coursekit_core;
pub use coursekit_models;

pub use modules::assembler::{assemble, summarize};
pub use modules::normalizer::normalize;
pub use modules::progress::aggregate;
pub use modules::validator::validate;

use coursekit_core::ValidationResult;
use coursekit_models::CoursePayload;

/// Normalizes `payload` and validates the result.
///
/// Returns the normalized payload when it is ready to submit, or the full
/// validation result when it is not.
pub fn prepare_submission(payload: &CoursePayload) -> Result<CoursePayload, ValidationResult> {
    let normalized = normalize(payload);
    let result = validate(&normalized);
    if result.is_valid {
        Ok(normalized)
    } else {
        Err(result)
    }
}
