//! # Coursekit Core
//!
//! Foundational types shared by every coursekit crate:
//!
//! - [`errors`]: The validation violation type and the validation result
//! - [`limits`]: Field limits and fixed list/chunk sizes
//! - [`serde`]: Lenient serde helpers for form-sourced JSON
//!
//! # Example
//!
//! ```ignore
//! use coursekit_core::errors::{Rule, Violation};
//! use coursekit_core::limits;
//!
//! let violation = Violation::course("title", Rule::Required, "El título es obligatorio");
//! assert!(limits::TITLE_MAX_LENGTH >= 200);
//! ```

pub mod errors;
pub mod limits;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{Rule, ValidationResult, Violation};
