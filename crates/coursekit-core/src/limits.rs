//! Fixed limits and policy constants.
//!
//! These values mirror the backend's column constraints and the fixed sizes
//! used by the dashboard and content-browsing views. None of them is read
//! from the environment.

// =============================================================================
// Field lengths (in characters)
// =============================================================================

/// Maximum length of a course, module or lesson title
pub const TITLE_MAX_LENGTH: u64 = 200;
/// Maximum length of a course, module or lesson description
pub const DESCRIPTION_MAX_LENGTH: u64 = 1000;
/// Maximum length of a course short description
pub const SHORT_DESCRIPTION_MAX_LENGTH: u64 = 255;

// =============================================================================
// Numeric bounds
// =============================================================================

/// Lowest accepted course price
pub const PRICE_MIN: f64 = 0.0;
/// Highest accepted course price
pub const PRICE_MAX: f64 = 999_999.99;
/// Lowest accepted estimated hours
pub const ESTIMATED_HOURS_MIN: i64 = 1;
/// Highest accepted estimated hours
pub const ESTIMATED_HOURS_MAX: i64 = 1000;
/// Estimated hours applied when a payload carries none
pub const DEFAULT_ESTIMATED_HOURS: i64 = 1;

// =============================================================================
// Assembly and dashboard sizes
// =============================================================================

/// Number of videos grouped into each synthetic module
pub const FALLBACK_CHUNK_SIZE: usize = 5;
/// Length of the "top progress" dashboard list
pub const TOP_PROGRESS_LIMIT: usize = 3;
/// Default length of the "recent courses" dashboard list
pub const DEFAULT_RECENT_LIMIT: usize = 4;

// =============================================================================
// Accepted formats
// =============================================================================

/// Image extensions accepted for thumbnails (compared case-insensitively)
pub const THUMBNAIL_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
/// Minimum length of a YouTube video id in a watch URL
pub const YOUTUBE_ID_MIN_LENGTH: usize = 11;
