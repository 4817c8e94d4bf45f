//! # Coursekit Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`logging`]: Log level and output format
//! - [`dashboard`]: Dashboard list sizes used by the CLI
//!
//! The core operations take no configuration; these values only drive the
//! binary that wraps them.
//!
//! # Example
//!
//! ```ignore
//! use coursekit_config::{DashboardConfig, LogConfig};
//!
//! let log_config = LogConfig::from_env();
//! let dashboard_config = DashboardConfig::from_env();
//! ```

pub mod dashboard;
pub mod logging;

// Re-export commonly used types at crate root
pub use dashboard::DashboardConfig;
pub use logging::{LogConfig, LogFormat};
