//! Coursekit Observability
//!
//! Sets up the global `tracing` subscriber. The library crates only emit
//! events; installing a subscriber is left to the binary (or to a host
//! application that embeds coursekit and already has one).
//!
//! # Examples
//!
//! ```no_run
//! use coursekit_config::LogConfig;
//! use coursekit_observability::init_logging;
//!
//! init_logging(&LogConfig::from_env());
//! ```

pub mod basic_logging;

pub use basic_logging::{build_filter, init_logging};
