//! Dashboard list configuration.
//!
//! # Environment Variables
//!
//! - `DASHBOARD_RECENT_LIMIT`: Length of the "recent courses" list (default: 4)

use coursekit_core::limits::DEFAULT_RECENT_LIMIT;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub recent_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl DashboardConfig {
    /// Creates a new `DashboardConfig` from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            recent_limit: lookup("DASHBOARD_RECENT_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_RECENT_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_recent_limit() {
        assert_eq!(DashboardConfig::from_lookup(|_| None).recent_limit, 4);
    }

    #[test]
    fn test_recent_limit_from_env() {
        let config = DashboardConfig::from_lookup(|key| {
            (key == "DASHBOARD_RECENT_LIMIT").then(|| "6".to_string())
        });
        assert_eq!(config.recent_limit, 6);
    }

    #[test]
    fn test_unparseable_limit_falls_back() {
        let config = DashboardConfig::from_lookup(|_| Some("many".to_string()));
        assert_eq!(config.recent_limit, 4);
    }
}
