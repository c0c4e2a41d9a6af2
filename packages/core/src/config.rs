//! Runtime server configuration
//!
//! ServerConfig is read from the environment once at startup and is
//! immutable afterwards. Nothing is persisted.

use crate::services::DEFAULT_AUTO_ID_PREFIX;

/// Environment variable holding the tracing filter directive
pub const LOG_FILTER_ENV: &str = "HIERARCHY_LOG";

/// Fallback environment variable for the tracing filter directive
pub const RUST_LOG_ENV: &str = "RUST_LOG";

/// Environment variable holding the prefix for auto-assigned ids
pub const AUTO_ID_PREFIX_ENV: &str = "HIERARCHY_AUTO_ID_PREFIX";

/// Default tracing filter when neither variable is set
pub const DEFAULT_LOG_FILTER: &str = "hierarchy_server=info,hierarchy_core=info";

/// Runtime configuration for the stdio server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `tracing_subscriber::EnvFilter` directive (logs go to stderr)
    pub log_filter: String,

    /// Prefix for ids assigned to nodes added with an empty id
    pub auto_id_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            auto_id_prefix: DEFAULT_AUTO_ID_PREFIX.to_string(),
        }
    }
}

impl ServerConfig {
    /// Build config from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            log_filter: get(LOG_FILTER_ENV)
                .or_else(|| get(RUST_LOG_ENV))
                .unwrap_or(defaults.log_filter),
            auto_id_prefix: get(AUTO_ID_PREFIX_ENV).unwrap_or(defaults.auto_id_prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.auto_id_prefix, "auto-");
    }

    #[test]
    fn test_hierarchy_log_wins_over_rust_log() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (LOG_FILTER_ENV, "hierarchy_core=trace"),
            (RUST_LOG_ENV, "warn"),
        ]));
        assert_eq!(config.log_filter, "hierarchy_core=trace");
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = ServerConfig::from_lookup(lookup_from(&[(RUST_LOG_ENV, "debug")]));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_empty_prefix_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[(AUTO_ID_PREFIX_ENV, "")]));
        assert_eq!(config.auto_id_prefix, DEFAULT_AUTO_ID_PREFIX);

        let config = ServerConfig::from_lookup(lookup_from(&[(AUTO_ID_PREFIX_ENV, "gen-")]));
        assert_eq!(config.auto_id_prefix, "gen-");
    }
}
