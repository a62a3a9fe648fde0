// Configuration types module
// Defines the options consumed by the resolver and its sink

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Resolver configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ResolverConfig {
    /// Candidate extensions in probe order, with or without the leading dot.
    /// Empty means every request passes through unmodified.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// Info log file path (optional, stdout if not set)
    #[serde(default)]
    pub info_log_file: Option<String>,
}
