//! Error types for HydroQuote.
//!
//! Enrichment errors never leave the enrichment operations: they are logged
//! and turned into a fallback value, so `HydroError` has no variant for them.
//! They are still typed so the provider layer can report what went wrong and
//! tests can assert on it.

use thiserror::Error;

/// Top-level error type for HydroQuote operations.
#[derive(Error, Debug)]
pub enum HydroError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Reasons an enrichment call did not produce text.
#[derive(Error, Debug)]
pub enum EnrichError {
    /// No credential configured; the provider is never contacted
    #[error("LLM provider unavailable: no API key configured")]
    Unavailable,

    /// Network, authentication, quota or malformed-response failure
    #[error("LLM provider error: {message}")]
    Provider {
        message: String,
        status_code: Option<u16>,
    },

    /// The provider answered without any usable text
    #[error("LLM provider returned an empty response")]
    EmptyResponse,

    /// The provider call exceeded the configured bound
    #[error("LLM call timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

/// Convenience type alias for HydroQuote results.
pub type Result<T> = std::result::Result<T, HydroError>;

/// Convenience type alias for enrichment-specific results.
pub type EnrichResult<T> = std::result::Result<T, EnrichError>;
