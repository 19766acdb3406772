//! HydroQuote Core - quotation data and AI-assisted text for waterproofing budgets.
//!
//! Holds the company/signatory record printed on every quotation and the
//! enrichment operations that polish free text with a generative model.
//!
//! # Architecture
//!
//! ```text
//! caller → Enricher → ClientSource (get-or-none) → LlmProvider → text | original input
//! ```
//!
//! Enrichment is an enhancement, never a requirement: every failure (missing
//! key, network, quota, empty answer, timeout) ends with the caller's own
//! text coming back unchanged.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hydroquote_core::{Config, HydroQuote, ItemCategory};
//!
//! #[tokio::main]
//! async fn main() -> hydroquote_core::Result<()> {
//!     let quote = HydroQuote::new(Config::load()?);
//!     let text = quote
//!         .enricher()
//!         .suggest_description(ItemCategory::Material, "manta asfáltica")
//!         .await;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod llm;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, EnrichError, EnrichResult, HydroError, Result};
pub use llm::{ClientProvisioner, ClientSource, EnrichOptions, Enricher, SharedClient};
pub use types::{CompanyData, CompanyField, EnrichmentKind, ItemCategory, LogoImage};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Entry point bundling configuration with a ready enricher.
pub struct HydroQuote {
    config: Config,
    enricher: Enricher,
}

impl HydroQuote {
    /// Create a new instance from the given configuration.
    pub fn new(config: Config) -> Self {
        tracing::debug!("Initializing HydroQuote v{}", VERSION);
        let enricher = Enricher::from_config(&config.llm);
        Self { config, enricher }
    }

    /// Create a new instance from the configuration file (or defaults).
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(Config::load()?))
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The company/signatory record from configuration.
    pub fn company(&self) -> &CompanyData {
        &self.config.company
    }

    /// The enricher built from `[llm]`; its operations never fail.
    pub fn enricher(&self) -> &Enricher {
        &self.enricher
    }
}
