//! LLM integration for quotation text enrichment.
//!
//! Provides the provider abstraction, the Gemini backend, the client
//! provisioner and the enricher that turns every failure into a fallback.

pub(crate) mod enricher;
pub(crate) mod gemini;
pub(crate) mod prompt;
pub(crate) mod provider;
pub(crate) mod provisioner;

pub use enricher::{EnrichOptions, Enricher};
pub use gemini::GeminiProvider;
pub use provider::{LlmProvider, LlmRequest, LlmResponse};
pub use provisioner::{ClientProvisioner, ClientSource, SharedClient};
