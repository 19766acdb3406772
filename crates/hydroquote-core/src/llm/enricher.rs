//! Enrichment operations for quotation text.
//!
//! Each operation makes at most one provider call and always returns a
//! string: the generated text on success, the caller's input otherwise.
//! Failures are logged, never returned.

use super::provider::{LlmRequest, LlmResponse};
use super::provisioner::{ClientProvisioner, ClientSource};
use crate::config::LlmConfig;
use crate::error::{EnrichError, EnrichResult};
use crate::types::ItemCategory;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for the enrichment operations.
#[derive(Debug, Clone)]
pub struct EnrichOptions {
    /// Upper bound for one provider call in milliseconds
    pub timeout_ms: u64,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self { timeout_ms: 30_000 }
    }
}

/// Stateless front for the two enrichment operations.
///
/// Cheap to clone; concurrent calls share nothing but the client source.
#[derive(Clone)]
pub struct Enricher {
    source: Arc<dyn ClientSource>,
    options: EnrichOptions,
}

impl Enricher {
    pub fn new(source: Arc<dyn ClientSource>, options: EnrichOptions) -> Self {
        Self { source, options }
    }

    /// Enricher backed by a [`ClientProvisioner`] built from `config`.
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(
            Arc::new(ClientProvisioner::from_config(config)),
            EnrichOptions {
                timeout_ms: config.timeout_ms,
            },
        )
    }

    /// Improve the "Observações" section of a quotation.
    ///
    /// Returns `current_notes` unchanged if no text could be generated.
    pub async fn refine_notes(&self, current_notes: &str, project_type: &str) -> String {
        let request = LlmRequest::refine_notes(current_notes, project_type);
        self.enrich_or_fallback(&request, current_notes).await
    }

    /// Expand a keyword into a professional line-item description.
    ///
    /// Returns `keyword` unchanged if no text could be generated.
    pub async fn suggest_description(&self, category: ItemCategory, keyword: &str) -> String {
        let request = LlmRequest::suggest_description(category, keyword);
        self.enrich_or_fallback(&request, keyword).await
    }

    async fn enrich_or_fallback(&self, request: &LlmRequest, fallback: &str) -> String {
        match self.try_enrich(request).await {
            Ok(text) => text,
            // The client source already logged why it had nothing to offer
            Err(EnrichError::Unavailable) => {
                tracing::debug!(kind = %request.kind, "Enrichment skipped, keeping original text");
                fallback.to_string()
            }
            Err(e) => {
                tracing::error!(kind = %request.kind, "Enrichment failed, keeping original text: {e}");
                fallback.to_string()
            }
        }
    }

    async fn try_enrich(&self, request: &LlmRequest) -> EnrichResult<String> {
        let provider = self.source.get_client().ok_or(EnrichError::Unavailable)?;

        let response: LlmResponse = match tokio::time::timeout(
            Duration::from_millis(self.options.timeout_ms),
            provider.generate(request),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(EnrichError::Timeout {
                    timeout_ms: self.options.timeout_ms,
                })
            }
        };

        if response.text.is_empty() {
            return Err(EnrichError::EmptyResponse);
        }

        tracing::debug!(
            kind = %request.kind,
            provider = provider.name(),
            model = %response.model,
            latency_ms = response.latency_ms,
            tokens = ?response.tokens_used,
            "Enrichment succeeded"
        );
        Ok(response.text)
    }
}
