//! LLM provider trait and request/response types.

use super::prompt;
use crate::error::EnrichError;
use crate::types::{EnrichmentKind, ItemCategory};
use async_trait::async_trait;
use std::time::Duration;

/// A single text-generation request.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// Which quotation field this request enriches
    pub kind: EnrichmentKind,
    /// Full prompt sent to the model
    pub prompt: String,
}

impl LlmRequest {
    /// Build a request that rewrites the "Observações" section.
    pub fn refine_notes(current_notes: &str, project_type: &str) -> Self {
        Self {
            kind: EnrichmentKind::Notes,
            prompt: prompt::refine_notes(current_notes, project_type),
        }
    }

    /// Build a request that expands a keyword into a line-item description.
    pub fn suggest_description(category: ItemCategory, keyword: &str) -> Self {
        Self {
            kind: EnrichmentKind::Description,
            prompt: prompt::suggest_description(category, keyword),
        }
    }
}

/// The response from a generation call.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Generated text exactly as returned; empty when the model produced none
    pub text: String,
    /// Model identifier used
    pub model: String,
    /// Number of tokens used (input + output), if reported
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Trait that all LLM providers implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Arc<dyn LlmProvider>` for dynamic dispatch).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging (e.g., "gemini").
    fn name(&self) -> &str;

    /// Generate text for the given request. Exactly one remote call.
    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, EnrichError>;

    /// Per-request timeout for this provider.
    fn timeout(&self) -> Duration;
}

/// Resolve `${ENV_VAR}` references in config strings.
///
/// Empty values, and references to unset or empty variables, resolve to `None`.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
