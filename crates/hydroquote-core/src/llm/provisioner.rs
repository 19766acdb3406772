//! Client provisioning: turn configuration into a provider client, or nothing.
//!
//! A missing credential is a permanent condition for the life of the
//! process. It is reported once per request as a log line and never as an
//! error value.

use super::gemini::GeminiProvider;
use super::provider::{resolve_env_var, LlmProvider};
use crate::config::LlmConfig;
use std::sync::Arc;
use std::time::Duration;

/// Anything that can hand the enricher a provider client on demand.
pub trait ClientSource: Send + Sync {
    /// Return a client, or `None` when enrichment is not possible.
    fn get_client(&self) -> Option<Arc<dyn LlmProvider>>;
}

/// Builds a fresh Gemini client per request from injected configuration.
#[derive(Clone)]
pub struct ClientProvisioner {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    timeout: Duration,
}

impl ClientProvisioner {
    /// Resolve the credential once, so later lookups never touch the environment.
    pub fn from_config(config: &LlmConfig) -> Self {
        Self {
            api_key: resolve_env_var(&config.api_key).filter(|key| !key.trim().is_empty()),
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    /// Whether a credential was found.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Model name sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ClientSource for ClientProvisioner {
    fn get_client(&self) -> Option<Arc<dyn LlmProvider>> {
        match &self.api_key {
            Some(api_key) => Some(Arc::new(GeminiProvider::new(
                api_key,
                &self.model,
                &self.endpoint,
                self.timeout,
            ))),
            None => {
                tracing::error!(
                    "API key not found (set API_KEY or llm.api_key); AI enrichment disabled"
                );
                None
            }
        }
    }
}

/// A pre-built client reused across requests, or an explicit "no client".
#[derive(Clone)]
pub struct SharedClient {
    client: Option<Arc<dyn LlmProvider>>,
}

impl SharedClient {
    pub fn new(client: Arc<dyn LlmProvider>) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn none() -> Self {
        Self { client: None }
    }
}

impl ClientSource for SharedClient {
    fn get_client(&self) -> Option<Arc<dyn LlmProvider>> {
        if self.client.is_none() {
            tracing::error!("No LLM client configured; AI enrichment disabled");
        }
        self.client.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(api_key: &str) -> LlmConfig {
        LlmConfig {
            api_key: api_key.to_string(),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn test_provisioner_with_literal_key() {
        let provisioner = ClientProvisioner::from_config(&config_with_key("test-key"));
        assert!(provisioner.is_configured());
        let client = provisioner.get_client().expect("client");
        assert_eq!(client.name(), "gemini");
        assert_eq!(client.timeout(), Duration::from_millis(30_000));
    }

    #[test]
    fn test_provisioner_builds_a_fresh_client_each_call() {
        let provisioner = ClientProvisioner::from_config(&config_with_key("test-key"));
        let first = provisioner.get_client().unwrap();
        let second = provisioner.get_client().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_provisioner_empty_key_is_unavailable() {
        let provisioner = ClientProvisioner::from_config(&config_with_key(""));
        assert!(!provisioner.is_configured());
        assert!(provisioner.get_client().is_none());
    }

    #[test]
    fn test_provisioner_blank_key_is_unavailable() {
        let provisioner = ClientProvisioner::from_config(&config_with_key("   "));
        assert!(provisioner.get_client().is_none());
    }

    #[test]
    fn test_provisioner_unset_env_reference_is_unavailable() {
        let provisioner =
            ClientProvisioner::from_config(&config_with_key("${DEFINITELY_NOT_SET_XYZ_123}"));
        assert!(!provisioner.is_configured());
        assert!(provisioner.get_client().is_none());
    }

    #[test]
    fn test_provisioner_keeps_configured_model() {
        let config = LlmConfig {
            model: "gemini-2.5-pro".to_string(),
            ..config_with_key("k")
        };
        assert_eq!(ClientProvisioner::from_config(&config).model(), "gemini-2.5-pro");
    }

    #[test]
    fn test_shared_client_none() {
        assert!(SharedClient::none().get_client().is_none());
    }

    #[test]
    fn test_shared_client_reuses_the_same_client() {
        let provider: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::new(
            "k",
            "gemini-2.5-flash",
            "http://localhost",
            Duration::from_secs(1),
        ));
        let shared = SharedClient::new(provider.clone());
        let client = shared.get_client().unwrap();
        assert!(Arc::ptr_eq(&client, &provider));
    }
}
