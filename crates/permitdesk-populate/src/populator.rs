//! Core PdfPopulator implementation

use crate::config::PopulateConfig;
use crate::error::PopulateError;
use crate::parser::parse_extracted;
use crate::prompt::{PromptBuilder, OUTPUT_SCHEMA};
use crate::types::{PopulateMetadata, PopulateRequest, PopulateResult};
use permitdesk_domain::traits::TextProvider;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info};
use uuid::Uuid;

/// The population flow: record bundles in, form-ready data out
///
/// Stateless between invocations; concurrent calls share nothing but the
/// provider handle. Each call makes exactly one provider round trip.
pub struct PdfPopulator<P>
where
    P: TextProvider,
{
    provider: Arc<P>,
    config: PopulateConfig,
    model_name: String,
}

impl<P> PdfPopulator<P>
where
    P: TextProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    /// Create a new populator over a provider
    pub fn new(provider: P, config: PopulateConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
            model_name: "genai".to_string(),
        }
    }

    /// Record the model name reported in result metadata
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Extract form-ready data for one request
    ///
    /// Validation happens first; an invalid request never reaches the
    /// provider. The provider call is bounded by the configured timeout and
    /// is not retried.
    pub async fn populate(
        &self,
        request: PopulateRequest,
    ) -> Result<PopulateResult, PopulateError> {
        let started = Instant::now();

        let template = request.validate()?;
        let request_id = Uuid::now_v7();

        info!(
            "starting population {} (template type {}, {} bytes)",
            request_id,
            template.mime(),
            template.decoded_len()
        );

        let prompt = PromptBuilder::new(&request, &template).build();
        debug!("prompt length: {} chars", prompt.len());

        let response = timeout(self.config.request_timeout(), self.call_provider(&prompt))
            .await
            .map_err(|_| {
                PopulateError::Transport(format!(
                    "provider call timed out after {}s",
                    self.config.request_timeout_secs
                ))
            })??;

        debug!("provider response length: {} chars", response.len());

        let extracted = parse_extracted(&response)?;
        let processing_time_ms = started.elapsed().as_millis() as u64;

        info!(
            "population {} extracted {} fields in {}ms",
            request_id,
            extracted.len(),
            processing_time_ms
        );

        let metadata = PopulateMetadata {
            request_id,
            model_name: self.model_name.clone(),
            fields_extracted: extracted.len(),
            processing_time_ms,
        };

        // The echo is the input template, untouched. Field filling never
        // happens at this layer.
        let populated_template = self.config.echo_template.then_some(template);

        Ok(PopulateResult {
            extracted,
            populated_template,
            metadata,
        })
    }

    /// Make the single provider call
    async fn call_provider(&self, prompt: &str) -> Result<String, PopulateError> {
        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();

        // Providers expose a blocking interface; bridge onto the blocking
        // pool so the timeout stays responsive.
        tokio::task::spawn_blocking(move || {
            provider
                .generate_structured(&prompt, OUTPUT_SCHEMA)
                .map_err(|e| PopulateError::Transport(e.to_string()))
        })
        .await
        .map_err(|e| PopulateError::Transport(format!("task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permitdesk_llm::MockProvider;
    use serde_json::json;

    fn request() -> PopulateRequest {
        PopulateRequest::from_json(&json!({
            "customerData": {"name": "John Doe"},
            "contractorData": {"name": "BuildRight Inc."},
            "propertyData": {},
            "permitData": {},
            "pdfTemplateDataUri": "data:application/pdf;base64,AAAA"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_populate_happy_path() {
        let provider = MockProvider::new(r#"{"extractedData": {"customerName": "John Doe"}}"#);
        let populator = PdfPopulator::new(provider, PopulateConfig::default());

        let result = populator.populate(request()).await.unwrap();
        assert_eq!(result.extracted["customerName"], "John Doe");
        assert_eq!(result.metadata.fields_extracted, 1);
    }

    #[tokio::test]
    async fn test_invalid_template_short_circuits() {
        let provider = MockProvider::new("{}");
        let counter = provider.clone();
        let populator = PdfPopulator::new(provider, PopulateConfig::default());

        let mut bad = request();
        bad.template = "not-a-data-uri".to_string();

        let err = populator.populate(bad).await.unwrap_err();
        assert!(matches!(err, PopulateError::Validation(_)));
        assert_eq!(counter.call_count(), 0);
    }

    // MockProvider keys injected errors by exact prompt, which the flow
    // owns, so use a provider that always fails instead.
    struct FailingProvider;

    impl TextProvider for FailingProvider {
        type Error = String;

        fn generate(&self, _prompt: &str) -> Result<String, String> {
            Err("connection refused".to_string())
        }

        fn generate_structured(&self, prompt: &str, _schema: &str) -> Result<String, String> {
            self.generate(prompt)
        }
    }

    #[tokio::test]
    async fn test_provider_failure_maps_to_transport() {
        let populator = PdfPopulator::new(FailingProvider, PopulateConfig::default());

        let err = populator.populate(request()).await.unwrap_err();
        match err {
            PopulateError::Transport(msg) => assert!(msg.contains("connection refused")),
            other => panic!("expected Transport, got {:?}", other),
        }
    }
}
