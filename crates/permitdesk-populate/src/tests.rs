//! Integration tests for the population flow

#[cfg(test)]
mod tests {
    use crate::{PdfPopulator, PopulateConfig, PopulateError, PopulateRequest};
    use permitdesk_domain::traits::TextProvider;
    use permitdesk_llm::MockProvider;
    use serde_json::{json, Value};

    fn scenario_request() -> PopulateRequest {
        PopulateRequest::from_json(&json!({
            "customerData": {"name": "John Doe"},
            "contractorData": {"name": "BuildRight Inc.", "licenseNumber": "CGC123456"},
            "propertyData": {"address": "123 Main St"},
            "permitData": {"permitNumber": "PKG-2024-001", "county": "Miami-Dade"},
            "pdfTemplateDataUri": "data:application/pdf;base64,AAAA"
        }))
        .unwrap()
    }

    fn extraction_stub() -> MockProvider {
        MockProvider::new(
            r#"{
                "customerName": "John Doe",
                "contractorLicenseNumber": "CGC123456",
                "propertyAddress": "123 Main St",
                "permitId": "PKG-2024-001"
            }"#,
        )
    }

    #[tokio::test]
    async fn test_extraction_returns_stub_data_exactly() {
        let provider = extraction_stub();
        let counter = provider.clone();
        let populator =
            PdfPopulator::new(provider, PopulateConfig::default()).with_model_name("stub-model");

        let result = populator.populate(scenario_request()).await.unwrap();

        let expected = json!({
            "customerName": "John Doe",
            "contractorLicenseNumber": "CGC123456",
            "propertyAddress": "123 Main St",
            "permitId": "PKG-2024-001"
        });
        assert_eq!(Value::Object(result.extracted), expected);
        assert_eq!(counter.call_count(), 1);
        assert_eq!(result.metadata.model_name, "stub-model");
        assert_eq!(result.metadata.fields_extracted, 4);
    }

    #[tokio::test]
    async fn test_template_is_echoed_unchanged() {
        let populator = PdfPopulator::new(extraction_stub(), PopulateConfig::default());

        let result = populator.populate(scenario_request()).await.unwrap();
        let echoed = result.populated_template.expect("echo enabled by default");
        assert_eq!(echoed.to_string(), "data:application/pdf;base64,AAAA");
    }

    #[tokio::test]
    async fn test_echo_can_be_disabled() {
        let mut config = PopulateConfig::default();
        config.echo_template = false;

        let populator = PdfPopulator::new(extraction_stub(), config);
        let result = populator.populate(scenario_request()).await.unwrap();
        assert!(result.populated_template.is_none());
    }

    #[tokio::test]
    async fn test_empty_provider_output_is_hard_failure() {
        let provider = MockProvider::new("");
        let populator = PdfPopulator::new(provider, PopulateConfig::default());

        let err = populator.populate(scenario_request()).await.unwrap_err();
        assert!(matches!(err, PopulateError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_non_json_provider_output_is_hard_failure() {
        let provider = MockProvider::new("Sorry, I cannot help with that.");
        let populator = PdfPopulator::new(provider, PopulateConfig::default());

        let err = populator.populate(scenario_request()).await.unwrap_err();
        assert!(matches!(err, PopulateError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_missing_map_fails_before_any_provider_call() {
        let provider = extraction_stub();
        let counter = provider.clone();

        let err = PopulateRequest::from_json(&json!({
            "customerData": {"name": "John Doe"},
            "propertyData": {},
            "permitData": {},
            "pdfTemplateDataUri": "data:application/pdf;base64,AAAA"
        }))
        .unwrap_err();

        match err {
            PopulateError::Validation(msg) => assert!(msg.contains("contractorData")),
            other => panic!("expected Validation, got {:?}", other),
        }
        assert_eq!(counter.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_template_fails_before_any_provider_call() {
        let provider = extraction_stub();
        let counter = provider.clone();
        let populator = PdfPopulator::new(provider, PopulateConfig::default());

        for template in ["not-a-data-uri", "data:application/pdf,AAAA", "data:;base64,AAAA"] {
            let mut request = scenario_request();
            request.template = template.to_string();

            let err = populator.populate(request).await.unwrap_err();
            assert!(matches!(err, PopulateError::Validation(_)), "{}", template);
        }

        assert_eq!(counter.call_count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_idempotent() {
        let populator = PdfPopulator::new(extraction_stub(), PopulateConfig::default());

        let first = populator.populate(scenario_request()).await.unwrap();
        let second = populator.populate(scenario_request()).await.unwrap();
        assert_eq!(first.extracted, second.extracted);
    }

    #[tokio::test]
    async fn test_provider_error_surfaces_as_transport() {
        struct RefusingProvider;

        impl TextProvider for RefusingProvider {
            type Error = String;

            fn generate(&self, _prompt: &str) -> Result<String, String> {
                Err("HTTP 503: service unavailable".to_string())
            }

            fn generate_structured(&self, prompt: &str, _schema: &str) -> Result<String, String> {
                self.generate(prompt)
            }
        }

        let populator = PdfPopulator::new(RefusingProvider, PopulateConfig::default());
        let err = populator.populate(scenario_request()).await.unwrap_err();
        match err {
            PopulateError::Transport(msg) => assert!(msg.contains("503")),
            other => panic!("expected Transport, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_slow_provider_hits_timeout() {
        struct SlowProvider;

        impl TextProvider for SlowProvider {
            type Error = String;

            fn generate(&self, _prompt: &str) -> Result<String, String> {
                std::thread::sleep(std::time::Duration::from_secs(3));
                Ok(r#"{"permitId": "PKG-2024-001"}"#.to_string())
            }

            fn generate_structured(&self, prompt: &str, _schema: &str) -> Result<String, String> {
                self.generate(prompt)
            }
        }

        let mut config = PopulateConfig::default();
        config.request_timeout_secs = 1;

        let populator = PdfPopulator::new(SlowProvider, config);
        let err = populator.populate(scenario_request()).await.unwrap_err();
        match err {
            PopulateError::Transport(msg) => assert!(msg.contains("timed out")),
            other => panic!("expected Transport, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_concurrent_invocations_are_independent() {
        let populator = std::sync::Arc::new(PdfPopulator::new(
            extraction_stub(),
            PopulateConfig::default(),
        ));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let populator = std::sync::Arc::clone(&populator);
                tokio::spawn(async move { populator.populate(scenario_request()).await })
            })
            .collect();

        for handle in handles {
            let result = handle.await.unwrap().unwrap();
            assert_eq!(result.extracted["permitId"], "PKG-2024-001");
        }
    }
}
